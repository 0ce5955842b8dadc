use clap::Parser;
use prompt_shelf::cli::Cli;
use prompt_shelf::commands;
use prompt_shelf::core::logging;
use prompt_shelf::core::storage::{AppCtx, FileStorage};
use prompt_shelf::PromptStore;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("• {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let ctx = AppCtx::init(cli.home.as_deref())?;
    let _log_guard = logging::init(&ctx.log_dir, &ctx.config.log_filter);

    let storage = FileStorage::open(&ctx.storage_path).map_err(|e| e.to_string())?;
    let mut shelf =
        PromptStore::load(storage, ctx.config.storage_key.as_str()).map_err(|e| e.to_string())?;

    commands::dispatch(cli.command, &ctx, &mut shelf).await
}
