use crate::api::PromptStore;
use crate::cli::Cmd;
use crate::core::storage::{AppCtx, KvStorage};

pub mod add;
pub mod categories;
pub mod copy;
pub mod import;
pub mod interactive;
pub mod list;

/// Dispatches the parsed command to the appropriate handler.
pub async fn dispatch<S: KvStorage>(
    command: Cmd,
    ctx: &AppCtx,
    shelf: &mut PromptStore<S>,
) -> Result<(), String> {
    match command {
        Cmd::Interactive => interactive::run(ctx, shelf).await,
        other => execute(other, ctx, shelf).await,
    }
}

/// Runs a single command against an already loaded store.
pub(crate) async fn execute<S: KvStorage>(
    command: Cmd,
    ctx: &AppCtx,
    shelf: &mut PromptStore<S>,
) -> Result<(), String> {
    match command {
        Cmd::List { open, all, full } => list::run(shelf, &list::ListOptions { open, all, full }),
        Cmd::Add {
            title,
            prompt,
            category,
        } => add::run(shelf, title, prompt, category),
        Cmd::Import { file } => import::run(ctx, shelf, &file).await,
        Cmd::Copy { category, position } => copy::run(ctx, shelf, &category, position).await,
        Cmd::Categories => categories::run(shelf),
        Cmd::Interactive => Err("Already in interactive mode".to_string()),
    }
}
