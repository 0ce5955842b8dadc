use crate::api::PromptStore;
use crate::cli::Cli;
use crate::commands::{execute, list};
use crate::core::storage::{AppCtx, KvStorage};
use clap::Parser;
use console::style;
use dialoguer::Input;

/// Run the CLI in interactive REPL mode over one loaded store.
pub async fn run<S: KvStorage>(ctx: &AppCtx, shelf: &mut PromptStore<S>) -> Result<(), String> {
    list::run(shelf, &list::ListOptions::default())?;
    println!("Entering interactive mode. Type 'exit' or 'quit' to leave.");
    loop {
        let input: String = Input::new()
            .with_prompt(format!("{}", style("shelf >").blue().bold()))
            .allow_empty(true)
            .interact_text()
            .map_err(|e| format!("Input error: {}", e))?;

        let input = input.trim();
        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            break;
        }
        if input.is_empty() {
            continue;
        }

        let args = match shell_words::split(input) {
            Ok(args) => args,
            Err(e) => {
                eprintln!("• Error parsing command: {}", e);
                continue;
            }
        };

        if let Err(e) = reject_session_flags(&args) {
            eprintln!("• {}", e);
            continue;
        }

        let full_args = std::iter::once("prompt-shelf".to_string()).chain(args);

        match Cli::try_parse_from(full_args) {
            Ok(cli) => {
                if let Err(e) = execute(cli.command, ctx, shelf).await {
                    eprintln!("• {}", e);
                }
            }
            Err(e) => {
                e.print().unwrap_or(());
            }
        }
    }
    Ok(())
}

/// The data directory is fixed for the whole session.
fn reject_session_flags(args: &[String]) -> Result<(), String> {
    if args
        .iter()
        .any(|arg| arg == "--home" || arg.starts_with("--home="))
    {
        return Err("--home cannot be changed inside an interactive session".to_string());
    }
    Ok(())
}
