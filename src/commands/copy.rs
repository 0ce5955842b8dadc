use crate::api::PromptStore;
use crate::core::clipboard::SystemClipboard;
use crate::core::storage::{AppCtx, KvStorage};
use console::{style, Term};
use std::time::Duration;

/// Copy prompt content to clipboard.
///
/// `Copied!` stands in for the title for a moment, then the title comes back.
pub async fn run<S: KvStorage>(
    ctx: &AppCtx,
    shelf: &PromptStore<S>,
    category: &str,
    position: usize,
) -> Result<(), String> {
    let mut clipboard = SystemClipboard::new().map_err(|e| format!("Failed to copy: {}", e))?;
    let copied = shelf
        .copy(category, position, &mut clipboard)
        .map_err(|e| e.to_string())?;

    let term = Term::stdout();
    if !term.is_term() {
        println!("{} copied to clipboard", style("•").green().bold());
        return Ok(());
    }

    term.write_line(&format!("{} {}", style("•").green().bold(), style("Copied!").green()))
        .map_err(|e| e.to_string())?;
    tokio::time::sleep(Duration::from_millis(ctx.config.copy_feedback_ms)).await;
    term.clear_last_lines(1).map_err(|e| e.to_string())?;
    term.write_line(&format!("{} {}", style("•").green().bold(), copied.title))
        .map_err(|e| e.to_string())?;
    Ok(())
}
