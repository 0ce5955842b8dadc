use crate::api::PromptStore;
use crate::core::storage::{AppCtx, KvStorage};
use console::style;
use std::path::Path;

/// Import prompts from a CSV file.
pub async fn run<S: KvStorage>(
    ctx: &AppCtx,
    shelf: &mut PromptStore<S>,
    file: &Path,
) -> Result<(), String> {
    let report = shelf
        .import_file(file, ctx.config.max_import_bytes)
        .await
        .map_err(|e| e.to_string())?;

    println!(
        "{} Added {} prompts successfully!",
        style("•").green().bold(),
        report.added
    );
    if !report.skipped.is_empty() {
        println!(
            "{} {} rows skipped:",
            style("•").yellow().bold(),
            report.skipped.len()
        );
        for row in &report.skipped {
            println!("  line {} - {}", style(row.line).yellow(), row.reason);
        }
    }
    Ok(())
}
