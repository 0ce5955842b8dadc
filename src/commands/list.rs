use crate::api::PromptStore;
use crate::core::model::Store;
use crate::core::storage::KvStorage;
use console::style;
use std::fmt::Write;

/// Which categories are expanded and how much of each prompt is shown.
#[derive(Default)]
pub struct ListOptions {
    pub open: Vec<String>,
    pub all: bool,
    pub full: bool,
}

impl ListOptions {
    fn is_open(&self, category: &str) -> bool {
        self.all || self.open.iter().any(|c| c == category)
    }
}

/// Print prompts grouped by category.
pub fn run<S: KvStorage>(shelf: &PromptStore<S>, opts: &ListOptions) -> Result<(), String> {
    print!("{}", render(shelf.store(), opts));
    Ok(())
}

pub fn render(store: &Store, opts: &ListOptions) -> String {
    let mut out = String::new();
    if !store.has_any_prompts() {
        let _ = writeln!(out, "{}", style("No prompts found").green().bold());
        return out;
    }

    for category in store.categories() {
        if !opts.is_open(&category.name) {
            let _ = writeln!(
                out,
                "{} {} ({})",
                style("▶").cyan(),
                style(&category.name).bold(),
                category.prompts.len()
            );
            continue;
        }

        let _ = writeln!(out, "{} {}", style("▼").cyan(), style(&category.name).bold());
        for (i, item) in category.prompts.iter().enumerate() {
            let _ = writeln!(out, "  {} {}", style(format!("{}.", i + 1)).yellow(), item.title);
            if opts.full {
                for line in item.prompt.lines() {
                    let _ = writeln!(out, "     {}", style(line).dim());
                }
            }
        }
    }
    out
}
