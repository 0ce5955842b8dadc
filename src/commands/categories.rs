use crate::api::PromptStore;
use crate::core::model::CategoryChoice;
use crate::core::storage::KvStorage;
use console::style;

/// Print category names in the order they were created.
pub fn run<S: KvStorage>(shelf: &PromptStore<S>) -> Result<(), String> {
    let names: Vec<String> = shelf
        .list_categories()
        .into_iter()
        .filter_map(|choice| match choice {
            CategoryChoice::Existing(name) => Some(name),
            CategoryChoice::CreateNew => None,
        })
        .collect();

    if names.is_empty() {
        println!("{}", style("No categories yet").green().bold());
        return Ok(());
    }
    for name in names {
        println!("  {} {}", style("•").green(), name);
    }
    Ok(())
}
