use crate::api::PromptStore;
use crate::core::model::CategoryChoice;
use crate::core::storage::KvStorage;
use console::style;
use dialoguer::{theme::ColorfulTheme, Editor, Input, Select};

/// Add a prompt, asking for whatever was not given on the command line.
pub fn run<S: KvStorage>(
    shelf: &mut PromptStore<S>,
    title: Option<String>,
    prompt: Option<String>,
    category: Option<String>,
) -> Result<(), String> {
    let theme = ColorfulTheme::default();

    let title = match title {
        Some(title) => title,
        None => Input::with_theme(&theme)
            .with_prompt("Title")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| format!("Title error: {}", e))?,
    };

    let prompt = match prompt {
        Some(prompt) => prompt,
        None => Editor::new()
            .edit("")
            .map_err(|e| format!("Editor error: {}", e))?
            .unwrap_or_default(),
    };

    let category = match category {
        Some(category) => category,
        None => choose_category(&theme, &shelf.list_categories())?,
    };

    shelf
        .add_prompt(&category, &title, &prompt)
        .map_err(|e| e.to_string())?;

    println!("{} Prompt added successfully!", style("•").green().bold());
    Ok(())
}

fn choose_category(theme: &ColorfulTheme, choices: &[CategoryChoice]) -> Result<String, String> {
    let picked = Select::with_theme(theme)
        .with_prompt("Select or create category")
        .items(choices)
        .default(0)
        .interact()
        .map_err(|e| format!("Category error: {}", e))?;

    match &choices[picked] {
        CategoryChoice::Existing(name) => Ok(name.clone()),
        CategoryChoice::CreateNew => Input::with_theme(theme)
            .with_prompt("New category")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| format!("Category error: {}", e)),
    }
}
