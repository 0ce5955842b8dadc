//! Field limits shared by manual entry and CSV import.

use std::fmt;

use crate::api::ValidationError;

pub const MAX_TITLE_CHARS: usize = 200;
pub const MAX_PROMPT_CHARS: usize = 5000;
pub const MAX_CATEGORY_CHARS: usize = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Title,
    Prompt,
    Category,
}

impl Field {
    /// Maximum length in characters.
    pub fn max_chars(self) -> usize {
        match self {
            Field::Title => MAX_TITLE_CHARS,
            Field::Prompt => MAX_PROMPT_CHARS,
            Field::Category => MAX_CATEGORY_CHARS,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Title => "title",
            Field::Prompt => "prompt",
            Field::Category => "category",
        })
    }
}

/// Trimmed, validated values ready to be stored.
#[derive(Debug, PartialEq, Eq)]
pub struct Entry<'a> {
    pub category: &'a str,
    pub title: &'a str,
    pub prompt: &'a str,
}

/// Trims the three values and checks them: presence first, then length.
pub fn check<'a>(
    category: &'a str,
    title: &'a str,
    prompt: &'a str,
) -> Result<Entry<'a>, ValidationError> {
    let entry = Entry {
        category: category.trim(),
        title: title.trim(),
        prompt: prompt.trim(),
    };
    let fields = [
        (Field::Title, entry.title),
        (Field::Prompt, entry.prompt),
        (Field::Category, entry.category),
    ];

    if let Some((field, _)) = fields.iter().find(|(_, value)| value.is_empty()) {
        return Err(ValidationError::Missing(*field));
    }
    if let Some((field, _)) = fields
        .iter()
        .find(|(field, value)| value.chars().count() > field.max_chars())
    {
        return Err(ValidationError::TooLong {
            field: *field,
            max: field.max_chars(),
        });
    }
    Ok(entry)
}
