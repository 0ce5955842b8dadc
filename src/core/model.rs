//! In-memory shelf: category names mapped to ordered prompt lists.
//!
//! Category order is insertion order. It survives a save/load cycle because
//! the store serializes as a JSON object whose keys are written, and read back,
//! in sequence.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::csv::{self, CsvReport};
use super::validate;
use crate::api::ValidationError;

/// A single stored prompt.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Prompt {
    pub title: String,
    pub prompt: String,
}

impl Prompt {
    pub fn new(title: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            prompt: prompt.into(),
        }
    }
}

/// A named group of prompts. The list may be empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub prompts: Vec<Prompt>,
}

/// An entry of a category picker.
///
/// `CreateNew` is a marker for "let the user type a new name"; it is never a
/// category name itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CategoryChoice {
    Existing(String),
    CreateNew,
}

impl fmt::Display for CategoryChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryChoice::Existing(name) => f.write_str(name),
            CategoryChoice::CreateNew => f.write_str("+ Add New Category"),
        }
    }
}

/// The full category → prompts mapping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Store {
    categories: Vec<Category>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterates categories in insertion order.
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn category_names(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.name.clone()).collect()
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Existing categories followed by the `CreateNew` marker.
    pub fn category_choices(&self) -> Vec<CategoryChoice> {
        self.categories
            .iter()
            .map(|c| CategoryChoice::Existing(c.name.clone()))
            .chain(std::iter::once(CategoryChoice::CreateNew))
            .collect()
    }

    /// True iff at least one category holds at least one prompt.
    pub fn has_any_prompts(&self) -> bool {
        self.categories.iter().any(|c| !c.prompts.is_empty())
    }

    /// Total number of prompts across all categories.
    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.prompts.len()).sum()
    }

    /// True when no category holds a prompt; agrees with `len() == 0`.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Looks up a prompt by category and 1-based position.
    pub fn prompt(&self, category: &str, position: usize) -> Option<&Prompt> {
        position
            .checked_sub(1)
            .and_then(|idx| self.category(category)?.prompts.get(idx))
    }

    /// Validates and appends a prompt, creating the category if it is new.
    ///
    /// All three values are trimmed before validation and stored trimmed.
    /// On error the store is left untouched.
    pub fn add_prompt(
        &mut self,
        category: &str,
        title: &str,
        prompt: &str,
    ) -> Result<(), ValidationError> {
        let entry = validate::check(category, title, prompt)?;
        self.push(entry.category, Prompt::new(entry.title, entry.prompt));
        Ok(())
    }

    /// Appends every valid row of `raw`, in file order.
    ///
    /// The first line is always treated as a header. Rows that fail validation
    /// are skipped and reported; they never stop later rows from being added.
    pub fn import_csv(&mut self, raw: &str) -> CsvReport {
        let parsed = csv::parse(raw);
        let added = parsed.records.len();
        for record in parsed.records {
            self.push(&record.category, Prompt::new(record.title, record.prompt));
        }
        CsvReport {
            added,
            skipped: parsed.skipped,
        }
    }

    /// Replaces the prompt list of `name`, or appends a new category.
    pub fn insert_category(&mut self, name: impl Into<String>, prompts: Vec<Prompt>) {
        let name = name.into();
        match self.categories.iter_mut().find(|c| c.name == name) {
            Some(existing) => existing.prompts = prompts,
            None => self.categories.push(Category { name, prompts }),
        }
    }

    fn push(&mut self, category: &str, prompt: Prompt) {
        match self.categories.iter_mut().find(|c| c.name == category) {
            Some(existing) => existing.prompts.push(prompt),
            None => self.categories.push(Category {
                name: category.to_string(),
                prompts: vec![prompt],
            }),
        }
    }
}

impl FromIterator<(String, Vec<Prompt>)> for Store {
    fn from_iter<I: IntoIterator<Item = (String, Vec<Prompt>)>>(iter: I) -> Self {
        let mut store = Store::new();
        for (name, prompts) in iter {
            store.insert_category(name, prompts);
        }
        store
    }
}

impl Serialize for Store {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for category in &self.categories {
            map.serialize_entry(&category.name, &category.prompts)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Store {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct StoreVisitor;

        impl<'de> Visitor<'de> for StoreVisitor {
            type Value = Store;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of category names to prompt lists")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Store, A::Error> {
                let mut store = Store::new();
                while let Some((name, prompts)) = access.next_entry::<String, Vec<Prompt>>()? {
                    store.insert_category(name, prompts);
                }
                Ok(store)
            }
        }

        deserializer.deserialize_map(StoreVisitor)
    }
}
