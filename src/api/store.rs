//! The main entry point for interacting with the prompt shelf.

use std::path::Path;
use tokio::io::AsyncReadExt;
use tracing::{error, info};

use crate::core::clipboard::Clipboard;
use crate::core::csv::CsvReport;
use crate::core::model::{CategoryChoice, Prompt, Store};
use crate::core::storage::KvStorage;

use super::error::{ImportError, ShelfError, StorageError};

/// Owns the in-memory store and mirrors it into a key-value storage.
///
/// The storage is read once by [`PromptStore::load`]. After that the in-memory
/// copy is authoritative and every mutation overwrites the stored value whole.
pub struct PromptStore<S: KvStorage> {
    storage: S,
    key: String,
    store: Store,
}

impl<S: KvStorage> PromptStore<S> {
    /// Reads the store kept under `key`. An absent key is an empty store.
    pub fn load(storage: S, key: impl Into<String>) -> Result<Self, ShelfError> {
        let key = key.into();
        let store = match storage.get(&key)? {
            Some(value) => serde_json::from_value(value).map_err(|e| {
                StorageError::Corrupt(format!("value under '{}' is not a prompt map: {}", key, e))
            })?,
            None => Store::new(),
        };
        info!(
            key = %key,
            categories = store.categories().count(),
            prompts = store.len(),
            "prompt store loaded"
        );
        Ok(Self { storage, key, store })
    }

    /// Overwrites the stored value with the full in-memory store.
    pub fn save(&mut self) -> Result<(), ShelfError> {
        let value = serde_json::to_value(&self.store).map_err(StorageError::from)?;
        if let Err(e) = self.storage.set(&self.key, value) {
            error!(key = %self.key, error = %e, "failed to persist prompt store");
            return Err(e.into());
        }
        Ok(())
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Validates, appends and persists a single prompt.
    ///
    /// If persisting fails the prompt stays in memory and the storage error is
    /// returned; the next successful save writes it out.
    pub fn add_prompt(&mut self, category: &str, title: &str, prompt: &str) -> Result<(), ShelfError> {
        self.store.add_prompt(category, title, prompt)?;
        info!(category = category.trim(), "prompt added");
        self.save()
    }

    /// Imports CSV text and persists the result once.
    ///
    /// Fails with [`ImportError::NoValidPrompts`] when nothing was added, in
    /// which case storage is not touched.
    pub fn import_csv(&mut self, raw: &str) -> Result<CsvReport, ShelfError> {
        let report = self.store.import_csv(raw);
        if report.added == 0 {
            return Err(ImportError::NoValidPrompts.into());
        }
        info!(
            added = report.added,
            skipped = report.skipped.len(),
            "csv imported"
        );
        self.save()?;
        Ok(report)
    }

    /// Reads a CSV file of at most `max_bytes` and imports it.
    ///
    /// The size is enforced on the bytes actually read, so pipes and files
    /// that grow while being read are bounded too.
    pub async fn import_file(&mut self, path: &Path, max_bytes: u64) -> Result<CsvReport, ShelfError> {
        let unreadable = |e: std::io::Error| ImportError::Unreadable(e.to_string());

        let meta = tokio::fs::metadata(path).await.map_err(unreadable)?;
        if meta.len() > max_bytes {
            return Err(ImportError::FileTooLarge {
                size: meta.len(),
                max: max_bytes,
            }
            .into());
        }

        let file = tokio::fs::File::open(path).await.map_err(unreadable)?;
        let mut bytes = Vec::new();
        file.take(max_bytes.saturating_add(1))
            .read_to_end(&mut bytes)
            .await
            .map_err(unreadable)?;
        if bytes.len() as u64 > max_bytes {
            return Err(ImportError::FileTooLarge {
                size: bytes.len() as u64,
                max: max_bytes,
            }
            .into());
        }

        let raw = String::from_utf8(bytes).map_err(|e| ImportError::Unreadable(e.to_string()))?;
        self.import_csv(&raw)
    }

    /// Category names in insertion order, followed by the create-new marker.
    pub fn list_categories(&self) -> Vec<CategoryChoice> {
        self.store.category_choices()
    }

    pub fn has_any_prompts(&self) -> bool {
        self.store.has_any_prompts()
    }

    /// Copies the text of the prompt at 1-based `position` in `category`.
    pub fn copy<C: Clipboard>(
        &self,
        category: &str,
        position: usize,
        clipboard: &mut C,
    ) -> Result<&Prompt, ShelfError> {
        let prompt = self.store.prompt(category, position).ok_or_else(|| {
            ShelfError::NotFound(format!("no prompt #{} in category '{}'", position, category))
        })?;
        clipboard
            .set_text(&prompt.prompt)
            .map_err(ShelfError::Clipboard)?;
        Ok(prompt)
    }
}
