//! Error types for the library API.

use thiserror::Error;

use crate::core::validate::Field;

/// A required field is blank or too long. Nothing was stored.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The field is empty after trimming.
    #[error("Please fill in the {0}")]
    Missing(Field),

    /// The field is longer than its limit, counted in characters.
    #[error("The {field} exceeds {max} characters")]
    TooLong { field: Field, max: usize },
}

/// A CSV import that added nothing.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The file is larger than the configured import limit.
    #[error("File size must be less than {} (got {size} bytes)", human_size(.max))]
    FileTooLarge { size: u64, max: u64 },

    /// The file could not be read or is not text.
    #[error("Error parsing CSV file ({0}). Make sure it has columns: title,prompt,category")]
    Unreadable(String),

    /// Every data row was blank or invalid.
    #[error("No valid prompts found in CSV")]
    NoValidPrompts,
}

/// The key-value storage could not be read or written.
#[derive(Error, Debug)]
pub enum StorageError {
    /// An underlying file I/O error occurred.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize or deserialize data.
    #[error("Storage JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The stored value is not shaped like a prompt store.
    #[error("Corrupted storage: {0}")]
    Corrupt(String),
}

/// A comprehensive error type for all operations in the library API.
#[derive(Error, Debug)]
pub enum ShelfError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The requested category or prompt does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Writing to the system clipboard failed.
    #[error("Failed to copy: {0}")]
    Clipboard(String),
}

fn human_size(bytes: &u64) -> String {
    let bytes = *bytes;
    if bytes >= 1024 * 1024 && bytes % (1024 * 1024) == 0 {
        format!("{}MB", bytes / (1024 * 1024))
    } else if bytes >= 1024 && bytes % 1024 == 0 {
        format!("{}KB", bytes / 1024)
    } else {
        format!("{} bytes", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn import_messages_distinguish_parse_failure_from_empty_result() {
        let unreadable = ImportError::Unreadable("stream did not contain valid UTF-8".into());
        assert!(unreadable
            .to_string()
            .contains("Make sure it has columns: title,prompt,category"));
        assert_eq!(
            ImportError::NoValidPrompts.to_string(),
            "No valid prompts found in CSV"
        );
    }

    #[test]
    fn file_too_large_names_the_limit() {
        let err = ImportError::FileTooLarge {
            size: 2_000_000,
            max: 1024 * 1024,
        };
        assert_eq!(
            err.to_string(),
            "File size must be less than 1MB (got 2000000 bytes)"
        );
    }

    #[test]
    fn validation_errors_name_the_field() {
        let err: ShelfError = ValidationError::TooLong {
            field: Field::Category,
            max: 100,
        }
        .into();
        assert_eq!(err.to_string(), "The category exceeds 100 characters");
    }
}
