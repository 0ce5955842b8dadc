pub mod api;
pub mod cli;
pub mod commands;
pub mod core;

pub use api::{ImportError, PromptStore, ShelfError, StorageError, ValidationError};
pub use crate::core::model::{Category, CategoryChoice, Prompt, Store};
pub use crate::core::storage::{FileStorage, KvStorage, MemoryStorage};
