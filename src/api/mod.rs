//! Library API: the persistent prompt store and its errors.

mod error;
mod store;

pub use error::{ImportError, ShelfError, StorageError, ValidationError};
pub use store::PromptStore;
