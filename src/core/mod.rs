//! Prompt model, import rules, and the I/O capabilities the store is built on.

pub mod clipboard;
pub mod config;
pub mod csv;
pub mod logging;
pub mod model;
pub mod storage;
pub mod utils;
pub mod validate;
