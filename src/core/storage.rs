use super::config::Config;
use super::utils::{ensure_dir, resolve_home, restrict_file};
use serde_json::{Map, Value};
use std::cell::Cell;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::api::StorageError;

/// Runtime context holding paths and settings.
pub struct AppCtx {
    pub storage_path: PathBuf,
    pub log_dir: PathBuf,
    pub config: Config,
}

impl AppCtx {
    pub fn init(home: Option<&Path>) -> Result<Self, String> {
        let home_dir = resolve_home(home)?;
        ensure_dir(&home_dir)?;

        let config = Config::load(&home_dir)?;
        let storage_path = config.storage_path(&home_dir);
        let log_dir = home_dir.join("logs");

        Ok(Self {
            storage_path,
            log_dir,
            config,
        })
    }
}

/// A key-value area where each key holds one JSON value, read and written whole.
pub trait KvStorage {
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError>;
    fn set(&mut self, key: &str, value: Value) -> Result<(), StorageError>;
}

/// Keeps the whole key-value area as one JSON object in a file.
///
/// Writes go to a temporary file in the same directory which then replaces
/// the target, so a crash never leaves a half-written area behind.
pub struct FileStorage {
    path: PathBuf,
    /// Modification time at the last read or write. `None` means never
    /// observed; `Some(None)` means the file was observed absent.
    last_seen: Cell<Option<Option<SystemTime>>>,
}

impl FileStorage {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        if let Some(parent) = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty() && !p.exists())
        {
            ensure_dir(parent).map_err(|e| StorageError::Io(std::io::Error::other(e)))?;
        }
        Ok(Self {
            path,
            last_seen: Cell::new(None),
        })
    }

    fn modified(&self) -> Option<SystemTime> {
        fs::metadata(&self.path).and_then(|m| m.modified()).ok()
    }

    fn read_area(&self) -> Result<Map<String, Value>, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e.into()),
        };
        if content.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str(&content)? {
            Value::Object(area) => Ok(area),
            _ => Err(StorageError::Corrupt(format!(
                "{} does not hold a JSON object",
                self.path.display()
            ))),
        }
    }
}

impl KvStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        let mut area = self.read_area()?;
        self.last_seen.set(Some(self.modified()));
        Ok(area.remove(key))
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StorageError> {
        if let Some(seen) = self.last_seen.get() {
            if seen != self.modified() {
                warn!(
                    path = %self.path.display(),
                    "storage changed since it was last read, overwriting with this session's data"
                );
            }
        }

        let mut area = self.read_area()?;
        area.insert(key.to_string(), value);
        let bytes = serde_json::to_vec_pretty(&Value::Object(area))?;

        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(&bytes)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| StorageError::Io(e.error))?;
        restrict_file(&self.path);

        self.last_seen.set(Some(self.modified()));
        debug!(path = %self.path.display(), key, bytes = bytes.len(), "storage written");
        Ok(())
    }
}

/// Keeps the key-value area in memory.
#[derive(Default, Debug, Clone)]
pub struct MemoryStorage {
    area: Map<String, Value>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        Ok(self.area.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StorageError> {
        self.area.insert(key.to_string(), value);
        Ok(())
    }
}
