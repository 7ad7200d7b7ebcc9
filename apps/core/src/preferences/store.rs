//! Key-value persistence port for UI preferences.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{info, warn};

use crate::error::AppError;

/// Minimal storage contract the preference stores depend on
pub trait PreferenceStore {
    /// Read the raw value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError>;
}

/// Volatile store, used by tests and when no data directory is available
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preferences kept in a single JSON object file.
///
/// The whole file is rewritten on every `set` through a temporary file
/// and a rename, so readers never observe a half-written document.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open the store at `path`, loading existing values if the file exists.
    ///
    /// A corrupt file is logged and treated as empty; it is replaced on the next write.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref().to_path_buf();

        let values = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            match serde_json::from_str::<BTreeMap<String, String>>(&raw) {
                Ok(values) => values,
                Err(e) => {
                    warn!("Ignoring unreadable preferences file {:?}: {}", path, e);
                    BTreeMap::new()
                }
            }
        } else {
            BTreeMap::new()
        };

        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                info!("Creating preferences directory: {:?}", parent);
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(&self.values)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl PreferenceStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        self.values.insert(key.to_string(), value.to_string());
        self.persist()
            .map_err(|e| AppError::Preferences(format!("failed to save '{}': {}", key, e)))
    }
}

/// Cloneable handle letting several preference stores share one backend.
///
/// Theme and language state live in the same file; each holds a clone.
#[derive(Clone)]
pub struct SharedStore {
    inner: Arc<Mutex<Box<dyn PreferenceStore + Send>>>,
}

impl SharedStore {
    pub fn new(store: impl PreferenceStore + Send + 'static) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Box::new(store))),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Box<dyn PreferenceStore + Send>>, AppError> {
        self.inner
            .lock()
            .map_err(|_| AppError::Preferences("preference store lock poisoned".to_string()))
    }
}

impl PreferenceStore for SharedStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        self.lock()?.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        self.lock()?.set(key, value)
    }
}
