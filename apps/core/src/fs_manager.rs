use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Name of the preferences file inside the data directory
const PREFERENCES_FILENAME: &str = "preferences.json";

/// Resolves the on-disk layout under a configurable data directory.
#[derive(Debug, Clone)]
pub struct PortablePathManager {
    data_dir: PathBuf,
}

impl PortablePathManager {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Main data directory (./data by default).
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// File holding persisted UI preferences (./data/preferences.json).
    pub fn preferences_file(&self) -> PathBuf {
        self.data_dir.join(PREFERENCES_FILENAME)
    }

    /// Creates the data directory if it does not exist.
    pub fn init(&self) -> Result<(), std::io::Error> {
        if !self.data_dir.exists() {
            info!("Creating data directory: {:?}", self.data_dir);
            fs::create_dir_all(&self.data_dir)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_data_dir() {
        let dir = TempDir::new().unwrap();
        let paths = PortablePathManager::new(dir.path().join("data"));

        paths.init().unwrap();
        assert!(paths.data_dir().is_dir());
        assert_eq!(
            paths.preferences_file(),
            dir.path().join("data").join("preferences.json")
        );

        // Idempotent
        paths.init().unwrap();
    }
}
