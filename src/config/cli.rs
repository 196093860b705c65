use crate::core::Storage;
use crate::utils::error::{InlineError, Result};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|e| InlineError::from_io(path, e))
    }

    fn write_file(&self, path: &Path, data: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(path, data)?;
        Ok(())
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf> {
        fs::canonicalize(path).map_err(|e| InlineError::from_io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("dist/nested/index.html");

        let storage = LocalStorage::new();
        storage.write_file(&target, "<!DOCTYPE html>").unwrap();
        assert_eq!(storage.read_file(&target).unwrap(), "<!DOCTYPE html>");
    }

    #[test]
    fn test_missing_file_is_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.js");

        let storage = LocalStorage::new();
        assert!(matches!(
            storage.read_file(&missing),
            Err(InlineError::FileNotFound { .. })
        ));
        assert!(matches!(
            storage.canonicalize(&missing),
            Err(InlineError::FileNotFound { .. })
        ));
    }

    #[test]
    fn test_canonicalize_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("src/js")).unwrap();
        fs::write(temp_dir.path().join("src/js/a.js"), "").unwrap();

        let storage = LocalStorage::new();
        let once = storage
            .canonicalize(&temp_dir.path().join("src/js/../js/./a.js"))
            .unwrap();
        let twice = storage.canonicalize(&once).unwrap();
        assert_eq!(once, twice);
    }
}
