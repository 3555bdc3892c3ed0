use crate::core::Storage;
use crate::utils::error::{MedalError, Result};
use std::fs;
use std::path::Path;

/// Reads input files from the local filesystem, relative to `base_path`.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        fs::read(full_path).map_err(|e| MedalError::file_read(path, &e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_relative_to_base_path() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("medals.csv"), "header\n").unwrap();

        let storage = LocalStorage::new(dir.path().to_str().unwrap().to_string());
        assert_eq!(storage.read_file("medals.csv").unwrap(), b"header\n");

        let err = storage.read_file("missing.csv").unwrap_err();
        assert!(err.to_string().starts_with("Error reading file \"missing.csv\": "));
    }
}
