use crate::domain::ports::Storage;
use crate::utils::error::{AppError, Result};
use std::path::{Path, PathBuf};

/// File-backed key/value store: every key is a `<key>.json` file under `base_path`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains(&['/', '\\'][..]) || key.contains("..") {
            return Err(AppError::StorageError {
                key: key.to_string(),
                message: "Key must be a plain name".to_string(),
            });
        }
        Ok(Path::new(&self.base_path).join(format!("{}.json", key)))
    }
}

impl Storage for LocalStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        let full_path = self.path_for(key)?;
        match tokio::fs::read_to_string(&full_path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let full_path = self.path_for(key)?;

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(&full_path, value).await?;
        tracing::debug!("Saved '{}' ({} bytes)", key, value.len());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        let full_path = self.path_for(key)?;
        match tokio::fs::remove_file(&full_path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn storage_in(dir: &TempDir) -> LocalStorage {
        LocalStorage::new(dir.path().join("state").to_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn test_set_get_remove() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);

        assert_eq!(storage.get_item("picks").await.unwrap(), None);

        storage.set_item("picks", "[1,2]").await.unwrap();
        assert_eq!(
            storage.get_item("picks").await.unwrap().as_deref(),
            Some("[1,2]")
        );
        assert!(dir.path().join("state").join("picks.json").exists());

        storage.remove_item("picks").await.unwrap();
        assert_eq!(storage.get_item("picks").await.unwrap(), None);
        // removing twice is fine
        storage.remove_item("picks").await.unwrap();
    }

    #[tokio::test]
    async fn test_rejects_path_like_keys() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);

        for key in ["", "../escape", "a/b", "a\\b"] {
            let err = storage.set_item(key, "x").await.unwrap_err();
            assert!(matches!(err, AppError::StorageError { .. }), "{}", key);
        }
    }
}
