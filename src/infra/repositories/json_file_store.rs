use crate::domain::models::account::Directory;
use crate::domain::ports::DirectoryStore;
use crate::error::AppError;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{error, info};

/// File-backed Record Store: the whole directory lives in one pretty-printed
/// JSON document, read fully on every load and rewritten fully on every save.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DirectoryStore for JsonFileStore {
    async fn load(&self) -> Result<Directory, AppError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("User directory {:?} missing, initializing empty store", self.path);
                let empty = Directory::new();
                self.save(&empty).await?;
                Ok(empty)
            }
            Err(e) => {
                error!("Failed to read user directory {:?}: {:?}", self.path, e);
                Err(AppError::Storage(e))
            }
        }
    }

    async fn save(&self, directory: &Directory) -> Result<(), AppError> {
        let json = serde_json::to_vec_pretty(directory)?;
        tokio::fs::write(&self.path, &json).await.map_err(|e| {
            error!("Failed to write user directory {:?}: {:?}", self.path, e);
            AppError::Storage(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::account::{Account, Role};

    #[tokio::test]
    async fn test_missing_file_bootstraps_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        let store = JsonFileStore::new(&path);

        let directory = store.load().await.unwrap();
        assert!(directory.is_empty());
        // The empty directory was persisted, not just returned.
        assert!(path.exists());

        let reread = store.load().await.unwrap();
        assert!(reread.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("users.json"));

        let mut directory = Directory::new();
        directory.insert(
            "alice".to_string(),
            Account::new(Role::Admin, "$argon2id$stub".to_string(), true),
        );
        store.save(&directory).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.len(), 1);
        let alice = loaded.get("alice").unwrap();
        assert_eq!(alice.role, Role::Admin);
        assert!(alice.approved);
        assert!(alice.print_requests.is_empty());
    }

    #[tokio::test]
    async fn test_save_into_missing_directory_surfaces_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("no-such-dir").join("users.json"));

        let mut directory = Directory::new();
        directory.insert(
            "alice".to_string(),
            Account::new(Role::Admin, "$argon2id$stub".to_string(), true),
        );

        let result = store.save(&directory).await;
        assert!(matches!(result, Err(AppError::Storage(_))));
    }

    #[tokio::test]
    async fn test_corrupt_file_surfaces_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        tokio::fs::write(&path, b"{ not json").await.unwrap();

        let store = JsonFileStore::new(&path);
        let result = store.load().await;
        assert!(matches!(result, Err(AppError::Serialization(_))));
    }
}
