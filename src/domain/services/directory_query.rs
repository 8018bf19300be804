use crate::domain::models::account::{Directory, Role};
use crate::domain::ports::DirectoryStore;
use crate::error::AppError;
use std::sync::Arc;

/// Read-only projections over the directory. These never take the write
/// lock; `is_first_user` in particular is only a prediction for the
/// registration UI, the authoritative check happens inside register.
pub struct DirectoryQuery {
    store: Arc<dyn DirectoryStore>,
}

impl DirectoryQuery {
    pub fn new(store: Arc<dyn DirectoryStore>) -> Self {
        Self { store }
    }

    pub async fn is_first_user(&self) -> Result<bool, AppError> {
        Ok(self.store.load().await?.is_empty())
    }

    pub async fn approved_accounts(&self) -> Result<Directory, AppError> {
        let mut directory = self.store.load().await?;
        directory.retain(|_, account| account.approved);
        Ok(directory)
    }

    pub async fn pending_accounts(&self) -> Result<Directory, AppError> {
        let mut directory = self.store.load().await?;
        directory.retain(|_, account| !account.approved);
        Ok(directory)
    }

    /// Trust signal for externally rendered history views: the account
    /// exists, is a Farmer, and is currently approved.
    pub async fn is_verified_producer(&self, username: &str) -> Result<bool, AppError> {
        let directory = self.store.load().await?;
        Ok(directory
            .get(username)
            .map(|account| account.role == Role::Farmer && account.approved)
            .unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::account::Account;
    use crate::domain::ports::DirectoryStore;
    use crate::infra::repositories::json_file_store::JsonFileStore;

    async fn seeded_query() -> (DirectoryQuery, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(JsonFileStore::new(dir.path().join("users.json")));

        let mut directory = Directory::new();
        directory.insert(
            "admin1".to_string(),
            Account::new(Role::Admin, "$argon2id$stub".to_string(), true),
        );
        directory.insert(
            "farmer1".to_string(),
            Account::new(Role::Farmer, "$argon2id$stub".to_string(), true),
        );
        directory.insert(
            "farmer2".to_string(),
            Account::new(Role::Farmer, "$argon2id$stub".to_string(), false),
        );
        directory.insert(
            "shop1".to_string(),
            Account::new(Role::Retailer, "$argon2id$stub".to_string(), false),
        );
        store.save(&directory).await.unwrap();

        (DirectoryQuery::new(store), dir)
    }

    #[tokio::test]
    async fn test_first_user_only_on_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(JsonFileStore::new(dir.path().join("users.json")));
        let query = DirectoryQuery::new(store.clone());

        assert!(query.is_first_user().await.unwrap());

        let mut directory = Directory::new();
        directory.insert(
            "alice".to_string(),
            Account::new(Role::Admin, "$argon2id$stub".to_string(), true),
        );
        store.save(&directory).await.unwrap();

        assert!(!query.is_first_user().await.unwrap());
    }

    #[tokio::test]
    async fn test_approved_and_pending_partition_the_directory() {
        let (query, _dir) = seeded_query().await;

        let approved = query.approved_accounts().await.unwrap();
        assert_eq!(
            approved.keys().collect::<Vec<_>>(),
            vec!["admin1", "farmer1"]
        );

        let pending = query.pending_accounts().await.unwrap();
        assert_eq!(
            pending.keys().collect::<Vec<_>>(),
            vec!["farmer2", "shop1"]
        );
    }

    #[tokio::test]
    async fn test_verified_producer_flag() {
        let (query, _dir) = seeded_query().await;

        assert!(query.is_verified_producer("farmer1").await.unwrap());
        assert!(!query.is_verified_producer("farmer2").await.unwrap(), "unapproved");
        assert!(!query.is_verified_producer("admin1").await.unwrap(), "not a Farmer");
        assert!(!query.is_verified_producer("ghost").await.unwrap(), "absent");
    }
}
