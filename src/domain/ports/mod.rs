use crate::domain::models::account::Directory;
use crate::error::AppError;
use async_trait::async_trait;

/// Record Store contract. Every mutation elsewhere in the domain goes through
/// a full load -> mutate -> save cycle; there are no partial writes.
#[async_trait]
pub trait DirectoryStore: Send + Sync {
    /// Loads the entire directory. A missing backing store is initialized to
    /// an empty directory and persisted before returning it.
    async fn load(&self) -> Result<Directory, AppError>;

    /// Replaces the entire persisted directory. A failure here means the
    /// caller must not report its mutation as committed.
    async fn save(&self, directory: &Directory) -> Result<(), AppError>;
}
