use async_trait::async_trait;
use crate::application::errors::StorageError;

/// Brain store - append-only pool of past message lines
#[async_trait]
pub trait BrainStore: Send + Sync {
    /// Append one entry. The entry must already be a single line.
    async fn append(&self, entry: &str) -> Result<(), StorageError>;

    /// Return one stored line chosen uniformly at random
    async fn sample(&self) -> Result<String, StorageError>;
}
