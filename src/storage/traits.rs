//! Trait abstraction for the submission handoff to enable mocking in tests

use super::StorageError;
use crate::state::SubmittedRecord;
use async_trait::async_trait;

/// Session-scoped store holding at most one submitted record
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TransferStore: Send + Sync {
    /// Replace any stored record with this one
    async fn save(&self, record: &SubmittedRecord) -> Result<(), StorageError>;

    /// The stored record, `None` when nothing has been submitted
    async fn load(&self) -> Result<Option<SubmittedRecord>, StorageError>;

    /// Remove the stored record; clearing an empty store succeeds
    async fn clear(&self) -> Result<(), StorageError>;
}
