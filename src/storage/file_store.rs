//! JSON file backed [`TransferStore`]

use super::{StorageError, TransferStore};
use crate::config::RegistrationConfig;
use crate::state::SubmittedRecord;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Key the record is stored under, also used as the file stem
pub const STORAGE_KEY: &str = "formSubmissionData";

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredSubmission {
    saved_at: DateTime<Utc>,
    #[serde(rename = "formSubmissionData")]
    record: SubmittedRecord,
}

/// Stores the submitted record as a single JSON document
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{STORAGE_KEY}.json")),
        }
    }

    pub fn from_config(config: &RegistrationConfig) -> Result<Self, StorageError> {
        config
            .data_dir()
            .map(Self::new)
            .ok_or(StorageError::NoDataDir)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TransferStore for FileStore {
    async fn save(&self, record: &SubmittedRecord) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::io(parent, e))?;
        }

        let stored = StoredSubmission {
            saved_at: Utc::now(),
            record: record.clone(),
        };
        let content = serde_json::to_string_pretty(&stored)?;

        // Write then rename so a reader never sees a half-written file
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)
            .await
            .map_err(|e| StorageError::io(&tmp, e))?;
        fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| StorageError::io(&self.path, e))?;

        tracing::debug!(path = %self.path.display(), "saved submission");
        Ok(())
    }

    async fn load(&self) -> Result<Option<SubmittedRecord>, StorageError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::io(&self.path, e)),
        };

        let stored: StoredSubmission = serde_json::from_str(&content)?;
        tracing::debug!(saved_at = %stored.saved_at, "loaded submission");
        Ok(Some(stored.record))
    }

    async fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "cleared submission");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::io(&self.path, e)),
        }
    }
}
