//! Best-effort persistence of the partially entered lead

use super::storage::{DraftStorage, StorageError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the single storage entry holding the draft
pub const DRAFT_KEY: &str = "leadFormDraft";

/// Fields remembered between visits
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
}

/// Reasons a draft could not be saved or restored. Never shown to the user.
#[derive(Debug, Error)]
pub enum DraftStoreError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("draft entry is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Saves and restores the draft, logging and swallowing every failure
pub struct DraftStore {
    storage: Box<dyn DraftStorage>,
}

impl DraftStore {
    pub fn new(storage: impl DraftStorage + 'static) -> Self {
        Self {
            storage: Box::new(storage),
        }
    }

    /// Remember the draft, replacing any previous one
    pub fn save(&self, draft: &FormDraft) {
        if let Err(e) = self.try_save(draft) {
            tracing::warn!(error = %e, "could not save form draft");
        }
    }

    /// Restore the saved draft, if any
    pub fn load(&self) -> Option<FormDraft> {
        match self.try_load() {
            Ok(draft) => draft,
            Err(e) => {
                tracing::warn!(error = %e, "could not load form draft");
                None
            }
        }
    }

    /// Forget the saved draft
    pub fn clear(&self) {
        if let Err(e) = self.storage.remove(DRAFT_KEY) {
            tracing::warn!(error = %e, "could not clear form draft");
        }
    }

    fn try_save(&self, draft: &FormDraft) -> Result<(), DraftStoreError> {
        let json = serde_json::to_string(draft)?;
        self.storage.set(DRAFT_KEY, &json)?;
        Ok(())
    }

    fn try_load(&self) -> Result<Option<FormDraft>, DraftStoreError> {
        match self.storage.get(DRAFT_KEY)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }
}
