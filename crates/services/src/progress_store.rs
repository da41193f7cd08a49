use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;
use storage::repository::KeyValueRepository;
use study_core::model::{DateKey, ProgressMap};

use crate::error::ProgressStoreError;

/// Storage slot holding the whole progress map.
pub const PROGRESS_KEY: &str = "progress";

/// Bridges the in-memory `ProgressMap` and its single persisted JSON blob.
///
/// Reads are best-effort: a blob that cannot be read or is not a JSON object
/// becomes an empty map, and a single bad entry is dropped on its own so the
/// day is re-seeded. Writes always replace the full blob.
#[derive(Clone)]
pub struct ProgressStore {
    repo: Arc<dyn KeyValueRepository>,
}

impl ProgressStore {
    #[must_use]
    pub fn new(repo: Arc<dyn KeyValueRepository>) -> Self {
        Self { repo }
    }

    /// Load the stored progress, or an empty map if absent or unreadable.
    pub async fn load(&self) -> ProgressMap {
        let raw = match self.repo.get_value(PROGRESS_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(key = PROGRESS_KEY, "no stored progress yet");
                return ProgressMap::new();
            }
            Err(err) => {
                tracing::warn!(key = PROGRESS_KEY, error = %err, "progress read failed; starting fresh");
                return ProgressMap::new();
            }
        };

        let entries = match serde_json::from_str::<BTreeMap<String, Value>>(&raw) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(key = PROGRESS_KEY, error = %err, "stored progress is malformed; starting fresh");
                return ProgressMap::new();
            }
        };

        let progress: ProgressMap = entries
            .into_iter()
            .filter_map(|(raw_key, value)| parse_entry(&raw_key, value))
            .collect();
        tracing::debug!(days = progress.len(), "loaded stored progress");
        progress
    }

    /// Serialize the whole map and overwrite the stored blob.
    ///
    /// # Errors
    ///
    /// Returns `ProgressStoreError` if encoding or the storage write fails.
    pub async fn save(&self, progress: &ProgressMap) -> Result<(), ProgressStoreError> {
        let raw = serde_json::to_string(progress)?;
        self.repo.put_value(PROGRESS_KEY, &raw).await?;
        tracing::debug!(days = progress.len(), bytes = raw.len(), "saved progress");
        Ok(())
    }
}

/// One stored day, or `None` (logged) when its key or flags are unusable.
fn parse_entry(raw_key: &str, value: Value) -> Option<(DateKey, Vec<bool>)> {
    let key = match raw_key.parse::<DateKey>() {
        Ok(key) => key,
        Err(err) => {
            tracing::warn!(error = %err, "dropping stored progress entry with a bad key");
            return None;
        }
    };
    match serde_json::from_value::<Vec<bool>>(value) {
        Ok(flags) => Some((key, flags)),
        Err(err) => {
            tracing::warn!(date = %key, error = %err, "dropping stored progress entry with bad flags");
            None
        }
    }
}
