//! Persistence of mirrored words.
//!
//! The store is an append-only log of transformations. Handlers only see the
//! [`MirrorStore`] trait; [`PgStore`] is the PostgreSQL implementation used by
//! the binary.
//!
//! Writes are best-effort: [`MirrorStore::insert`] reports success as a `bool`
//! and logs failures, so a store outage never changes a mirror response.
//! Reads return a [`StoreError`] that handlers turn into a 500.

mod postgres;

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::Serialize;

pub use postgres::PgStore;

/// One persisted transformation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct TransformationRecord {
    pub original_word: String,
    pub transformed_word: String,
    /// Assigned by the database on insert; rendered as ISO-8601.
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database did not respond within {0:?}")]
    Timeout(Duration),

    #[error("Word is {0} characters long, longer than the stored maximum")]
    WordTooLong(usize),
}

#[async_trait]
pub trait MirrorStore: Send + Sync {
    /// Create the table and index if they do not exist. Safe to call repeatedly.
    async fn initialize(&self) -> Result<(), StoreError>;

    /// Append one record, surfacing the failure reason.
    async fn save(&self, original: &str, transformed: &str) -> Result<(), StoreError>;

    /// Up to `limit` records, newest first.
    async fn list_recent(&self, limit: i64) -> Result<Vec<TransformationRecord>, StoreError>;

    /// Best-effort append. Returns whether the record was stored; failures are logged.
    async fn insert(&self, original: &str, transformed: &str) -> bool {
        match self.save(original, transformed).await {
            Ok(()) => {
                tracing::info!(original, transformed, "Saved transformation");
                true
            }
            Err(StoreError::WordTooLong(len)) => {
                tracing::warn!(len, "Word too long to store, skipping");
                false
            }
            Err(e) => {
                tracing::error!(error = %e, original, "Failed to save transformation");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::sync::Mutex;

    fn timestamp(h: u32, m: u32, s: u32, micros: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_micro_opt(h, m, s, micros)
            .unwrap()
    }

    #[test]
    fn test_record_serializes_iso8601() {
        let record = TransformationRecord {
            original_word: "fOoBar25".to_string(),
            transformed_word: "52RAbOoF".to_string(),
            created_at: Some(timestamp(12, 30, 45, 123456)),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "original_word": "fOoBar25",
                "transformed_word": "52RAbOoF",
                "created_at": "2024-05-01T12:30:45.123456",
            })
        );
    }

    #[test]
    fn test_record_without_timestamp_serializes_null() {
        let record = TransformationRecord {
            original_word: "a".to_string(),
            transformed_word: "A".to_string(),
            created_at: None,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert!(json["created_at"].is_null());
    }

    #[test]
    fn test_store_error_display() {
        let err = StoreError::Timeout(Duration::from_secs(5));
        assert_eq!(err.to_string(), "Database did not respond within 5s");
        let err = StoreError::WordTooLong(300);
        assert!(err.to_string().contains("300"));
    }

    /// Store whose `save` fails or succeeds on demand.
    struct ScriptedStore {
        fail_with_timeout: bool,
        saved: Mutex<Vec<(String, String)>>,
    }

    #[async_trait]
    impl MirrorStore for ScriptedStore {
        async fn initialize(&self) -> Result<(), StoreError> {
            Ok(())
        }

        async fn save(&self, original: &str, transformed: &str) -> Result<(), StoreError> {
            if self.fail_with_timeout {
                return Err(StoreError::Timeout(Duration::from_secs(1)));
            }
            self.saved
                .lock()
                .unwrap()
                .push((original.to_string(), transformed.to_string()));
            Ok(())
        }

        async fn list_recent(&self, _limit: i64) -> Result<Vec<TransformationRecord>, StoreError> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_insert_reports_success() {
        let store = ScriptedStore {
            fail_with_timeout: false,
            saved: Mutex::new(Vec::new()),
        };
        assert!(store.insert("test", "TSET").await);
        assert_eq!(
            store.saved.lock().unwrap().as_slice(),
            &[("test".to_string(), "TSET".to_string())]
        );
    }

    #[tokio::test]
    async fn test_insert_swallows_failure() {
        let store = ScriptedStore {
            fail_with_timeout: true,
            saved: Mutex::new(Vec::new()),
        };
        assert!(!store.insert("test", "TSET").await);
        assert!(store.saved.lock().unwrap().is_empty());
    }
}
