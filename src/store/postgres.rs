//! PostgreSQL-backed store using a lazily connected sqlx pool.
//!
//! The pool does not open a connection until the first query, so the service
//! starts (and answers health checks) while the database is still down.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};

use super::{MirrorStore, StoreError, TransformationRecord};
use crate::config::{DatabaseConfig, MAX_WORD_CHARS};

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS mirror_words (
        id SERIAL PRIMARY KEY,
        original_word VARCHAR(255) NOT NULL,
        transformed_word VARCHAR(255) NOT NULL,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )
"#;

const CREATE_INDEX: &str = r#"
    CREATE INDEX IF NOT EXISTS idx_mirror_words_original
    ON mirror_words(original_word)
"#;

const INSERT_RECORD: &str =
    "INSERT INTO mirror_words (original_word, transformed_word) VALUES ($1, $2)";

const SELECT_RECENT: &str = r#"
    SELECT original_word, transformed_word, created_at
    FROM mirror_words
    ORDER BY created_at DESC NULLS LAST, id DESC
    LIMIT $1
"#;

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
    query_timeout: Duration,
}

impl PgStore {
    /// Build the pool without connecting. Fails only if the URL is malformed.
    pub fn connect_lazy(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let options: PgConnectOptions = config.url.parse()?;

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .connect_lazy_with(options);

        Ok(Self {
            pool,
            query_timeout: Duration::from_secs(config.query_timeout_seconds),
        })
    }

    /// Run a database future under the query timeout.
    async fn timed<T, F>(&self, fut: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        match tokio::time::timeout(self.query_timeout, fut).await {
            Ok(result) => result.map_err(StoreError::from),
            Err(_) => Err(StoreError::Timeout(self.query_timeout)),
        }
    }
}

#[async_trait]
impl MirrorStore for PgStore {
    async fn initialize(&self) -> Result<(), StoreError> {
        self.timed(async {
            let mut tx = self.pool.begin().await?;
            sqlx::query(CREATE_TABLE).execute(&mut *tx).await?;
            sqlx::query(CREATE_INDEX).execute(&mut *tx).await?;
            tx.commit().await
        })
        .await?;

        tracing::info!("Database initialized");
        Ok(())
    }

    async fn save(&self, original: &str, transformed: &str) -> Result<(), StoreError> {
        let len = original.chars().count().max(transformed.chars().count());
        if len > MAX_WORD_CHARS {
            return Err(StoreError::WordTooLong(len));
        }

        self.timed(
            sqlx::query(INSERT_RECORD)
                .bind(original)
                .bind(transformed)
                .execute(&self.pool),
        )
        .await?;
        Ok(())
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<TransformationRecord>, StoreError> {
        self.timed(
            sqlx::query_as::<_, TransformationRecord>(SELECT_RECENT)
                .bind(limit)
                .fetch_all(&self.pool),
        )
        .await
    }
}
