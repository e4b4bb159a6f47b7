//! Mirror: an HTTP service that mirrors words.
//!
//! A word is mirrored by swapping the case of its letters and reversing it
//! (`fOoBar25` becomes `52RAbOoF`). Every mirrored word is recorded in
//! PostgreSQL and the most recent records can be read back.
//!
//! Endpoints:
//! - `GET /api/health`: liveness probe
//! - `GET /api/mirror?word=...`: mirror a word and record it
//! - `GET /api/history`: the 100 most recent records, newest first

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod store;
pub mod transform;

pub use config::AppConfig;
pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
pub use store::{MirrorStore, PgStore, StoreError, TransformationRecord};
pub use transform::mirror_word;
