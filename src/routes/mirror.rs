//! Handler for mirroring a word.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Extension, Json,
};
use serde::Serialize;
use tracing::instrument;

use crate::error::{AppError, AppErrorResponse, ResultExt};
use crate::middleware::RequestId;
use crate::state::AppState;
use crate::transform::mirror_word;

/// Name of the query parameter carrying the word
const WORD_PARAM: &str = "word";

/// First value of `word` in the query string, if any.
///
/// The query is read as ordered pairs so a repeated `word` key is not a
/// rejection: the first occurrence wins.
fn first_word(params: Vec<(String, String)>) -> Option<String> {
    params
        .into_iter()
        .find(|(key, _)| key == WORD_PARAM)
        .map(|(_, value)| value)
}

#[derive(Debug, Serialize)]
pub struct MirrorResponse {
    pub transformed: String,
}

/// GET /api/mirror?word=<word>
///
/// The insert is awaited but its outcome is ignored: a store outage is logged
/// by the store and the client still gets the transformed word.
#[instrument(name = "mirror::mirror", skip_all)]
pub async fn mirror(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<MirrorResponse>, AppErrorResponse> {
    let word = params
        .ok()
        .and_then(|Query(params)| first_word(params))
        .filter(|word| !word.is_empty())
        .ok_or(AppError::MissingWord)
        .with_request_id(&request_id)?;

    let transformed = mirror_word(&word);
    state.store.insert(&word, &transformed).await;

    Ok(Json(MirrorResponse { transformed }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_first_word_takes_first_occurrence() {
        let params = pairs(&[("word", "abc"), ("word", "def")]);
        assert_eq!(first_word(params).as_deref(), Some("abc"));
    }

    #[test]
    fn test_first_word_ignores_other_keys() {
        let params = pairs(&[("lang", "en"), ("word", "foo")]);
        assert_eq!(first_word(params).as_deref(), Some("foo"));
        assert_eq!(first_word(pairs(&[("lang", "en")])), None);
    }

    #[test]
    fn test_first_word_keeps_empty_first_value() {
        let params = pairs(&[("word", ""), ("word", "def")]);
        assert_eq!(first_word(params).as_deref(), Some(""));
    }
}
