//! Handler for reading the transformation history.

use axum::{extract::State, Extension, Json};
use tracing::instrument;

use crate::config::HISTORY_LIMIT;
use crate::error::{AppErrorResponse, ResultExt};
use crate::middleware::RequestId;
use crate::state::AppState;
use crate::store::TransformationRecord;

/// GET /api/history
///
/// Returns the most recent records, newest first.
#[instrument(name = "history::list", skip_all)]
pub async fn list(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> Result<Json<Vec<TransformationRecord>>, AppErrorResponse> {
    let records = state
        .store
        .list_recent(HISTORY_LIMIT)
        .await
        .with_request_id(&request_id)?;

    tracing::debug!(count = records.len(), "Fetched history");
    Ok(Json(records))
}
