use crate::error::AppError;
use crate::response::ok;
use crate::service::CrudService;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;

/// GET /student-answers/device/:device_id. No matches is an empty list.
pub async fn list_by_device(
    State(state): State<AppState>,
    Path(device_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let rows = CrudService::list_by_device(&state.pool, &device_id).await?;
    Ok(ok(rows))
}
