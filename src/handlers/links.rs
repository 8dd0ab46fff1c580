//! Educator <-> Institution association handlers.

use crate::error::AppError;
use crate::handlers::entity::parse_id;
use crate::model::{Educator, Entity, Institution};
use crate::response::{message, ok};
use crate::service::LinkService;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;

/// GET /institutions/:id/educators
pub async fn educators_of_institution(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str, Institution::NAME)?;
    let rows = LinkService::educators_of(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(Institution::NAME))?;
    Ok(ok(rows))
}

/// GET /educators/:id/institutions
pub async fn institutions_of_educator(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str, Educator::NAME)?;
    let rows = LinkService::institutions_of(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(Educator::NAME))?;
    Ok(ok(rows))
}

/// PUT /educators/:id/institutions/:institution_id
pub async fn link(
    State(state): State<AppState>,
    Path((educator_str, institution_str)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let educator_id = parse_id(&educator_str, Educator::NAME)?;
    let institution_id = parse_id(&institution_str, Institution::NAME)?;
    LinkService::link(&state.pool, educator_id, institution_id).await?;
    Ok(message("Educator linked to institution"))
}

/// DELETE /educators/:id/institutions/:institution_id
pub async fn unlink(
    State(state): State<AppState>,
    Path((educator_str, institution_str)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let educator_id = parse_id(&educator_str, Educator::NAME)?;
    let institution_id = parse_id(&institution_str, Institution::NAME)?;
    if !LinkService::unlink(&state.pool, educator_id, institution_id).await? {
        return Err(AppError::not_found("Link"));
    }
    Ok(message("Educator unlinked from institution"))
}
