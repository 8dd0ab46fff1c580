//! Entity CRUD handlers, generic over `Entity`: create, read, update, delete, list.

use crate::error::AppError;
use crate::extractors::{Pagination, ValidJson};
use crate::model::Entity;
use crate::response::{created, message, ok};
use crate::service::CrudService;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use std::num::IntErrorKind;

/// Integers beyond the id column's range cannot match a row, so they are
/// reported as not found rather than malformed.
pub(crate) fn parse_id(id_str: &str, entity: &str) -> Result<i32, AppError> {
    id_str.parse::<i32>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => AppError::not_found(entity),
        _ => AppError::BadRequest(format!("invalid id: {}", id_str)),
    })
}

pub async fn list<E: Entity>(
    State(state): State<AppState>,
    page: Pagination,
) -> Result<impl IntoResponse, AppError> {
    let rows = CrudService::list::<E>(&state.pool, page.skip, page.limit).await?;
    Ok(ok(rows))
}

pub async fn create<E: Entity>(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<E::Create>,
) -> Result<impl IntoResponse, AppError> {
    let row = CrudService::create::<E>(&state.pool, body).await?;
    Ok(created(row))
}

pub async fn read<E: Entity>(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str, E::NAME)?;
    let row = CrudService::get::<E>(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(E::NAME))?;
    Ok(ok(row))
}

pub async fn update<E: Entity>(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    ValidJson(body): ValidJson<E::Update>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str, E::NAME)?;
    let row = CrudService::update::<E>(&state.pool, id, body)
        .await?
        .ok_or_else(|| AppError::not_found(E::NAME))?;
    Ok(ok(row))
}

pub async fn delete<E: Entity>(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str, E::NAME)?;
    if !CrudService::delete::<E>(&state.pool, id).await? {
        return Err(AppError::not_found(E::NAME));
    }
    Ok(message(format!("{} deleted successfully", E::NAME)))
}
