//! Admin view handlers: HTML pages and form posts.

use crate::admin::{self, AdminView};
use crate::error::AppError;
use crate::extractors::Pagination;
use crate::handlers::entity::parse_id;
use crate::service::{DEFAULT_LIMIT, MAX_LIMIT};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use axum::Form;
use std::collections::HashMap;

fn find_view(path: &str) -> Result<&'static AdminView, AppError> {
    admin::view(path).ok_or_else(|| AppError::not_found("Admin view"))
}

fn back_to(view: &AdminView) -> Redirect {
    Redirect::to(&format!("/admin/{}", view.path))
}

pub async fn index() -> Html<String> {
    Html(admin::render_index())
}

pub async fn table(
    State(state): State<AppState>,
    Path(view_path): Path<String>,
    page: Pagination,
) -> Result<Html<String>, AppError> {
    let view = find_view(&view_path)?;
    let skip = i64::from(page.skip.unwrap_or(0));
    let limit = i64::from(page.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT));
    let rows = admin::fetch_rows(&state.pool, view, skip, limit).await?;
    Ok(Html(admin::render_table(view, &rows, skip, limit)))
}

pub async fn new_form(Path(view_path): Path<String>) -> Result<Html<String>, AppError> {
    let view = find_view(&view_path)?;
    Ok(Html(admin::render_form(view, None)))
}

pub async fn create(
    State(state): State<AppState>,
    Path(view_path): Path<String>,
    Form(form): Form<HashMap<String, String>>,
) -> Result<Redirect, AppError> {
    let view = find_view(&view_path)?;
    let values = admin::form_values(view, &form)?;
    admin::insert_row(&state.pool, view, values).await?;
    Ok(back_to(view))
}

pub async fn edit_form(
    State(state): State<AppState>,
    Path((view_path, id_str)): Path<(String, String)>,
) -> Result<Html<String>, AppError> {
    let view = find_view(&view_path)?;
    let id = parse_id(&id_str, "Record")?;
    let row = admin::fetch_row(&state.pool, view, id).await?;
    Ok(Html(admin::render_form(view, Some(&row))))
}

pub async fn update(
    State(state): State<AppState>,
    Path((view_path, id_str)): Path<(String, String)>,
    Form(form): Form<HashMap<String, String>>,
) -> Result<Redirect, AppError> {
    let view = find_view(&view_path)?;
    let id = parse_id(&id_str, "Record")?;
    let values = admin::form_values(view, &form)?;
    admin::update_row(&state.pool, view, id, values).await?;
    Ok(back_to(view))
}

pub async fn delete(
    State(state): State<AppState>,
    Path((view_path, id_str)): Path<(String, String)>,
) -> Result<Redirect, AppError> {
    let view = find_view(&view_path)?;
    let id = parse_id(&id_str, "Record")?;
    admin::delete_row(&state.pool, view, id).await?;
    Ok(back_to(view))
}
