//! Direct table access for the admin views. Rows come back as text cells.

use super::AdminView;
use crate::error::AppError;
use crate::sql::{delete, insert, select_text_columns, select_text_columns_by_id, update, PgBindValue, QueryBuf};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

/// One row: id first, then the view's columns.
pub type TextRow = Vec<Option<String>>;

fn to_text_row(row: &PgRow, width: usize) -> Result<TextRow, AppError> {
    (0..width)
        .map(|i| row.try_get::<Option<String>, _>(i).map_err(AppError::from))
        .collect()
}

async fn fetch(pool: &PgPool, q: &QueryBuf) -> Result<Vec<PgRow>, AppError> {
    tracing::debug!(sql = %q.sql, params = ?q.params, "admin query");
    let mut query = sqlx::query(&q.sql);
    for p in &q.params {
        query = query.bind(p.clone());
    }
    Ok(query.fetch_all(pool).await?)
}

pub async fn fetch_rows(pool: &PgPool, view: &AdminView, skip: i64, limit: i64) -> Result<Vec<TextRow>, AppError> {
    let q = select_text_columns(view.table, &view.column_names(), skip, limit);
    let width = view.columns.len() + 1;
    fetch(pool, &q).await?.iter().map(|r| to_text_row(r, width)).collect()
}

/// Fails with `RowNotFound` when the id is absent.
pub async fn fetch_row(pool: &PgPool, view: &AdminView, id: i32) -> Result<TextRow, AppError> {
    let q = select_text_columns_by_id(view.table, &view.column_names(), id);
    let rows = fetch(pool, &q).await?;
    let row = rows.first().ok_or(AppError::Db(sqlx::Error::RowNotFound))?;
    to_text_row(row, view.columns.len() + 1)
}

async fn execute(pool: &PgPool, q: &QueryBuf) -> Result<u64, AppError> {
    tracing::debug!(sql = %q.sql, params = ?q.params, "admin write");
    let mut query = sqlx::query(&q.sql);
    for p in &q.params {
        query = query.bind(p.clone());
    }
    Ok(query.execute(pool).await?.rows_affected())
}

pub async fn insert_row(pool: &PgPool, view: &AdminView, values: Vec<PgBindValue>) -> Result<(), AppError> {
    let q = insert(view.table, &view.column_names(), values);
    execute(pool, &q).await?;
    tracing::info!(table = view.table, "admin insert");
    Ok(())
}

pub async fn update_row(pool: &PgPool, view: &AdminView, id: i32, values: Vec<PgBindValue>) -> Result<(), AppError> {
    let q = update(view.table, &view.column_names(), id, values);
    if execute(pool, &q).await? == 0 {
        return Err(AppError::Db(sqlx::Error::RowNotFound));
    }
    tracing::info!(table = view.table, id, "admin update");
    Ok(())
}

pub async fn delete_row(pool: &PgPool, view: &AdminView, id: i32) -> Result<(), AppError> {
    let q = delete(view.table, id);
    if execute(pool, &q).await? == 0 {
        return Err(AppError::Db(sqlx::Error::RowNotFound));
    }
    tracing::info!(table = view.table, id, "admin delete");
    Ok(())
}
