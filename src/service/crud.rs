//! Generic CRUD execution against PostgreSQL for every `Entity`.

use crate::error::AppError;
use crate::model::{Entity, StudentAnswer};
use crate::sql::{
    delete, insert, select_by_id, select_by_id_for_update, select_list, select_where_eq, update,
    PgBindValue, QueryBuf,
};
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::QueryAs;
use sqlx::{FromRow, PgPool, Postgres};

pub const DEFAULT_LIMIT: u32 = 100;
pub const MAX_LIMIT: u32 = 1000;

pub struct CrudService;

impl CrudService {
    /// Fetch one row by id.
    pub async fn get<E: Entity>(pool: &PgPool, id: i32) -> Result<Option<E>, AppError> {
        let q = select_by_id(E::TABLE, id);
        let row = bind_all::<E>(&q).fetch_optional(pool).await?;
        Ok(row)
    }

    /// List rows ordered by id. `skip` defaults to 0, `limit` to 100 (max 1000).
    pub async fn list<E: Entity>(
        pool: &PgPool,
        skip: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Vec<E>, AppError> {
        let skip = skip.unwrap_or(0);
        let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
        let q = select_list(E::TABLE, i64::from(skip), i64::from(limit));
        let rows = bind_all::<E>(&q).fetch_all(pool).await?;
        Ok(rows)
    }

    /// Insert one row; the store assigns id and timestamps. Returns the stored row.
    pub async fn create<E: Entity>(pool: &PgPool, input: E::Create) -> Result<E, AppError> {
        let q = insert(E::TABLE, E::COLUMNS, E::create_values(input));
        let row = bind_all::<E>(&q).fetch_one(pool).await?;
        tracing::info!(entity = E::NAME, id = row.id(), "created");
        Ok(row)
    }

    /// Load, merge the supplied fields, and write back in one transaction.
    /// Returns `None` when no row has this id.
    pub async fn update<E: Entity>(
        pool: &PgPool,
        id: i32,
        patch: E::Update,
    ) -> Result<Option<E>, AppError> {
        let mut tx = pool.begin().await?;
        let q = select_by_id_for_update(E::TABLE, id);
        let Some(mut record) = bind_all::<E>(&q).fetch_optional(&mut *tx).await? else {
            return Ok(None);
        };
        record.merge(patch);
        let q = update(E::TABLE, E::COLUMNS, id, record.values());
        let row = bind_all::<E>(&q).fetch_one(&mut *tx).await?;
        tx.commit().await?;
        tracing::info!(entity = E::NAME, id, "updated");
        Ok(Some(row))
    }

    /// Delete one row by id; foreign keys cascade to dependents. Returns false when absent.
    pub async fn delete<E: Entity>(pool: &PgPool, id: i32) -> Result<bool, AppError> {
        let q = delete(E::TABLE, id);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        let done = query.execute(pool).await?;
        let deleted = done.rows_affected() > 0;
        if deleted {
            tracing::info!(entity = E::NAME, id, "deleted");
        }
        Ok(deleted)
    }

    /// All answers submitted from one device, in storage order.
    pub async fn list_by_device(pool: &PgPool, device_id: &str) -> Result<Vec<StudentAnswer>, AppError> {
        let q = select_where_eq(StudentAnswer::TABLE, StudentAnswer::DEVICE_COLUMN, device_id);
        let rows = bind_all::<StudentAnswer>(&q).fetch_all(pool).await?;
        Ok(rows)
    }
}

/// Build a typed query from a `QueryBuf`, binding its params in order.
fn bind_all<'q, T>(q: &'q QueryBuf) -> QueryAs<'q, Postgres, T, PgArguments>
where
    T: for<'r> FromRow<'r, PgRow>,
{
    tracing::debug!(sql = %q.sql, params = ?q.params, "query");
    let mut query = sqlx::query_as::<_, T>(&q.sql);
    for p in &q.params {
        query = query.bind(PgBindValue::clone(p));
    }
    query
}
