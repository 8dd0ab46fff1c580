//! Educator <-> Institution association rows.

use crate::error::AppError;
use crate::model::{Educator, Entity, Institution};
use crate::service::CrudService;
use sqlx::PgPool;

pub struct LinkService;

impl LinkService {
    /// Link an educator to an institution. Linking twice is a no-op.
    /// Fails with not-found naming whichever side is absent.
    pub async fn link(pool: &PgPool, educator_id: i32, institution_id: i32) -> Result<(), AppError> {
        let mut tx = pool.begin().await?;
        let educator: Option<(i32,)> = sqlx::query_as("SELECT id FROM educator WHERE id = $1 FOR SHARE")
            .bind(educator_id)
            .fetch_optional(&mut *tx)
            .await?;
        if educator.is_none() {
            return Err(AppError::not_found(Educator::NAME));
        }
        let institution: Option<(i32,)> =
            sqlx::query_as("SELECT id FROM institution WHERE id = $1 FOR SHARE")
                .bind(institution_id)
                .fetch_optional(&mut *tx)
                .await?;
        if institution.is_none() {
            return Err(AppError::not_found(Institution::NAME));
        }
        sqlx::query(
            "INSERT INTO educator_institution (educator_id, institution_id) VALUES ($1, $2) \
             ON CONFLICT (educator_id, institution_id) DO NOTHING",
        )
        .bind(educator_id)
        .bind(institution_id)
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;
        tracing::info!(educator_id, institution_id, "educator linked to institution");
        Ok(())
    }

    /// Remove a link. Returns false when it did not exist.
    pub async fn unlink(pool: &PgPool, educator_id: i32, institution_id: i32) -> Result<bool, AppError> {
        let done = sqlx::query("DELETE FROM educator_institution WHERE educator_id = $1 AND institution_id = $2")
            .bind(educator_id)
            .bind(institution_id)
            .execute(pool)
            .await?;
        Ok(done.rows_affected() > 0)
    }

    /// Institutions linked to an educator, or `None` if the educator is absent.
    pub async fn institutions_of(pool: &PgPool, educator_id: i32) -> Result<Option<Vec<Institution>>, AppError> {
        if CrudService::get::<Educator>(pool, educator_id).await?.is_none() {
            return Ok(None);
        }
        let rows = sqlx::query_as::<_, Institution>(
            "SELECT i.* FROM institution i \
             JOIN educator_institution ei ON ei.institution_id = i.id \
             WHERE ei.educator_id = $1 ORDER BY i.id",
        )
        .bind(educator_id)
        .fetch_all(pool)
        .await?;
        Ok(Some(rows))
    }

    /// Educators linked to an institution, or `None` if the institution is absent.
    pub async fn educators_of(pool: &PgPool, institution_id: i32) -> Result<Option<Vec<Educator>>, AppError> {
        if CrudService::get::<Institution>(pool, institution_id).await?.is_none() {
            return Ok(None);
        }
        let rows = sqlx::query_as::<_, Educator>(
            "SELECT e.* FROM educator e \
             JOIN educator_institution ei ON ei.educator_id = e.id \
             WHERE ei.institution_id = $1 ORDER BY e.id",
        )
        .bind(institution_id)
        .fetch_all(pool)
        .await?;
        Ok(Some(rows))
    }
}
