//! Schema DDL. Applied at startup; every statement is idempotent.
//! Order follows foreign-key dependencies. Cascades are declared here and
//! nowhere else: deleting a parent removes every row that references it.

use crate::error::AppError;
use sqlx::PgPool;

const DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS institution (
        id SERIAL PRIMARY KEY,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
        changed_at TIMESTAMPTZ NOT NULL DEFAULT now(),
        institution_name VARCHAR(255) NOT NULL,
        institution_location VARCHAR(255) NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS educator (
        id SERIAL PRIMARY KEY,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
        changed_at TIMESTAMPTZ NOT NULL DEFAULT now(),
        educator_name VARCHAR(255) NOT NULL,
        educator_speciality VARCHAR(255) NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS educator_institution (
        educator_id INTEGER NOT NULL REFERENCES educator (id) ON DELETE CASCADE,
        institution_id INTEGER NOT NULL REFERENCES institution (id) ON DELETE CASCADE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
        changed_at TIMESTAMPTZ NOT NULL DEFAULT now(),
        PRIMARY KEY (educator_id, institution_id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS lecture (
        id SERIAL PRIMARY KEY,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
        changed_at TIMESTAMPTZ NOT NULL DEFAULT now(),
        lecture_date TIMESTAMPTZ NOT NULL,
        lecture_title VARCHAR(255) NOT NULL,
        educator_id INTEGER NOT NULL REFERENCES educator (id) ON DELETE CASCADE,
        institution_id INTEGER NOT NULL REFERENCES institution (id) ON DELETE CASCADE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS question (
        id SERIAL PRIMARY KEY,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
        changed_at TIMESTAMPTZ NOT NULL DEFAULT now(),
        lecture_id INTEGER NOT NULL REFERENCES lecture (id) ON DELETE CASCADE,
        question_text TEXT NOT NULL,
        correct_answer_index INTEGER NOT NULL,
        question_created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS answer_option (
        id SERIAL PRIMARY KEY,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
        changed_at TIMESTAMPTZ NOT NULL DEFAULT now(),
        question_id INTEGER NOT NULL REFERENCES question (id) ON DELETE CASCADE,
        answer_text TEXT NOT NULL,
        option_index INTEGER NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS student_answer (
        id SERIAL PRIMARY KEY,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
        changed_at TIMESTAMPTZ NOT NULL DEFAULT now(),
        question_id INTEGER NOT NULL REFERENCES question (id) ON DELETE CASCADE,
        answer_option_id INTEGER NOT NULL REFERENCES answer_option (id) ON DELETE CASCADE,
        device_id VARCHAR(255) NOT NULL,
        answer_created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
    "CREATE INDEX IF NOT EXISTS lecture_educator_id_idx ON lecture (educator_id)",
    "CREATE INDEX IF NOT EXISTS lecture_institution_id_idx ON lecture (institution_id)",
    "CREATE INDEX IF NOT EXISTS question_lecture_id_idx ON question (lecture_id)",
    "CREATE INDEX IF NOT EXISTS answer_option_question_id_idx ON answer_option (question_id)",
    "CREATE INDEX IF NOT EXISTS student_answer_question_id_idx ON student_answer (question_id)",
    "CREATE INDEX IF NOT EXISTS student_answer_answer_option_id_idx ON student_answer (answer_option_id)",
    "CREATE INDEX IF NOT EXISTS student_answer_device_id_idx ON student_answer (device_id)",
];

/// Create every table and index that does not exist yet, in one transaction.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;
    for stmt in DDL {
        sqlx::query(stmt).execute(&mut *tx).await?;
    }
    tx.commit().await?;
    tracing::info!(statements = DDL.len(), "schema up to date");
    Ok(())
}
