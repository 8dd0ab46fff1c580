//! Persisted record types and their transfer shapes.
//!
//! Every record type doubles as its output shape: it is loaded with `sqlx::FromRow`
//! and serialized as-is. Creation shapes require every business field; update
//! shapes carry `Option` fields that are merged onto a loaded record.

mod answer_option;
mod educator;
mod institution;
mod lecture;
mod patch;
mod question;
mod student_answer;

pub use answer_option::{AnswerOption, AnswerOptionCreate, AnswerOptionUpdate};
pub use educator::{Educator, EducatorCreate, EducatorUpdate};
pub use institution::{Institution, InstitutionCreate, InstitutionUpdate};
pub use lecture::{Lecture, LectureCreate, LectureUpdate};
pub use question::{Question, QuestionCreate, QuestionUpdate};
pub use student_answer::{StudentAnswer, StudentAnswerCreate, StudentAnswerUpdate};
pub(crate) use patch::parse_timestamp;

use crate::sql::PgBindValue;
use serde::{de::DeserializeOwned, Serialize};
use sqlx::postgres::PgRow;
use sqlx::FromRow;

/// A table-backed record with an integer `id` and `created_at`/`changed_at` timestamps.
pub trait Entity: for<'r> FromRow<'r, PgRow> + Serialize + Send + Sync + Unpin + 'static {
    /// Display name used in messages ("Institution not found").
    const NAME: &'static str;
    const TABLE: &'static str;
    /// REST collection segment, e.g. "answer-options".
    const PATH: &'static str;
    /// Business columns written on create and update, in bind order.
    const COLUMNS: &'static [&'static str];

    type Create: DeserializeOwned + Send + 'static;
    type Update: DeserializeOwned + Send + 'static;

    fn id(&self) -> i32;

    /// Bind values for `COLUMNS` from a creation shape.
    fn create_values(input: Self::Create) -> Vec<PgBindValue>;

    /// Bind values for `COLUMNS` from the current record.
    fn values(&self) -> Vec<PgBindValue>;

    /// Apply the fields present in `patch`; absent fields keep their value.
    fn merge(&mut self, patch: Self::Update);
}
