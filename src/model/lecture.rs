//! Lecture: one session held by an educator at an institution.

use super::patch::{datetime, non_null, non_null_datetime};
use super::Entity;
use crate::sql::PgBindValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow, ToSchema)]
pub struct Lecture {
    pub id: i32,
    pub lecture_date: DateTime<Utc>,
    pub lecture_title: String,
    pub educator_id: i32,
    pub institution_id: i32,
    pub created_at: DateTime<Utc>,
    pub changed_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct LectureCreate {
    /// ISO 8601 date-time. Without an offset it is read as UTC.
    #[serde(deserialize_with = "datetime")]
    pub lecture_date: DateTime<Utc>,
    pub lecture_title: String,
    pub educator_id: i32,
    pub institution_id: i32,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct LectureUpdate {
    #[serde(default, deserialize_with = "non_null_datetime")]
    pub lecture_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "non_null")]
    pub lecture_title: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub educator_id: Option<i32>,
    #[serde(default, deserialize_with = "non_null")]
    pub institution_id: Option<i32>,
}

impl Entity for Lecture {
    const NAME: &'static str = "Lecture";
    const TABLE: &'static str = "lecture";
    const PATH: &'static str = "lectures";
    const COLUMNS: &'static [&'static str] =
        &["lecture_date", "lecture_title", "educator_id", "institution_id"];

    type Create = LectureCreate;
    type Update = LectureUpdate;

    fn id(&self) -> i32 {
        self.id
    }

    fn create_values(input: LectureCreate) -> Vec<PgBindValue> {
        vec![
            input.lecture_date.into(),
            input.lecture_title.into(),
            input.educator_id.into(),
            input.institution_id.into(),
        ]
    }

    fn values(&self) -> Vec<PgBindValue> {
        vec![
            self.lecture_date.into(),
            self.lecture_title.as_str().into(),
            self.educator_id.into(),
            self.institution_id.into(),
        ]
    }

    fn merge(&mut self, patch: LectureUpdate) {
        if let Some(v) = patch.lecture_date {
            self.lecture_date = v;
        }
        if let Some(v) = patch.lecture_title {
            self.lecture_title = v;
        }
        if let Some(v) = patch.educator_id {
            self.educator_id = v;
        }
        if let Some(v) = patch.institution_id {
            self.institution_id = v;
        }
    }
}
