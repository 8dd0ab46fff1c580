//! StudentAnswer: one anonymous submission from a device.
//!
//! `device_id` is opaque and not unique; a device may answer the same question
//! any number of times.

use super::patch::non_null;
use super::Entity;
use crate::sql::PgBindValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow, ToSchema)]
pub struct StudentAnswer {
    pub id: i32,
    pub question_id: i32,
    pub answer_option_id: i32,
    pub device_id: String,
    pub answer_created_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub changed_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct StudentAnswerCreate {
    pub question_id: i32,
    pub answer_option_id: i32,
    pub device_id: String,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct StudentAnswerUpdate {
    #[serde(default, deserialize_with = "non_null")]
    pub question_id: Option<i32>,
    #[serde(default, deserialize_with = "non_null")]
    pub answer_option_id: Option<i32>,
    #[serde(default, deserialize_with = "non_null")]
    pub device_id: Option<String>,
}

impl StudentAnswer {
    pub const DEVICE_COLUMN: &'static str = "device_id";
}

impl Entity for StudentAnswer {
    const NAME: &'static str = "Student answer";
    const TABLE: &'static str = "student_answer";
    const PATH: &'static str = "student-answers";
    const COLUMNS: &'static [&'static str] = &["question_id", "answer_option_id", "device_id"];

    type Create = StudentAnswerCreate;
    type Update = StudentAnswerUpdate;

    fn id(&self) -> i32 {
        self.id
    }

    fn create_values(input: StudentAnswerCreate) -> Vec<PgBindValue> {
        vec![
            input.question_id.into(),
            input.answer_option_id.into(),
            input.device_id.into(),
        ]
    }

    fn values(&self) -> Vec<PgBindValue> {
        vec![
            self.question_id.into(),
            self.answer_option_id.into(),
            self.device_id.as_str().into(),
        ]
    }

    fn merge(&mut self, patch: StudentAnswerUpdate) {
        if let Some(v) = patch.question_id {
            self.question_id = v;
        }
        if let Some(v) = patch.answer_option_id {
            self.answer_option_id = v;
        }
        if let Some(v) = patch.device_id {
            self.device_id = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_all_output_fields() {
        let now = Utc::now();
        let rec = StudentAnswer {
            id: 3,
            question_id: 1,
            answer_option_id: 2,
            device_id: "device-abc".into(),
            answer_created_at: now,
            created_at: now,
            changed_at: now,
        };
        let v = serde_json::to_value(&rec).unwrap();
        for key in ["id", "question_id", "answer_option_id", "device_id", "answer_created_at", "created_at", "changed_at"] {
            assert!(v.get(key).is_some(), "missing {key}");
        }
    }
}
