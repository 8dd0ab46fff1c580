//! Question: a quiz prompt attached to a lecture.
//!
//! `correct_answer_index` is stored as given. It is not checked against the
//! question's answer options.

use super::patch::non_null;
use super::Entity;
use crate::sql::PgBindValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow, ToSchema)]
pub struct Question {
    pub id: i32,
    pub lecture_id: i32,
    pub question_text: String,
    pub correct_answer_index: i32,
    pub question_created_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub changed_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct QuestionCreate {
    pub lecture_id: i32,
    pub question_text: String,
    pub correct_answer_index: i32,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct QuestionUpdate {
    #[serde(default, deserialize_with = "non_null")]
    pub lecture_id: Option<i32>,
    #[serde(default, deserialize_with = "non_null")]
    pub question_text: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub correct_answer_index: Option<i32>,
}

impl Entity for Question {
    const NAME: &'static str = "Question";
    const TABLE: &'static str = "question";
    const PATH: &'static str = "questions";
    const COLUMNS: &'static [&'static str] = &["lecture_id", "question_text", "correct_answer_index"];

    type Create = QuestionCreate;
    type Update = QuestionUpdate;

    fn id(&self) -> i32 {
        self.id
    }

    fn create_values(input: QuestionCreate) -> Vec<PgBindValue> {
        vec![
            input.lecture_id.into(),
            input.question_text.into(),
            input.correct_answer_index.into(),
        ]
    }

    fn values(&self) -> Vec<PgBindValue> {
        vec![
            self.lecture_id.into(),
            self.question_text.as_str().into(),
            self.correct_answer_index.into(),
        ]
    }

    fn merge(&mut self, patch: QuestionUpdate) {
        if let Some(v) = patch.lecture_id {
            self.lecture_id = v;
        }
        if let Some(v) = patch.question_text {
            self.question_text = v;
        }
        if let Some(v) = patch.correct_answer_index {
            self.correct_answer_index = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_index_is_accepted() {
        let q: QuestionCreate = serde_json::from_str(
            r#"{"lecture_id":1,"question_text":"2+2?","correct_answer_index":42}"#,
        )
        .unwrap();
        assert_eq!(q.correct_answer_index, 42);
    }

    #[test]
    fn wrong_type_is_rejected() {
        let res = serde_json::from_str::<QuestionUpdate>(r#"{"correct_answer_index":"two"}"#);
        assert!(res.is_err());
    }
}
