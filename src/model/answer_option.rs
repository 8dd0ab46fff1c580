use super::patch::non_null;
use super::Entity;
use crate::sql::PgBindValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow, ToSchema)]
pub struct AnswerOption {
    pub id: i32,
    pub question_id: i32,
    pub answer_text: String,
    pub option_index: i32,
    pub created_at: DateTime<Utc>,
    pub changed_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct AnswerOptionCreate {
    pub question_id: i32,
    pub answer_text: String,
    pub option_index: i32,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct AnswerOptionUpdate {
    #[serde(default, deserialize_with = "non_null")]
    pub question_id: Option<i32>,
    #[serde(default, deserialize_with = "non_null")]
    pub answer_text: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub option_index: Option<i32>,
}

impl Entity for AnswerOption {
    const NAME: &'static str = "Answer option";
    const TABLE: &'static str = "answer_option";
    const PATH: &'static str = "answer-options";
    const COLUMNS: &'static [&'static str] = &["question_id", "answer_text", "option_index"];

    type Create = AnswerOptionCreate;
    type Update = AnswerOptionUpdate;

    fn id(&self) -> i32 {
        self.id
    }

    fn create_values(input: AnswerOptionCreate) -> Vec<PgBindValue> {
        vec![
            input.question_id.into(),
            input.answer_text.into(),
            input.option_index.into(),
        ]
    }

    fn values(&self) -> Vec<PgBindValue> {
        vec![
            self.question_id.into(),
            self.answer_text.as_str().into(),
            self.option_index.into(),
        ]
    }

    fn merge(&mut self, patch: AnswerOptionUpdate) {
        if let Some(v) = patch.question_id {
            self.question_id = v;
        }
        if let Some(v) = patch.answer_text {
            self.answer_text = v;
        }
        if let Some(v) = patch.option_index {
            self.option_index = v;
        }
    }
}
