use super::patch::non_null;
use super::Entity;
use crate::sql::PgBindValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow, ToSchema)]
pub struct Educator {
    pub id: i32,
    pub educator_name: String,
    pub educator_speciality: String,
    pub created_at: DateTime<Utc>,
    pub changed_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct EducatorCreate {
    pub educator_name: String,
    pub educator_speciality: String,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct EducatorUpdate {
    #[serde(default, deserialize_with = "non_null")]
    pub educator_name: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub educator_speciality: Option<String>,
}

impl Entity for Educator {
    const NAME: &'static str = "Educator";
    const TABLE: &'static str = "educator";
    const PATH: &'static str = "educators";
    const COLUMNS: &'static [&'static str] = &["educator_name", "educator_speciality"];

    type Create = EducatorCreate;
    type Update = EducatorUpdate;

    fn id(&self) -> i32 {
        self.id
    }

    fn create_values(input: EducatorCreate) -> Vec<PgBindValue> {
        vec![input.educator_name.into(), input.educator_speciality.into()]
    }

    fn values(&self) -> Vec<PgBindValue> {
        vec![
            self.educator_name.as_str().into(),
            self.educator_speciality.as_str().into(),
        ]
    }

    fn merge(&mut self, patch: EducatorUpdate) {
        if let Some(v) = patch.educator_name {
            self.educator_name = v;
        }
        if let Some(v) = patch.educator_speciality {
            self.educator_speciality = v;
        }
    }
}
