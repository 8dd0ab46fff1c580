//! Institution: a school or university hosting lectures.

use super::patch::non_null;
use super::Entity;
use crate::sql::PgBindValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow, ToSchema)]
pub struct Institution {
    pub id: i32,
    pub institution_name: String,
    pub institution_location: String,
    pub created_at: DateTime<Utc>,
    pub changed_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct InstitutionCreate {
    pub institution_name: String,
    pub institution_location: String,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct InstitutionUpdate {
    #[serde(default, deserialize_with = "non_null")]
    pub institution_name: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub institution_location: Option<String>,
}

impl Entity for Institution {
    const NAME: &'static str = "Institution";
    const TABLE: &'static str = "institution";
    const PATH: &'static str = "institutions";
    const COLUMNS: &'static [&'static str] = &["institution_name", "institution_location"];

    type Create = InstitutionCreate;
    type Update = InstitutionUpdate;

    fn id(&self) -> i32 {
        self.id
    }

    fn create_values(input: InstitutionCreate) -> Vec<PgBindValue> {
        vec![input.institution_name.into(), input.institution_location.into()]
    }

    fn values(&self) -> Vec<PgBindValue> {
        vec![
            self.institution_name.as_str().into(),
            self.institution_location.as_str().into(),
        ]
    }

    fn merge(&mut self, patch: InstitutionUpdate) {
        if let Some(v) = patch.institution_name {
            self.institution_name = v;
        }
        if let Some(v) = patch.institution_location {
            self.institution_location = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Institution {
        let now = Utc::now();
        Institution {
            id: 1,
            institution_name: "Acme U".into(),
            institution_location: "City".into(),
            created_at: now,
            changed_at: now,
        }
    }

    #[test]
    fn merge_changes_only_supplied_fields() {
        let mut rec = sample();
        let patch: InstitutionUpdate =
            serde_json::from_str(r#"{"institution_location":"New City"}"#).unwrap();
        rec.merge(patch);
        assert_eq!(rec.institution_name, "Acme U");
        assert_eq!(rec.institution_location, "New City");
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let mut rec = sample();
        let before = rec.clone();
        rec.merge(serde_json::from_str("{}").unwrap());
        assert_eq!(rec, before);
    }

    #[test]
    fn explicit_null_is_rejected() {
        let res = serde_json::from_str::<InstitutionUpdate>(r#"{"institution_name":null}"#);
        assert!(res.is_err());
    }

    #[test]
    fn create_requires_every_field() {
        assert!(serde_json::from_str::<InstitutionCreate>(r#"{"institution_name":"Acme U"}"#).is_err());
        assert!(serde_json::from_str::<InstitutionCreate>(
            r#"{"institution_name":"Acme U","institution_location":5}"#
        )
        .is_err());
    }

    #[test]
    fn values_follow_column_order() {
        let vals = sample().values();
        assert_eq!(vals.len(), Institution::COLUMNS.len());
        assert_eq!(vals[0], PgBindValue::Text("Acme U".into()));
    }
}
