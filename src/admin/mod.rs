//! Administrative views: server-rendered tables and forms bound directly to the
//! stored tables. Writes here skip the REST transfer shapes; values are only
//! converted to the column's storage type and are otherwise constrained by the
//! store alone.

mod render;
mod store;
mod views;

pub use render::{escape, render_form, render_index, render_table};
pub use store::{delete_row, fetch_row, fetch_rows, insert_row, update_row};
pub use views::{view, AdminColumn, AdminView, ColumnKind, VIEWS};

use crate::error::AppError;
use crate::model::parse_timestamp;
use crate::sql::PgBindValue;
use std::collections::HashMap;

impl ColumnKind {
    /// Convert one submitted form value to its storage type.
    pub fn parse(&self, column: &str, raw: &str) -> Result<PgBindValue, AppError> {
        let invalid = || AppError::BadRequest(format!("invalid value for {}: {:?}", column, raw));
        match self {
            ColumnKind::Text => Ok(PgBindValue::Text(raw.to_string())),
            ColumnKind::Integer => raw.trim().parse::<i32>().map(PgBindValue::I32).map_err(|_| invalid()),
            ColumnKind::Timestamp => parse_timestamp(raw.trim()).map(PgBindValue::Timestamp).ok_or_else(invalid),
        }
    }
}

/// Values for every form column of `view`, in column order.
pub fn form_values(view: &AdminView, form: &HashMap<String, String>) -> Result<Vec<PgBindValue>, AppError> {
    view.columns
        .iter()
        .map(|c| {
            let raw = form
                .get(c.name)
                .ok_or_else(|| AppError::BadRequest(format!("missing field {}", c.name)))?;
            c.kind.parse(c.name, raw)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn timestamp_columns_read_local_time_as_utc() {
        let want = Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap();
        assert_eq!(
            ColumnKind::Timestamp.parse("lecture_date", "2025-03-01T09:30").unwrap(),
            PgBindValue::Timestamp(want)
        );
        assert!(ColumnKind::Timestamp.parse("lecture_date", "soon").is_err());
    }

    #[test]
    fn integer_columns_reject_text() {
        assert_eq!(ColumnKind::Integer.parse("option_index", " 3 ").unwrap(), PgBindValue::I32(3));
        assert!(ColumnKind::Integer.parse("option_index", "three").is_err());
    }

    #[test]
    fn form_values_follow_view_columns() {
        let view = view("institutions").unwrap();
        let mut form = HashMap::new();
        form.insert("institution_name".to_string(), "Acme U".to_string());
        assert!(form_values(view, &form).is_err());
        form.insert("institution_location".to_string(), "City".to_string());
        let vals = form_values(view, &form).unwrap();
        assert_eq!(vals, vec![PgBindValue::Text("Acme U".into()), PgBindValue::Text("City".into())]);
    }
}
