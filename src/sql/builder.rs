//! Builds parameterized INSERT, SELECT, UPDATE, DELETE for the fixed schema.
//! Identifiers come from compile-time constants only; values are always parameters.

use crate::sql::PgBindValue;

/// Quote identifier for PostgreSQL.
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<PgBindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: impl Into<PgBindValue>) -> usize {
        self.params.push(v.into());
        self.params.len()
    }
}

/// SELECT * by primary key.
pub fn select_by_id(table: &str, id: i32) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(id);
    q.sql = format!("SELECT * FROM {} WHERE \"id\" = ${}", quoted(table), n);
    q
}

/// SELECT * by primary key, row-locked until the surrounding transaction ends.
pub fn select_by_id_for_update(table: &str, id: i32) -> QueryBuf {
    let mut q = select_by_id(table, id);
    q.sql.push_str(" FOR UPDATE");
    q
}

/// SELECT * page ordered by id.
pub fn select_list(table: &str, skip: i64, limit: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let l = q.push_param(limit);
    let o = q.push_param(skip);
    q.sql = format!(
        "SELECT * FROM {} ORDER BY \"id\" LIMIT ${} OFFSET ${}",
        quoted(table),
        l,
        o
    );
    q
}

/// SELECT * where one column equals a value, ordered by id.
pub fn select_where_eq(table: &str, column: &str, value: impl Into<PgBindValue>) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(value);
    q.sql = format!(
        "SELECT * FROM {} WHERE {} = ${} ORDER BY \"id\"",
        quoted(table),
        quoted(column),
        n
    );
    q
}

/// SELECT id plus the given columns rendered as text, paged and ordered by id.
pub fn select_text_columns(table: &str, columns: &[&str], skip: i64, limit: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let l = q.push_param(limit);
    let o = q.push_param(skip);
    q.sql = format!(
        "SELECT {} FROM {} ORDER BY \"id\" LIMIT ${} OFFSET ${}",
        text_column_list(columns),
        quoted(table),
        l,
        o
    );
    q
}

/// SELECT id plus the given columns rendered as text for one row.
pub fn select_text_columns_by_id(table: &str, columns: &[&str], id: i32) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(id);
    q.sql = format!(
        "SELECT {} FROM {} WHERE \"id\" = ${}",
        text_column_list(columns),
        quoted(table),
        n
    );
    q
}

fn text_column_list(columns: &[&str]) -> String {
    std::iter::once("id")
        .chain(columns.iter().copied())
        .map(|c| format!("{}::text AS {}", quoted(c), quoted(c)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// INSERT the given columns and return the stored row, including server defaults.
pub fn insert(table: &str, columns: &[&str], values: Vec<PgBindValue>) -> QueryBuf {
    debug_assert_eq!(columns.len(), values.len());
    let mut q = QueryBuf::new();
    let mut placeholders = Vec::with_capacity(values.len());
    for v in values {
        placeholders.push(format!("${}", q.push_param(v)));
    }
    let cols: Vec<String> = columns.iter().map(|c| quoted(c)).collect();
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING *",
        quoted(table),
        cols.join(", "),
        placeholders.join(", ")
    );
    q
}

/// UPDATE the given columns by id, bump changed_at, and return the stored row.
pub fn update(table: &str, columns: &[&str], id: i32, values: Vec<PgBindValue>) -> QueryBuf {
    debug_assert_eq!(columns.len(), values.len());
    let mut q = QueryBuf::new();
    let mut sets = Vec::with_capacity(values.len() + 1);
    for (col, v) in columns.iter().zip(values) {
        let n = q.push_param(v);
        sets.push(format!("{} = ${}", quoted(col), n));
    }
    sets.push("\"changed_at\" = now()".to_string());
    let n = q.push_param(id);
    q.sql = format!(
        "UPDATE {} SET {} WHERE \"id\" = ${} RETURNING *",
        quoted(table),
        sets.join(", "),
        n
    );
    q
}

/// DELETE by id. Caller checks rows affected.
pub fn delete(table: &str, id: i32) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(id);
    q.sql = format!("DELETE FROM {} WHERE \"id\" = ${}", quoted(table), n);
    q
}
