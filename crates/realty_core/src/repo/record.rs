//! Table mapping contract between records and SQL rows.
//!
//! # Invariants
//! - `KEY_COLUMNS` and `COLUMNS` are disjoint and together cover the table.
//! - `key_values` follows `KEY_COLUMNS` order; `column_values` follows `COLUMNS`.

use crate::model::validation::ValidationError;
use crate::repo::RepoResult;
use chrono::NaiveDate;
use rusqlite::types::Value;
use rusqlite::{Connection, Row};
use std::fmt::Debug;

/// A record persisted in exactly one table.
pub trait Record: Sized {
    /// Primary key; a tuple for composite link tables.
    type Key: Clone + Debug;

    const TABLE: &'static str;
    const KEY_COLUMNS: &'static [&'static str];
    /// Non-key columns, in bind order.
    const COLUMNS: &'static [&'static str];

    fn key(&self) -> Self::Key;
    fn key_values(key: &Self::Key) -> Vec<Value>;
    fn column_values(&self) -> Vec<Value>;
    fn from_row(row: &Row<'_>) -> RepoResult<Self>;

    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }

    /// Cross-table checks that must pass before insert.
    fn check_insert(&self, _conn: &Connection) -> RepoResult<()> {
        Ok(())
    }
}

pub(crate) fn text(value: &str) -> Value {
    Value::Text(value.to_string())
}

pub(crate) fn opt_text(value: Option<&str>) -> Value {
    value.map_or(Value::Null, text)
}

pub(crate) fn int(value: impl Into<i64>) -> Value {
    Value::Integer(value.into())
}

pub(crate) fn opt_int<T: Into<i64>>(value: Option<T>) -> Value {
    value.map_or(Value::Null, int)
}

pub(crate) fn real(value: f64) -> Value {
    Value::Real(value)
}

pub(crate) fn opt_real(value: Option<f64>) -> Value {
    value.map_or(Value::Null, real)
}

pub(crate) fn flag(value: bool) -> Value {
    Value::Integer(i64::from(value))
}

pub(crate) fn date(value: NaiveDate) -> Value {
    Value::Text(value.format("%Y-%m-%d").to_string())
}

pub(crate) fn opt_date(value: Option<NaiveDate>) -> Value {
    value.map_or(Value::Null, date)
}
