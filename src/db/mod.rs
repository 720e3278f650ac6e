// src/db/mod.rs
//
// Data access seam used by every route handler. Handlers never see a pool or a
// driver type, only this trait, so a test double can stand in for MySQL.

pub mod error;
pub mod mysql;

use async_trait::async_trait;
use serde_json::{Map, Value};

pub use error::DatabaseError;
pub use mysql::MySqlDatabase;

/// A result-set row: column name to JSON value, in column order.
pub type Row = Map<String, Value>;

/// A positional bind parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

/// Request bodies are bound as they arrived. Arrays and objects are sent as
/// their JSON text; the database decides whether that is acceptable.
impl From<Value> for SqlValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => SqlValue::Null,
            Value::Bool(b) => SqlValue::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => SqlValue::Int(i),
                None => n.as_f64().map_or_else(|| SqlValue::Text(n.to_string()), SqlValue::Float),
            },
            Value::String(s) => SqlValue::Text(s),
            other => SqlValue::Text(other.to_string()),
        }
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Int(value)
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(SqlValue::Null, Into::into)
    }
}

/// What a write statement reports back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteOutcome {
    pub affected_rows: u64,
    pub last_insert_id: u64,
}

#[async_trait]
pub trait Database: Send + Sync {
    /// Runs a SELECT and returns every row.
    async fn fetch_all(&self, sql: &str, params: Vec<SqlValue>) -> Result<Vec<Row>, DatabaseError>;

    /// Runs an INSERT, UPDATE or DELETE.
    async fn execute(&self, sql: &str, params: Vec<SqlValue>) -> Result<WriteOutcome, DatabaseError>;
}
