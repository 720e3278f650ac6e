// src/db/mysql.rs

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Utc};
use log::{error, info};
use serde_json::Value;
use sqlx::mysql::{MySql, MySqlArguments, MySqlPool, MySqlPoolOptions, MySqlRow};
use sqlx::query::Query;
use sqlx::{Column, Row as _, TypeInfo};

use super::{Database, DatabaseError, Row, SqlValue, WriteOutcome};

/// `Database` backed by a sqlx MySQL pool.
#[derive(Clone)]
pub struct MySqlDatabase {
    pool: MySqlPool,
}

impl MySqlDatabase {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Connects eagerly. If the server cannot be reached the failure is logged
    /// and a lazy pool is returned instead, so the process keeps serving and
    /// requests fail at query time until the database comes back.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, DatabaseError> {
        let options = || MySqlPoolOptions::new().max_connections(max_connections);

        match options().connect(database_url).await {
            Ok(pool) => {
                info!("Connected to the MySQL database");
                Ok(Self::new(pool))
            }
            Err(e) => {
                error!("Failed to connect to the database: {}", e);
                let pool = options().connect_lazy(database_url)?;
                Ok(Self::new(pool))
            }
        }
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}

fn bind_params<'q>(
    mut query: Query<'q, MySql, MySqlArguments>,
    params: Vec<SqlValue>,
) -> Query<'q, MySql, MySqlArguments> {
    for param in params {
        query = match param {
            SqlValue::Null => query.bind(None::<String>),
            SqlValue::Bool(value) => query.bind(value),
            SqlValue::Int(value) => query.bind(value),
            SqlValue::Float(value) => query.bind(value),
            SqlValue::Text(value) => query.bind(value),
        };
    }
    query
}

#[async_trait]
impl Database for MySqlDatabase {
    async fn fetch_all(&self, sql: &str, params: Vec<SqlValue>) -> Result<Vec<Row>, DatabaseError> {
        let rows = bind_params(sqlx::query(sql), params)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DatabaseError::statement(sql, e))?;

        rows.iter()
            .map(row_to_json)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| DatabaseError::statement(sql, e))
    }

    async fn execute(&self, sql: &str, params: Vec<SqlValue>) -> Result<WriteOutcome, DatabaseError> {
        let result = bind_params(sqlx::query(sql), params)
            .execute(&self.pool)
            .await
            .map_err(|e| DatabaseError::statement(sql, e))?;

        Ok(WriteOutcome {
            affected_rows: result.rows_affected(),
            last_insert_id: result.last_insert_id(),
        })
    }
}

fn row_to_json(row: &MySqlRow) -> Result<Row, sqlx::Error> {
    let mut object = Row::new();
    for column in row.columns() {
        let value = column_to_json(row, column.ordinal(), column.type_info().name())?;
        object.insert(column.name().to_string(), value);
    }
    Ok(object)
}

// Maps a column to JSON by its MySQL type name, as reported by the driver.
fn column_to_json(row: &MySqlRow, index: usize, type_name: &str) -> Result<Value, sqlx::Error> {
    let value = match type_name {
        "NULL" => None,
        "BOOLEAN" => row.try_get::<Option<bool>, _>(index)?.map(Value::from),
        "TINYINT" | "SMALLINT" | "MEDIUMINT" | "INT" | "BIGINT" => {
            row.try_get::<Option<i64>, _>(index)?.map(Value::from)
        }
        name if name.ends_with(" UNSIGNED") => row.try_get::<Option<u64>, _>(index)?.map(Value::from),
        "FLOAT" => row
            .try_get::<Option<f32>, _>(index)?
            .map(|v| Value::from(f64::from(v))),
        "DOUBLE" => row.try_get::<Option<f64>, _>(index)?.map(Value::from),
        "DATETIME" => row
            .try_get::<Option<NaiveDateTime>, _>(index)?
            .map(|v| datetime_to_json(v.and_utc())),
        "TIMESTAMP" => row
            .try_get::<Option<DateTime<Utc>>, _>(index)?
            .map(datetime_to_json),
        "DATE" => row
            .try_get::<Option<NaiveDate>, _>(index)?
            .map(|v| Value::from(v.format("%Y-%m-%d").to_string())),
        "TIME" => row
            .try_get::<Option<NaiveTime>, _>(index)?
            .map(|v| Value::from(v.format("%H:%M:%S").to_string())),
        "BINARY" | "VARBINARY" | "TINYBLOB" | "BLOB" | "MEDIUMBLOB" | "LONGBLOB" => {
            row.try_get::<Option<Vec<u8>>, _>(index)?.map(Value::from)
        }
        "CHAR" | "VARCHAR" | "TINYTEXT" | "TEXT" | "MEDIUMTEXT" | "LONGTEXT" | "ENUM" | "SET" => {
            row.try_get::<Option<String>, _>(index)?.map(Value::from)
        }
        // DECIMAL, JSON and anything else travel as text on the wire.
        _ => row.try_get_unchecked::<Option<String>, _>(index)?.map(Value::from),
    };
    Ok(value.unwrap_or(Value::Null))
}

fn datetime_to_json(value: DateTime<Utc>) -> Value {
    Value::from(value.to_rfc3339_opts(SecondsFormat::Millis, true))
}
