// src/db/error.rs

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::{json, Map, Value};
use sqlx::mysql::MySqlDatabaseError;
use thiserror::Error;

/// Any failure reported by the data store while running a statement.
///
/// Every variant maps to a 500 whose body is the driver's own error,
/// rendered as JSON. Client mistakes (bad foreign key, duplicate email)
/// and infrastructure failures (lost connection) are not told apart.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Failure outside any statement (pool setup, bad URL).
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    /// A statement that failed, together with its SQL text.
    #[error("{source}")]
    Statement {
        sql: String,
        #[source]
        source: sqlx::Error,
    },

    /// A statement the server refused, reported by a non-sqlx backend.
    #[error("{message}")]
    Rejected {
        errno: Option<u16>,
        sql_state: Option<String>,
        message: String,
        sql: Option<String>,
    },
}

impl DatabaseError {
    pub fn statement(sql: &str, source: sqlx::Error) -> Self {
        DatabaseError::Statement {
            sql: sql.to_string(),
            source,
        }
    }

    /// JSON rendering of the underlying error, used as the 500 body.
    pub fn body(&self) -> Value {
        match self {
            DatabaseError::Sqlx(source) => sqlx_error_body(source, None),
            DatabaseError::Statement { sql, source } => sqlx_error_body(source, Some(sql)),
            DatabaseError::Rejected {
                errno,
                sql_state,
                message,
                sql,
            } => server_error_body(*errno, sql_state.as_deref(), message, sql.as_deref()),
        }
    }
}

fn sqlx_error_body(err: &sqlx::Error, sql: Option<&str>) -> Value {
    match err {
        sqlx::Error::Database(db_err) => {
            if let Some(mysql_err) = db_err.try_downcast_ref::<MySqlDatabaseError>() {
                server_error_body(
                    Some(mysql_err.number()),
                    mysql_err.code(),
                    mysql_err.message(),
                    sql,
                )
            } else {
                server_error_body(None, db_err.code().as_deref(), db_err.message(), sql)
            }
        }
        other => json!({ "message": other.to_string() }),
    }
}

// Symbolic names MySQL gives the errors a CRUD statement can hit.
fn error_code_name(errno: u16) -> Option<&'static str> {
    let name = match errno {
        1045 => "ER_ACCESS_DENIED_ERROR",
        1048 => "ER_BAD_NULL_ERROR",
        1049 => "ER_BAD_DB_ERROR",
        1054 => "ER_BAD_FIELD_ERROR",
        1062 => "ER_DUP_ENTRY",
        1064 => "ER_PARSE_ERROR",
        1146 => "ER_NO_SUCH_TABLE",
        1264 => "ER_WARN_DATA_OUT_OF_RANGE",
        1292 => "ER_TRUNCATED_WRONG_VALUE",
        1366 => "ER_TRUNCATED_WRONG_VALUE_FOR_FIELD",
        1406 => "ER_DATA_TOO_LONG",
        1451 => "ER_ROW_IS_REFERENCED_2",
        1452 => "ER_NO_REFERENCED_ROW_2",
        _ => return None,
    };
    Some(name)
}

fn server_error_body(
    errno: Option<u16>,
    sql_state: Option<&str>,
    message: &str,
    sql: Option<&str>,
) -> Value {
    let mut body = Map::new();
    if let Some(code) = errno.and_then(error_code_name) {
        body.insert("code".into(), code.into());
    }
    if let Some(errno) = errno {
        body.insert("errno".into(), errno.into());
    }
    if let Some(sql_state) = sql_state {
        body.insert("sqlState".into(), sql_state.into());
    }
    body.insert("sqlMessage".into(), message.into());
    if let Some(sql) = sql {
        body.insert("sql".into(), sql.into());
    }
    Value::Object(body)
}

impl ResponseError for DatabaseError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::InternalServerError().json(self.body())
    }
}
