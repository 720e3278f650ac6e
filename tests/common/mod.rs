// Shared test infrastructure: an in-memory `Database` that understands the
// four statement shapes the handlers issue and enforces the reference schema's
// constraints (unique Usuario.email, Tarea foreign keys).

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use gestion_backend::db::{Database, DatabaseError, Row, SqlValue, WriteOutcome};
use serde_json::Value;
use tokio::sync::Mutex;

/// Builds the full route table over the given database and returns the
/// initialized test service.
macro_rules! init_app {
    ($db:expr) => {{
        let db: std::sync::Arc<dyn gestion_backend::db::Database> = $db;
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::from(db))
                .configure(gestion_backend::routes::routes::configure),
        )
        .await
    }};
}

struct Table {
    id_column: &'static str,
    rows: Vec<Row>,
    next_id: u64,
}

impl Table {
    fn new(id_column: &'static str) -> Self {
        Self {
            id_column,
            rows: Vec::new(),
            next_id: 1,
        }
    }
}

struct State {
    tables: HashMap<String, Table>,
    statements: Vec<(String, Vec<SqlValue>)>,
}

pub struct InMemoryDatabase {
    state: Mutex<State>,
}

impl InMemoryDatabase {
    pub fn new() -> Arc<Self> {
        let mut tables = HashMap::new();
        tables.insert("Usuario".to_string(), Table::new("idUsuario"));
        tables.insert("Proyecto".to_string(), Table::new("idProyecto"));
        tables.insert("Tarea".to_string(), Table::new("idTarea"));
        Arc::new(Self {
            state: Mutex::new(State {
                tables,
                statements: Vec::new(),
            }),
        })
    }

    pub async fn row_count(&self, table: &str) -> usize {
        self.state.lock().await.tables[table].rows.len()
    }

    pub async fn rows(&self, table: &str) -> Vec<Row> {
        self.state.lock().await.tables[table].rows.clone()
    }

    /// Every statement received, with its bind parameters, in order.
    pub async fn statements(&self) -> Vec<(String, Vec<SqlValue>)> {
        self.state.lock().await.statements.clone()
    }
}

// Columns declared INT in the reference schema.
const INT_COLUMNS: [&str; 2] = ["usuarioAsignado", "proyectoAsociado"];

fn to_json(value: &SqlValue) -> Value {
    match value {
        SqlValue::Null => Value::Null,
        SqlValue::Bool(v) => Value::from(*v),
        SqlValue::Int(v) => Value::from(*v),
        SqlValue::Float(v) => Value::from(*v),
        SqlValue::Text(v) => Value::from(v.clone()),
    }
}

// Stores a bound value the way MySQL would for the column: numeric text sent
// to an INT column becomes a number, anything else non-numeric is refused.
fn column_value(column: &str, value: &SqlValue, sql: &str) -> Result<Value, DatabaseError> {
    if !INT_COLUMNS.contains(&column) {
        return Ok(to_json(value));
    }
    match value {
        SqlValue::Null => Ok(Value::Null),
        other => match id_param(Some(other)) {
            Some(id) => Ok(Value::from(id)),
            None => Err(DatabaseError::Rejected {
                errno: Some(1366),
                sql_state: Some("HY000".into()),
                message: format!("Incorrect integer value: '{}' for column '{}' at row 1", to_json(other), column),
                sql: Some(sql.to_string()),
            }),
        },
    }
}

// MySQL coerces the textual path id; anything non-numeric matches nothing.
fn id_param(value: Option<&SqlValue>) -> Option<u64> {
    match value? {
        SqlValue::Int(v) => u64::try_from(*v).ok(),
        SqlValue::Bool(v) => Some(u64::from(*v)),
        SqlValue::Float(v) if v.fract() == 0.0 && *v >= 0.0 => Some(*v as u64),
        SqlValue::Text(v) => v.trim().parse().ok(),
        _ => None,
    }
}

fn rejected(errno: u16, message: String, sql: &str) -> DatabaseError {
    DatabaseError::Rejected {
        errno: Some(errno),
        sql_state: Some("23000".into()),
        message,
        sql: Some(sql.to_string()),
    }
}

fn unsupported(sql: &str) -> DatabaseError {
    DatabaseError::Rejected {
        errno: Some(1064),
        sql_state: Some("42000".into()),
        message: format!("You have an error in your SQL syntax near '{}'", sql),
        sql: Some(sql.to_string()),
    }
}

fn split_columns(list: &str) -> Vec<String> {
    list.split(',')
        .map(|c| c.trim().trim_end_matches("= ?").trim().to_string())
        .collect()
}

fn row_exists(tables: &HashMap<String, Table>, table: &str, id: &Value) -> bool {
    let t = &tables[table];
    t.rows.iter().any(|r| r.get(t.id_column) == Some(id))
}

fn check_constraints(
    tables: &HashMap<String, Table>,
    table: &str,
    candidate: &Row,
    skip_id: Option<u64>,
    sql: &str,
) -> Result<(), DatabaseError> {
    match table {
        "Usuario" => {
            if let Some(email) = candidate.get("email").filter(|e| !e.is_null()) {
                let duplicate = tables["Usuario"].rows.iter().any(|r| {
                    r.get("email") == Some(email)
                        && r.get("idUsuario").and_then(Value::as_u64) != skip_id
                });
                if duplicate {
                    return Err(rejected(
                        1062,
                        format!("Duplicate entry '{}' for key 'email'", email.as_str().unwrap_or_default()),
                        sql,
                    ));
                }
            }
        }
        "Tarea" => {
            for (column, parent) in [("usuarioAsignado", "Usuario"), ("proyectoAsociado", "Proyecto")] {
                if let Some(reference) = candidate.get(column).filter(|v| !v.is_null()) {
                    if !row_exists(tables, parent, reference) {
                        return Err(rejected(
                            1452,
                            format!(
                                "Cannot add or update a child row: a foreign key constraint fails (`Tarea`, FOREIGN KEY (`{}`) REFERENCES `{}`)",
                                column, parent
                            ),
                            sql,
                        ));
                    }
                }
            }
        }
        _ => {}
    }
    Ok(())
}

fn check_not_referenced(
    tables: &HashMap<String, Table>,
    table: &str,
    id: u64,
    sql: &str,
) -> Result<(), DatabaseError> {
    let column = match table {
        "Usuario" => "usuarioAsignado",
        "Proyecto" => "proyectoAsociado",
        _ => return Ok(()),
    };
    let referenced = tables["Tarea"]
        .rows
        .iter()
        .any(|r| r.get(column).and_then(Value::as_u64) == Some(id));
    if referenced {
        return Err(rejected(
            1451,
            format!(
                "Cannot delete or update a parent row: a foreign key constraint fails (`Tarea`, FOREIGN KEY (`{}`) REFERENCES `{}`)",
                column, table
            ),
            sql,
        ));
    }
    Ok(())
}

#[async_trait]
impl Database for InMemoryDatabase {
    async fn fetch_all(&self, sql: &str, params: Vec<SqlValue>) -> Result<Vec<Row>, DatabaseError> {
        let mut state = self.state.lock().await;
        state.statements.push((sql.to_string(), params));

        let table = sql.strip_prefix("SELECT * FROM ").ok_or_else(|| unsupported(sql))?;
        let table = state.tables.get(table.trim()).ok_or_else(|| unsupported(sql))?;
        Ok(table.rows.clone())
    }

    async fn execute(&self, sql: &str, params: Vec<SqlValue>) -> Result<WriteOutcome, DatabaseError> {
        let mut state = self.state.lock().await;
        state.statements.push((sql.to_string(), params.clone()));
        let tables = &mut state.tables;

        if let Some(rest) = sql.strip_prefix("INSERT INTO ") {
            let (table, rest) = rest.split_once(" (").ok_or_else(|| unsupported(sql))?;
            let (columns, _) = rest.split_once(')').ok_or_else(|| unsupported(sql))?;
            let columns = split_columns(columns);
            if columns.len() != params.len() || !tables.contains_key(table) {
                return Err(unsupported(sql));
            }

            let t = &tables[table];
            let id = t.next_id;
            let mut row = Row::new();
            row.insert(t.id_column.to_string(), Value::from(id));
            for (column, value) in columns.iter().zip(&params) {
                row.insert(column.clone(), column_value(column, value, sql)?);
            }
            check_constraints(tables, table, &row, None, sql)?;

            let t = tables.get_mut(table).ok_or_else(|| unsupported(sql))?;
            t.rows.push(row);
            t.next_id += 1;
            return Ok(WriteOutcome {
                affected_rows: 1,
                last_insert_id: id,
            });
        }

        if let Some(rest) = sql.strip_prefix("UPDATE ") {
            let (table, rest) = rest.split_once(" SET ").ok_or_else(|| unsupported(sql))?;
            let (assignments, _) = rest.split_once(" WHERE ").ok_or_else(|| unsupported(sql))?;
            let columns = split_columns(assignments);
            if columns.len() + 1 != params.len() || !tables.contains_key(table) {
                return Err(unsupported(sql));
            }
            let id = id_param(params.last());

            let t = &tables[table];
            let Some(position) = t
                .rows
                .iter()
                .position(|r| r.get(t.id_column).and_then(Value::as_u64) == id && id.is_some())
            else {
                return Ok(WriteOutcome::default());
            };

            let mut row = t.rows[position].clone();
            for (column, value) in columns.iter().zip(&params) {
                row.insert(column.clone(), column_value(column, value, sql)?);
            }
            check_constraints(tables, table, &row, id, sql)?;

            let t = tables.get_mut(table).ok_or_else(|| unsupported(sql))?;
            t.rows[position] = row;
            return Ok(WriteOutcome {
                affected_rows: 1,
                last_insert_id: 0,
            });
        }

        if let Some(rest) = sql.strip_prefix("DELETE FROM ") {
            let (table, _) = rest.split_once(" WHERE ").ok_or_else(|| unsupported(sql))?;
            if !tables.contains_key(table) {
                return Err(unsupported(sql));
            }
            let Some(id) = id_param(params.first()) else {
                return Ok(WriteOutcome::default());
            };
            check_not_referenced(tables, table, id, sql)?;

            let t = tables.get_mut(table).ok_or_else(|| unsupported(sql))?;
            let id_column = t.id_column;
            let before = t.rows.len();
            t.rows.retain(|r| r.get(id_column).and_then(Value::as_u64) != Some(id));
            return Ok(WriteOutcome {
                affected_rows: (before - t.rows.len()) as u64,
                last_insert_id: 0,
            });
        }

        Err(unsupported(sql))
    }
}

/// A database whose every call fails as if the server were unreachable.
pub struct UnreachableDatabase;

#[async_trait]
impl Database for UnreachableDatabase {
    async fn fetch_all(&self, _sql: &str, _params: Vec<SqlValue>) -> Result<Vec<Row>, DatabaseError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn execute(&self, sql: &str, _params: Vec<SqlValue>) -> Result<WriteOutcome, DatabaseError> {
        Err(DatabaseError::statement(sql, sqlx::Error::PoolTimedOut))
    }
}
