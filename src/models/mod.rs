// src/models/mod.rs
//
// Mutable field sets of each table. These are both the request bodies of
// create/update and the echo returned to the caller; the id is never part of
// them because the database owns it.
//
// Fields hold whatever JSON arrived. An absent key is `None` (bound as NULL,
// left out of the echo); an explicit `null` is `Some(Value::Null)` and is
// echoed back as `null`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub mod usuario;
pub mod proyecto;
pub mod tarea;

pub(crate) fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
