use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::db::SqlValue;
use super::present;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Usuario {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub nombre_usuario: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub email: Option<Value>,
}

impl Usuario {
    // Same order as the columns in the INSERT/UPDATE statements.
    pub fn bind_values(&self) -> Vec<SqlValue> {
        vec![
            self.nombre_usuario.clone().into(),
            self.email.clone().into(),
        ]
    }
}
