use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::db::SqlValue;
use super::present;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proyecto {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub nombre_proyecto: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<Value>,
}

impl Proyecto {
    pub fn bind_values(&self) -> Vec<SqlValue> {
        vec![
            self.nombre_proyecto.clone().into(),
            self.descripcion.clone().into(),
        ]
    }
}
