use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::db::SqlValue;
use super::present;

/// A task. Every field is passed to MySQL as the caller sent it, so
/// `fecha_limite` is parsed and `"usuarioAsignado": "1"` coerced there.
/// `usuario_asignado` and `proyecto_asociado` reference `Usuario.idUsuario`
/// and `Proyecto.idProyecto`; only the schema's foreign keys check them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tarea {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub estado: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub fecha_limite: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub usuario_asignado: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub proyecto_asociado: Option<Value>,
}

impl Tarea {
    pub fn bind_values(&self) -> Vec<SqlValue> {
        vec![
            self.descripcion.clone().into(),
            self.estado.clone().into(),
            self.fecha_limite.clone().into(),
            self.usuario_asignado.clone().into(),
            self.proyecto_asociado.clone().into(),
        ]
    }
}
