use serde::Serialize;
use crate::models::tarea::Tarea;

#[derive(Serialize)]
pub struct CreateTareaResponse {
    pub id: u64,
    #[serde(flatten)]
    pub tarea: Tarea,
}

#[derive(Serialize)]
pub struct UpdateTareaResponse {
    pub message: String,
    pub id: String,
    #[serde(flatten)]
    pub tarea: Tarea,
}

#[derive(Serialize)]
pub struct DeleteTareaResponse {
    pub message: String,
    pub id: String,
}
