use serde::Serialize;
use crate::models::proyecto::Proyecto;

#[derive(Serialize)]
pub struct CreateProyectoResponse {
    pub id: u64,
    #[serde(flatten)]
    pub proyecto: Proyecto,
}

#[derive(Serialize)]
pub struct UpdateProyectoResponse {
    pub message: String,
    pub id: String,
    #[serde(flatten)]
    pub proyecto: Proyecto,
}

#[derive(Serialize)]
pub struct DeleteProyectoResponse {
    pub message: String,
    pub id: String,
}
