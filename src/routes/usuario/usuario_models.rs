use serde::Serialize;
use crate::models::usuario::Usuario;

#[derive(Serialize)]
pub struct CreateUsuarioResponse {
    pub id: u64,
    #[serde(flatten)]
    pub usuario: Usuario,
}

#[derive(Serialize)]
pub struct UpdateUsuarioResponse {
    pub message: String,
    pub id: String,
    #[serde(flatten)]
    pub usuario: Usuario,
}

#[derive(Serialize)]
pub struct DeleteUsuarioResponse {
    pub message: String,
    pub id: String,
}
