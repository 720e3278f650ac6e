use actix_web::{web, HttpResponse, Responder, ResponseError};
use log::{error, info};
use crate::db::Database;
use crate::models::usuario::Usuario;
use super::usuario_models::{CreateUsuarioResponse, DeleteUsuarioResponse, UpdateUsuarioResponse};

const SELECT_USUARIOS: &str = "SELECT * FROM Usuario";
const INSERT_USUARIO: &str = "INSERT INTO Usuario (nombreUsuario, email) VALUES (?, ?)";
const UPDATE_USUARIO: &str = "UPDATE Usuario SET nombreUsuario = ?, email = ? WHERE idUsuario = ?";
const DELETE_USUARIO: &str = "DELETE FROM Usuario WHERE idUsuario = ?";

// List every user
pub async fn get_usuarios(db: web::Data<dyn Database>) -> impl Responder {
    info!("Received request to list usuarios");

    match db.fetch_all(SELECT_USUARIOS, Vec::new()).await {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(e) => {
            error!("Failed to list usuarios: {}", e);
            e.error_response()
        }
    }
}

// Create a user, returning the generated id with the echoed fields
pub async fn create_usuario(
    db: web::Data<dyn Database>,
    request: web::Json<Usuario>,
) -> impl Responder {
    let usuario = request.into_inner();
    info!("Received request to create usuario: {:?}", usuario.nombre_usuario);

    match db.execute(INSERT_USUARIO, usuario.bind_values()).await {
        Ok(outcome) => {
            info!("Usuario {} created", outcome.last_insert_id);
            HttpResponse::Ok().json(CreateUsuarioResponse {
                id: outcome.last_insert_id,
                usuario,
            })
        }
        Err(e) => {
            error!("Failed to create usuario: {}", e);
            e.error_response()
        }
    }
}

// Overwrite every mutable field; succeeds even when no row matches
pub async fn update_usuario(
    db: web::Data<dyn Database>,
    path: web::Path<String>,
    request: web::Json<Usuario>,
) -> impl Responder {
    let id = path.into_inner();
    let usuario = request.into_inner();
    info!("Received request to update usuario {}", id);

    let mut params = usuario.bind_values();
    params.push(id.as_str().into());

    match db.execute(UPDATE_USUARIO, params).await {
        Ok(outcome) => {
            info!("Usuario {} updated ({} rows affected)", id, outcome.affected_rows);
            HttpResponse::Ok().json(UpdateUsuarioResponse {
                message: "Usuario actualizado".into(),
                id,
                usuario,
            })
        }
        Err(e) => {
            error!("Failed to update usuario {}: {}", id, e);
            e.error_response()
        }
    }
}

pub async fn delete_usuario(db: web::Data<dyn Database>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    info!("Received request to delete usuario {}", id);

    match db.execute(DELETE_USUARIO, vec![id.as_str().into()]).await {
        Ok(outcome) => {
            info!("Usuario {} deleted ({} rows affected)", id, outcome.affected_rows);
            HttpResponse::Ok().json(DeleteUsuarioResponse {
                message: "Usuario eliminado".into(),
                id,
            })
        }
        Err(e) => {
            error!("Failed to delete usuario {}: {}", id, e);
            e.error_response()
        }
    }
}
