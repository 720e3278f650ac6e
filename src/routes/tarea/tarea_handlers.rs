use actix_web::{web, HttpResponse, Responder, ResponseError};
use log::{error, info};
use crate::db::Database;
use crate::models::tarea::Tarea;
use super::tarea_models::{CreateTareaResponse, DeleteTareaResponse, UpdateTareaResponse};

const SELECT_TAREAS: &str = "SELECT * FROM Tarea";
const INSERT_TAREA: &str = "INSERT INTO Tarea (descripcion, estado, fechaLimite, usuarioAsignado, proyectoAsociado) VALUES (?, ?, ?, ?, ?)";
const UPDATE_TAREA: &str = "UPDATE Tarea SET descripcion = ?, estado = ?, fechaLimite = ?, usuarioAsignado = ?, proyectoAsociado = ? WHERE idTarea = ?";
const DELETE_TAREA: &str = "DELETE FROM Tarea WHERE idTarea = ?";

// List every task
pub async fn get_tareas(db: web::Data<dyn Database>) -> impl Responder {
    info!("Received request to list tareas");

    match db.fetch_all(SELECT_TAREAS, Vec::new()).await {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(e) => {
            error!("Failed to list tareas: {}", e);
            e.error_response()
        }
    }
}

// Create a task, returning the generated id with the echoed fields
pub async fn create_tarea(
    db: web::Data<dyn Database>,
    request: web::Json<Tarea>,
) -> impl Responder {
    let tarea = request.into_inner();
    info!(
        "Received request to create tarea for proyecto {:?} assigned to {:?}",
        tarea.proyecto_asociado, tarea.usuario_asignado
    );

    match db.execute(INSERT_TAREA, tarea.bind_values()).await {
        Ok(outcome) => {
            info!("Tarea {} created", outcome.last_insert_id);
            HttpResponse::Ok().json(CreateTareaResponse {
                id: outcome.last_insert_id,
                tarea,
            })
        }
        Err(e) => {
            error!("Failed to create tarea: {}", e);
            e.error_response()
        }
    }
}

// Overwrite every mutable field; succeeds even when no row matches
pub async fn update_tarea(
    db: web::Data<dyn Database>,
    path: web::Path<String>,
    request: web::Json<Tarea>,
) -> impl Responder {
    let id = path.into_inner();
    let tarea = request.into_inner();
    info!("Received request to update tarea {}", id);

    let mut params = tarea.bind_values();
    params.push(id.as_str().into());

    match db.execute(UPDATE_TAREA, params).await {
        Ok(outcome) => {
            info!("Tarea {} updated ({} rows affected)", id, outcome.affected_rows);
            HttpResponse::Ok().json(UpdateTareaResponse {
                message: "Tarea actualizada".into(),
                id,
                tarea,
            })
        }
        Err(e) => {
            error!("Failed to update tarea {}: {}", id, e);
            e.error_response()
        }
    }
}

pub async fn delete_tarea(db: web::Data<dyn Database>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    info!("Received request to delete tarea {}", id);

    match db.execute(DELETE_TAREA, vec![id.as_str().into()]).await {
        Ok(outcome) => {
            info!("Tarea {} deleted ({} rows affected)", id, outcome.affected_rows);
            HttpResponse::Ok().json(DeleteTareaResponse {
                message: "Tarea eliminada".into(),
                id,
            })
        }
        Err(e) => {
            error!("Failed to delete tarea {}: {}", id, e);
            e.error_response()
        }
    }
}
