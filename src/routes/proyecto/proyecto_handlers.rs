use actix_web::{web, HttpResponse, Responder, ResponseError};
use log::{error, info};
use crate::db::Database;
use crate::models::proyecto::Proyecto;
use super::proyecto_models::{CreateProyectoResponse, DeleteProyectoResponse, UpdateProyectoResponse};

const SELECT_PROYECTOS: &str = "SELECT * FROM Proyecto";
const INSERT_PROYECTO: &str = "INSERT INTO Proyecto (nombreProyecto, descripcion) VALUES (?, ?)";
const UPDATE_PROYECTO: &str = "UPDATE Proyecto SET nombreProyecto = ?, descripcion = ? WHERE idProyecto = ?";
const DELETE_PROYECTO: &str = "DELETE FROM Proyecto WHERE idProyecto = ?";

// GET /proyecto
pub async fn get_proyectos(db: web::Data<dyn Database>) -> impl Responder {
    info!("Received request to list proyectos");

    match db.fetch_all(SELECT_PROYECTOS, Vec::new()).await {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(e) => {
            error!("Failed to list proyectos: {}", e);
            e.error_response()
        }
    }
}

// Create a project, returning the generated id with the echoed fields
pub async fn create_proyecto(
    db: web::Data<dyn Database>,
    request: web::Json<Proyecto>,
) -> impl Responder {
    let proyecto = request.into_inner();
    info!("Received request to create proyecto: {:?}", proyecto.nombre_proyecto);

    match db.execute(INSERT_PROYECTO, proyecto.bind_values()).await {
        Ok(outcome) => {
            info!("Proyecto {} created", outcome.last_insert_id);
            HttpResponse::Ok().json(CreateProyectoResponse {
                id: outcome.last_insert_id,
                proyecto,
            })
        }
        Err(e) => {
            error!("Failed to create proyecto: {}", e);
            e.error_response()
        }
    }
}

pub async fn update_proyecto(
    db: web::Data<dyn Database>,
    path: web::Path<String>,
    request: web::Json<Proyecto>,
) -> impl Responder {
    let id = path.into_inner();
    let proyecto = request.into_inner();
    info!("Received request to update proyecto {}", id);

    let mut params = proyecto.bind_values();
    params.push(id.as_str().into());

    match db.execute(UPDATE_PROYECTO, params).await {
        Ok(outcome) => {
            info!("Proyecto {} updated ({} rows affected)", id, outcome.affected_rows);
            HttpResponse::Ok().json(UpdateProyectoResponse {
                message: "Proyecto actualizado".into(),
                id,
                proyecto,
            })
        }
        Err(e) => {
            error!("Failed to update proyecto {}: {}", id, e);
            e.error_response()
        }
    }
}

pub async fn delete_proyecto(db: web::Data<dyn Database>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    info!("Received request to delete proyecto {}", id);

    match db.execute(DELETE_PROYECTO, vec![id.as_str().into()]).await {
        Ok(outcome) => {
            info!("Proyecto {} deleted ({} rows affected)", id, outcome.affected_rows);
            HttpResponse::Ok().json(DeleteProyectoResponse {
                message: "Proyecto eliminado".into(),
                id,
            })
        }
        Err(e) => {
            error!("Failed to delete proyecto {}: {}", id, e);
            e.error_response()
        }
    }
}
