use actix_web::{get, HttpRequest, HttpResponse, Responder};

pub mod routes;

pub mod usuario {
    pub mod usuario_handlers;
    pub mod usuario_models;
}

pub mod proyecto {
    pub mod proyecto_handlers;
    pub mod proyecto_models;
}

pub mod tarea {
    pub mod tarea_handlers;
    pub mod tarea_models;
}

pub const STATUS_MESSAGE: &str = "API de Gestión de Proyectos funcionando correctamente";

// Liveness check
#[get("/")]
async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(STATUS_MESSAGE)
}

// A known path hit with a method it does not serve gets the same 404 as an
// unknown path, not a 405.
async fn not_found(req: HttpRequest) -> HttpResponse {
    HttpResponse::NotFound()
        .content_type("text/plain; charset=utf-8")
        .body(format!("Cannot {} {}", req.method(), req.path()))
}
