use actix_web::web;

use super::proyecto::proyecto_handlers;
use super::tarea::tarea_handlers;
use super::usuario::usuario_handlers;

/// Mounts the whole API: the status endpoint plus the three resources.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(super::index)
        .configure(usuario_configure)
        .configure(proyecto_configure)
        .configure(tarea_configure);
}

pub fn usuario_configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/usuario")
            .route(web::get().to(usuario_handlers::get_usuarios))
            .route(web::post().to(usuario_handlers::create_usuario))
            .default_service(web::to(super::not_found)),
    )
    .service(
        web::resource("/usuario/{id}")
            .route(web::put().to(usuario_handlers::update_usuario))
            .route(web::delete().to(usuario_handlers::delete_usuario))
            .default_service(web::to(super::not_found)),
    );
}

pub fn proyecto_configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/proyecto")
            .route(web::get().to(proyecto_handlers::get_proyectos))
            .route(web::post().to(proyecto_handlers::create_proyecto))
            .default_service(web::to(super::not_found)),
    )
    .service(
        web::resource("/proyecto/{id}")
            .route(web::put().to(proyecto_handlers::update_proyecto))
            .route(web::delete().to(proyecto_handlers::delete_proyecto))
            .default_service(web::to(super::not_found)),
    );
}

pub fn tarea_configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/tarea")
            .route(web::get().to(tarea_handlers::get_tareas))
            .route(web::post().to(tarea_handlers::create_tarea))
            .default_service(web::to(super::not_found)),
    )
    .service(
        web::resource("/tarea/{id}")
            .route(web::put().to(tarea_handlers::update_tarea))
            .route(web::delete().to(tarea_handlers::delete_tarea))
            .default_service(web::to(super::not_found)),
    );
}
