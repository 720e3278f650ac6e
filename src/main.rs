use std::io;
use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use log::{error, info};

use gestion_backend::config::Config;
use gestion_backend::db::{Database, MySqlDatabase};
use gestion_backend::routes;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    // A failed first connection is logged inside `connect`; only an unusable
    // DATABASE_URL stops startup.
    let database = MySqlDatabase::connect(&config.database_url, config.max_connections)
        .await
        .map_err(|e| {
            error!("Cannot build database pool: {}", e);
            io::Error::new(io::ErrorKind::InvalidInput, e)
        })?;
    let database: Arc<dyn Database> = Arc::new(database);

    let server_address = config.server_address();
    info!("Server running at http://{}", server_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::from(database.clone()))
            .configure(routes::routes::configure)
    })
    .bind(server_address)?
    .run()
    .await
}
