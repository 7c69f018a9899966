mod config;
mod db;
mod services;

use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::info;

use crate::config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = ServerConfig::from_env();
    db::init(&config.db_path).map_err(|e| std::io::Error::other(e.to_string()))?;
    info!("Database ready at {}", config.db_path.display());

    let url = format!("http://{}:{}", config.host, config.port);
    info!("Server running at {}", url);

    let state = web::Data::new(config.clone());
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(services::simulations::configure_routes())
            .service(services::machines::configure_routes())
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
