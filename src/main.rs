use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;

mod config;
mod controllers;
mod notes;

use config::Config;
use notes::NoteStore;

pub struct AppState {
    pub config: Config,
    pub store: Arc<NoteStore>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    log::info!("Notecache v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env();

    // The root directory must exist before the store handles its first
    // request; created recursively here, assumed stable afterwards.
    let store = Arc::new(NoteStore::new(PathBuf::from(&config.notes_dir))?);
    log::info!("[NOTES] Serving notes from {}", config.notes_dir);

    let host = config.host.clone();
    let port = config.port;

    let state = web::Data::new(AppState { config, store });

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();

        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .wrap(cors)
            .configure(controllers::health::config_routes)
            .configure(controllers::notes::config)
    })
    .bind((host.as_str(), port))?
    .run();

    log::info!("Server running at http://{}:{}", host, port);

    let server_handle = server.handle();
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
        log::info!("Received Ctrl+C, shutting down...");
        server_handle.stop(true).await;
        log::info!("Shutdown complete");
    });

    server.await
}
