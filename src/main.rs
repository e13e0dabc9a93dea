mod config;
mod core;
mod models;
mod routes;
mod services;

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use config::Settings;
use routes::{handle_form_payload_error, handle_json_payload_error, AppState};
use services::{ArtifactStore, TemplateEngine};
use std::sync::Arc;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration before logging so [logging] settings can apply;
    // a load failure is reported once the subscriber is installed
    let settings = Settings::load();

    let logging = settings
        .as_ref()
        .map(|s| s.logging.clone())
        .unwrap_or_default();
    let (log_level, log_format) = logging.resolve(
        std::env::var("LOG_LEVEL").ok(),
        std::env::var("LOG_FORMAT").ok(),
    );

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Scorecast prediction service...");

    let settings = settings.unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Initialize template engine
    let templates = match TemplateEngine::new(&settings.templates.dir) {
        Ok(engine) => {
            info!("Template engine initialized (dir: {})", settings.templates.dir);
            Arc::new(engine)
        }
        Err(e) => {
            error!("Failed to initialize templates: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::NotFound, e.to_string()));
        }
    };

    // Load the model artifact
    let artifact = match ArtifactStore::load(&settings.model.artifact_path) {
        Ok(store) => {
            info!(
                "Model artifact loaded (version: {}, target: {})",
                store.version(),
                store.target()
            );
            Arc::new(store)
        }
        Err(e) => {
            error!("Failed to load model artifact from {}: {}", settings.model.artifact_path, e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()));
        }
    };

    let predictor = artifact.predictor().clone();

    // Build application state
    let app_state = AppState {
        templates,
        artifact,
        predictor,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::FormConfig::default().error_handler(handle_form_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
