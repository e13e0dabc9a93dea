// Route exports
pub mod api;
pub mod pages;
pub mod payload;

pub use payload::{handle_form_payload_error, handle_json_payload_error, JsonError};

use crate::core::Predictor;
use crate::services::{ArtifactStore, TemplateEngine};
use actix_web::web;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub templates: Arc<TemplateEngine>,
    pub artifact: Arc<ArtifactStore>,
    pub predictor: Predictor,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(pages::configure)
        .service(web::scope("/api/v1").configure(api::configure));
}
