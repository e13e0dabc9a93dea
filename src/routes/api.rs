use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{ErrorResponse, HealthResponse, PredictRequest, PredictResponse};
use crate::routes::AppState;

/// Configure the JSON API routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/predict", web::post().to(predict));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model_version: state.artifact.version().to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Predict endpoint
///
/// POST /api/v1/predict
///
/// Request body:
/// ```json
/// {
///   "gender": "female",
///   "raceEthnicity": "group B",
///   "parentalLevelOfEducation": "bachelor's degree",
///   "lunch": "standard",
///   "testPreparationCourse": "none",
///   "readingScore": 72,
///   "writingScore": 74
/// }
/// ```
async fn predict(
    state: web::Data<AppState>,
    req: web::Json<PredictRequest>,
) -> impl Responder {
    let request = req.into_inner();

    if let Err(errors) = request.validate() {
        tracing::info!("Validation failed for predict request: {}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let record = match request.into_record() {
        Ok(record) => record,
        Err(field) => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid category value".to_string(),
                message: format!("Unrecognized value for field '{}'", field),
                status_code: 400,
            });
        }
    };

    let prediction = state.predictor.predict(&record);

    tracing::info!(
        "Predicted score {:.2} (raw {:.2}, model {})",
        prediction.score,
        prediction.raw_score,
        state.artifact.version()
    );

    HttpResponse::Ok().json(PredictResponse {
        prediction_id: uuid::Uuid::new_v4().to_string(),
        predicted_score: prediction.score,
        model_version: state.artifact.version().to_string(),
        timestamp: chrono::Utc::now(),
    })
}
