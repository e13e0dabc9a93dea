use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::PredictRequest;
use crate::routes::AppState;

/// Configure the HTML page routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/predict", web::get().to(predict_form))
        .route("/predict", web::post().to(predict_submit));
}

/// Landing page
async fn index(state: web::Data<AppState>) -> impl Responder {
    render(&state, "index.html", minijinja::context! {})
}

/// Prediction form
async fn predict_form(state: web::Data<AppState>) -> impl Responder {
    render(&state, "home.html", minijinja::context! {})
}

/// Handle a submitted prediction form
///
/// POST /predict
///
/// Re-renders the form page with either the predicted score or a field
/// error. Validation failures and unknown category labels are 400s.
async fn predict_submit(
    state: web::Data<AppState>,
    form: web::Form<PredictRequest>,
) -> impl Responder {
    let request = form.into_inner();

    if let Err(errors) = request.validate() {
        tracing::info!("Validation failed for predict form: {}", errors);
        return render_with_status(
            &state,
            "home.html",
            minijinja::context! { error => errors.to_string() },
            actix_web::http::StatusCode::BAD_REQUEST,
        );
    }

    let record = match request.into_record() {
        Ok(record) => record,
        Err(field) => {
            tracing::info!("Unknown category value in predict form field '{}'", field);
            return render_with_status(
                &state,
                "home.html",
                minijinja::context! { error => format!("Unrecognized value for {}", field) },
                actix_web::http::StatusCode::BAD_REQUEST,
            );
        }
    };

    let prediction = state.predictor.predict(&record);

    tracing::info!(
        "Predicted score {:.2} (raw {:.2}) for form submission",
        prediction.score,
        prediction.raw_score
    );

    render(
        &state,
        "home.html",
        minijinja::context! { result => format!("{:.2}", prediction.score) },
    )
}

fn render(state: &AppState, name: &str, ctx: minijinja::Value) -> HttpResponse {
    render_with_status(state, name, ctx, actix_web::http::StatusCode::OK)
}

fn render_with_status(
    state: &AppState,
    name: &str,
    ctx: minijinja::Value,
    status: actix_web::http::StatusCode,
) -> HttpResponse {
    match state.templates.render(name, ctx) {
        Ok(html) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(html),
        Err(e) => {
            tracing::error!("Failed to render template {}: {}", name, e);
            HttpResponse::InternalServerError()
                .content_type("text/html; charset=utf-8")
                .body("<h1>Internal server error</h1>")
        }
    }
}
