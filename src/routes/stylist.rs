use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse, Responder, ResponseError};
use crate::core::{Stylist, StylistError};
use crate::models::{ErrorResponse, HealthResponse};
use std::sync::Arc;
use tracing::Instrument;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub stylist: Arc<Stylist>,
}

/// Configure stylist routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .service(web::resource("/ai-stylist").to(ai_stylist));
}

impl ResponseError for StylistError {
    fn status_code(&self) -> StatusCode {
        match self {
            StylistError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            StylistError::MissingFields(_) => StatusCode::BAD_REQUEST,
            StylistError::WeatherLookup(_) | StylistError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorResponse {
            error: self.to_string(),
            status_code: status.as_u16(),
        })
    }
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Outfit recommendation endpoint
///
/// POST /api/v1/ai-stylist
///
/// Request body:
/// ```json
/// {
///   "lat": 37.56,
///   "lon": 126.97,
///   "profile": { "gender": "female", "height": 165, "weight": 52, "style_preferences": ["minimal"] }
/// }
/// ```
///
/// Any other method is answered with 405. The pipeline runs on its own task
/// so that a panic inside a stage still produces a JSON 500.
async fn ai_stylist(
    state: web::Data<AppState>,
    http_req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse, StylistError> {
    let request_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("ai_stylist", %request_id);

    let stylist = Arc::clone(&state.stylist);
    let method = http_req.method().clone();

    let task = actix_web::rt::spawn(
        async move { stylist.handle(&method, &body).await }.instrument(span),
    );

    let response = task.await.map_err(|e| {
        tracing::error!(%request_id, "Stylist task aborted: {}", e);
        StylistError::Internal(e.to_string())
    })??;

    Ok(HttpResponse::Ok().json(response))
}
