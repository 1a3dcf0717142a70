use actix_web::HttpResponse;
use uuid::Uuid;

/// Liveness probe; answers `200` with an empty body as long as the server runs.
#[tracing::instrument(name = "Checking landing page health", fields(request_id = %Uuid::new_v4()))]
pub async fn health_check() -> HttpResponse {
    tracing::debug!("Landing page is up");
    HttpResponse::Ok().finish()
}
