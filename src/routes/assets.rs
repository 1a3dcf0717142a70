//! src/routes/assets.rs

use std::path::PathBuf;

use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};

/// The images referenced by the landing page; nothing else is served.
const ASSETS: [&str; 3] = ["logo.png", "screenshot-1.png", "screenshot-2.png"];

pub struct AssetsDirectory(pub PathBuf);

#[tracing::instrument(name = "Serving static asset", skip(assets))]
pub async fn static_asset(
    asset: web::Path<String>,
    assets: web::Data<AssetsDirectory>,
) -> HttpResponse {
    let asset = asset.into_inner();
    if !ASSETS.contains(&asset.as_str()) {
        return HttpResponse::NotFound().finish();
    }

    match tokio::fs::read(assets.0.join(&asset)).await {
        Ok(bytes) => HttpResponse::Ok()
            .content_type(ContentType::png())
            .body(bytes),
        Err(e) => {
            tracing::warn!(error.message = %e, "Static asset is missing from the assets directory");
            HttpResponse::NotFound().finish()
        }
    }
}
