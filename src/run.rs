use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::mail::EmailJsClient;
use crate::routes::assets::{static_asset, AssetsDirectory};
use crate::routes::health::health_check;
use crate::routes::landing::landing_page;
use crate::routes::signup::signup;

pub fn run(
    listener: TcpListener,
    email_client: EmailJsClient,
    assets: AssetsDirectory,
) -> Result<Server, std::io::Error> {
    let email_client = web::Data::new(email_client);
    let assets = web::Data::new(assets);
    Ok(HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/", web::get().to(landing_page))
            .route("/signup", web::post().to(signup))
            .route("/health", web::get().to(health_check))
            .route("/static/{asset}", web::get().to(static_asset))
            .app_data(email_client.clone())
            .app_data(assets.clone())
    })
    .listen(listener)?
    .run())
}
