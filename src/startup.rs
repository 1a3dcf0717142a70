use std::net::TcpListener;

use actix_web::dev::Server;
use anyhow::Context;

use crate::config::Configuration;
use crate::mail::EmailJsClient;
use crate::routes::assets::AssetsDirectory;
use crate::run::run;

pub struct AppServer {
    port: u16,
    address: String,
    server: Server,
}

impl AppServer {
    /// Refuses to start unless all three EmailJS identifiers are configured.
    pub async fn build(configuration: Configuration) -> Result<Self, anyhow::Error> {
        let credentials = configuration
            .emailjs
            .credentials()
            .context("EmailJS is not configured")?;
        let email_client = EmailJsClient::new(configuration.emailjs.base_url.clone(), credentials);

        let listener = TcpListener::bind(format!(
            "{}:{}",
            configuration.app.host, configuration.app.port
        ))
        .context("Failed to bind the listening address")?;
        let port = listener.local_addr()?.port();

        tracing::info!(
            "Starting landing page on address: {}:{}",
            configuration.app.host,
            port
        );

        let address = configuration.app.host.clone();
        let server = run(
            listener,
            email_client,
            AssetsDirectory(configuration.app.assets_dir),
        )?;

        Ok(Self {
            port,
            address,
            server,
        })
    }

    pub fn to_server_address(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }

    pub fn address(&self) -> String {
        self.address.clone()
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}
