use std::path::PathBuf;

use once_cell::sync::Lazy;
use secrecy::Secret;
use tempfile::TempDir;
use uuid::Uuid;
use wiremock::MockServer;

use listentothisbro::config::{get_configuration, Configuration};
use listentothisbro::startup::AppServer;
use listentothisbro::telemetry::{get_subscriber, init_subscriber};

static TRACING: Lazy<()> = Lazy::new(|| {
    if std::env::var("TEST_LOG").is_ok() {
        init_subscriber(get_subscriber(
            "test".into(),
            "debug".into(),
            std::io::stdout,
        ));
    } else {
        init_subscriber(get_subscriber("test".into(), "debug".into(), std::io::sink));
    }
});

pub struct TestApp {
    pub addr: String,
    pub email_server: MockServer,
    // Removed from disk when the test app is dropped.
    pub assets_dir: TempDir,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn get_landing_page(&self) -> reqwest::Response {
        self.api_client
            .get(&format!("{}/", &self.addr))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_signup(&self, body: String) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/signup", &self.addr))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_asset(&self, name: &str) -> reqwest::Response {
        self.api_client
            .get(&format!("{}/static/{}", &self.addr, name))
            .send()
            .await
            .expect("Failed to execute request")
    }
}

/// Configuration pointing EmailJS at `email_server_url` with throwaway credentials.
pub fn test_configuration(email_server_url: String, assets_dir: PathBuf) -> Configuration {
    let mut c = get_configuration().expect("should load configuration");
    c.emailjs.base_url = email_server_url;
    c.emailjs.service_id = "service_test".into();
    c.emailjs.template_id = "template_test".into();
    c.emailjs.public_key = Secret::new(Uuid::new_v4().to_string());
    c.app.assets_dir = assets_dir;
    c.app.port = 0;
    c
}

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let email_server = MockServer::start().await;
    let assets_dir = TempDir::new().expect("Failed to create assets directory");

    let configuration = test_configuration(email_server.uri(), assets_dir.path().to_path_buf());

    let server = AppServer::build(configuration)
        .await
        .expect("should have created server");

    let addr = format!("http://{}", server.to_server_address());
    let _ = tokio::spawn(server.run_until_stopped());

    TestApp {
        addr,
        email_server,
        assets_dir,
        api_client: reqwest::Client::new(),
    }
}
