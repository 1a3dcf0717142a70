use listentothisbro::startup::AppServer;

use crate::helpers::{spawn_app, test_configuration};

mod helpers;

#[tokio::test]
async fn health_check_endpoint_returns_200() {
    let app = spawn_app().await;

    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/health", app.addr))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    assert_eq!(Some(0), response.content_length());
}

#[tokio::test]
async fn the_server_refuses_to_start_without_emailjs_credentials() {
    let test_cases = vec!["service_id", "template_id", "public_key"];

    for blank in test_cases {
        let mut configuration =
            test_configuration("http://127.0.0.1:9".into(), std::env::temp_dir());
        match blank {
            "service_id" => configuration.emailjs.service_id = String::new(),
            "template_id" => configuration.emailjs.template_id = String::new(),
            _ => configuration.emailjs.public_key = secrecy::Secret::new(String::new()),
        }

        let outcome = AppServer::build(configuration).await;

        assert!(
            outcome.is_err(),
            "The server started with a blank `{}`.",
            blank,
        );
    }
}
