use listentothisbro::config::get_configuration;
use listentothisbro::startup::AppServer;
use listentothisbro::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_subscriber(get_subscriber(
        "listentothisbro".into(),
        "info".into(),
        std::io::stdout,
    ));

    let configuration = get_configuration()?;
    let server = AppServer::build(configuration).await?;

    server.run_until_stopped().await?;

    Ok(())
}
