use std::io;

use mergington::configuration::Settings;
use mergington::startup::Application;
use mergington::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = get_subscriber("mergington".into(), "info".into(), io::stdout);
    init_subscriber(subscriber);

    // Retrieve settings
    let config = Settings::get_config().expect("Failed to load configuration");

    // Run the application until it is stopped
    let application = Application::build(&config)?;
    application.run_until_stopped().await?;

    Ok(())
}
