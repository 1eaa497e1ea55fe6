use rift_relay::{config::Config, logging, server};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    logging::init();

    let config = Config::from_env();
    info!("🗼 Starting rift-relay on port {}", config.port);

    if let Err(err) = server::run(config).await {
        error!("fatal: {err}");
        std::process::exit(1);
    }
}
