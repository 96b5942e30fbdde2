// src/main.rs
use env_logger::Env;
use log::{error, info};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

use pivweb::command;
use pivweb::config::Config;
use pivweb::server::WebServer;
use pivweb::source::PlayerSource;
use pivweb::storage::memory::PlayerRegistry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger only once at the start
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    dotenv::dotenv().ok();

    let config = Config::from_env();

    let registry = match &config.world_fixture {
        Some(path) => match PlayerRegistry::from_fixture_file(path) {
            Ok(registry) => {
                info!(
                    "Seeded registry from {} ({} players online)",
                    path.display(),
                    registry.online_count()
                );
                registry
            }
            Err(e) => {
                error!("{}", e);
                return Err(std::io::Error::new(std::io::ErrorKind::InvalidData, e));
            }
        },
        None => PlayerRegistry::new(),
    };
    let registry = Arc::new(registry);

    let source: Arc<dyn PlayerSource> = registry.clone();
    let server = WebServer::new(config, source);

    // A failed bind leaves the console alive; the operator can adjust the
    // environment and issue `reload` + `start`.
    match server.start().await {
        Ok(()) => info!("Player inventory viewer available at {}", server.url()),
        Err(e) => error!("Failed to start web server: {}", e),
    }

    // Operator console, one command per line until EOF.
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let args: Vec<&str> = line.split_whitespace().collect();
        let reply = command::dispatch(&server, registry.as_ref(), &args).await;
        println!("{}", reply);
    }

    server.stop().await;
    Ok(())
}
