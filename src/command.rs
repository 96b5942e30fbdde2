// src/command.rs
use log::error;

use crate::config::Config;
use crate::server::WebServer;
use crate::models::response::InventorySnapshot;
use crate::source::{PlayerLookup, PlayerSource};

const USAGE: &str = "\
---- player inventory viewer ----
  reload            - reload configuration
  start             - start the web server
  stop              - stop the web server
  restart           - restart the web server
  status            - show whether the server is running
  url               - print the configured URL
  inventory <player> - print a connected player's inventory as JSON
  open <player>     - open the player view in a browser";

/// Dispatch one operator command and return the acknowledgement text.
///
/// This is the single control path for server lifecycle operations.
pub async fn dispatch(server: &WebServer, source: &dyn PlayerSource, args: &[&str]) -> String {
    let Some(sub) = args.first() else {
        return USAGE.to_string();
    };

    match sub.to_lowercase().as_str() {
        "reload" => {
            server.set_config(Config::from_env());
            format!("Configuration reloaded, web port is now {}", server.port())
        }

        "start" => match server.start().await {
            Ok(()) => format!("Web server started: {}", server.url()),
            Err(e) => {
                error!("Failed to start web server: {}", e);
                format!("Failed to start web server: {}", e)
            }
        },

        "stop" => {
            server.stop().await;
            "Web server stopped".to_string()
        }

        "restart" => match server.restart().await {
            Ok(()) => format!("Web server restarted: {}", server.url()),
            Err(e) => {
                error!("Failed to restart web server: {}", e);
                format!("Failed to restart web server: {}", e)
            }
        },

        "status" => {
            if server.is_running() {
                format!("Web server running: {}", server.url())
            } else {
                "Web server is stopped".to_string()
            }
        }

        "url" => format!("URL: {}", server.url()),

        "inventory" => {
            let Some(name) = args.get(1) else {
                return "usage: inventory <player>".to_string();
            };
            match source.lookup(name) {
                PlayerLookup::Online(player) => {
                    let snapshot = InventorySnapshot::from(&player);
                    serde_json::to_string_pretty(&snapshot)
                        .unwrap_or_else(|e| format!("Failed to encode inventory: {}", e))
                }
                _ => "Player not found or not connected".to_string(),
            }
        }

        "open" => {
            let Some(name) = args.get(1) else {
                return "usage: open <player>".to_string();
            };
            let url = format!("{}/?player={}", server.url(), name);
            match open::that(&url) {
                Ok(()) => format!("Opened browser at {}", url),
                Err(e) => format!("Cannot open a browser here: {}", e),
            }
        }

        other => format!("Unknown command: {}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::storage::memory::{test_player, PlayerRegistry};

    fn setup() -> (WebServer, Arc<PlayerRegistry>) {
        let registry = Arc::new(PlayerRegistry::new());
        registry.connect(test_player("Steve"));

        let config = Config {
            bind_address: "127.0.0.1".to_string(),
            port: 0,
            workers: 1,
            ..Config::default()
        };
        let source: Arc<dyn PlayerSource> = registry.clone();
        (WebServer::new(config, source), registry)
    }

    #[actix_web::test]
    async fn no_args_prints_usage() {
        let (server, registry) = setup();
        let out = dispatch(&server, registry.as_ref(), &[]).await;
        for sub in ["start", "stop", "restart", "status", "url", "inventory", "open"] {
            assert!(out.contains(sub), "usage should mention {}", sub);
        }
    }

    #[actix_web::test]
    async fn unknown_command_is_reported() {
        let (server, registry) = setup();
        let out = dispatch(&server, registry.as_ref(), &["frobnicate"]).await;
        assert!(out.contains("Unknown command"));
    }

    #[actix_web::test]
    async fn status_and_lifecycle_round_trip() {
        let (server, registry) = setup();

        let out = dispatch(&server, registry.as_ref(), &["status"]).await;
        assert!(out.contains("stopped"));

        let out = dispatch(&server, registry.as_ref(), &["start"]).await;
        assert!(out.contains("started"));
        assert!(server.is_running());

        let out = dispatch(&server, registry.as_ref(), &["status"]).await;
        assert!(out.contains("running"));

        let out = dispatch(&server, registry.as_ref(), &["stop"]).await;
        assert!(out.contains("stopped"));
        assert!(!server.is_running());
    }

    #[actix_web::test]
    async fn restart_reports_url() {
        let (server, registry) = setup();
        let out = dispatch(&server, registry.as_ref(), &["restart"]).await;
        assert!(out.contains("restarted"));
        assert!(server.is_running());
        server.stop().await;
    }

    #[actix_web::test]
    async fn subcommands_are_case_insensitive() {
        let (server, registry) = setup();
        let out = dispatch(&server, registry.as_ref(), &["URL"]).await;
        assert!(out.starts_with("URL: http://localhost:"));
    }

    #[actix_web::test]
    async fn inventory_requires_a_name() {
        let (server, registry) = setup();
        let out = dispatch(&server, registry.as_ref(), &["inventory"]).await;
        assert!(out.contains("usage"));
    }

    #[actix_web::test]
    async fn inventory_prints_pretty_json_for_connected_player() {
        let (server, registry) = setup();
        let out = dispatch(&server, registry.as_ref(), &["inventory", "Steve"]).await;
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["playerName"], "Steve");
        assert_eq!(parsed["online"], true);
    }

    #[actix_web::test]
    async fn inventory_rejects_offline_player() {
        let (server, registry) = setup();
        registry.disconnect("Steve");
        let out = dispatch(&server, registry.as_ref(), &["inventory", "Steve"]).await;
        assert!(out.contains("not found or not connected"));
    }

    #[actix_web::test]
    async fn open_requires_a_name() {
        let (server, registry) = setup();
        let out = dispatch(&server, registry.as_ref(), &["open"]).await;
        assert!(out.contains("usage"));
    }

    #[actix_web::test]
    async fn reload_recomputes_port_from_environment() {
        let (server, registry) = setup();
        std::env::set_var("WEB_PORT", "9876");
        let out = dispatch(&server, registry.as_ref(), &["reload"]).await;
        std::env::remove_var("WEB_PORT");

        assert!(out.contains("9876"));
        assert_eq!(server.port(), 9876);
    }
}
