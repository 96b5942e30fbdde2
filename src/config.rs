// src/config.rs
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Listener configs
    pub bind_address: String,
    pub port: u16,
    pub workers: usize,

    // Optional on-disk web root, overrides the bundled assets
    pub web_root: Option<PathBuf>,

    // Optional world fixture the standalone binary seeds the registry from
    pub world_fixture: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8080,
            workers: 10,
            web_root: None,
            world_fixture: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            bind_address: env::var("WEB_BIND_ADDRESS")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),

            port: env::var("WEB_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),

            workers: env::var("WEB_WORKERS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),

            web_root: env::var("WEB_ROOT")
                .ok()
                .map(PathBuf::from),

            world_fixture: env::var("WORLD_FIXTURE")
                .ok()
                .map(PathBuf::from),
        }
    }

    /// URL reported to operators by `status`, `url` and `open`.
    pub fn url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }
}
