// src/server.rs
use actix_web::dev::ServerHandle;
use actix_web::{middleware, web, App, HttpServer};
use log::info;
use parking_lot::Mutex;
use std::sync::Arc;

use crate::config::Config;
use crate::handlers;
use crate::source::PlayerSource;

pub const CORS_HEADER: (&str, &str) = ("Access-Control-Allow-Origin", "*");

/// Owns the embedded HTTP listener.
///
/// Lifecycle calls are expected to come from a single control path (the
/// command dispatcher or the host's enable/disable hooks); the mutex keeps
/// misuse from racing the handle, nothing more.
pub struct WebServer {
    config: Mutex<Config>,
    source: Arc<dyn PlayerSource>,
    handle: Mutex<Option<ServerHandle>>,
}

impl WebServer {
    pub fn new(config: Config, source: Arc<dyn PlayerSource>) -> Self {
        Self {
            config: Mutex::new(config),
            source,
            handle: Mutex::new(None),
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.lock().is_some()
    }

    pub fn url(&self) -> String {
        self.config.lock().url()
    }

    /// Swap in a freshly loaded configuration. Takes effect on the next
    /// start.
    pub fn set_config(&self, config: Config) {
        *self.config.lock() = config;
    }

    pub fn port(&self) -> u16 {
        self.config.lock().port
    }

    /// Bind and start serving. A no-op when already running; a bind failure
    /// is returned to the caller and leaves the service stopped.
    pub async fn start(&self) -> std::io::Result<()> {
        if self.is_running() {
            info!("Web server already running");
            return Ok(());
        }

        let config = self.config.lock().clone();
        let source = web::Data::from(self.source.clone());
        let app_config = web::Data::new(config.clone());

        let server = HttpServer::new(move || {
            App::new()
                .app_data(source.clone())
                .app_data(app_config.clone())
                .wrap(middleware::DefaultHeaders::new().add(CORS_HEADER))
                .configure(handlers::routes)
        })
        .workers(config.workers)
        .disable_signals()
        .bind((config.bind_address.as_str(), config.port))?
        .run();

        let handle = server.handle();
        actix_web::rt::spawn(server);
        *self.handle.lock() = Some(handle);

        info!(
            "Web server listening on {}:{}",
            config.bind_address, config.port
        );
        Ok(())
    }

    /// Stop the listener. Idempotent; in-flight requests are abandoned.
    pub async fn stop(&self) {
        let handle = self.handle.lock().take();
        if let Some(handle) = handle {
            handle.stop(false).await;
            info!("Web server stopped");
        }
    }

    pub async fn restart(&self) -> std::io::Result<()> {
        self.stop().await;
        self.start().await
    }
}
