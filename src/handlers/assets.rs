// src/handlers/assets.rs
use actix_web::{web, HttpRequest, HttpResponse};
use log::{debug, error};
use std::io::ErrorKind;

use crate::config::Config;
use crate::error::ApiError;

/// UI files compiled into the binary. The single-artifact deployment mirrors
/// the rest of the service; `Config::web_root` overrides for UI development.
static ASSETS: &[(&str, &[u8])] = &[
    ("/index.html", include_bytes!("../../web/index.html")),
    ("/style.css", include_bytes!("../../web/style.css")),
    ("/script.js", include_bytes!("../../web/script.js")),
];

fn content_type(path: &str) -> &'static str {
    if path.ends_with(".html") {
        "text/html"
    } else if path.ends_with(".css") {
        "text/css"
    } else if path.ends_with(".js") {
        "application/javascript"
    } else if path.ends_with(".json") {
        "application/json"
    } else if path.ends_with(".png") {
        "image/png"
    } else {
        "text/plain"
    }
}

/// Fallback handler for every non-API path.
pub async fn serve(req: HttpRequest, config: web::Data<Config>) -> Result<HttpResponse, ApiError> {
    // req.path() carries no query string.
    let path = match req.path() {
        "/" => "/index.html",
        other => other,
    };

    debug!("Serving asset {}", path);

    if let Some(root) = &config.web_root {
        let file = root.join(path.trim_start_matches('/'));
        return match tokio::fs::read(&file).await {
            Ok(bytes) => Ok(HttpResponse::Ok().content_type(content_type(path)).body(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(ApiError::AssetNotFound(path.to_string()))
            }
            Err(e) => {
                error!("Failed to read {}: {}", file.display(), e);
                Err(ApiError::AssetRead(path.to_string()))
            }
        };
    }

    match ASSETS.iter().find(|(name, _)| *name == path) {
        Some((_, bytes)) => Ok(HttpResponse::Ok().content_type(content_type(path)).body(*bytes)),
        None => Err(ApiError::AssetNotFound(path.to_string())),
    }
}
