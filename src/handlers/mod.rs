// src/handlers/mod.rs
pub mod assets;
pub mod inventory;
pub mod players;

use actix_web::{web, HttpResponse};

use crate::error::ApiError;

/// Route table shared by the live server and the tests.
///
/// The API resources are GET-only; anything else lands on their default
/// service and becomes a 405. Every remaining path is a static asset.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/players")
            .route(web::get().to(players::list))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/api/inventory")
            .route(web::get().to(inventory::show))
            .default_service(web::to(method_not_allowed)),
    )
    .default_service(web::to(assets::serve));
}

async fn method_not_allowed() -> Result<HttpResponse, ApiError> {
    Err(ApiError::MethodNotAllowed)
}
