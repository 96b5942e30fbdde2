// src/handlers/inventory.rs
use actix_web::{web, HttpResponse};
use log::debug;
use serde::Deserialize;

use crate::error::ApiError;
use crate::models::response::{InventorySnapshot, OfflineNotice};
use crate::source::{PlayerLookup, PlayerSource};

#[derive(Deserialize)]
pub struct InventoryQuery {
    player: Option<String>,
}

/// GET /api/inventory?player=<name>
///
/// Connected players get the full snapshot, known-but-offline players a
/// reduced notice, anyone else a 404. An empty value counts as missing.
pub async fn show(
    source: web::Data<dyn PlayerSource>,
    query: web::Query<InventoryQuery>,
) -> Result<HttpResponse, ApiError> {
    let name = match query.player.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => return Err(ApiError::MissingPlayerParam),
    };

    debug!("Inventory request for {}", name);

    match source.lookup(name) {
        PlayerLookup::Online(player) => {
            Ok(HttpResponse::Ok().json(InventorySnapshot::from(&player)))
        }
        PlayerLookup::Offline(record) => {
            Ok(HttpResponse::Ok().json(OfflineNotice::new(record.name)))
        }
        PlayerLookup::Unknown => Err(ApiError::PlayerNotFound),
    }
}
