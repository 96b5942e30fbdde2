// src/handlers/players.rs
use actix_web::{web, HttpResponse};
use log::debug;
use std::collections::HashSet;
use uuid::Uuid;

use crate::models::response::PlayerSummary;
use crate::source::PlayerSource;

/// GET /api/players
///
/// Connected players first, then every known player who has actually played
/// and is not connected right now. Placeholder records never show up. The
/// order within each group is whatever the registry yields.
pub async fn list(source: web::Data<dyn PlayerSource>) -> HttpResponse {
    let online = source.online_players();
    let online_ids: HashSet<Uuid> = online.iter().map(|p| p.uuid).collect();

    let mut summaries: Vec<PlayerSummary> = online.iter().map(PlayerSummary::online).collect();

    for record in source.known_players() {
        if !record.has_played() || online_ids.contains(&record.uuid) {
            continue;
        }
        summaries.push(PlayerSummary::offline(&record));
    }

    debug!("Building player list response with {} entries", summaries.len());

    HttpResponse::Ok().json(summaries)
}
