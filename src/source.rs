// src/source.rs
use crate::models::player::{ConnectedPlayer, PlayerRecord};

/// Outcome of resolving a player name against the host.
#[derive(Debug, Clone)]
pub enum PlayerLookup {
    /// Currently connected, full live state available.
    Online(ConnectedPlayer),
    /// Has played before but is not connected right now.
    Offline(PlayerRecord),
    /// No usable record under that name.
    Unknown,
}

/// Read-only view of the host engine's player state.
///
/// This is the only surface the HTTP layer touches; the concrete host (or a
/// fake in tests) sits behind it. Every call is an independent point-in-time
/// read — there is no snapshot isolation across calls.
pub trait PlayerSource: Send + Sync {
    /// All currently connected players.
    fn online_players(&self) -> Vec<ConnectedPlayer>;

    /// Every historical record the host keeps, including records for
    /// players that are currently connected or never actually played.
    /// Callers apply their own filtering.
    fn known_players(&self) -> Vec<PlayerRecord>;

    /// Resolve one name, exact match.
    fn lookup(&self, name: &str) -> PlayerLookup;
}
