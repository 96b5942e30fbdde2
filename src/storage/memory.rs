// src/storage/memory.rs
use dashmap::DashMap;
use serde::Deserialize;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::models::player::{ConnectedPlayer, PlayerRecord};
use crate::source::{PlayerLookup, PlayerSource};

/// In-memory player registry.
///
/// The embedding host pushes state in through `connect`/`disconnect`/
/// `register_known`; the HTTP layer only ever reads it through the
/// `PlayerSource` impl. Keys are exact player names.
#[derive(Default)]
pub struct PlayerRegistry {
    online: DashMap<String, ConnectedPlayer>,
    known: DashMap<String, PlayerRecord>,
}

/// Seed data for the standalone binary: a world state snapshot in JSON.
#[derive(Deserialize)]
struct WorldFixture {
    #[serde(default)]
    online: Vec<ConnectedPlayer>,
    #[serde(default)]
    known: Vec<PlayerRecord>,
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_millis() as u64
}

impl PlayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a registry from a JSON world fixture.
    pub fn from_fixture_file(path: &Path) -> Result<Self, String> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read fixture {}: {}", path.display(), e))?;
        let fixture: WorldFixture = serde_json::from_str(&data)
            .map_err(|e| format!("invalid fixture {}: {}", path.display(), e))?;

        let registry = Self::new();
        for record in fixture.known {
            registry.register_known(record);
        }
        for player in fixture.online {
            registry.connect(player);
        }
        Ok(registry)
    }

    /// Mark a player as connected, replacing any previous live state under
    /// the same name.
    pub fn connect(&self, player: ConnectedPlayer) {
        self.known
            .entry(player.name.clone())
            .and_modify(|record| record.uuid = player.uuid)
            .or_insert_with(|| PlayerRecord {
                name: player.name.clone(),
                uuid: player.uuid,
                last_played: None,
            });
        self.online.insert(player.name.clone(), player);
    }

    /// Mark a player as disconnected, stamping the historical record with
    /// the current time.
    pub fn disconnect(&self, name: &str) {
        if let Some((_, player)) = self.online.remove(name) {
            let last_played = now_millis();
            self.known.insert(
                player.name.clone(),
                PlayerRecord {
                    name: player.name,
                    uuid: player.uuid,
                    last_played: Some(last_played),
                },
            );
        }
    }

    /// Insert a historical record directly (fixture import, host sync).
    /// Records with `last_played: None` stay invisible to the API until the
    /// player actually connects.
    pub fn register_known(&self, record: PlayerRecord) {
        self.known.insert(record.name.clone(), record);
    }

    pub fn online_count(&self) -> usize {
        self.online.len()
    }
}

impl PlayerSource for PlayerRegistry {
    fn online_players(&self) -> Vec<ConnectedPlayer> {
        self.online.iter().map(|r| r.value().clone()).collect()
    }

    fn known_players(&self) -> Vec<PlayerRecord> {
        self.known.iter().map(|r| r.value().clone()).collect()
    }

    fn lookup(&self, name: &str) -> PlayerLookup {
        if let Some(player) = self.online.get(name) {
            return PlayerLookup::Online(player.value().clone());
        }
        match self.known.get(name) {
            Some(record) if record.has_played() => PlayerLookup::Offline(record.value().clone()),
            _ => PlayerLookup::Unknown,
        }
    }
}

/// Test helper: a connected player with an empty 36-slot inventory.
#[cfg(test)]
pub fn test_player(name: &str) -> ConnectedPlayer {
    use crate::models::player::Equipment;
    use uuid::Uuid;

    ConnectedPlayer {
        name: name.to_string(),
        uuid: Uuid::new_v4(),
        world: "world".to_string(),
        x: 0.0,
        y: 64.0,
        z: 0.0,
        health: 20.0,
        max_health: 20.0,
        food_level: 20,
        level: 0,
        exp: 0.0,
        inventory: vec![None; 36],
        armor: Equipment::default(),
    }
}
