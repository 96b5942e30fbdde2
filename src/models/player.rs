// src/models/player.rs
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One stack of items occupying an inventory or equipment slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemStack {
    pub material: String,
    pub amount: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl ItemStack {
    pub fn new(material: impl Into<String>, amount: i32) -> Self {
        Self {
            material: material.into(),
            amount,
            display_name: None,
        }
    }

    pub fn named(material: impl Into<String>, amount: i32, display_name: impl Into<String>) -> Self {
        Self {
            material: material.into(),
            amount,
            display_name: Some(display_name.into()),
        }
    }
}

/// The four fixed armor positions. `None` means nothing is equipped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Equipment {
    #[serde(default)]
    pub boots: Option<ItemStack>,
    #[serde(default)]
    pub leggings: Option<ItemStack>,
    #[serde(default)]
    pub chestplate: Option<ItemStack>,
    #[serde(default)]
    pub helmet: Option<ItemStack>,
}

/// Live state of a currently connected player as the host engine reports it.
///
/// `inventory` is the host's fixed-size slot container; `None` entries are
/// empty slots. The length is whatever capacity the host defines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectedPlayer {
    pub name: String,
    pub uuid: Uuid,
    pub world: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub health: f64,
    pub max_health: f64,
    pub food_level: i32,
    pub level: i32,
    pub exp: f32,
    pub inventory: Vec<Option<ItemStack>>,
    #[serde(default)]
    pub armor: Equipment,
}

/// Historical record of a player the host has seen.
///
/// `last_played` is epoch milliseconds of the most recent session, or `None`
/// for placeholder records (whitelisted names etc.) that never actually
/// connected. Records without it are invisible to the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    pub uuid: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_played: Option<u64>,
}

impl PlayerRecord {
    pub fn has_played(&self) -> bool {
        self.last_played.is_some()
    }
}
