// src/models/response.rs
use serde::Serialize;

use crate::models::player::{ConnectedPlayer, Equipment, ItemStack, PlayerRecord};

/// Material identifier reported for empty slots.
pub const AIR: &str = "AIR";

/// One row of the `/api/players` listing.
///
/// Connected players carry location fields, disconnected ones carry
/// `lastSeen`; the inapplicable side is omitted rather than nulled.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSummary {
    pub name: String,
    pub uuid: String,
    pub online: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub world: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<u64>,
}

impl PlayerSummary {
    pub fn online(player: &ConnectedPlayer) -> Self {
        Self {
            name: player.name.clone(),
            uuid: player.uuid.to_string(),
            online: true,
            world: Some(player.world.clone()),
            x: Some(player.x),
            y: Some(player.y),
            z: Some(player.z),
            last_seen: None,
        }
    }

    pub fn offline(record: &PlayerRecord) -> Self {
        Self {
            name: record.name.clone(),
            uuid: record.uuid.to_string(),
            online: false,
            world: None,
            x: None,
            y: None,
            z: None,
            last_seen: record.last_played,
        }
    }
}

/// One inventory slot in an `InventorySnapshot`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotEntry {
    pub slot: usize,
    pub material: String,
    pub amount: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl SlotEntry {
    fn from_slot(slot: usize, item: Option<&ItemStack>) -> Self {
        match item {
            Some(item) => Self {
                slot,
                material: item.material.clone(),
                amount: item.amount,
                // No custom name set means the material identifier stands in.
                display_name: Some(
                    item.display_name
                        .clone()
                        .unwrap_or_else(|| item.material.clone()),
                ),
            },
            None => Self {
                slot,
                material: AIR.to_string(),
                amount: 0,
                display_name: None,
            },
        }
    }
}

/// The four fixed equipment slots, each a material identifier or `"AIR"`.
#[derive(Debug, Clone, Serialize)]
pub struct ArmorSlots {
    pub boots: String,
    pub leggings: String,
    pub chestplate: String,
    pub helmet: String,
}

impl From<&Equipment> for ArmorSlots {
    fn from(equipment: &Equipment) -> Self {
        fn material(item: &Option<ItemStack>) -> String {
            item.as_ref()
                .map(|i| i.material.clone())
                .unwrap_or_else(|| AIR.to_string())
        }

        Self {
            boots: material(&equipment.boots),
            leggings: material(&equipment.leggings),
            chestplate: material(&equipment.chestplate),
            helmet: material(&equipment.helmet),
        }
    }
}

/// Full `/api/inventory` payload for a connected player.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySnapshot {
    pub player_name: String,
    pub online: bool,
    pub health: f64,
    pub max_health: f64,
    pub food_level: i32,
    pub level: i32,
    pub exp: f32,
    pub inventory: Vec<SlotEntry>,
    pub armor: ArmorSlots,
}

impl From<&ConnectedPlayer> for InventorySnapshot {
    fn from(player: &ConnectedPlayer) -> Self {
        let inventory = player
            .inventory
            .iter()
            .enumerate()
            .map(|(slot, item)| SlotEntry::from_slot(slot, item.as_ref()))
            .collect();

        Self {
            player_name: player.name.clone(),
            online: true,
            health: player.health,
            max_health: player.max_health,
            food_level: player.food_level,
            level: player.level,
            exp: player.exp,
            inventory,
            armor: ArmorSlots::from(&player.armor),
        }
    }
}

/// Reduced `/api/inventory` payload for a known but disconnected player.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfflineNotice {
    pub player_name: String,
    pub online: bool,
    pub message: String,
}

impl OfflineNotice {
    pub fn new(player_name: impl Into<String>) -> Self {
        Self {
            player_name: player_name.into(),
            online: false,
            message: "inventory data is not available for offline players".to_string(),
        }
    }
}

/// Body of every non-2xx response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub status: u16,
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn item(material: &str, amount: i32) -> Option<ItemStack> {
        Some(ItemStack::new(material, amount))
    }

    fn sample_player() -> ConnectedPlayer {
        ConnectedPlayer {
            name: "Steve".to_string(),
            uuid: Uuid::new_v4(),
            world: "world".to_string(),
            x: 12.5,
            y: 64.0,
            z: -7.25,
            health: 18.0,
            max_health: 20.0,
            food_level: 17,
            level: 30,
            exp: 0.45,
            inventory: vec![item("DIAMOND_SWORD", 1), None, item("BREAD", 12)],
            armor: Equipment {
                helmet: item("IRON_HELMET", 1),
                ..Equipment::default()
            },
        }
    }

    #[test]
    fn online_summary_has_location_and_no_last_seen() {
        let summary = PlayerSummary::online(&sample_player());
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["online"], true);
        assert_eq!(json["world"], "world");
        assert_eq!(json["x"], 12.5);
        assert!(json.get("lastSeen").is_none());
    }

    #[test]
    fn offline_summary_has_last_seen_and_no_location() {
        let record = PlayerRecord {
            name: "Alex".to_string(),
            uuid: Uuid::new_v4(),
            last_played: Some(1_700_000_000_000),
        };
        let json = serde_json::to_value(PlayerSummary::offline(&record)).unwrap();
        assert_eq!(json["online"], false);
        assert_eq!(json["lastSeen"], 1_700_000_000_000u64);
        assert!(json.get("world").is_none());
        assert!(json.get("x").is_none());
    }

    #[test]
    fn empty_slot_is_air_with_no_display_name() {
        let snapshot = InventorySnapshot::from(&sample_player());
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["inventory"][1]["material"], "AIR");
        assert_eq!(json["inventory"][1]["amount"], 0);
        assert!(json["inventory"][1].get("displayName").is_none());
    }

    #[test]
    fn display_name_falls_back_to_material() {
        let snapshot = InventorySnapshot::from(&sample_player());
        assert_eq!(
            snapshot.inventory[0].display_name.as_deref(),
            Some("DIAMOND_SWORD")
        );
    }

    #[test]
    fn armor_has_all_four_slots() {
        let snapshot = InventorySnapshot::from(&sample_player());
        let json = serde_json::to_value(&snapshot.armor).unwrap();
        assert_eq!(json["helmet"], "IRON_HELMET");
        assert_eq!(json["boots"], "AIR");
        assert_eq!(json["leggings"], "AIR");
        assert_eq!(json["chestplate"], "AIR");
    }

    #[test]
    fn snapshot_preserves_slot_count() {
        let snapshot = InventorySnapshot::from(&sample_player());
        assert_eq!(snapshot.inventory.len(), 3);
        assert_eq!(snapshot.inventory[2].slot, 2);
    }
}
