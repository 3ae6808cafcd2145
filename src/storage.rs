//! Best-effort localStorage persistence.
//!
//! One key per field, matching the save format the game has always shipped
//! with, so fields load and fail independently (there is no cross-field
//! transaction). Every failure is swallowed: persistence is fire-and-forget.

use crate::model::{EconomySnapshot, Rank};
use web_sys::Storage;

pub const KEY_TOTAL_CLICKS: &str = "totalClicks";
pub const KEY_RANK: &str = "rank";
pub const KEY_MULTITAP: &str = "multitap";
pub const KEY_CLICK_LIMIT: &str = "clickLimit";
pub const KEY_MAX_CLICKS: &str = "maxClicks";
pub const KEY_PLUS_LIMIT_VALUE: &str = "plusLimitValue";
pub const KEY_MULTITAP_LEVEL: &str = "multitapLevel";
// Spelled this way in existing saves; kept so they still load.
pub const KEY_ENERGY_LEVEL: &str = "enegryLevel";
pub const KEY_SPEED_LEVEL: &str = "speedLevel";
/// JSON array of ranks whose one-time bonus has been paid. Newer than the
/// other keys; absent in older saves.
pub const KEY_RANK_BONUSES: &str = "rankBonuses";

const ALL_KEYS: &[&str] = &[
    KEY_TOTAL_CLICKS,
    KEY_RANK,
    KEY_MULTITAP,
    KEY_CLICK_LIMIT,
    KEY_MAX_CLICKS,
    KEY_PLUS_LIMIT_VALUE,
    KEY_MULTITAP_LEVEL,
    KEY_ENERGY_LEVEL,
    KEY_SPEED_LEVEL,
    KEY_RANK_BONUSES,
];

fn local_store() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn get_str(key: &str) -> Option<String> {
    local_store()?.get_item(key).ok().flatten()
}

pub fn set_str(key: &str, value: &str) {
    if let Some(store) = local_store() {
        let _ = store.set_item(key, value);
    }
}

pub fn get_u64(key: &str) -> Option<u64> {
    get_str(key)?.parse().ok()
}

pub fn set_u64(key: &str, value: u64) {
    set_str(key, &value.to_string());
}

fn get_u8(key: &str) -> Option<u8> {
    get_str(key)?.parse().ok()
}

pub fn set_u8(key: &str, value: u8) {
    set_str(key, &value.to_string());
}

pub fn save_granted_bonuses(granted: &[Rank]) {
    if let Ok(json) = serde_json::to_string(granted) {
        set_str(KEY_RANK_BONUSES, &json);
    }
}

fn load_granted_bonuses() -> Option<Vec<Rank>> {
    serde_json::from_str(&get_str(KEY_RANK_BONUSES)?).ok()
}

/// Read every persisted field. Keys that are missing or unparseable simply
/// come back as `None`.
pub fn load_snapshot() -> EconomySnapshot {
    EconomySnapshot {
        score: get_u64(KEY_TOTAL_CLICKS),
        rank: get_str(KEY_RANK).and_then(|s| Rank::from_key(&s)),
        multiplier: get_u64(KEY_MULTITAP),
        energy: get_u64(KEY_CLICK_LIMIT),
        max_energy: get_u64(KEY_MAX_CLICKS),
        recharge_rate: get_u64(KEY_PLUS_LIMIT_VALUE),
        multitap_level: get_u8(KEY_MULTITAP_LEVEL),
        energy_level: get_u8(KEY_ENERGY_LEVEL),
        speed_level: get_u8(KEY_SPEED_LEVEL),
        granted_bonuses: load_granted_bonuses(),
    }
}

/// Remove every save key (progress reset).
pub fn clear_save() {
    if let Some(store) = local_store() {
        for key in ALL_KEYS {
            let _ = store.remove_item(key);
        }
    }
}
