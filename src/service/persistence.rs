use std::{fs, io, path::PathBuf};

use json::JsonValue;

use crate::model::{
    champion::{ChampionStats, RosterChampion, StatKey, ITEM_SLOTS},
    ids::{ChampionKey, ItemId},
    roster::{Role, Slots},
};

const TEAM_FILE: &str = "team.json";
const SLOTS_FILE: &str = "slots.json";

/// File-backed key-value store for the roster: one entry for the bench,
/// one for the slot assignments, both written as a unit on every roster
/// mutation so the stored state always matches memory.
pub struct RosterStorage {
    root: PathBuf,
}

impl RosterStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Read back the persisted roster. A missing, unreadable or malformed
    /// entry falls back to an empty bench / all-empty slots instead of
    /// failing.
    pub fn load(&self) -> (Vec<RosterChampion>, Slots) {
        let team = self
            .read_entry(TEAM_FILE)
            .and_then(|entry| parse_team(&entry))
            .unwrap_or_default();
        let slots = self
            .read_entry(SLOTS_FILE)
            .and_then(|entry| parse_slots(&entry))
            .unwrap_or_default();
        (team, slots)
    }

    pub fn save(&self, team: &[RosterChampion], slots: &Slots) -> io::Result<()> {
        fs::create_dir_all(&self.root)?;
        fs::write(self.root.join(TEAM_FILE), team_to_json(team).dump())?;
        fs::write(self.root.join(SLOTS_FILE), slots_to_json(slots).dump())?;
        Ok(())
    }

    fn read_entry(&self, name: &str) -> Option<JsonValue> {
        let text = fs::read_to_string(self.root.join(name)).ok()?;
        json::parse(&text).ok()
    }
}

fn team_to_json(team: &[RosterChampion]) -> JsonValue {
    JsonValue::Array(team.iter().map(champion_to_json).collect())
}

fn slots_to_json(slots: &Slots) -> JsonValue {
    let mut obj = JsonValue::new_object();
    for (role, occupant) in slots.iter() {
        obj[role.as_str()] = match occupant {
            Some(champion) => champion_to_json(champion),
            None => JsonValue::Null,
        };
    }
    obj
}

fn champion_to_json(champion: &RosterChampion) -> JsonValue {
    let mut stats = JsonValue::new_object();
    for stat in StatKey::ALL {
        stats[stat.as_str()] = stat.value_of(&champion.stats).into();
    }

    let mut items = JsonValue::new_array();
    for slot in &champion.items {
        let entry = match slot {
            Some(id) => id.as_str().into(),
            None => JsonValue::Null,
        };
        let _ = items.push(entry);
    }

    let mut obj = JsonValue::new_object();
    obj["id"] = champion.key.as_str().into();
    obj["name"] = champion.name.as_str().into();
    obj["title"] = champion.title.as_str().into();
    obj["tags"] = JsonValue::Array(champion.tags.iter().map(|tag| tag.as_str().into()).collect());
    obj["stats"] = stats;
    obj["items"] = items;
    obj
}

fn parse_team(json: &JsonValue) -> Option<Vec<RosterChampion>> {
    match json {
        JsonValue::Array(entries) => entries.iter().map(parse_champion).collect(),
        _ => None,
    }
}

fn parse_slots(json: &JsonValue) -> Option<Slots> {
    if !json.is_object() {
        return None;
    }

    let mut slots = Slots::default();
    for role in Role::ALL {
        let entry = &json[role.as_str()];
        if entry.is_null() {
            continue;
        }
        *slots.get_mut(role) = Some(parse_champion(entry)?);
    }
    Some(slots)
}

fn parse_champion(json: &JsonValue) -> Option<RosterChampion> {
    let key = json["id"].as_str()?;
    let name = json["name"].as_str()?;
    let title = json["title"].as_str().unwrap_or("");

    let tags = match &json["tags"] {
        JsonValue::Array(tags) => tags.iter().filter_map(|tag| tag.as_str()).map(String::from).collect(),
        _ => Vec::new(),
    };

    let mut stats = ChampionStats::default();
    for stat in StatKey::ALL {
        stat.set(&mut stats, json["stats"][stat.as_str()].as_f64().unwrap_or(0.0));
    }

    let mut items: [Option<ItemId>; ITEM_SLOTS] = Default::default();
    if let JsonValue::Array(entries) = &json["items"] {
        for (index, entry) in entries.iter().take(ITEM_SLOTS).enumerate() {
            items[index] = entry.as_str().map(ItemId::from);
        }
    }

    Some(RosterChampion {
        key: ChampionKey::from(key),
        name: name.to_string(),
        title: title.to_string(),
        tags,
        stats,
        items,
    })
}
