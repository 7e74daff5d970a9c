use std::collections::HashMap;

use crate::model::{
    champion::{ChampionStats, RosterChampion, StatKey},
    ids::ItemId,
    item::Item,
    roster::{RoleTag, Slots},
};

// Scale constants for the dashboard bars.
pub const HP_SCALE: f64 = 15000.0;
pub const AD_SCALE: f64 = 1500.0;
pub const ARMOR_SCALE: f64 = 800.0;
pub const MR_SCALE: f64 = 600.0;

/// The fixed set of item stat modifiers recognized by aggregation, mapped
/// to the champion stat they raise. Any other modifier name is ignored.
pub fn modifier_target(name: &str) -> Option<StatKey> {
    match name {
        "FlatHPPoolMod" => Some(StatKey::Hp),
        "FlatMPPoolMod" => Some(StatKey::Mp),
        "FlatArmorMod" => Some(StatKey::Armor),
        "FlatSpellBlockMod" => Some(StatKey::SpellBlock),
        "FlatPhysicalDamageMod" => Some(StatKey::AttackDamage),
        "PercentAttackSpeedMod" => Some(StatKey::AttackSpeed),
        "FlatCritChanceMod" => Some(StatKey::Crit),
        "FlatMovementSpeedMod" => Some(StatKey::MoveSpeed),
        "FlatHPRegenMod" => Some(StatKey::HpRegen),
        _ => None,
    }
}

/// Sum of the stat bonuses a champion gains from its equipped items,
/// keyed like the base stat block. Empty item slots and ids missing from
/// the catalog contribute nothing.
pub fn item_bonuses(champion: &RosterChampion, items: &HashMap<ItemId, Item>) -> ChampionStats {
    let mut bonuses = ChampionStats::default();
    for id in champion.items.iter().flatten() {
        let item = match items.get(id) {
            Some(item) => item,
            None => continue,
        };
        for (modifier, value) in &item.stats {
            if let Some(target) = modifier_target(modifier) {
                let updated = target.value_of(&bonuses) + value;
                target.set(&mut bonuses, updated);
            }
        }
    }
    bonuses
}

/// Champions per dashboard role bucket. A champion carrying several
/// tracked tags counts in each of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleCounts {
    pub fighter: u32,
    pub tank: u32,
    pub mage: u32,
    pub assassin: u32,
    pub support: u32,
    pub marksman: u32,
}

impl RoleCounts {
    pub fn count(&self, tag: RoleTag) -> u32 {
        match tag {
            RoleTag::Fighter => self.fighter,
            RoleTag::Tank => self.tank,
            RoleTag::Mage => self.mage,
            RoleTag::Assassin => self.assassin,
            RoleTag::Support => self.support,
            RoleTag::Marksman => self.marksman,
        }
    }

    fn bump(&mut self, tag: RoleTag) {
        match tag {
            RoleTag::Fighter => self.fighter += 1,
            RoleTag::Tank => self.tank += 1,
            RoleTag::Mage => self.mage += 1,
            RoleTag::Assassin => self.assassin += 1,
            RoleTag::Support => self.support += 1,
            RoleTag::Marksman => self.marksman += 1,
        }
    }
}

/// Dashboard totals over the slotted champions, item bonuses included.
/// Bench members do not count.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamSummary {
    pub attack_damage: f64,
    pub health: f64,
    pub armor: f64,
    pub magic_resist: f64,
    pub roles: RoleCounts,
}

impl TeamSummary {
    pub fn attack_damage_percent(&self) -> f64 {
        stat_percent(self.attack_damage, AD_SCALE)
    }

    pub fn health_percent(&self) -> f64 {
        stat_percent(self.health, HP_SCALE)
    }

    pub fn armor_percent(&self) -> f64 {
        stat_percent(self.armor, ARMOR_SCALE)
    }

    pub fn magic_resist_percent(&self) -> f64 {
        stat_percent(self.magic_resist, MR_SCALE)
    }
}

pub fn summarize_team(slots: &Slots, items: &HashMap<ItemId, Item>) -> TeamSummary {
    let mut summary = TeamSummary::default();
    for (_, champion) in slots.occupied() {
        let bonuses = item_bonuses(champion, items);
        summary.attack_damage += champion.stats.attackdamage + bonuses.attackdamage;
        summary.health += champion.stats.hp + bonuses.hp;
        summary.armor += champion.stats.armor + bonuses.armor;
        summary.magic_resist += champion.stats.spellblock + bonuses.spellblock;

        for tag in &champion.tags {
            if let Some(tag) = RoleTag::from_str(tag) {
                summary.roles.bump(tag);
            }
        }
    }
    summary
}

/// A dashboard bar fill: total over scale, capped at 100%.
pub fn stat_percent(total: f64, scale: f64) -> f64 {
    ((total / scale) * 100.0).min(100.0)
}
