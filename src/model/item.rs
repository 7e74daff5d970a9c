use std::collections::HashMap;

use super::ids::ItemId;

/// Immutable item catalog entry. Stat modifiers are kept verbatim under
/// their Data Dragon names; aggregation decides which ones count.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub gold_total: u32,
    pub stats: HashMap<String, f64>,
}

impl Item {
    /// Only items with a price show up in the shop.
    pub fn is_purchasable(&self) -> bool {
        !self.name.is_empty() && self.gold_total > 0
    }
}
