use std::collections::HashMap;

use json::{object::Object, JsonValue};

use crate::model::{ids::ItemId, item::Item};

use super::ParsingError;

/// Parse the item catalog document into a lookup. The catalog key is the
/// image filename without its extension; entries without a usable name or
/// image are skipped rather than rejected.
pub fn parse_items(json: &JsonValue) -> Result<HashMap<ItemId, Item>, ParsingError> {
    if let JsonValue::Object(entries) = &json["data"] {
        let mut items = HashMap::new();
        for (_, entry) in entries.iter() {
            if let JsonValue::Object(item_obj) = entry {
                if let Some(item) = parse_item_obj(item_obj) {
                    items.insert(item.id.clone(), item);
                }
            } else {
                return Err(ParsingError::InvalidType("item entry".into()));
            }
        }
        return Ok(items);
    }

    Err(ParsingError::InvalidType("data".into()))
}

fn parse_item_obj(obj: &Object) -> Option<Item> {
    let name = obj["name"].as_str()?;
    let image = obj["image"]["full"].as_str()?;
    let id = image.strip_suffix(".png").unwrap_or(image);

    let mut stats = HashMap::new();
    if let JsonValue::Object(modifiers) = &obj["stats"] {
        for (modifier, value) in modifiers.iter() {
            if let Some(value) = value.as_f64() {
                stats.insert(modifier.to_string(), value);
            }
        }
    }

    Some(Item {
        id: ItemId::from(id),
        name: name.to_string(),
        description: obj["description"].as_str().unwrap_or("").to_string(),
        gold_total: obj["gold"]["total"].as_u32().unwrap_or(0),
        stats,
    })
}
