use json::{object::Object, JsonValue};

use crate::model::{
    champion::{Champion, ChampionStats, StatKey},
    ids::ChampionKey,
};

use super::ParsingError;

/// Parse the champion catalog document into an ordered list, keeping the
/// document order of the `data` mapping.
pub fn parse_champions(json: &JsonValue) -> Result<Vec<Champion>, ParsingError> {
    if let JsonValue::Object(entries) = &json["data"] {
        let mut champions = Vec::new();
        for (_, entry) in entries.iter() {
            if let JsonValue::Object(champ_obj) = entry {
                champions.push(parse_champ_obj(champ_obj)?);
            } else {
                return Err(ParsingError::InvalidType("champion entry".into()));
            }
        }
        return Ok(champions);
    }

    Err(ParsingError::InvalidType("data".into()))
}

fn parse_champ_obj(obj: &Object) -> Result<Champion, ParsingError> {
    let key = obj["id"].as_str().ok_or(ParsingError::InvalidType("id".into()))?;
    let name = obj["name"].as_str().ok_or(ParsingError::InvalidType("name".into()))?;
    let title = obj["title"].as_str().unwrap_or("");

    let tags = match &obj["tags"] {
        JsonValue::Array(tags) => tags.iter().filter_map(|tag| tag.as_str()).map(String::from).collect(),
        _ => return Err(ParsingError::InvalidType("tags".into())),
    };

    // A stat missing from the document counts as 0.
    let mut stats = ChampionStats::default();
    for stat in StatKey::ALL {
        stat.set(&mut stats, obj["stats"][stat.as_str()].as_f64().unwrap_or(0.0));
    }

    Ok(Champion {
        key: ChampionKey::from(key),
        name: name.to_string(),
        title: title.to_string(),
        tags,
        stats,
    })
}
