use std::fmt::Display;

/// Stable catalog key of a champion, e.g. "Aatrox".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChampionKey(String);

/// Item identifier, derived from the item image filename without its
/// extension, e.g. "1001".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemId(String);

impl ChampionKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ItemId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ChampionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ChampionKey {
    fn from(value: String) -> Self {
        ChampionKey(value)
    }
}

impl From<&str> for ChampionKey {
    fn from(value: &str) -> Self {
        ChampionKey(value.to_string())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        ItemId(value)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        ItemId(value.to_string())
    }
}
