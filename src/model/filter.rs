use super::champion::StatKey;

/// List filter: everything, or only champions carrying one tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleFilter {
    All,
    Tag(String),
}

impl Default for RoleFilter {
    fn default() -> Self {
        RoleFilter::All
    }
}

impl RoleFilter {
    pub fn from_str(s: &str) -> RoleFilter {
        if s == "all" {
            RoleFilter::All
        } else {
            RoleFilter::Tag(s.to_string())
        }
    }
}

/// Sort key of the champion list: display name or one numeric stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Stat(StatKey),
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::Name
    }
}

impl SortKey {
    pub fn from_str(s: &str) -> Option<SortKey> {
        if s == "name" {
            Some(SortKey::Name)
        } else {
            StatKey::from_str(s).map(SortKey::Stat)
        }
    }
}
