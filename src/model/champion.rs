use super::ids::{ChampionKey, ItemId};

/// Number of item slots a champion can hold.
pub const ITEM_SLOTS: usize = 6;

// Generates the base stat block together with the typed handle on a
// single stat. Listing the fields once keeps the struct, the sort keys
// and the JSON field names in sync.
macro_rules! champion_stats {
    ($($field:ident => $variant:ident),+ $(,)?) => {
        /// Base stat block of a champion, one field per Data Dragon stat.
        /// A stat absent from the source document is 0.
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct ChampionStats {
            $(pub $field: f64,)+
        }

        /// Typed handle on a single champion stat, used as sort key and
        /// as target of item stat modifiers.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum StatKey {
            $($variant,)+
        }

        impl StatKey {
            pub const ALL: &'static [StatKey] = &[$(StatKey::$variant,)+];

            /// The Data Dragon field name of this stat.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(StatKey::$variant => stringify!($field),)+
                }
            }

            pub fn from_str(s: &str) -> Option<StatKey> {
                match s {
                    $(stringify!($field) => Some(StatKey::$variant),)+
                    _ => None,
                }
            }

            pub fn value_of(&self, stats: &ChampionStats) -> f64 {
                match self {
                    $(StatKey::$variant => stats.$field,)+
                }
            }

            pub fn set(&self, stats: &mut ChampionStats, value: f64) {
                match self {
                    $(StatKey::$variant => stats.$field = value,)+
                }
            }
        }
    };
}

champion_stats! {
    hp => Hp,
    hpperlevel => HpPerLevel,
    mp => Mp,
    mpperlevel => MpPerLevel,
    movespeed => MoveSpeed,
    armor => Armor,
    armorperlevel => ArmorPerLevel,
    spellblock => SpellBlock,
    spellblockperlevel => SpellBlockPerLevel,
    attackrange => AttackRange,
    hpregen => HpRegen,
    hpregenperlevel => HpRegenPerLevel,
    mpregen => MpRegen,
    mpregenperlevel => MpRegenPerLevel,
    crit => Crit,
    critperlevel => CritPerLevel,
    attackdamage => AttackDamage,
    attackdamageperlevel => AttackDamagePerLevel,
    attackspeedperlevel => AttackSpeedPerLevel,
    attackspeed => AttackSpeed,
}

/// Immutable catalog entry, created once at load.
#[derive(Debug, Clone, PartialEq)]
pub struct Champion {
    pub key: ChampionKey,
    pub name: String,
    pub title: String,
    pub tags: Vec<String>,
    pub stats: ChampionStats,
}

/// A champion owned by the roster (bench or slot): a deep copy of its
/// catalog entry plus the equipped items.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterChampion {
    pub key: ChampionKey,
    pub name: String,
    pub title: String,
    pub tags: Vec<String>,
    pub stats: ChampionStats,
    pub items: [Option<ItemId>; ITEM_SLOTS],
}

impl RosterChampion {
    /// Clone a catalog entry into an owned record. Mutating the roster
    /// copy can never touch the catalog.
    pub fn from_catalog(champion: &Champion) -> Self {
        Self {
            key: champion.key.clone(),
            name: champion.name.clone(),
            title: champion.title.clone(),
            tags: champion.tags.clone(),
            stats: champion.stats.clone(),
            items: Default::default(),
        }
    }
}
