use std::fmt::Display;

use super::{champion::RosterChampion, ids::ChampionKey};

/// The five named role positions of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Top,
    Jungle,
    Mid,
    Support,
    Bottom,
}

impl Role {
    pub const ALL: [Role; 5] = [Role::Top, Role::Jungle, Role::Mid, Role::Support, Role::Bottom];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Top => "top",
            Role::Jungle => "jungle",
            Role::Mid => "mid",
            Role::Support => "support",
            Role::Bottom => "bottom",
        }
    }

    pub fn from_str(s: &str) -> Option<Role> {
        match s {
            "top" => Some(Role::Top),
            "jungle" => Some(Role::Jungle),
            "mid" => Some(Role::Mid),
            "support" => Some(Role::Support),
            "bottom" => Some(Role::Bottom),
            _ => None,
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The role slots of the board, each holding at most one champion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Slots {
    pub top: Option<RosterChampion>,
    pub jungle: Option<RosterChampion>,
    pub mid: Option<RosterChampion>,
    pub support: Option<RosterChampion>,
    pub bottom: Option<RosterChampion>,
}

impl Slots {
    pub fn get(&self, role: Role) -> &Option<RosterChampion> {
        match role {
            Role::Top => &self.top,
            Role::Jungle => &self.jungle,
            Role::Mid => &self.mid,
            Role::Support => &self.support,
            Role::Bottom => &self.bottom,
        }
    }

    pub fn get_mut(&mut self, role: Role) -> &mut Option<RosterChampion> {
        match role {
            Role::Top => &mut self.top,
            Role::Jungle => &mut self.jungle,
            Role::Mid => &mut self.mid,
            Role::Support => &mut self.support,
            Role::Bottom => &mut self.bottom,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Role, &Option<RosterChampion>)> + '_ {
        Role::ALL.into_iter().map(move |role| (role, self.get(role)))
    }

    /// Slots that currently hold a champion.
    pub fn occupied(&self) -> impl Iterator<Item = (Role, &RosterChampion)> + '_ {
        self.iter()
            .filter_map(|(role, occupant)| occupant.as_ref().map(|champion| (role, champion)))
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied().count()
    }

    /// The role a champion currently occupies, if any.
    pub fn role_of(&self, key: &ChampionKey) -> Option<Role> {
        self.occupied()
            .find(|(_, champion)| &champion.key == key)
            .map(|(role, _)| role)
    }

    pub fn find_mut(&mut self, key: &ChampionKey) -> Option<&mut RosterChampion> {
        for role in Role::ALL {
            if self.get(role).as_ref().map_or(false, |c| &c.key == key) {
                return self.get_mut(role).as_mut();
            }
        }
        None
    }

    pub fn clear(&mut self) {
        for role in Role::ALL {
            *self.get_mut(role) = None;
        }
    }
}

/// Champion class tags tracked by the dashboard role buckets. Tags
/// outside this set are kept on the champion but not counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleTag {
    Fighter,
    Tank,
    Mage,
    Assassin,
    Support,
    Marksman,
}

impl RoleTag {
    pub const ALL: [RoleTag; 6] = [
        RoleTag::Fighter,
        RoleTag::Tank,
        RoleTag::Mage,
        RoleTag::Assassin,
        RoleTag::Support,
        RoleTag::Marksman,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoleTag::Fighter => "Fighter",
            RoleTag::Tank => "Tank",
            RoleTag::Mage => "Mage",
            RoleTag::Assassin => "Assassin",
            RoleTag::Support => "Support",
            RoleTag::Marksman => "Marksman",
        }
    }

    pub fn from_str(s: &str) -> Option<RoleTag> {
        match s {
            "Fighter" => Some(RoleTag::Fighter),
            "Tank" => Some(RoleTag::Tank),
            "Mage" => Some(RoleTag::Mage),
            "Assassin" => Some(RoleTag::Assassin),
            "Support" => Some(RoleTag::Support),
            "Marksman" => Some(RoleTag::Marksman),
            _ => None,
        }
    }
}
