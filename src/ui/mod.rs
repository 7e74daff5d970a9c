use crate::model::{
    filter::{RoleFilter, SortKey},
    ids::{ChampionKey, ItemId},
    roster::Role,
};
use crate::service::store::{TeamStore, ToggleOutcome};

pub mod dashboard;
pub mod repl;

/// The complete set of inputs the core accepts from a rendering layer.
/// Translating pointer and drag gestures into these requests is the
/// renderer's job; everything past this boundary is gesture-agnostic.
#[derive(Debug, Clone, PartialEq)]
pub enum UiRequest {
    SetRoleFilter(RoleFilter),
    SetSortKey(SortKey),
    ToggleSortOrder,
    ToggleTeamMember(ChampionKey),
    RemoveFromTeam(ChampionKey),
    ResetTeam,
    AssignToSlot(Role, ChampionKey),
    ClearSlot(Role),
    MoveSlotToSlot(Role, Role),
    EquipItem(ChampionKey, usize, Option<ItemId>),
}

/// Apply a request to the store. Returns a user-facing warning when the
/// request was refused, `None` otherwise.
pub fn dispatch(store: &mut TeamStore, request: UiRequest) -> Option<String> {
    match request {
        UiRequest::SetRoleFilter(filter) => store.set_role(filter),
        UiRequest::SetSortKey(key) => store.set_sort(key),
        UiRequest::ToggleSortOrder => store.toggle_sort_order(),
        UiRequest::ToggleTeamMember(key) => match store.toggle_team_member(&key) {
            ToggleOutcome::AlreadyRostered => {
                return Some(format!("{} is already on the roster!", key));
            }
            ToggleOutcome::UnknownChampion => {
                return Some(format!("No champion named {} in the catalog.", key));
            }
            _ => {}
        },
        UiRequest::RemoveFromTeam(key) => store.remove_from_team(&key),
        UiRequest::ResetTeam => store.reset_team(),
        UiRequest::AssignToSlot(role, key) => store.assign_to_slot(role, &key),
        UiRequest::ClearSlot(role) => store.clear_slot(role),
        // Dropping a card back onto its own slot is not a move.
        UiRequest::MoveSlotToSlot(from, to) => {
            if from != to {
                store.move_slot_to_slot(from, to);
            }
        }
        UiRequest::EquipItem(key, slot_index, item) => store.equip_item(&key, slot_index, item),
    }
    None
}
