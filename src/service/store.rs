use std::collections::HashMap;

use crate::model::{
    champion::{Champion, RosterChampion, ITEM_SLOTS},
    filter::{RoleFilter, SortKey},
    ids::{ChampionKey, ItemId},
    item::Item,
    roster::{Role, Slots},
};

use super::persistence::RosterStorage;

/// Canonical application state. External code reads it through
/// [`TeamStore::state`]; all writes go through the store operations.
#[derive(Debug)]
pub struct StoreState {
    pub champions: Vec<Champion>,
    pub items: HashMap<ItemId, Item>,
    /// Derived view of the catalog after filter and sort. Never patched
    /// in place, always replaced wholesale.
    pub filtered_champions: Vec<Champion>,
    pub role: RoleFilter,
    pub sort_by: SortKey,
    pub sort_asc: bool,
    /// The bench: rostered champions not assigned to a role slot.
    pub team: Vec<RosterChampion>,
    pub slots: Slots,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            champions: Vec::new(),
            items: HashMap::new(),
            filtered_champions: Vec::new(),
            role: RoleFilter::default(),
            sort_by: SortKey::default(),
            sort_asc: true,
            team: Vec::new(),
            slots: Slots::default(),
        }
    }
}

/// Typed change notification channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    CatalogLoaded,
    StateChanged,
    TeamChanged,
}

/// Result of [`TeamStore::toggle_team_member`]. The two warning variants
/// are strict no-ops; the caller decides how to surface them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    RemovedFromBench,
    /// A slotted champion was removed outright. Unlike `clear_slot`, this
    /// path does not return the champion to the bench.
    VacatedSlot(Role),
    AlreadyRostered,
    UnknownChampion,
}

type Subscriber = Box<dyn Fn(&StoreState)>;

/// Single source of truth for catalog, filters and roster. Every roster
/// mutation persists team and slots as a unit, then notifies subscribers
/// synchronously in registration order.
pub struct TeamStore {
    state: StoreState,
    storage: RosterStorage,
    subscribers: Vec<(StoreEvent, Subscriber)>,
}

impl TeamStore {
    /// Build a store over the given storage, restoring any persisted
    /// roster. Malformed persisted state falls back to an empty roster.
    pub fn new(storage: RosterStorage) -> Self {
        let (team, slots) = storage.load();
        let mut state = StoreState::default();
        state.team = team;
        state.slots = slots;
        Self {
            state,
            storage,
            subscribers: Vec::new(),
        }
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    pub fn subscribe(&mut self, event: StoreEvent, callback: impl Fn(&StoreState) + 'static) {
        self.subscribers.push((event, Box::new(callback)));
    }

    fn notify(&self, event: StoreEvent) {
        for (registered, callback) in &self.subscribers {
            if *registered == event {
                callback(&self.state);
            }
        }
    }

    // Roster persistence is a best-effort mirror; a failed write must not
    // take down a mutation that already happened in memory.
    fn save_roster(&self) {
        if let Err(error) = self.storage.save(&self.state.team, &self.state.slots) {
            eprintln!("Failed to persist roster: {}", error);
        }
    }

    /// Ingest the champion catalog and rebuild the derived view. An empty
    /// catalog simply yields an empty view.
    pub fn set_champions(&mut self, champions: Vec<Champion>) {
        self.state.champions = champions;
        self.recompute_view();
        self.notify(StoreEvent::CatalogLoaded);
        self.notify(StoreEvent::StateChanged);
    }

    /// Store the item catalog as a lookup. Nothing derived depends on it
    /// beyond on-demand lookups.
    pub fn set_items(&mut self, items: HashMap<ItemId, Item>) {
        self.state.items = items;
    }

    pub fn get_item(&self, id: &ItemId) -> Option<&Item> {
        self.state.items.get(id)
    }

    /// Items worth showing in the shop, in a stable name order.
    pub fn shop_items(&self) -> Vec<&Item> {
        let mut items: Vec<&Item> = self.state.items.values().filter(|item| item.is_purchasable()).collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        items
    }

    pub fn set_role(&mut self, role: RoleFilter) {
        self.state.role = role;
        self.process_data();
    }

    pub fn set_sort(&mut self, key: SortKey) {
        self.state.sort_by = key;
        self.process_data();
    }

    pub fn toggle_sort_order(&mut self) {
        self.state.sort_asc = !self.state.sort_asc;
        self.process_data();
    }

    /// Three-way dispatch on the champion's roster position: on the bench
    /// it is removed, in a slot the slot is vacated (the champion is
    /// discarded, not benched), otherwise a deep copy of the catalog
    /// entry joins the bench.
    pub fn toggle_team_member(&mut self, key: &ChampionKey) -> ToggleOutcome {
        if self.state.team.iter().any(|c| &c.key == key) {
            self.remove_from_team(key);
            return ToggleOutcome::RemovedFromBench;
        }

        if let Some(role) = self.state.slots.role_of(key) {
            *self.state.slots.get_mut(role) = None;
            self.save_roster();
            self.notify(StoreEvent::TeamChanged);
            self.notify(StoreEvent::StateChanged);
            return ToggleOutcome::VacatedSlot(role);
        }

        self.add_to_team(key)
    }

    /// Add a deep copy of a catalog champion to the bench. A key already
    /// rostered anywhere, or absent from the catalog, is a no-op signaled
    /// through the outcome.
    pub fn add_to_team(&mut self, key: &ChampionKey) -> ToggleOutcome {
        if self.roster_contains(key) {
            return ToggleOutcome::AlreadyRostered;
        }

        let copy = match self.state.champions.iter().find(|c| &c.key == key) {
            Some(champion) => RosterChampion::from_catalog(champion),
            None => return ToggleOutcome::UnknownChampion,
        };

        self.state.team.push(copy);
        self.save_roster();
        self.notify(StoreEvent::TeamChanged);
        self.notify(StoreEvent::StateChanged);
        ToggleOutcome::Added
    }

    /// Drop a bench entry by key. Absent keys leave everything untouched.
    pub fn remove_from_team(&mut self, key: &ChampionKey) {
        let before = self.state.team.len();
        self.state.team.retain(|c| &c.key != key);
        if self.state.team.len() == before {
            return;
        }

        self.save_roster();
        self.notify(StoreEvent::TeamChanged);
        self.notify(StoreEvent::StateChanged);
    }

    /// Clear bench and all slots unconditionally.
    pub fn reset_team(&mut self) {
        self.state.team.clear();
        self.state.slots.clear();
        self.save_roster();
        self.notify(StoreEvent::TeamChanged);
        self.notify(StoreEvent::StateChanged);
    }

    /// Move a bench champion into a role slot. A displaced occupant goes
    /// back to the bench, never silently dropped. No-op when the key is
    /// not currently benched.
    pub fn assign_to_slot(&mut self, slot: Role, key: &ChampionKey) {
        let index = match self.state.team.iter().position(|c| &c.key == key) {
            Some(index) => index,
            None => return,
        };

        let champion = self.state.team.remove(index);
        if let Some(displaced) = self.state.slots.get_mut(slot).replace(champion) {
            self.state.team.push(displaced);
        }

        self.save_roster();
        self.notify(StoreEvent::TeamChanged);
    }

    /// Return a slot's occupant to the bench. Idempotent on empty slots.
    pub fn clear_slot(&mut self, slot: Role) {
        let champion = match self.state.slots.get_mut(slot).take() {
            Some(champion) => champion,
            None => return,
        };

        self.state.team.push(champion);
        self.save_roster();
        self.notify(StoreEvent::TeamChanged);
    }

    /// Swap the occupants of two slots. An empty source is a no-op; an
    /// empty destination makes this a plain move.
    pub fn move_slot_to_slot(&mut self, from: Role, to: Role) {
        if from == to || self.state.slots.get(from).is_none() {
            return;
        }

        let moved = self.state.slots.get_mut(from).take();
        let displaced = std::mem::replace(self.state.slots.get_mut(to), moved);
        *self.state.slots.get_mut(from) = displaced;

        self.save_roster();
        self.notify(StoreEvent::TeamChanged);
    }

    /// Set or clear one item slot of a rostered champion (bench or role
    /// slot). Out-of-range indices and unknown champions are no-ops.
    pub fn equip_item(&mut self, key: &ChampionKey, slot_index: usize, item: Option<ItemId>) {
        if slot_index >= ITEM_SLOTS {
            return;
        }

        if let Some(champion) = self.state.team.iter_mut().find(|c| &c.key == key) {
            champion.items[slot_index] = item;
        } else if let Some(champion) = self.state.slots.find_mut(key) {
            champion.items[slot_index] = item;
        } else {
            return;
        }

        self.save_roster();
        self.notify(StoreEvent::TeamChanged);
    }

    /// Whether the key occupies any roster position, bench or slot.
    pub fn roster_contains(&self, key: &ChampionKey) -> bool {
        self.state.team.iter().any(|c| &c.key == key) || self.state.slots.role_of(key).is_some()
    }

    /// Bench size plus occupied slots, for the roster counter.
    pub fn roster_size(&self) -> usize {
        self.state.team.len() + self.state.slots.occupied_count()
    }

    fn process_data(&mut self) {
        self.recompute_view();
        self.notify(StoreEvent::StateChanged);
    }

    // Rebuilds the derived view from the full catalog: filter by tag
    // membership, then sort by name or stat with the sign flipped for
    // descending order.
    fn recompute_view(&mut self) {
        let mut result: Vec<Champion> = match &self.state.role {
            RoleFilter::All => self.state.champions.clone(),
            RoleFilter::Tag(tag) => self
                .state
                .champions
                .iter()
                .filter(|c| c.tags.iter().any(|t| t == tag))
                .cloned()
                .collect(),
        };

        let ascending = self.state.sort_asc;
        match self.state.sort_by {
            SortKey::Name => result.sort_by(|a, b| {
                let ord = a.name.cmp(&b.name);
                if ascending {
                    ord
                } else {
                    ord.reverse()
                }
            }),
            SortKey::Stat(key) => result.sort_by(|a, b| {
                let ord = key.value_of(&a.stats).total_cmp(&key.value_of(&b.stats));
                if ascending {
                    ord
                } else {
                    ord.reverse()
                }
            }),
        }

        self.state.filtered_champions = result;
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, env, fs, rc::Rc};

    use super::*;
    use crate::model::champion::{ChampionStats, StatKey};

    fn storage_for(name: &str) -> RosterStorage {
        let mut dir = env::temp_dir();
        dir.push(format!("draftboard-store-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        RosterStorage::new(dir)
    }

    fn champion(key: &str, tags: &[&str], attackdamage: f64) -> Champion {
        let mut stats = ChampionStats::default();
        stats.attackdamage = attackdamage;
        stats.hp = 600.0;
        Champion {
            key: ChampionKey::from(key),
            name: key.to_string(),
            title: String::new(),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            stats,
        }
    }

    fn catalog() -> Vec<Champion> {
        vec![
            champion("Aatrox", &["Fighter"], 60.0),
            champion("Braum", &["Support", "Tank"], 45.0),
            champion("Ahri", &["Mage", "Assassin"], 53.0),
        ]
    }

    fn store_for(name: &str) -> TeamStore {
        let mut store = TeamStore::new(storage_for(name));
        store.set_champions(catalog());
        store
    }

    fn names(store: &TeamStore) -> Vec<&str> {
        store.state().filtered_champions.iter().map(|c| c.name.as_str()).collect()
    }

    fn occurrences(store: &TeamStore, key: &ChampionKey) -> usize {
        let benched = store.state().team.iter().filter(|c| &c.key == key).count();
        let slotted = store
            .state()
            .slots
            .occupied()
            .filter(|(_, c)| &c.key == key)
            .count();
        benched + slotted
    }

    #[test]
    fn sorting_by_stat_and_name() {
        let mut store = store_for("sorting");

        store.set_sort(SortKey::Stat(StatKey::AttackDamage));
        assert_eq!(names(&store), vec!["Braum", "Ahri", "Aatrox"]);

        store.toggle_sort_order();
        assert_eq!(names(&store), vec!["Aatrox", "Ahri", "Braum"]);

        store.toggle_sort_order();
        store.set_sort(SortKey::Name);
        assert_eq!(names(&store), vec!["Aatrox", "Ahri", "Braum"]);
    }

    #[test]
    fn filtering_retains_tag_members_only() {
        let mut store = TeamStore::new(storage_for("filtering"));
        store.set_champions(vec![
            champion("Aatrox", &["Fighter"], 60.0),
            champion("Braum", &["Tank"], 45.0),
            champion("Sett", &["Fighter", "Tank"], 60.0),
        ]);

        store.set_role(RoleFilter::Tag("Tank".to_string()));
        assert_eq!(names(&store), vec!["Braum", "Sett"]);

        store.set_role(RoleFilter::All);
        assert_eq!(store.state().filtered_champions.len(), 3);
    }

    #[test]
    fn empty_catalog_yields_empty_view() {
        let mut store = TeamStore::new(storage_for("empty-catalog"));
        store.set_champions(Vec::new());
        assert!(store.state().filtered_champions.is_empty());
    }

    #[test]
    fn toggle_cycles_bench_membership() {
        let mut store = store_for("toggle-bench");
        let aatrox = ChampionKey::from("Aatrox");

        assert_eq!(store.toggle_team_member(&aatrox), ToggleOutcome::Added);
        assert_eq!(store.state().team.len(), 1);

        assert_eq!(store.toggle_team_member(&aatrox), ToggleOutcome::RemovedFromBench);
        assert!(store.state().team.is_empty());
    }

    #[test]
    fn toggle_on_slotted_champion_discards_instead_of_benching() {
        let mut store = store_for("toggle-slotted");
        let aatrox = ChampionKey::from("Aatrox");
        store.add_to_team(&aatrox);
        store.assign_to_slot(Role::Top, &aatrox);

        assert_eq!(store.toggle_team_member(&aatrox), ToggleOutcome::VacatedSlot(Role::Top));
        assert!(store.state().slots.top.is_none());
        assert!(store.state().team.is_empty());
    }

    #[test]
    fn duplicate_add_is_a_strict_noop() {
        let mut store = store_for("duplicate");
        let aatrox = ChampionKey::from("Aatrox");
        store.add_to_team(&aatrox);

        let events = Rc::new(RefCell::new(Vec::new()));
        let log = events.clone();
        store.subscribe(StoreEvent::TeamChanged, move |_| log.borrow_mut().push("team"));
        let log = events.clone();
        store.subscribe(StoreEvent::StateChanged, move |_| log.borrow_mut().push("state"));

        assert_eq!(store.add_to_team(&aatrox), ToggleOutcome::AlreadyRostered);
        assert_eq!(store.state().team.len(), 1);
        assert!(events.borrow().is_empty());

        store.assign_to_slot(Role::Mid, &aatrox);
        assert_eq!(store.add_to_team(&aatrox), ToggleOutcome::AlreadyRostered);
        assert_eq!(occurrences(&store, &aatrox), 1);
    }

    #[test]
    fn toggle_of_unknown_champion_is_a_noop() {
        let mut store = store_for("unknown");
        let outcome = store.toggle_team_member(&ChampionKey::from("Urf"));
        assert_eq!(outcome, ToggleOutcome::UnknownChampion);
        assert_eq!(store.roster_size(), 0);
    }

    #[test]
    fn champion_occupies_at_most_one_roster_position() {
        let mut store = store_for("uniqueness");
        let aatrox = ChampionKey::from("Aatrox");
        let braum = ChampionKey::from("Braum");

        store.add_to_team(&aatrox);
        store.add_to_team(&braum);
        store.assign_to_slot(Role::Top, &aatrox);
        store.assign_to_slot(Role::Top, &braum);
        store.clear_slot(Role::Top);
        store.move_slot_to_slot(Role::Top, Role::Jungle);

        assert_eq!(occurrences(&store, &aatrox), 1);
        assert_eq!(occurrences(&store, &braum), 1);
    }

    #[test]
    fn assigning_to_an_occupied_slot_benches_the_displaced_champion() {
        let mut store = store_for("displacement");
        let aatrox = ChampionKey::from("Aatrox");
        let braum = ChampionKey::from("Braum");
        store.add_to_team(&aatrox);
        store.add_to_team(&braum);

        store.assign_to_slot(Role::Top, &aatrox);
        let bench_before = store.state().team.len();

        store.assign_to_slot(Role::Top, &braum);
        assert_eq!(store.state().team.len(), bench_before);
        assert_eq!(store.state().team[0].key, aatrox);
        assert_eq!(store.state().slots.top.as_ref().unwrap().key, braum);
    }

    #[test]
    fn assigning_a_champion_not_on_the_bench_is_a_noop() {
        let mut store = store_for("assign-missing");
        store.assign_to_slot(Role::Top, &ChampionKey::from("Aatrox"));
        assert!(store.state().slots.top.is_none());

        // Slotted champions cannot be assigned again either.
        let braum = ChampionKey::from("Braum");
        store.add_to_team(&braum);
        store.assign_to_slot(Role::Mid, &braum);
        store.assign_to_slot(Role::Top, &braum);
        assert!(store.state().slots.top.is_none());
        assert_eq!(occurrences(&store, &braum), 1);
    }

    #[test]
    fn clearing_an_empty_slot_changes_nothing() {
        let mut store = store_for("clear-idempotent");
        let aatrox = ChampionKey::from("Aatrox");
        store.add_to_team(&aatrox);
        store.assign_to_slot(Role::Support, &aatrox);

        store.clear_slot(Role::Support);
        assert_eq!(store.state().team.len(), 1);

        let events = Rc::new(RefCell::new(0));
        let log = events.clone();
        store.subscribe(StoreEvent::TeamChanged, move |_| *log.borrow_mut() += 1);

        store.clear_slot(Role::Support);
        assert_eq!(store.state().team.len(), 1);
        assert_eq!(*events.borrow(), 0);
    }

    #[test]
    fn removing_an_absent_champion_changes_nothing() {
        let mut store = store_for("remove-idempotent");
        store.add_to_team(&ChampionKey::from("Aatrox"));

        store.remove_from_team(&ChampionKey::from("Braum"));
        assert_eq!(store.state().team.len(), 1);
        assert_eq!(store.state().filtered_champions.len(), 3);
    }

    #[test]
    fn slot_swap_and_plain_move() {
        let mut store = store_for("swap");
        let aatrox = ChampionKey::from("Aatrox");
        let braum = ChampionKey::from("Braum");
        store.add_to_team(&aatrox);
        store.add_to_team(&braum);
        store.assign_to_slot(Role::Top, &aatrox);
        store.assign_to_slot(Role::Jungle, &braum);

        store.move_slot_to_slot(Role::Top, Role::Jungle);
        assert_eq!(store.state().slots.top.as_ref().unwrap().key, braum);
        assert_eq!(store.state().slots.jungle.as_ref().unwrap().key, aatrox);

        // Empty destination: plain move.
        store.move_slot_to_slot(Role::Jungle, Role::Mid);
        assert!(store.state().slots.jungle.is_none());
        assert_eq!(store.state().slots.mid.as_ref().unwrap().key, aatrox);

        // Empty source: no-op.
        store.move_slot_to_slot(Role::Jungle, Role::Top);
        assert_eq!(store.state().slots.top.as_ref().unwrap().key, braum);
    }

    #[test]
    fn equip_then_unequip_restores_the_slot() {
        let mut store = store_for("equip");
        let aatrox = ChampionKey::from("Aatrox");
        store.add_to_team(&aatrox);

        store.equip_item(&aatrox, 0, Some(ItemId::from("itemA")));
        store.equip_item(&aatrox, 3, Some(ItemId::from("itemB")));
        store.equip_item(&aatrox, 0, None);

        let items = &store.state().team[0].items;
        assert!(items[0].is_none());
        assert_eq!(items[3], Some(ItemId::from("itemB")));
        assert!(items[1].is_none() && items[2].is_none() && items[4].is_none() && items[5].is_none());
    }

    #[test]
    fn equip_reaches_slotted_champions_too() {
        let mut store = store_for("equip-slotted");
        let aatrox = ChampionKey::from("Aatrox");
        store.add_to_team(&aatrox);
        store.assign_to_slot(Role::Bottom, &aatrox);

        store.equip_item(&aatrox, 1, Some(ItemId::from("3071")));
        let slotted = store.state().slots.bottom.as_ref().unwrap();
        assert_eq!(slotted.items[1], Some(ItemId::from("3071")));
    }

    #[test]
    fn equip_with_bad_index_or_unknown_champion_is_a_noop() {
        let mut store = store_for("equip-noop");
        let aatrox = ChampionKey::from("Aatrox");
        store.add_to_team(&aatrox);

        store.equip_item(&aatrox, ITEM_SLOTS, Some(ItemId::from("itemA")));
        assert!(store.state().team[0].items.iter().all(|slot| slot.is_none()));

        store.equip_item(&ChampionKey::from("Urf"), 0, Some(ItemId::from("itemA")));
        assert!(store.state().team[0].items.iter().all(|slot| slot.is_none()));
    }

    #[test]
    fn roster_mutations_are_mirrored_to_storage() {
        let mut dir = env::temp_dir();
        dir.push(format!("draftboard-store-mirror-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);

        let aatrox = ChampionKey::from("Aatrox");
        let braum = ChampionKey::from("Braum");
        {
            let mut store = TeamStore::new(RosterStorage::new(dir.clone()));
            store.set_champions(catalog());
            store.add_to_team(&aatrox);
            store.add_to_team(&braum);
            store.assign_to_slot(Role::Mid, &aatrox);
            store.equip_item(&aatrox, 0, Some(ItemId::from("3071")));
        }

        let reloaded = TeamStore::new(RosterStorage::new(dir));
        assert_eq!(reloaded.state().team.len(), 1);
        assert_eq!(reloaded.state().team[0].key, braum);
        let mid = reloaded.state().slots.mid.as_ref().unwrap();
        assert_eq!(mid.key, aatrox);
        assert_eq!(mid.items[0], Some(ItemId::from("3071")));
    }

    #[test]
    fn reset_round_trips_as_an_empty_roster() {
        let mut dir = env::temp_dir();
        dir.push(format!("draftboard-store-reset-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);

        {
            let mut store = TeamStore::new(RosterStorage::new(dir.clone()));
            store.set_champions(catalog());
            let aatrox = ChampionKey::from("Aatrox");
            store.add_to_team(&aatrox);
            store.assign_to_slot(Role::Top, &aatrox);
            store.add_to_team(&ChampionKey::from("Braum"));
            store.reset_team();
        }

        let reloaded = TeamStore::new(RosterStorage::new(dir));
        assert!(reloaded.state().team.is_empty());
        assert_eq!(reloaded.state().slots, Slots::default());
    }

    #[test]
    fn notifications_fan_out_in_registration_order() {
        let mut store = store_for("notify-order");
        let events = Rc::new(RefCell::new(Vec::new()));

        let log = events.clone();
        store.subscribe(StoreEvent::TeamChanged, move |_| log.borrow_mut().push("first"));
        let log = events.clone();
        store.subscribe(StoreEvent::TeamChanged, move |_| log.borrow_mut().push("second"));
        let log = events.clone();
        store.subscribe(StoreEvent::StateChanged, move |_| log.borrow_mut().push("state"));

        store.toggle_team_member(&ChampionKey::from("Aatrox"));
        assert_eq!(*events.borrow(), vec!["first", "second", "state"]);

        events.borrow_mut().clear();
        store.set_role(RoleFilter::Tag("Tank".to_string()));
        assert_eq!(*events.borrow(), vec!["state"]);
    }

    #[test]
    fn subscribers_see_the_already_mutated_state() {
        let mut store = store_for("notify-state");
        let seen = Rc::new(RefCell::new(0));
        let log = seen.clone();
        store.subscribe(StoreEvent::TeamChanged, move |state| {
            *log.borrow_mut() = state.team.len();
        });

        store.add_to_team(&ChampionKey::from("Aatrox"));
        assert_eq!(*seen.borrow(), 1);
    }

    #[test]
    fn shop_lists_purchasable_items_sorted_by_name() {
        let mut store = store_for("shop");
        let mut items = HashMap::new();
        for (id, name, gold) in [("3071", "Black Cleaver", 3000), ("1001", "Boots", 300), ("3599", "Kalista's Black Spear", 0)] {
            let id = ItemId::from(id);
            items.insert(
                id.clone(),
                Item {
                    id,
                    name: name.to_string(),
                    description: String::new(),
                    gold_total: gold,
                    stats: HashMap::new(),
                },
            );
        }
        store.set_items(items);

        let shop: Vec<&str> = store.shop_items().iter().map(|item| item.name.as_str()).collect();
        assert_eq!(shop, vec!["Black Cleaver", "Boots"]);
        assert!(store.get_item(&ItemId::from("3599")).is_some());
    }

    #[test]
    fn roster_membership_and_size_track_both_collections() {
        let mut store = store_for("membership");
        let aatrox = ChampionKey::from("Aatrox");
        let braum = ChampionKey::from("Braum");

        store.add_to_team(&aatrox);
        store.add_to_team(&braum);
        store.assign_to_slot(Role::Top, &aatrox);

        assert!(store.roster_contains(&aatrox));
        assert!(store.roster_contains(&braum));
        assert!(!store.roster_contains(&ChampionKey::from("Ahri")));
        assert_eq!(store.roster_size(), 2);
    }
}
