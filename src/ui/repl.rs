use std::io::{self, Write};

use crate::model::{
    filter::{RoleFilter, SortKey},
    ids::{ChampionKey, ItemId},
    roster::Role,
};
use crate::service::{
    aggregate::summarize_team,
    store::{StoreEvent, TeamStore},
};

use super::{dashboard, dispatch, UiRequest};

enum Command {
    Request(UiRequest),
    List,
    Team,
    Shop,
    Help,
    Quit,
}

/// Line-based front end over the store, mainly to exercise the UI
/// contract end to end. One command per line, `help` lists them.
pub fn run(mut store: TeamStore) -> io::Result<()> {
    store.subscribe(StoreEvent::TeamChanged, |state| {
        println!(
            "Roster updated: {} on bench, {} slotted.",
            state.team.len(),
            state.slots.occupied_count()
        );
    });

    println!("draftboard - type 'help' for commands, 'quit' to exit.");
    let stdin = io::stdin();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            return Ok(());
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_command(line) {
            Some(Command::Quit) => return Ok(()),
            Some(Command::Help) => print_help(),
            Some(Command::List) => print_list(&store),
            Some(Command::Team) => print_team(&store),
            Some(Command::Shop) => print_shop(&store),
            Some(Command::Request(request)) => {
                if let Some(warning) = dispatch(&mut store, request) {
                    println!("{}", warning);
                }
            }
            None => println!("Unknown command, type 'help'."),
        }
    }
}

fn parse_command(line: &str) -> Option<Command> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?;
    let args: Vec<&str> = parts.collect();

    let request = match (command, args.as_slice()) {
        ("quit", []) => return Some(Command::Quit),
        ("help", []) => return Some(Command::Help),
        ("list", []) => return Some(Command::List),
        ("team", []) => return Some(Command::Team),
        ("shop", []) => return Some(Command::Shop),
        ("filter", [role]) => UiRequest::SetRoleFilter(RoleFilter::from_str(role)),
        ("sort", [key]) => UiRequest::SetSortKey(SortKey::from_str(key)?),
        ("order", []) => UiRequest::ToggleSortOrder,
        ("pick", [champ]) => UiRequest::ToggleTeamMember(ChampionKey::from(*champ)),
        ("drop", [champ]) => UiRequest::RemoveFromTeam(ChampionKey::from(*champ)),
        ("reset", []) => UiRequest::ResetTeam,
        ("assign", [slot, champ]) => UiRequest::AssignToSlot(Role::from_str(slot)?, ChampionKey::from(*champ)),
        ("clear", [slot]) => UiRequest::ClearSlot(Role::from_str(slot)?),
        ("swap", [from, to]) => UiRequest::MoveSlotToSlot(Role::from_str(from)?, Role::from_str(to)?),
        ("equip", [champ, index, item]) => {
            UiRequest::EquipItem(ChampionKey::from(*champ), item_slot(index)?, Some(ItemId::from(*item)))
        }
        ("unequip", [champ, index]) => UiRequest::EquipItem(ChampionKey::from(*champ), item_slot(index)?, None),
        _ => return None,
    };

    Some(Command::Request(request))
}

// Item slots are 1-based on the command line.
fn item_slot(arg: &str) -> Option<usize> {
    match arg.parse::<usize>() {
        Ok(index) if (1..=6).contains(&index) => Some(index - 1),
        _ => None,
    }
}

fn print_help() {
    println!("  list | team | shop");
    println!("  filter <tag|all>      sort <name|stat>      order");
    println!("  pick <champ>          drop <champ>          reset");
    println!("  assign <slot> <champ> clear <slot>          swap <slot> <slot>");
    println!("  equip <champ> <1-6> <item>                  unequip <champ> <1-6>");
    println!("  quit");
}

fn print_list(store: &TeamStore) {
    let state = store.state();
    for champion in &state.filtered_champions {
        let marker = if store.roster_contains(&champion.key) { "*" } else { " " };
        println!("{} {:<16} {}", marker, champion.name, champion.title);
    }
    println!("{} champions ({} rostered)", state.filtered_champions.len(), store.roster_size());
}

fn print_team(store: &TeamStore) {
    let state = store.state();

    for (role, occupant) in state.slots.iter() {
        match occupant {
            Some(champion) => {
                let equipped = champion.items.iter().flatten().count();
                println!("{:<8} {} ({} items)", role, champion.name, equipped);
            }
            None => println!("{:<8} -", role),
        }
    }

    let bench: Vec<&str> = state.team.iter().map(|c| c.name.as_str()).collect();
    println!("bench    {}", if bench.is_empty() { "-".to_string() } else { bench.join(", ") });

    for line in dashboard::dashboard_lines(&summarize_team(&state.slots, &state.items)) {
        println!("{}", line);
    }
}

fn print_shop(store: &TeamStore) {
    for item in store.shop_items() {
        println!("{:<12} {:<28} {} gold", item.id, item.name, item.gold_total);
    }
}
