use std::env;

use service::{
    catalog::{
        client::{CatalogClient, ClientInitError},
        manager::CatalogManager,
    },
    persistence::RosterStorage,
    store::TeamStore,
};

mod model;
mod service;
mod ui;

const CATALOG_BASE_URL: &str = "https://ddragon.leagueoflegends.com/cdn/15.24.1/data/en_US/";
const ROSTER_DIR: &str = "data/roster";

fn main() {
    let load_local_json = env::args().any(|arg| arg == "--local");

    match init(load_local_json) {
        Ok(store) => {
            if let Err(error) = ui::repl::run(store) {
                println!("Error occured while running REPL:\n{}\n", error);
            }
        }
        Err(error) => println!("Error occured while initializing:\n{}\n", error),
    }
}

fn init(load_local_json: bool) -> Result<TeamStore, ClientInitError> {
    let client = CatalogClient::new(CATALOG_BASE_URL, None, load_local_json)?;
    let manager = CatalogManager::new(client);
    let mut store = TeamStore::new(RosterStorage::new(ROSTER_DIR));

    // A failed fetch is reported once; the builder still runs with an
    // empty catalog.
    match manager.get_champions() {
        Ok(champions) => store.set_champions(champions.clone()),
        Err(error) => eprintln!("Champion catalog unavailable: {}", error),
    }
    match manager.get_items() {
        Ok(items) => store.set_items(items.clone()),
        Err(error) => eprintln!("Item catalog unavailable: {}", error),
    }

    Ok(store)
}
