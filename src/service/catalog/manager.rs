use std::{collections::HashMap, fmt};

use once_cell::sync::OnceCell;

use crate::model::{champion::Champion, ids::ItemId, item::Item};

use super::{
    client::{CatalogClient, CatalogRequest, RequestError},
    parsing::{champion::parse_champions, item::parse_items, ParsingError},
};

/// Lazy front over the catalog client: each document is fetched and
/// parsed at most once per session.
pub struct CatalogManager {
    client: CatalogClient,
    champions_cache: OnceCell<Vec<Champion>>,
    items_cache: OnceCell<HashMap<ItemId, Item>>,
}

impl CatalogManager {
    pub fn new(client: CatalogClient) -> Self {
        Self {
            client,
            champions_cache: OnceCell::new(),
            items_cache: OnceCell::new(),
        }
    }

    pub fn get_champions(&self) -> CatalogResult<&Vec<Champion>> {
        self.champions_cache.get_or_try_init(|| {
            let champs_json = self.client.request(CatalogRequest::Champions)?;
            let champions = parse_champions(&champs_json)?;
            Ok(champions)
        })
    }

    pub fn get_items(&self) -> CatalogResult<&HashMap<ItemId, Item>> {
        self.items_cache.get_or_try_init(|| {
            let items_json = self.client.request(CatalogRequest::Items)?;
            let items = parse_items(&items_json)?;
            Ok(items)
        })
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug)]
pub enum CatalogError {
    ClientFailed(RequestError),
    ParsingFailed(ParsingError),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CatalogError::ClientFailed(err) => write!(f, "Catalog request failed: {}", err),
            CatalogError::ParsingFailed(err) => write!(f, "Catalog parsing failed: {}", err),
        }
    }
}

impl From<RequestError> for CatalogError {
    fn from(error: RequestError) -> Self {
        Self::ClientFailed(error)
    }
}

impl From<ParsingError> for CatalogError {
    fn from(error: ParsingError) -> Self {
        Self::ParsingFailed(error)
    }
}
