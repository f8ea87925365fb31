use crate::errors::{ItemDataError, ItemDataResult};
use schema::{Item, ItemData};
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::LazyLock;

const ITEM_CATALOG: &str = include_str!("../data/items.ron");

static ITEM_DATA: LazyLock<Result<HashMap<Item, ItemData>, ItemDataError>> =
    LazyLock::new(|| parse_item_catalog(ITEM_CATALOG));

pub fn parse_item_catalog(source: &str) -> ItemDataResult<HashMap<Item, ItemData>> {
    let table: HashMap<Item, ItemData> =
        ron::from_str(source).map_err(|e| ItemDataError::MalformedData(e.to_string()))?;
    tracing::debug!(items = table.len(), "item catalog loaded");
    Ok(table)
}

pub fn get_item_data(item: Item) -> ItemDataResult<&'static ItemData> {
    let table = ITEM_DATA.as_ref().map_err(Clone::clone)?;
    table.get(&item).ok_or(ItemDataError::ItemNotFound(item))
}

pub fn parse_item(name: &str) -> ItemDataResult<Item> {
    Item::from_str(name).map_err(|_| ItemDataError::UnknownItem(name.to_string()))
}
