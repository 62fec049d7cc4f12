use crate::error::PartyResult;
use crate::model::{Family, FoodItem, Id};

use super::store::Store;

pub fn find_all(store: &Store) -> PartyResult<Vec<FoodItem>> {
    store.food().load()
}

pub fn find_by_family(store: &Store, family_id: &Id<Family>) -> PartyResult<Vec<FoodItem>> {
    Ok(find_all(store)?
        .into_iter()
        .filter(|item| &item.family_id == family_id)
        .collect())
}

pub fn insert(store: &Store, item: &FoodItem) -> PartyResult<()> {
    store.food().modify(|items| {
        items.push(item.clone());
        Ok(())
    })
}

pub fn delete(store: &Store, id: &Id<FoodItem>) -> PartyResult<bool> {
    store.food().modify(|items| {
        let before = items.len();
        items.retain(|item| &item.id != id);
        Ok(items.len() != before)
    })
}
