use tracing::info;

use crate::db::{food_repo, Store};
use crate::error::PartyResult;
use crate::model::{Family, FoodItem, Id};
use crate::validation;

pub fn list_food(store: &Store) -> PartyResult<Vec<FoodItem>> {
    food_repo::find_all(store)
}

pub fn food_for_family(store: &Store, family_id: &Id<Family>) -> PartyResult<Vec<FoodItem>> {
    food_repo::find_by_family(store, family_id)
}

/// Records a dish for a family. The family id is stored as given; whether
/// it resolves is only decided when the food is read back.
pub fn add_food(store: &Store, family_id: &str, item: &str) -> PartyResult<FoodItem> {
    let family_id = validation::non_blank(family_id, "familyId")?;
    let item = validation::non_blank(item, "item")?;

    let food = FoodItem::create(Id::new(family_id), item);
    food_repo::insert(store, &food)?;

    info!(food_id = %food.id, family_id = %food.family_id, "food item added");
    Ok(food)
}

pub fn remove_food(store: &Store, food_id: &Id<FoodItem>) -> PartyResult<()> {
    if food_repo::delete(store, food_id)? {
        info!(food_id = %food_id, "food item removed");
    }
    Ok(())
}
