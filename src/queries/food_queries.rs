use indexmap::IndexMap;

use crate::model::{Family, FoodItem, Id};

/// Bucket name for food whose family no longer resolves.
pub const UNKNOWN_FAMILY: &str = "Unknown Family";

/// Groups food by the name of the family bringing it. Buckets appear in the
/// order their first item appears; unresolved items share `UNKNOWN_FAMILY`.
pub fn group_food_by_family_name(
    families: &[Family],
    food: &[FoodItem],
) -> IndexMap<String, Vec<FoodItem>> {
    let mut groups: IndexMap<String, Vec<FoodItem>> = IndexMap::new();

    for item in food {
        let name = item
            .owner(families)
            .map(|f| f.name.as_str())
            .unwrap_or(UNKNOWN_FAMILY);
        groups.entry(name.to_string()).or_default().push(item.clone());
    }

    groups
}

pub fn food_for_family(food: &[FoodItem], family_id: &Id<Family>) -> Vec<FoodItem> {
    food.iter()
        .filter(|item| &item.family_id == family_id)
        .cloned()
        .collect()
}

/// Food items whose family reference no longer resolves.
pub fn orphaned_food(families: &[Family], food: &[FoodItem]) -> Vec<FoodItem> {
    food.iter()
        .filter(|item| item.owner(families).is_none())
        .cloned()
        .collect()
}
