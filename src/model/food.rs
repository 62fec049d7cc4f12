use serde::{Deserialize, Serialize};

use super::family::Family;
use super::ids::Id;

/// A dish pledged by a family.
///
/// `family_id` is a weak reference: it is never checked on write and may
/// point at a family that no longer exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub id: Id<FoodItem>,
    pub family_id: Id<Family>,
    pub item: String,
}

impl FoodItem {
    pub fn create(family_id: Id<Family>, item: String) -> Self {
        Self {
            id: Id::generate(),
            family_id,
            item,
        }
    }

    /// Resolves the owning family, if it still exists.
    pub fn owner<'a>(&self, families: &'a [Family]) -> Option<&'a Family> {
        families.iter().find(|f| f.id == self.family_id)
    }
}
