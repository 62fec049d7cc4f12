use indexmap::IndexMap;
use serde::Serialize;

use crate::db::{family_repo, food_repo, Store};
use crate::error::PartyResult;
use crate::model::{Family, FoodItem, Id};

use super::food_queries;
use super::member_queries::{self, StatusGroups};
use super::stats_queries::{self, AttendanceCounts};

/// Both collections as read at one point in time. Derived views are
/// computed from this rather than from shared mutable lists.
#[derive(Debug, Clone, Default)]
pub struct PartySnapshot {
    pub families: Vec<Family>,
    pub food: Vec<FoodItem>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilySummary {
    pub id: Id<Family>,
    pub name: String,
    pub member_count: usize,
    pub members_by_status: StatusGroups,
    pub food: Vec<FoodItem>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartySummary {
    #[serde(flatten)]
    pub attendance: AttendanceCounts,
    pub families: Vec<FamilySummary>,
    pub food_by_family: IndexMap<String, Vec<FoodItem>>,
    pub orphaned_food: Vec<FoodItem>,
}

impl PartySnapshot {
    pub fn new(families: Vec<Family>, food: Vec<FoodItem>) -> Self {
        Self { families, food }
    }

    pub fn load(store: &Store) -> PartyResult<Self> {
        Ok(Self::new(
            family_repo::find_all(store)?,
            food_repo::find_all(store)?,
        ))
    }

    pub fn attendance(&self) -> AttendanceCounts {
        stats_queries::count_attendance(&self.families)
    }

    pub fn food_by_family_name(&self) -> IndexMap<String, Vec<FoodItem>> {
        food_queries::group_food_by_family_name(&self.families, &self.food)
    }

    pub fn orphaned_food(&self) -> Vec<FoodItem> {
        food_queries::orphaned_food(&self.families, &self.food)
    }

    pub fn summary(&self) -> PartySummary {
        let families = self
            .families
            .iter()
            .map(|family| FamilySummary {
                id: family.id.clone(),
                name: family.name.clone(),
                member_count: family.members.len(),
                members_by_status: member_queries::group_members_by_status(family),
                food: food_queries::food_for_family(&self.food, &family.id),
            })
            .collect();

        PartySummary {
            attendance: self.attendance(),
            families,
            food_by_family: self.food_by_family_name(),
            orphaned_food: self.orphaned_food(),
        }
    }
}
