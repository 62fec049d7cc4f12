pub mod member_queries;
pub mod food_queries;
pub mod stats_queries;
pub mod snapshot;

pub use snapshot::{FamilySummary, PartySnapshot, PartySummary};
