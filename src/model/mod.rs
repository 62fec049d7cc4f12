pub mod ids;
pub mod member;
pub mod family;
pub mod food;
pub mod party;

// Re-exports for convenience
pub use ids::Id;
pub use member::{Member, MemberStatus};
pub use family::Family;
pub use food::FoodItem;
pub use party::{GiftSwap, PartyDetails};
