pub mod collection;
pub mod store;
pub mod family_repo;
pub mod food_repo;

pub use collection::JsonCollection;
pub use store::Store;
