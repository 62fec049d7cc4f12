pub mod family_ops;
pub mod member_ops;
pub mod food_ops;
