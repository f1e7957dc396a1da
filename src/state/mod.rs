//! State store - canonical game snapshot and its entities

pub mod abilities;
pub mod builder;
pub mod entities;
pub mod store;

pub use abilities::toggle_burrow;
pub use builder::GameStateBuilder;
pub use entities::{Egg, PlayerState, ResourceNode, Structure, Unit};
pub use store::GameState;
