//! hexhive - hex-grid ant colony strategy core
//!
//! Simulation primitives (board, catalog, state, combat, economy), turn
//! upkeep, and a rule-based computer opponent. Every operation takes a
//! snapshot and returns a new one.

pub mod ai;
pub mod board;
pub mod catalog;
pub mod combat;
pub mod core;
pub mod economy;
pub mod state;
pub mod turn;
