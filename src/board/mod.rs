//! Hex geometry - coordinates, board shape, movement

pub mod hex;
pub mod movement;

pub use hex::{Board, HexCoord, HexDirection};
pub use movement::{
    execute_move, move_toward, movement_range, movement_range_with_paths, reachable_for,
    step_away, step_toward, ReachableHex,
};
