//! Hex coordinate system (axial coordinates)
//!
//! Uses axial coordinates (q, r) for easy neighbor calculation.

use serde::{Deserialize, Serialize};

/// Axial hex coordinate
///
/// Compared by value only; deliberately not `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct HexCoord {
    pub q: i32,
    pub r: i32,
}

impl HexCoord {
    pub const ORIGIN: HexCoord = HexCoord { q: 0, r: 0 };

    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Cube coordinate S (derived from q and r)
    pub fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// Hex distance: `(|dq| + |dr| + |dq + dr|) / 2`
    pub fn distance(&self, other: &Self) -> u32 {
        let dq = self.q - other.q;
        let dr = self.r - other.r;
        ((dq.abs() + dr.abs() + (dq + dr).abs()) / 2) as u32
    }

    /// Neighbor in a single direction
    pub fn neighbor(&self, direction: HexDirection) -> HexCoord {
        let offset = direction.offset();
        HexCoord::new(self.q + offset.q, self.r + offset.r)
    }

    /// All 6 neighboring hexes, always in `HexDirection::all()` order
    pub fn neighbors(&self) -> [HexCoord; 6] {
        HexDirection::all().map(|d| self.neighbor(d))
    }

    /// All hexes within range (inclusive), center first then ring by ring
    pub fn hexes_in_range(&self, range: u32) -> Vec<HexCoord> {
        let mut results = vec![*self];
        for radius in 1..=range {
            results.extend(self.ring(radius));
        }
        results
    }

    /// Hexes at exactly `radius`, walked in a fixed order
    pub fn ring(&self, radius: u32) -> Vec<HexCoord> {
        if radius == 0 {
            return vec![*self];
        }

        let mut results = Vec::with_capacity(6 * radius as usize);
        let start = HexDirection::SouthWest.offset();
        let mut hex = HexCoord::new(
            self.q + start.q * radius as i32,
            self.r + start.r * radius as i32,
        );
        for direction in HexDirection::all() {
            for _ in 0..radius {
                results.push(hex);
                hex = hex.neighbor(direction);
            }
        }
        results
    }
}

/// Direction enum for hex neighbors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum HexDirection {
    #[default]
    East,
    NorthEast,
    NorthWest,
    West,
    SouthWest,
    SouthEast,
}

impl HexDirection {
    /// Get the hex offset for this direction
    pub fn offset(&self) -> HexCoord {
        match self {
            HexDirection::East => HexCoord::new(1, 0),
            HexDirection::NorthEast => HexCoord::new(1, -1),
            HexDirection::NorthWest => HexCoord::new(0, -1),
            HexDirection::West => HexCoord::new(-1, 0),
            HexDirection::SouthWest => HexCoord::new(-1, 1),
            HexDirection::SouthEast => HexCoord::new(0, 1),
        }
    }

    /// Get opposite direction
    pub fn opposite(&self) -> Self {
        match self {
            HexDirection::East => HexDirection::West,
            HexDirection::NorthEast => HexDirection::SouthWest,
            HexDirection::NorthWest => HexDirection::SouthEast,
            HexDirection::West => HexDirection::East,
            HexDirection::SouthWest => HexDirection::NorthEast,
            HexDirection::SouthEast => HexDirection::NorthWest,
        }
    }

    /// All directions, in neighbor enumeration order
    pub fn all() -> [HexDirection; 6] {
        [
            HexDirection::East,
            HexDirection::NorthEast,
            HexDirection::NorthWest,
            HexDirection::West,
            HexDirection::SouthWest,
            HexDirection::SouthEast,
        ]
    }
}

/// Hexagon-shaped board centred on the origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub radius: u32,
}

impl Board {
    pub fn new(radius: u32) -> Self {
        Self { radius }
    }

    pub fn center(&self) -> HexCoord {
        HexCoord::ORIGIN
    }

    pub fn contains(&self, hex: HexCoord) -> bool {
        hex.distance(&HexCoord::ORIGIN) <= self.radius
    }

    /// Number of hexes on the board
    pub fn hex_count(&self) -> usize {
        let r = self.radius as usize;
        3 * r * (r + 1) + 1
    }
}
