//! Core type definitions used throughout the codebase

use std::fmt;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Turn counter (simulation time unit)
pub type Turn = u32;

/// Declares a `u64` newtype identifier with a display prefix.
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub u64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "-{}"), self.0)
            }
        }
    };
}

entity_id!(
    /// Unique identifier for units
    UnitId,
    "unit"
);
entity_id!(
    /// Unique identifier for eggs
    EggId,
    "egg"
);
entity_id!(
    /// Unique identifier for structures (anthills)
    StructureId,
    "structure"
);
entity_id!(
    /// Unique identifier for resource nodes
    ResourceId,
    "resource"
);

/// Player identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player-{}", self.0)
    }
}

/// Monotonic per-session id source
///
/// Every entity id in a snapshot is drawn from the same counter, so ids never
/// collide within a session and replays allocate identical ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdCounter {
    next: u64,
}

impl IdCounter {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Counter that continues after an externally chosen id
    pub fn starting_after(last: u64) -> Self {
        Self { next: last + 1 }
    }

    /// Take the next raw id
    pub fn allocate(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Peek at the id the next allocation will return
    pub fn peek(&self) -> u64 {
        self.next
    }
}

impl Default for IdCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Kind of resource node and of the income it produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Food,
    Mineral,
}

/// A bundle of both resource dimensions (costs, stockpiles, income)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Resources {
    pub food: u32,
    pub minerals: u32,
}

impl Resources {
    pub const ZERO: Resources = Resources { food: 0, minerals: 0 };

    pub const fn new(food: u32, minerals: u32) -> Self {
        Self { food, minerals }
    }

    /// A bundle holding `amount` of a single kind
    pub fn of(kind: ResourceKind, amount: u32) -> Self {
        match kind {
            ResourceKind::Food => Self::new(amount, 0),
            ResourceKind::Mineral => Self::new(0, amount),
        }
    }

    /// True iff every dimension of `self` covers `cost`
    pub fn covers(&self, cost: &Resources) -> bool {
        self.food >= cost.food && self.minerals >= cost.minerals
    }
}

impl Add for Resources {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            food: self.food + rhs.food,
            minerals: self.minerals + rhs.minerals,
        }
    }
}

impl AddAssign for Resources {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
