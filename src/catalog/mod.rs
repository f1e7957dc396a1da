//! Entity catalog - immutable stat tables shared by every snapshot

pub mod constants;
pub mod queen;
pub mod units;
pub mod upgrades;

pub use constants::*;
pub use queen::{queen_tier, QueenTierStats};
pub use units::{Splash, UnitRole, UnitStats, UnitType};
pub use upgrades::{UpgradeId, UpgradeStats};
