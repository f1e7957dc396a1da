//! Economy manager - costs, eggs, construction, upgrades

pub mod construction;
pub mod costs;
pub mod eggs;
pub mod upgrades;

pub use construction::{build_structure, BuildOutcome, BuildResult};
pub use costs::{affordable_unit_types, can_afford, can_afford_unit, deduct_cost};
pub use eggs::{
    create_egg, free_spawning_hexes, hatch_egg, has_enough_energy, lay_cost, lay_egg,
    spawning_hexes,
};
pub use upgrades::{evolve_queen, purchase_upgrade};
