//! Combat resolver - attack eligibility, damage, splash, healing

pub mod resolution;

pub use resolution::{
    can_attack, compute_damage, effective_attack, effective_defense, heal, resolve_attack,
    targets_in_range, AttackReport,
};
