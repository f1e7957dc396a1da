pub mod config;
pub mod error;
pub mod types;

pub use config::AiTuning;
pub use error::{ActionError, HiveError, Result};
pub use types::{
    EggId, IdCounter, PlayerId, ResourceId, ResourceKind, Resources, StructureId, Turn, UnitId,
};
