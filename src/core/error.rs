use thiserror::Error;

use crate::core::types::{EggId, PlayerId, ResourceId, UnitId};

/// Crate-level error for configuration and I/O
#[derive(Error, Debug)]
pub enum HiveError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HiveError>;

/// Why a game action was not applied
///
/// Every variant is recoverable: the caller keeps its previous snapshot and
/// carries on with the rest of the turn.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    // Validation failures
    #[error("{0} has already moved this turn")]
    AlreadyMoved(UnitId),

    #[error("{0} has already attacked this turn")]
    AlreadyAttacked(UnitId),

    #[error("{0} has already built this turn")]
    AlreadyBuilt(UnitId),

    #[error("{0} cannot act this turn")]
    CannotAct(UnitId),

    #[error("insufficient resources")]
    InsufficientResources,

    #[error("insufficient queen energy: need {needed}, have {available}")]
    InsufficientEnergy { needed: u32, available: u32 },

    #[error("target out of range (distance {distance})")]
    OutOfRange { distance: u32 },

    #[error("destination is not reachable")]
    Unreachable,

    #[error("no free hex available")]
    NoFreeHex,

    #[error("cannot target a friendly unit")]
    FriendlyTarget,

    #[error("upgrade is already at max tier")]
    MaxTier,

    #[error("requires queen tier {required}")]
    TierLocked { required: u8 },

    #[error("{0} lacks the required ability")]
    MissingAbility(UnitId),

    #[error("{0} is not ready to hatch")]
    EggNotReady(EggId),

    #[error("builder is not standing on the resource node")]
    NotOnResource,

    #[error("anthills can only be raised on mineral nodes")]
    NotMineral,

    #[error("a structure already stands here")]
    StructureExists,

    // Missing entities
    #[error("unit not found: {0}")]
    UnitNotFound(UnitId),

    #[error("egg not found: {0}")]
    EggNotFound(EggId),

    #[error("resource node not found: {0}")]
    ResourceNotFound(ResourceId),

    #[error("player not found: {0}")]
    PlayerNotFound(PlayerId),

    #[error("{0} has no queen")]
    QueenNotFound(PlayerId),
}

impl ActionError {
    /// True for errors caused by an absent entity rather than a failed check
    pub fn is_missing_entity(&self) -> bool {
        matches!(
            self,
            ActionError::UnitNotFound(_)
                | ActionError::EggNotFound(_)
                | ActionError::ResourceNotFound(_)
                | ActionError::PlayerNotFound(_)
                | ActionError::QueenNotFound(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_entity_classification() {
        assert!(ActionError::UnitNotFound(UnitId(1)).is_missing_entity());
        assert!(ActionError::QueenNotFound(PlayerId(0)).is_missing_entity());
        assert!(!ActionError::InsufficientResources.is_missing_entity());
        assert!(!ActionError::OutOfRange { distance: 3 }.is_missing_entity());
    }

    #[test]
    fn test_error_messages() {
        let err = ActionError::InsufficientEnergy {
            needed: 20,
            available: 5,
        };
        assert_eq!(err.to_string(), "insufficient queen energy: need 20, have 5");
    }
}
