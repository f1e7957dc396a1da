//! Anthill construction on mineral nodes

use crate::catalog::ANTHILL_REQUIRED_PROGRESS;
use crate::core::error::ActionError;
use crate::core::types::{ResourceId, ResourceKind, StructureId, UnitId};
use crate::state::{GameState, Structure};

/// What a build action did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    /// A new anthill now stands on the node
    Created(StructureId),
    /// An existing, unfinished anthill advanced
    Progressed {
        structure: StructureId,
        progress: u32,
        completed: bool,
    },
    /// Nothing changed
    Rejected(ActionError),
}

/// Snapshot after a build attempt plus what happened
///
/// On rejection `state` is the unchanged input.
#[derive(Debug, Clone)]
pub struct BuildResult {
    pub state: GameState,
    pub outcome: BuildOutcome,
}

impl BuildResult {
    pub fn is_rejected(&self) -> bool {
        matches!(self.outcome, BuildOutcome::Rejected(_))
    }
}

/// Have a builder work on an anthill at the resource node it stands on
///
/// The first action raises the anthill at progress 1; later actions advance
/// it until `ANTHILL_REQUIRED_PROGRESS`, after which it pays income.
pub fn build_structure(
    state: &GameState,
    builder_id: UnitId,
    resource_id: ResourceId,
) -> BuildResult {
    match try_build(state, builder_id, resource_id) {
        Ok((next, outcome)) => BuildResult {
            state: next,
            outcome,
        },
        Err(err) => {
            tracing::debug!("{} build rejected: {}", builder_id, err);
            BuildResult {
                state: state.clone(),
                outcome: BuildOutcome::Rejected(err),
            }
        }
    }
}

fn try_build(
    state: &GameState,
    builder_id: UnitId,
    resource_id: ResourceId,
) -> Result<(GameState, BuildOutcome), ActionError> {
    let builder = state
        .unit(builder_id)
        .ok_or(ActionError::UnitNotFound(builder_id))?;
    let node = state
        .resource_node(resource_id)
        .ok_or(ActionError::ResourceNotFound(resource_id))?;

    if !builder.stats().can_build {
        return Err(ActionError::MissingAbility(builder_id));
    }
    if builder.position != node.position {
        return Err(ActionError::NotOnResource);
    }
    if node.kind != ResourceKind::Mineral {
        return Err(ActionError::NotMineral);
    }
    if builder.has_built {
        return Err(ActionError::AlreadyBuilt(builder_id));
    }

    let existing = state.structure_at(node.position);
    if let Some(structure) = existing {
        if structure.owner != builder.owner || structure.is_complete() {
            return Err(ActionError::StructureExists);
        }
    }

    let owner = builder.owner;
    let position = node.position;
    let existing_id = existing.map(|s| s.id);

    let mut next = state.clone();
    next.unit_mut(builder_id)?.has_built = true;

    let outcome = match existing_id.and_then(|id| next.structure_mut(id)) {
        Some(structure) => {
            structure.build_progress = (structure.build_progress + 1).min(ANTHILL_REQUIRED_PROGRESS);
            BuildOutcome::Progressed {
                structure: structure.id,
                progress: structure.build_progress,
                completed: structure.is_complete(),
            }
        }
        None => {
            let id = next.alloc_structure_id();
            next.put_structure(Structure {
                id,
                owner,
                position,
                resource_kind: ResourceKind::Mineral,
                build_progress: 1,
            });
            BuildOutcome::Created(id)
        }
    };

    tracing::debug!("{} build: {:?}", builder_id, outcome);
    Ok((next, outcome))
}
