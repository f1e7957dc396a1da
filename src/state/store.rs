//! The state store: one immutable snapshot of the whole game
//!
//! Public operations take `&GameState` and hand back a new snapshot. The
//! `with_*`/`without_*` methods are the persistent-update primitives; the
//! crate-private `*_mut` helpers let an operation that already owns a fresh
//! copy apply several edits without cloning again.

use std::collections::BTreeMap;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::board::hex::{Board, HexCoord};
use crate::core::error::ActionError;
use crate::core::types::{
    EggId, IdCounter, PlayerId, ResourceId, StructureId, Turn, UnitId,
};
use crate::state::entities::{Egg, PlayerState, ResourceNode, Structure, Unit};

/// Aggregate root: turn counter plus keyed entity collections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub turn: Turn,
    pub board: Board,
    units: BTreeMap<UnitId, Unit>,
    eggs: BTreeMap<EggId, Egg>,
    structures: BTreeMap<StructureId, Structure>,
    resource_nodes: BTreeMap<ResourceId, ResourceNode>,
    players: BTreeMap<PlayerId, PlayerState>,
    ids: IdCounter,
}

impl GameState {
    /// Empty snapshot on a board of the given radius
    pub fn new(board: Board) -> Self {
        Self {
            turn: 1,
            board,
            units: BTreeMap::new(),
            eggs: BTreeMap::new(),
            structures: BTreeMap::new(),
            resource_nodes: BTreeMap::new(),
            players: BTreeMap::new(),
            ids: IdCounter::new(),
        }
    }

    // === QUERIES ===

    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.get(&id)
    }

    /// All units in id order
    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.units.values()
    }

    pub fn units_of(&self, player: PlayerId) -> impl Iterator<Item = &Unit> {
        self.units.values().filter(move |u| u.owner == player)
    }

    pub fn enemy_units_of(&self, player: PlayerId) -> impl Iterator<Item = &Unit> {
        self.units.values().filter(move |u| u.owner != player)
    }

    pub fn unit_at(&self, pos: HexCoord) -> Option<&Unit> {
        self.units.values().find(|u| u.position == pos)
    }

    pub fn queen_of(&self, player: PlayerId) -> Option<&Unit> {
        self.units_of(player).find(|u| u.is_queen())
    }

    pub fn egg(&self, id: EggId) -> Option<&Egg> {
        self.eggs.get(&id)
    }

    pub fn eggs(&self) -> impl Iterator<Item = &Egg> {
        self.eggs.values()
    }

    pub fn eggs_of(&self, player: PlayerId) -> impl Iterator<Item = &Egg> {
        self.eggs.values().filter(move |e| e.owner == player)
    }

    pub fn egg_at(&self, pos: HexCoord) -> Option<&Egg> {
        self.eggs.values().find(|e| e.position == pos)
    }

    pub fn structure(&self, id: StructureId) -> Option<&Structure> {
        self.structures.get(&id)
    }

    pub fn structures(&self) -> impl Iterator<Item = &Structure> {
        self.structures.values()
    }

    pub fn structures_of(&self, player: PlayerId) -> impl Iterator<Item = &Structure> {
        self.structures.values().filter(move |s| s.owner == player)
    }

    pub fn structure_at(&self, pos: HexCoord) -> Option<&Structure> {
        self.structures.values().find(|s| s.position == pos)
    }

    pub fn resource_node(&self, id: ResourceId) -> Option<&ResourceNode> {
        self.resource_nodes.get(&id)
    }

    pub fn resource_nodes(&self) -> impl Iterator<Item = &ResourceNode> {
        self.resource_nodes.values()
    }

    pub fn resource_at(&self, pos: HexCoord) -> Option<&ResourceNode> {
        self.resource_nodes.values().find(|n| n.position == pos)
    }

    pub fn player(&self, id: PlayerId) -> Option<&PlayerState> {
        self.players.get(&id)
    }

    pub fn players(&self) -> impl Iterator<Item = &PlayerState> {
        self.players.values()
    }

    /// A hex holding a unit or an egg
    pub fn is_occupied(&self, pos: HexCoord) -> bool {
        self.unit_at(pos).is_some() || self.egg_at(pos).is_some()
    }

    /// Every hex holding a unit or an egg
    pub fn occupied_hexes(&self) -> AHashSet<HexCoord> {
        self.units
            .values()
            .map(|u| u.position)
            .chain(self.eggs.values().map(|e| e.position))
            .collect()
    }

    /// The id the next allocation will produce
    pub fn next_id(&self) -> u64 {
        self.ids.peek()
    }

    // === VICTORY ===

    /// A player without a living queen is out of the game
    pub fn is_eliminated(&self, player: PlayerId) -> bool {
        self.queen_of(player).is_none()
    }

    /// The last player with a living queen, once everyone else is eliminated
    pub fn winner(&self) -> Option<PlayerId> {
        let mut alive = self.players.keys().filter(|p| !self.is_eliminated(**p));
        match (alive.next(), alive.next()) {
            (Some(only), None) if self.players.len() > 1 => Some(*only),
            _ => None,
        }
    }

    // === PERSISTENT UPDATES ===

    /// Snapshot with `unit` inserted or replaced
    pub fn with_unit(&self, unit: Unit) -> Self {
        let mut next = self.clone();
        next.put_unit(unit);
        next
    }

    /// Snapshot with one unit edited in place
    pub fn with_updated_unit(
        &self,
        id: UnitId,
        update: impl FnOnce(&mut Unit),
    ) -> Result<Self, ActionError> {
        let mut next = self.clone();
        update(next.unit_mut(id)?);
        Ok(next)
    }

    /// Snapshot with a unit removed (no-op if absent)
    pub fn without_unit(&self, id: UnitId) -> Self {
        let mut next = self.clone();
        next.remove_unit(id);
        next
    }

    pub fn with_egg(&self, egg: Egg) -> Self {
        let mut next = self.clone();
        next.put_egg(egg);
        next
    }

    pub fn without_egg(&self, id: EggId) -> Self {
        let mut next = self.clone();
        next.remove_egg(id);
        next
    }

    pub fn with_structure(&self, structure: Structure) -> Self {
        let mut next = self.clone();
        next.put_structure(structure);
        next
    }

    pub fn with_resource_node(&self, node: ResourceNode) -> Self {
        let mut next = self.clone();
        next.resource_nodes.insert(node.id, node);
        next
    }

    pub fn with_player(&self, player: PlayerState) -> Self {
        let mut next = self.clone();
        next.players.insert(player.id, player);
        next
    }

    pub fn with_updated_player(
        &self,
        id: PlayerId,
        update: impl FnOnce(&mut PlayerState),
    ) -> Result<Self, ActionError> {
        let mut next = self.clone();
        update(next.player_mut(id)?);
        Ok(next)
    }

    /// Snapshot with the turn counter set
    pub fn with_turn(&self, turn: Turn) -> Self {
        let mut next = self.clone();
        next.turn = turn;
        next
    }

    // === IN-PLACE HELPERS (working copies only) ===

    pub(crate) fn unit_mut(&mut self, id: UnitId) -> Result<&mut Unit, ActionError> {
        self.units.get_mut(&id).ok_or(ActionError::UnitNotFound(id))
    }

    pub(crate) fn units_mut(&mut self) -> impl Iterator<Item = &mut Unit> {
        self.units.values_mut()
    }

    pub(crate) fn put_unit(&mut self, unit: Unit) {
        self.units.insert(unit.id, unit);
    }

    pub(crate) fn remove_unit(&mut self, id: UnitId) -> Option<Unit> {
        self.units.remove(&id)
    }

    pub(crate) fn eggs_mut(&mut self) -> impl Iterator<Item = &mut Egg> {
        self.eggs.values_mut()
    }

    pub(crate) fn put_egg(&mut self, egg: Egg) {
        self.eggs.insert(egg.id, egg);
    }

    pub(crate) fn remove_egg(&mut self, id: EggId) -> Option<Egg> {
        self.eggs.remove(&id)
    }

    pub(crate) fn structure_mut(&mut self, id: StructureId) -> Option<&mut Structure> {
        self.structures.get_mut(&id)
    }

    pub(crate) fn put_structure(&mut self, structure: Structure) {
        self.structures.insert(structure.id, structure);
    }

    pub(crate) fn player_mut(&mut self, id: PlayerId) -> Result<&mut PlayerState, ActionError> {
        self.players.get_mut(&id).ok_or(ActionError::PlayerNotFound(id))
    }

    pub(crate) fn alloc_unit_id(&mut self) -> UnitId {
        UnitId(self.ids.allocate())
    }

    pub(crate) fn alloc_egg_id(&mut self) -> EggId {
        EggId(self.ids.allocate())
    }

    pub(crate) fn alloc_structure_id(&mut self) -> StructureId {
        StructureId(self.ids.allocate())
    }

    pub(crate) fn alloc_resource_id(&mut self) -> ResourceId {
        ResourceId(self.ids.allocate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::UnitType;
    use crate::core::types::Resources;

    fn two_player_state() -> GameState {
        let mut state = GameState::new(Board::new(5));
        state.players.insert(PlayerId(0), PlayerState::new(PlayerId(0), Resources::ZERO));
        state.players.insert(PlayerId(1), PlayerState::new(PlayerId(1), Resources::ZERO));
        for (owner, pos) in [(0, HexCoord::new(0, -3)), (1, HexCoord::new(0, 3))] {
            let id = state.alloc_unit_id();
            state.put_unit(Unit::new(id, UnitType::Queen, PlayerId(owner), pos));
        }
        state
    }

    #[test]
    fn test_with_unit_leaves_original_untouched() {
        let state = two_player_state();
        let before = state.clone();
        let unit = Unit::new(UnitId(99), UnitType::Scout, PlayerId(0), HexCoord::ORIGIN);
        let next = state.with_unit(unit);

        assert_eq!(state, before);
        assert!(next.unit(UnitId(99)).is_some());
        assert!(state.unit(UnitId(99)).is_none());
    }

    #[test]
    fn test_with_updated_unit_missing() {
        let state = two_player_state();
        let result = state.with_updated_unit(UnitId(404), |u| u.health = 0);
        assert_eq!(result.unwrap_err(), ActionError::UnitNotFound(UnitId(404)));
    }

    #[test]
    fn test_occupancy_includes_eggs() {
        let state = two_player_state();
        let egg = Egg {
            id: EggId(50),
            unit_type: UnitType::Drone,
            owner: PlayerId(0),
            position: HexCoord::new(1, 1),
            turns_remaining: 1,
            laid_on_turn: 1,
        };
        let next = state.with_egg(egg);
        assert!(next.is_occupied(HexCoord::new(1, 1)));
        assert!(next.is_occupied(HexCoord::new(0, 3)));
        assert!(!next.is_occupied(HexCoord::ORIGIN));
        assert_eq!(next.occupied_hexes().len(), 3);
    }

    #[test]
    fn test_winner_after_queen_dies() {
        let state = two_player_state();
        assert_eq!(state.winner(), None);

        let enemy_queen = state.queen_of(PlayerId(1)).map(|q| q.id).unwrap();
        let next = state.without_unit(enemy_queen);
        assert!(next.is_eliminated(PlayerId(1)));
        assert_eq!(next.winner(), Some(PlayerId(0)));
    }

    #[test]
    fn test_ids_are_unique_across_kinds() {
        let mut state = GameState::new(Board::new(2));
        let a = state.alloc_unit_id().0;
        let b = state.alloc_egg_id().0;
        let c = state.alloc_structure_id().0;
        assert!(a < b && b < c);
    }

    #[test]
    fn test_snapshot_json_roundtrip() {
        let state = two_player_state();
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}
