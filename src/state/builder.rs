//! Assemble initial snapshots for tests and headless matches

use crate::board::hex::{Board, HexCoord};
use crate::catalog::{queen_tier, UnitType};
use crate::core::types::{PlayerId, ResourceKind, Resources, Turn, UnitId};
use crate::state::entities::{Egg, PlayerState, ResourceNode, Structure, Unit};
use crate::state::store::GameState;

/// Fluent builder over an empty `GameState`
#[derive(Debug, Clone)]
pub struct GameStateBuilder {
    state: GameState,
}

impl GameStateBuilder {
    pub fn new(board_radius: u32) -> Self {
        Self {
            state: GameState::new(Board::new(board_radius)),
        }
    }

    pub fn turn(mut self, turn: Turn) -> Self {
        self.state.turn = turn;
        self
    }

    pub fn player(mut self, id: PlayerId, resources: Resources) -> Self {
        self.state = self.state.with_player(PlayerState::new(id, resources));
        self
    }

    /// Add a player whose queen has already evolved
    pub fn player_at_tier(mut self, id: PlayerId, resources: Resources, tier: u8) -> Self {
        let mut player = PlayerState::new(id, resources);
        player.queen_tier = tier;
        self.state = self.state.with_player(player);
        self
    }

    /// Add a queen at full energy for her owner's tier
    pub fn queen(self, owner: PlayerId, pos: HexCoord) -> Self {
        let tier = self
            .state
            .player(owner)
            .map(|p| p.queen_tier)
            .unwrap_or(1);
        self.unit_with(UnitType::Queen, owner, pos, |u| {
            u.energy = Some(queen_tier(tier).max_energy)
        })
    }

    pub fn unit(self, unit_type: UnitType, owner: PlayerId, pos: HexCoord) -> Self {
        self.unit_with(unit_type, owner, pos, |_| {})
    }

    /// Add a unit and tweak it before insertion
    pub fn unit_with(
        mut self,
        unit_type: UnitType,
        owner: PlayerId,
        pos: HexCoord,
        tweak: impl FnOnce(&mut Unit),
    ) -> Self {
        let id = self.state.alloc_unit_id();
        let mut unit = Unit::new(id, unit_type, owner, pos);
        tweak(&mut unit);
        self.state.put_unit(unit);
        self
    }

    pub fn egg(mut self, unit_type: UnitType, owner: PlayerId, pos: HexCoord, turns: u32) -> Self {
        let id = self.state.alloc_egg_id();
        let laid_on_turn = self.state.turn;
        self.state.put_egg(Egg {
            id,
            unit_type,
            owner,
            position: pos,
            turns_remaining: turns,
            laid_on_turn,
        });
        self
    }

    pub fn resource(mut self, kind: ResourceKind, pos: HexCoord) -> Self {
        let id = self.state.alloc_resource_id();
        self.state = self.state.with_resource_node(ResourceNode {
            id,
            kind,
            position: pos,
        });
        self
    }

    pub fn structure(
        mut self,
        owner: PlayerId,
        pos: HexCoord,
        kind: ResourceKind,
        progress: u32,
    ) -> Self {
        let id = self.state.alloc_structure_id();
        self.state.put_structure(Structure {
            id,
            owner,
            position: pos,
            resource_kind: kind,
            build_progress: progress,
        });
        self
    }

    /// Id of the most recently added unit
    pub fn last_unit_id(&self) -> Option<UnitId> {
        self.state.units().map(|u| u.id).max()
    }

    pub fn build(self) -> GameState {
        self.state
    }

    /// Two mirrored colonies on a hexagonal board
    ///
    /// Player 0 starts at the top, player 1 at the bottom; each gets a queen,
    /// two drones, a food node and a mineral node nearby. A mineral node sits
    /// at the centre of the board.
    pub fn skirmish(board_radius: u32) -> GameState {
        let radius = board_radius.max(4) as i32;
        let mut builder = Self::new(radius as u32);

        for (player, sign) in [(PlayerId(0), -1), (PlayerId(1), 1)] {
            let home = HexCoord::new(0, sign * (radius - 1));
            builder = builder
                .player(player, Resources::new(60, 30))
                .queen(player, home)
                .unit(UnitType::Drone, player, HexCoord::new(home.q - 1, home.r))
                .unit(UnitType::Drone, player, HexCoord::new(home.q + 1, home.r))
                .resource(
                    ResourceKind::Food,
                    HexCoord::new(home.q - 2, home.r - sign),
                )
                .resource(
                    ResourceKind::Mineral,
                    HexCoord::new(home.q + 2, home.r - 2 * sign),
                );
        }

        builder
            .resource(ResourceKind::Mineral, HexCoord::ORIGIN)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skirmish_layout() {
        let state = GameStateBuilder::skirmish(8);
        assert_eq!(state.players().count(), 2);
        assert!(state.queen_of(PlayerId(0)).is_some());
        assert!(state.queen_of(PlayerId(1)).is_some());
        assert_eq!(state.units().count(), 6);
        assert_eq!(state.resource_nodes().count(), 5);
    }

    #[test]
    fn test_skirmish_entities_on_board() {
        let state = GameStateBuilder::skirmish(6);
        assert!(state.units().all(|u| state.board.contains(u.position)));
        assert!(state
            .resource_nodes()
            .all(|n| state.board.contains(n.position)));
    }

    #[test]
    fn test_skirmish_no_shared_hexes() {
        let state = GameStateBuilder::skirmish(8);
        assert_eq!(state.occupied_hexes().len(), state.units().count());
    }

    #[test]
    fn test_queen_energy_matches_tier() {
        let state = GameStateBuilder::new(4)
            .player_at_tier(PlayerId(0), Resources::ZERO, 2)
            .queen(PlayerId(0), HexCoord::ORIGIN)
            .build();
        let queen = state.queen_of(PlayerId(0)).unwrap();
        assert_eq!(queen.energy, Some(queen_tier(2).max_energy));
    }
}
