//! Special actions.
//!
//! Every special runs the same sequence:
//! 1. The stockpile must cover the cost (`NotResearched`).
//! 2. The target must satisfy the special's preconditions
//!    (`InvalidTarget`, `InvalidDestination`, `InvalidWorld`).
//! 3. The effect is applied.
//! 4. The paying resource kind drops to zero.
//!
//! Steps 1 and 2 never mutate anything, so a failed special leaves both the
//! board and the player untouched.

use log::debug;

use super::state::Player;
use crate::board::{resources::TERRAFORMED_LEVEL, Board, Resources};
use crate::core::{GameRng, InvalidTargetReason, Node, Result, RulesError, Special};

impl Player {
    /// Connect an owned world to a world it is not yet connected to.
    ///
    /// Paid with exotic.
    pub fn tannhauser(&mut self, board: &mut Board, start: Node, destination: Node) -> Result<()> {
        self.require_researched(Special::Tannhauser)?;

        if !self.controls_world(board, start)? {
            return Err(self.reject(start, InvalidTargetReason::NotControlled));
        }
        if !self.valid_destination(board, start, destination)? {
            debug!("{} rejected: {} already connected to {}", Special::Tannhauser, destination, start);
            return Err(RulesError::InvalidDestination { start, destination });
        }

        board.add_edge((start, destination));
        self.spend(Special::Tannhauser, start);
        Ok(())
    }

    /// Reseed an owned world's resources at the terraformed tier.
    ///
    /// Homeworlds sit above that tier and cannot be terraformed. Paid with
    /// biomass.
    pub fn terraform(&mut self, board: &mut Board, node: Node, rng: &mut GameRng) -> Result<()> {
        self.require_researched(Special::Terraform)?;

        if !self.controls_world(board, node)? {
            return Err(self.reject(node, InvalidTargetReason::NotControlled));
        }
        let world = board.world_mut(node)?;
        if world.resources.level > TERRAFORMED_LEVEL {
            return Err(self.reject(node, InvalidTargetReason::Homeworld));
        }

        world.resources = Resources::terraformed(rng);
        self.spend(Special::Terraform, node);
        Ok(())
    }

    /// Raise the shield of an owned world.
    ///
    /// Paid with metal.
    pub fn defence_net(&mut self, board: &mut Board, node: Node) -> Result<()> {
        self.require_researched(Special::DefenceNet)?;

        if !self.controls_world(board, node)? {
            return Err(self.reject(node, InvalidTargetReason::NotControlled));
        }
        let world = board.world_mut(node)?;
        if world.shield {
            return Err(self.reject(node, InvalidTargetReason::ShieldRaised));
        }

        world.shield = true;
        self.spend(Special::DefenceNet, node);
        Ok(())
    }

    /// Halve the fleets on a world this player does not own, rounding down.
    ///
    /// The target must be one hop from a world the player owns. Paid with
    /// energy.
    pub fn stellar_bomb(&mut self, board: &mut Board, target: Node) -> Result<()> {
        self.require_researched(Special::StellarBomb)?;

        if self.controls_world(board, target)? {
            return Err(self.reject(target, InvalidTargetReason::OwnWorld));
        }
        if !self.borders(board, target) {
            return Err(self.reject(target, InvalidTargetReason::NotAdjacent));
        }

        let world = board.world_mut(target)?;
        world.fleets /= 2;
        self.spend(Special::StellarBomb, target);
        Ok(())
    }

    /// Whether any neighbour of `node` is a world this player owns.
    fn borders(&self, board: &Board, node: Node) -> bool {
        board
            .neighbours(node)
            .any(|neighbour| board.world(neighbour).is_ok_and(|world| world.owned_by(self.id)))
    }

    fn require_researched(&self, special: Special) -> Result<()> {
        if self.is_researched(special) {
            Ok(())
        } else {
            debug!("{}: {} special not researched", self.id, special);
            Err(RulesError::NotResearched { special })
        }
    }

    fn reject(&self, node: Node, reason: InvalidTargetReason) -> RulesError {
        debug!("{}: invalid target {}: {}", self.id, node, reason);
        RulesError::InvalidTarget { node, reason }
    }

    fn spend(&mut self, special: Special, node: Node) {
        *self.stock_mut(special.paid_with()) = 0;
        debug!("{} used {} on {}", self.id, special, node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::World;
    use crate::core::PlayerId;

    fn n(x: i32, y: i32) -> Node {
        Node::new(x, y)
    }

    fn owned_world(node: Node, owner: PlayerId, rng: &mut GameRng) -> World {
        let mut world = World::new(node, None, rng);
        world.player = Some(owner);
        world
    }

    #[test]
    fn test_not_researched_precedes_ownership() {
        let mut rng = GameRng::new(1);
        let mut player = Player::default();
        player.energy = 4;
        let mut board = Board::new([owned_world(n(0, 0), player.id, &mut rng)], []);

        // Bombing an owned world would also fail, but cost is checked first.
        assert_eq!(
            player.stellar_bomb(&mut board, n(0, 0)),
            Err(RulesError::NotResearched { special: Special::StellarBomb })
        );
    }

    #[test]
    fn test_not_researched_precedes_missing_world() {
        let mut player = Player::default();
        let mut board = Board::default();

        assert_eq!(
            player.defence_net(&mut board, n(5, 5)),
            Err(RulesError::NotResearched { special: Special::DefenceNet })
        );
    }

    #[test]
    fn test_terraform_level_one_world_again() {
        let mut rng = GameRng::new(1);
        let mut player = Player::default();
        let mut world = owned_world(n(0, 0), player.id, &mut rng);
        world.resources = Resources::terraformed(&mut rng);
        let mut board = Board::new([world], []);

        player.biomass = 5;
        player.terraform(&mut board, n(0, 0), &mut rng).unwrap();
        assert_eq!(board.world(n(0, 0)).unwrap().resources.level, 1);
    }

    #[test]
    fn test_spend_zeroes_only_paying_kind() {
        let mut rng = GameRng::new(1);
        let mut player = Player::default();
        player.metal = 9;
        player.biomass = 7;
        player.energy = 6;
        player.exotic = 5;
        let mut board = Board::new([owned_world(n(0, 0), player.id, &mut rng)], []);

        player.defence_net(&mut board, n(0, 0)).unwrap();

        assert_eq!(player.metal, 0);
        assert_eq!((player.biomass, player.energy, player.exotic), (7, 6, 5));
    }

    #[test]
    fn test_custom_costs() {
        let mut rng = GameRng::new(1);
        let mut player = Player::with_costs(PlayerId::new(1), crate::core::SpecialCosts::uniform(2));
        player.metal = 2;
        let mut board = Board::new([owned_world(n(0, 0), player.id, &mut rng)], []);

        player.defence_net(&mut board, n(0, 0)).unwrap();
        assert!(board.world(n(0, 0)).unwrap().shield);
    }

    #[test]
    fn test_stellar_bomb_missing_target() {
        let mut rng = GameRng::new(1);
        let mut player = Player::default();
        player.energy = 5;
        let mut board = Board::new([owned_world(n(0, 0), player.id, &mut rng)], [(n(0, 0), n(0, 1))]);

        assert_eq!(
            player.stellar_bomb(&mut board, n(0, 1)),
            Err(RulesError::InvalidWorld { node: n(0, 1) })
        );
        assert_eq!(player.energy, 5);
    }

    #[test]
    fn test_stellar_bomb_edge_to_missing_world() {
        let mut rng = GameRng::new(1);
        let mut player = Player::default();
        player.energy = 5;
        // The only neighbour of the target is a bare node, not an owned world.
        let mut board = Board::new([World::new(n(0, 1), Some(8), &mut rng)], [(n(0, 0), n(0, 1))]);

        assert_eq!(
            player.stellar_bomb(&mut board, n(0, 1)),
            Err(RulesError::InvalidTarget { node: n(0, 1), reason: InvalidTargetReason::NotAdjacent })
        );
        assert_eq!(board.world(n(0, 1)).unwrap().fleets, 8);
    }

    #[test]
    fn test_stellar_bomb_rounds_down() {
        let mut rng = GameRng::new(1);
        let mut player = Player::default();
        player.energy = 5;
        let mut board = Board::new(
            [
                owned_world(n(0, 0), player.id, &mut rng),
                World::new(n(0, 1), Some(7), &mut rng),
            ],
            [(n(0, 0), n(0, 1))],
        );

        player.stellar_bomb(&mut board, n(0, 1)).unwrap();
        assert_eq!(board.world(n(0, 1)).unwrap().fleets, 3);
    }
}
