//! A single star system on the board.

use serde::{Deserialize, Serialize};

use super::resources::Resources;
use crate::core::{GameRng, Node, PlayerId};

/// Fleets on a player homeworld unless overridden.
pub const HOMEWORLD_FLEETS: u32 = 20;

/// Upper bound (inclusive) of a world's random starting fleets.
pub const MAX_RANDOM_FLEETS: u32 = 7;

/// Mutable state of one world.
///
/// `player` is `None` while the world is unowned.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct World {
    pub node: Node,
    pub fleets: u32,
    pub resources: Resources,
    pub player: Option<PlayerId>,
    pub shield: bool,
}

impl World {
    /// An unowned, unshielded world.
    ///
    /// `fleets` defaults to a random 0-7; resources are always a fresh
    /// `Resources::random_world`.
    pub fn new(node: Node, fleets: Option<u32>, rng: &mut GameRng) -> Self {
        let fleets = fleets.unwrap_or_else(|| rng.between(0, MAX_RANDOM_FLEETS));
        Self {
            node,
            fleets,
            resources: Resources::random_world(None, rng),
            player: None,
            shield: false,
        }
    }

    /// Starting homeworld of `owner`. `fleets` defaults to 20.
    pub fn player_homeworld(node: Node, fleets: Option<u32>, owner: PlayerId, rng: &mut GameRng) -> Self {
        let mut world = Self::new(node, Some(fleets.unwrap_or(HOMEWORLD_FLEETS)), rng);
        world.resources = Resources::player_homeworld(rng);
        world.player = Some(owner);
        world
    }

    /// Unowned homeworld at the neutral tier.
    pub fn neutral_homeworld(node: Node, fleets: Option<u32>, rng: &mut GameRng) -> Self {
        let mut world = Self::new(node, fleets, rng);
        world.resources = Resources::neutral_homeworld(rng);
        world
    }

    /// Whether `player` owns this world.
    #[must_use]
    pub fn owned_by(&self, player: PlayerId) -> bool {
        self.player == Some(player)
    }

    #[must_use]
    pub fn is_owned(&self) -> bool {
        self.player.is_some()
    }
}
