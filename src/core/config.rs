//! Rules configuration.
//!
//! `RulesConfig::default()` is the standard game balance:
//! - every special costs 5 of its resource kind
//! - player homeworlds start with 20 fleets
//! - other worlds start with 0-7 fleets and 1-6 resource points
//!
//! Variants of the game tune these numbers here instead of patching the
//! rules.

use serde::{Deserialize, Serialize};

use super::node::Node;
use super::player::PlayerId;
use super::rng::GameRng;
use super::special::Special;
use crate::board::{resources, world, Resources, World};
use crate::player::Player;

/// Stockpile threshold for each special.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialCosts {
    pub tannhauser: u32,
    pub terraform: u32,
    pub defence_net: u32,
    pub stellar_bomb: u32,
}

impl SpecialCosts {
    pub const STANDARD: u32 = 5;

    /// Same threshold for every special.
    #[must_use]
    pub const fn uniform(cost: u32) -> Self {
        Self {
            tannhauser: cost,
            terraform: cost,
            defence_net: cost,
            stellar_bomb: cost,
        }
    }

    /// Threshold for `special`.
    #[must_use]
    pub const fn cost(&self, special: Special) -> u32 {
        match special {
            Special::Tannhauser => self.tannhauser,
            Special::Terraform => self.terraform,
            Special::DefenceNet => self.defence_net,
            Special::StellarBomb => self.stellar_bomb,
        }
    }
}

impl Default for SpecialCosts {
    fn default() -> Self {
        Self::uniform(Self::STANDARD)
    }
}

/// Tunable numbers of the rules core.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Special action thresholds handed to every new player.
    pub costs: SpecialCosts,

    /// Fleets on a fresh player homeworld.
    pub homeworld_fleets: u32,

    /// Upper bound (inclusive) of a random world's starting fleets.
    pub max_random_fleets: u32,

    /// Upper bound (inclusive) of a random world's resource points.
    pub max_random_resources: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            costs: SpecialCosts::default(),
            homeworld_fleets: world::HOMEWORLD_FLEETS,
            max_random_fleets: world::MAX_RANDOM_FLEETS,
            max_random_resources: resources::MAX_RANDOM_TOTAL,
        }
    }
}

impl RulesConfig {
    /// Set the threshold of every special.
    #[must_use]
    pub fn with_costs(mut self, costs: SpecialCosts) -> Self {
        self.costs = costs;
        self
    }

    /// Set the starting fleets of player homeworlds.
    #[must_use]
    pub fn with_homeworld_fleets(mut self, fleets: u32) -> Self {
        self.homeworld_fleets = fleets;
        self
    }

    /// A new player with an empty stockpile and this config's costs.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Player {
        Player::with_costs(id, self.costs)
    }

    /// An unowned world with random fleets and resources.
    pub fn world(&self, node: Node, rng: &mut GameRng) -> World {
        let fleets = rng.between(0, self.max_random_fleets);
        let total = rng.between(1, self.max_random_resources.max(1));
        World {
            node,
            fleets,
            resources: Resources::random_world(Some(total), rng),
            player: None,
            shield: false,
        }
    }

    /// A homeworld owned by `owner`.
    pub fn player_homeworld(&self, node: Node, owner: PlayerId, rng: &mut GameRng) -> World {
        World::player_homeworld(node, Some(self.homeworld_fleets), owner, rng)
    }

    /// An unowned homeworld with random fleets.
    pub fn neutral_homeworld(&self, node: Node, rng: &mut GameRng) -> World {
        let fleets = rng.between(0, self.max_random_fleets);
        World::neutral_homeworld(node, Some(fleets), rng)
    }
}
