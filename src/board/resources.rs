//! World resources: four resource kinds plus a development level.
//!
//! `Resources` is an immutable value. Worlds replace it wholesale (for
//! example when terraformed) rather than editing it.
//!
//! ## Recipes
//!
//! | Recipe               | Base per kind | Extra points | Level |
//! |----------------------|---------------|--------------|-------|
//! | `random_world`       | 0             | 1-6          | 0     |
//! | `terraformed`        | 1             | 2            | 1     |
//! | `neutral_homeworld`  | 1             | 2            | 2     |
//! | `player_homeworld`   | 2             | 2            | 3     |
//!
//! Extra points are handed out one at a time to a uniformly chosen kind,
//! so two points may land on the same kind.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, ResourceKind};

/// Upper bound (inclusive) of the points on a random world.
pub const MAX_RANDOM_TOTAL: u32 = 6;

/// Level of a freshly terraformed world.
pub const TERRAFORMED_LEVEL: u8 = 1;
/// Level of an unowned homeworld.
pub const NEUTRAL_HOMEWORLD_LEVEL: u8 = 2;
/// Level of a player's starting homeworld.
pub const PLAYER_HOMEWORLD_LEVEL: u8 = 3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resources {
    pub metal: u32,
    pub biomass: u32,
    pub energy: u32,
    pub exotic: u32,
    /// World tier, 0-3.
    pub level: u8,
}

impl Resources {
    #[must_use]
    pub const fn new(metal: u32, biomass: u32, energy: u32, exotic: u32, level: u8) -> Self {
        Self {
            metal,
            biomass,
            energy,
            exotic,
            level,
        }
    }

    /// Distribute `total` points (default: 1-6) over the four kinds. Level 0.
    pub fn random_world(total: Option<u32>, rng: &mut GameRng) -> Self {
        let total = total.unwrap_or_else(|| rng.between(1, MAX_RANDOM_TOTAL));
        Self::distribute([0; 4], total, 0, rng)
    }

    /// One of each kind plus two random points. Level 1.
    pub fn terraformed(rng: &mut GameRng) -> Self {
        Self::distribute([1; 4], 2, TERRAFORMED_LEVEL, rng)
    }

    /// One of each kind plus two random points. Level 2.
    pub fn neutral_homeworld(rng: &mut GameRng) -> Self {
        Self::distribute([1; 4], 2, NEUTRAL_HOMEWORLD_LEVEL, rng)
    }

    /// Two of each kind plus two random points. Level 3.
    pub fn player_homeworld(rng: &mut GameRng) -> Self {
        Self::distribute([2; 4], 2, PLAYER_HOMEWORLD_LEVEL, rng)
    }

    fn distribute(mut counts: [u32; 4], points: u32, level: u8, rng: &mut GameRng) -> Self {
        for _ in 0..points {
            counts[rng.below(4) as usize] += 1;
        }
        let [metal, biomass, energy, exotic] = counts;
        Self::new(metal, biomass, energy, exotic, level)
    }

    /// Quantities in `ResourceKind::ALL` order.
    #[must_use]
    pub const fn quantities(&self) -> [u32; 4] {
        [self.metal, self.biomass, self.energy, self.exotic]
    }

    #[must_use]
    pub const fn get(&self, kind: ResourceKind) -> u32 {
        self.quantities()[kind.index()]
    }

    /// Sum of the four quantities. Ignores `level`.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.quantities().iter().sum()
    }
}
