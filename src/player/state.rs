//! Player identity, stockpile, and board queries.
//!
//! The stockpile is the player's spendable currency for specials. It is
//! separate from any world's resources; the economy that credits it lives
//! outside the rules core.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{Node, PlayerId, ResourceKind, Result, Special, SpecialCosts};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub metal: u32,
    pub biomass: u32,
    pub energy: u32,
    pub exotic: u32,
    /// Thresholds for each special.
    pub costs: SpecialCosts,
}

impl Player {
    /// A player with an empty stockpile and the standard costs.
    #[must_use]
    pub fn new(id: PlayerId) -> Self {
        Self::with_costs(id, SpecialCosts::default())
    }

    #[must_use]
    pub fn with_costs(id: PlayerId, costs: SpecialCosts) -> Self {
        Self {
            id,
            metal: 0,
            biomass: 0,
            energy: 0,
            exotic: 0,
            costs,
        }
    }

    #[must_use]
    pub const fn stock(&self, kind: ResourceKind) -> u32 {
        match kind {
            ResourceKind::Metal => self.metal,
            ResourceKind::Biomass => self.biomass,
            ResourceKind::Energy => self.energy,
            ResourceKind::Exotic => self.exotic,
        }
    }

    pub(crate) fn stock_mut(&mut self, kind: ResourceKind) -> &mut u32 {
        match kind {
            ResourceKind::Metal => &mut self.metal,
            ResourceKind::Biomass => &mut self.biomass,
            ResourceKind::Energy => &mut self.energy,
            ResourceKind::Exotic => &mut self.exotic,
        }
    }

    /// Add `amount` to the stockpile. Saturates at `u32::MAX`.
    pub fn credit(&mut self, kind: ResourceKind, amount: u32) {
        let stock = self.stock_mut(kind);
        *stock = stock.saturating_add(amount);
    }

    /// Whether the stockpile covers `special`.
    #[must_use]
    pub const fn is_researched(&self, special: Special) -> bool {
        self.stock(special.paid_with()) >= self.costs.cost(special)
    }

    /// Whether this player owns the world at `node`.
    ///
    /// Fails with `InvalidWorld` if no world sits at `node`.
    pub fn controls_world(&self, board: &Board, node: Node) -> Result<bool> {
        Ok(board.world(node)?.owned_by(self.id))
    }

    /// Whether `node` is a legal new connection from `start`: it must be a
    /// world, and not already a neighbour of `start`.
    ///
    /// Only `node` is checked for existence, `start` is not.
    pub fn valid_destination(&self, board: &Board, start: Node, node: Node) -> Result<bool> {
        board.world(node)?;
        Ok(!board.are_adjacent(start, node))
    }
}
