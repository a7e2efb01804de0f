//! Rule violations raised by the board and by player actions.
//!
//! All variants are precondition failures on the caller's side. None of
//! them are transient, and none leave partial state behind: every check
//! runs before the first mutation.

use thiserror::Error;

use super::node::Node;
use super::special::Special;

pub type Result<T, E = RulesError> = std::result::Result<T, E>;

/// Which precondition on the acted-upon world failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidTargetReason {
    /// The acting player must control the world.
    NotControlled,
    /// The acting player must not control the world.
    OwnWorld,
    /// The world is not next to any world the player controls.
    NotAdjacent,
    /// The world's shield is already raised.
    ShieldRaised,
    /// The world is above the terraformed tier.
    Homeworld,
}

impl std::fmt::Display for InvalidTargetReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            InvalidTargetReason::NotControlled => "you must control it",
            InvalidTargetReason::OwnWorld => "you cannot target your own world",
            InvalidTargetReason::NotAdjacent => "it is not adjacent to any world you control",
            InvalidTargetReason::ShieldRaised => "its shield is already raised",
            InvalidTargetReason::Homeworld => "homeworlds cannot be terraformed",
        };
        f.write_str(reason)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("{special} special has not been researched")]
    NotResearched { special: Special },
    #[error("invalid target world {node}: {reason}")]
    InvalidTarget { node: Node, reason: InvalidTargetReason },
    #[error("destination world {destination} is already connected to the start world {start}")]
    InvalidDestination { start: Node, destination: Node },
    #[error("world {node} does not exist")]
    InvalidWorld { node: Node },
    #[error("no edge from {from} to {to}")]
    MissingEdge { from: Node, to: Node },
}
