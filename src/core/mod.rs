//! Core rules types: nodes, players, RNG, configuration, errors.
//!
//! Everything here is shared by the board and the player action layer.

pub mod node;
pub mod player;
pub mod rng;
pub mod config;
pub mod special;
pub mod error;

pub use node::{Edge, Node};
pub use player::PlayerId;
pub use rng::{GameRng, GameRngState};
pub use config::{RulesConfig, SpecialCosts};
pub use special::{ResourceKind, Special};
pub use error::{InvalidTargetReason, Result, RulesError};
