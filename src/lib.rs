//! # stellar-rules
//!
//! Rules engine for a turn-based conquest game played on a graph of star
//! systems ("worlds").
//!
//! ## Design Principles
//!
//! 1. **Rules only**: No turn loop, networking, or rendering. An external
//!    orchestrator calls into the board and player APIs.
//!
//! 2. **Deterministic**: All randomness comes from a caller-supplied
//!    `GameRng`, so a seed reproduces a whole game.
//!
//! 3. **Atomic actions**: Every special validates before it mutates. A
//!    failed action leaves board and player untouched.
//!
//! ## Concurrency
//!
//! Everything is synchronous. An orchestrator serving several callers must
//! hold one exclusive lock per game (board plus players) for the whole of
//! each action.
//!
//! ## Modules
//!
//! - `core`: Nodes, player IDs, RNG, configuration, errors
//! - `board`: Resources, worlds, and the board graph
//! - `player`: Player stockpile and special actions
//!
//! ## Example
//!
//! ```
//! use stellar_rules::{Board, GameRng, Node, Player, World};
//!
//! let mut rng = GameRng::new(42);
//! let mut player = Player::default();
//! player.exotic = 5;
//!
//! let (home, far) = (Node::new(0, 0), Node::new(3, 3));
//! let mut board = Board::new(
//!     [
//!         World::player_homeworld(home, None, player.id, &mut rng),
//!         World::new(far, None, &mut rng),
//!     ],
//!     [],
//! );
//!
//! player.tannhauser(&mut board, home, far).unwrap();
//! assert!(board.are_adjacent(far, home));
//! assert_eq!(player.exotic, 0);
//! ```

pub mod core;
pub mod board;
pub mod player;

// Re-export commonly used types
pub use crate::core::{
    Edge, Node, PlayerId,
    GameRng, GameRngState,
    RulesConfig, SpecialCosts,
    ResourceKind, Special,
    InvalidTargetReason, Result, RulesError,
};

pub use crate::board::{Board, Resources, World};

pub use crate::player::Player;
