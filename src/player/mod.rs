//! The player action layer: stockpile, board queries, and specials.

pub mod state;
pub mod specials;

pub use state::Player;
