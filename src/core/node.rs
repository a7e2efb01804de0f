//! Board coordinates.
//!
//! A `Node` is the key of a world on the board. Nodes compare and hash
//! structurally, so two `Node`s built from the same coordinates name the
//! same world.
//!
//! ```
//! use stellar_rules::core::Node;
//!
//! let a = Node::new(0, 1);
//! let b: Node = (0, 1).into();
//! assert_eq!(a, b);
//! ```

use serde::{Deserialize, Serialize};

/// Coordinate key of a world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Node {
    pub x: i32,
    pub y: i32,
}

impl Node {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Node {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Undirected connection between two nodes.
pub type Edge = (Node, Node);
