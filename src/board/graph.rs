//! The board: worlds keyed by node, plus a symmetric adjacency relation.
//!
//! Adjacency is kept independently of the worlds map. An edge may name a
//! node that has no world yet; checking that worlds exist is the job of
//! the player action layer.
//!
//! ```
//! use stellar_rules::board::Board;
//! use stellar_rules::core::Node;
//!
//! let (a, b) = (Node::new(0, 0), Node::new(0, 1));
//! let mut board = Board::new([], [(a, b)]);
//! assert!(board.are_adjacent(b, a));
//!
//! board.remove_edge((a, b)).unwrap();
//! assert!(!board.are_adjacent(a, b));
//! assert!(board.remove_edge((a, b)).is_err());
//! ```

use log::trace;
use rustc_hash::{FxHashMap, FxHashSet};

use super::world::World;
use crate::core::{Edge, Node, PlayerId, Result, RulesError};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    worlds: FxHashMap<Node, World>,
    /// Both directions of every edge. Nodes with no edges have no entry.
    neighbours: FxHashMap<Node, FxHashSet<Node>>,
}

impl Board {
    /// Build a board from worlds and undirected edges.
    ///
    /// A later world with the same node replaces an earlier one.
    pub fn new(worlds: impl IntoIterator<Item = World>, edges: impl IntoIterator<Item = Edge>) -> Self {
        let mut board = Self {
            worlds: worlds.into_iter().map(|world| (world.node, world)).collect(),
            neighbours: FxHashMap::default(),
        };
        for edge in edges {
            board.add_edge(edge);
        }
        board
    }

    /// Insert a world, returning the one it replaced.
    pub fn insert_world(&mut self, world: World) -> Option<World> {
        self.worlds.insert(world.node, world)
    }

    #[must_use]
    pub fn contains(&self, node: Node) -> bool {
        self.worlds.contains_key(&node)
    }

    pub fn world(&self, node: Node) -> Result<&World> {
        self.worlds.get(&node).ok_or(RulesError::InvalidWorld { node })
    }

    pub fn world_mut(&mut self, node: Node) -> Result<&mut World> {
        self.worlds.get_mut(&node).ok_or(RulesError::InvalidWorld { node })
    }

    pub fn worlds(&self) -> impl Iterator<Item = &World> {
        self.worlds.values()
    }

    /// Worlds whose owner is `player`.
    pub fn worlds_owned_by(&self, player: PlayerId) -> impl Iterator<Item = &World> {
        self.worlds.values().filter(move |world| world.owned_by(player))
    }

    #[must_use]
    pub fn world_count(&self) -> usize {
        self.worlds.len()
    }

    /// Connect `x` and `y` in both directions. Idempotent.
    pub fn add_edge(&mut self, (x, y): Edge) {
        trace!("add edge {} <-> {}", x, y);
        self.neighbours.entry(x).or_default().insert(y);
        self.neighbours.entry(y).or_default().insert(x);
    }

    /// Disconnect `x` and `y`.
    ///
    /// Fails with `MissingEdge` without touching the board if either
    /// direction is absent.
    pub fn remove_edge(&mut self, (x, y): Edge) -> Result<()> {
        if !self.are_adjacent(x, y) {
            return Err(RulesError::MissingEdge { from: x, to: y });
        }
        if !self.are_adjacent(y, x) {
            return Err(RulesError::MissingEdge { from: y, to: x });
        }

        trace!("remove edge {} <-> {}", x, y);
        self.unlink(x, y);
        if x != y {
            self.unlink(y, x);
        }
        Ok(())
    }

    fn unlink(&mut self, from: Node, to: Node) {
        if let Some(set) = self.neighbours.get_mut(&from) {
            set.remove(&to);
            if set.is_empty() {
                self.neighbours.remove(&from);
            }
        }
    }

    /// Whether `y` is a neighbour of `x`.
    #[must_use]
    pub fn are_adjacent(&self, x: Node, y: Node) -> bool {
        self.neighbours.get(&x).is_some_and(|set| set.contains(&y))
    }

    /// Neighbours of `node`. Empty for unknown nodes.
    pub fn neighbours(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        self.neighbours.get(&node).into_iter().flatten().copied()
    }

    /// Each undirected edge once, as `(lower, higher)`.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.neighbours
            .iter()
            .flat_map(|(&x, set)| set.iter().filter(move |&&y| x <= y).map(move |&y| (x, y)))
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }
}
