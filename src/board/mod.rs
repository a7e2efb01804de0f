//! Board state: resources, worlds, and the graph connecting them.

pub mod resources;
pub mod world;
pub mod graph;

pub use resources::Resources;
pub use world::World;
pub use graph::Board;
