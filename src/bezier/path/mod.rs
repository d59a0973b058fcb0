//!
//! # Islands of path nodes
//!
//! A `PathGraph` is an arena of nodes. Each node has a position, a pair of tangents and links to the nodes before
//! and after it: a chain of linked nodes is an 'island', and the curve between a node and the following node is a
//! 'segment'. Nodes are stored in loops, which can contain any number of islands.
//!
//! Closed islands can be combined using `union`, `intersection` and `difference`.
//!

mod graph;
mod island;
mod segment;
mod winding;
mod builder;
mod error;
mod intersection;
mod ray;
mod classify;
mod arithmetic;

pub use self::graph::*;
pub use self::island::*;
pub use self::segment::*;
pub use self::winding::*;
pub use self::builder::*;
pub use self::error::*;
pub use self::intersection::*;
pub use self::ray::*;
pub use self::arithmetic::*;
