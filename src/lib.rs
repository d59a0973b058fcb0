//!
//! # flo_island_boolean
//!
//! Boolean arithmetic (union, intersection and difference) on closed 'islands' of path nodes made up of cubic
//! bezier curves.
//!
//! The library is built up in layers: `coordinate`, `geo` and `line` describe points, bounds and straight lines,
//! `bezier` contains the curve kernel (evaluation, subdivision, bounds, root solving), `bezier::intersection`
//! finds where curves cross and `bezier::path` stores islands of nodes in an arena and combines them.
//!
//! ```
//! # use flo_island_boolean::*;
//! # use flo_island_boolean::bezier::path::*;
//! let mut graph   = PathGraph::new();
//! let target      = graph.add_loop();
//!
//! let square1     = IslandBuilder::start(Coord2(0.0, 0.0)).line_to(Coord2(2.0, 0.0)).line_to(Coord2(2.0, 2.0)).line_to(Coord2(0.0, 2.0)).build(&mut graph, target).unwrap();
//! let square2     = IslandBuilder::start(Coord2(1.0, 1.0)).line_to(Coord2(3.0, 1.0)).line_to(Coord2(3.0, 3.0)).line_to(Coord2(1.0, 3.0)).build(&mut graph, target).unwrap();
//!
//! let result      = graph.union(square1, square2).unwrap();
//! assert!(result.mode == BoundingMode::Collision);
//! assert!((graph.signed_area(result.node.unwrap()) - 7.0).abs() < 0.01);
//! ```
//!

#![warn(bare_trait_objects)]

extern crate roots;
extern crate itertools;
extern crate slotmap;
extern crate serde;

#[macro_use]
extern crate serde_derive;

#[macro_use]
extern crate log;

pub mod consts;

pub mod bezier;
pub mod line;

pub mod coordinate;
pub use self::coordinate::*;

pub mod geo;
pub use self::geo::*;

pub use self::bezier::BezierCurve;
pub use self::line::Line;
