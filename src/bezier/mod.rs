//!
//! # Routines for describing, querying and manipulating Bezier curves
//!
//! This is the geometry kernel: every routine here is a pure function of its arguments. Curves are described
//! by the `BezierCurve` trait, so anything with a start point, an end point and two control points can be
//! evaluated, subdivided, bounded or intersected.
//!
//! The `intersection` module finds where curves cross each other, and the `path` module uses this to perform
//! boolean arithmetic on islands of path nodes.
//!

mod curve;
mod basis;
mod subdivide;
mod section;
mod derivative;
mod bounds;
mod solve;
mod nearest;

pub mod intersection;
pub mod path;

pub use self::curve::*;
pub use self::basis::*;
pub use self::subdivide::*;
pub use self::section::*;
pub use self::derivative::*;
pub use self::bounds::*;
pub use self::solve::*;
pub use self::nearest::*;

pub use super::geo::*;
