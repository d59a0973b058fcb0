//!
//! # Traits for basic geometric definitions
//!
//! The `Geo` trait can be implemented by any type that has a particular type of coordinate: for example,
//! implementations of `BezierCurve` need to implement `Geo` in order to describe what type they use for
//! coordinates.
//!
//! `BoundingBox` describes axis-aligned bounding boxes. These are used to quickly reject pairs of curve
//! sections that cannot intersect.
//!

mod geo;
mod bounding_box;

pub use self::geo::*;
pub use self::bounding_box::*;
pub use super::coordinate::*;
