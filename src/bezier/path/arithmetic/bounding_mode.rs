use super::super::graph::*;

///
/// How a pair of islands were combined
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundingMode {
    /// The islands do not overlap
    NoCollision,

    /// The islands crossed each other and were combined into a new boundary
    Collision,

    /// The islands could not be combined: their intersections are ambiguous (tangents, overlapping segments or
    /// more than two segments meeting at a point)
    Degenerate,

    /// The first island completely surrounds the second
    LeftSurroundsRight,

    /// The second island completely surrounds the first
    RightSurroundsLeft
}

///
/// The result of a boolean operation on two islands
///
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BooleanOutcome {
    /// How the islands were related to each other
    pub mode: BoundingMode,

    /// A node on the island that contains the result (None if the result is empty)
    pub node: Option<NodeId>
}

impl BooleanOutcome {
    ///
    /// Creates a new outcome
    ///
    #[inline]
    pub fn new(mode: BoundingMode, node: Option<NodeId>) -> BooleanOutcome {
        BooleanOutcome { mode, node }
    }

    ///
    /// An outcome indicating that the islands could not be combined
    ///
    #[inline]
    pub fn degenerate() -> BooleanOutcome {
        BooleanOutcome { mode: BoundingMode::Degenerate, node: None }
    }
}

///
/// The boolean operations that can be performed on a pair of islands
///
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BooleanOp {
    /// Everything inside either island
    Union,

    /// Everything inside both islands
    Intersection,

    /// Everything inside the first island but not the second
    Difference
}
