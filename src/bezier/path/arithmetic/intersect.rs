use super::combine::*;
use super::bounding_mode::*;
use super::super::graph::*;
use super::super::error::*;

impl PathGraph {
    ///
    /// Combines two closed islands so that the result covers only the area that's inside both of them
    ///
    /// The result is left in the loop containing island `a`. When one island surrounds the other, a copy of the
    /// inner island is made in this loop and both of the original islands are removed. Islands that don't overlap
    /// have no intersection, so both are removed.
    ///
    pub fn intersection(&mut self, a: NodeId, b: NodeId) -> Result<BooleanOutcome, BooleanError> {
        let outcome = match self.prepare_islands(BooleanOp::Intersection, a, b)? {
            Preparation::SameIsland     => BooleanOutcome::new(BoundingMode::LeftSurroundsRight, Some(a)),
            Preparation::Degenerate     => BooleanOutcome::degenerate(),

            Preparation::NoCrossings { loop_a, loop_b, mode } => {
                let inner = match mode {
                    BoundingMode::LeftSurroundsRight    => Some(b),
                    BoundingMode::RightSurroundsLeft    => Some(a),
                    _                                   => None
                };

                let result = inner.and_then(|inner| self.clone_island(inner, loop_a));

                self.remove_island(a);
                self.remove_island(b);
                self.remove_consumed_loop(loop_a, loop_b);

                BooleanOutcome::new(mode, result)
            }

            Preparation::Crossings { loop_a, loop_b, samples } => {
                self.join_at_crossings(BooleanOp::Intersection, a, b, loop_a, loop_b, samples)
            }
        };

        Ok(outcome)
    }
}
