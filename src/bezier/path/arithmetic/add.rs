use super::combine::*;
use super::bounding_mode::*;
use super::super::graph::*;
use super::super::error::*;

impl PathGraph {
    ///
    /// Combines two closed islands so that the result covers everything inside either of them
    ///
    /// The result is left in the loop containing island `a`. Islands that don't overlap are both moved into this loop
    /// unchanged. Island `b` may be reversed so that it winds in the same direction as `a`.
    ///
    pub fn union(&mut self, a: NodeId, b: NodeId) -> Result<BooleanOutcome, BooleanError> {
        let outcome = match self.prepare_islands(BooleanOp::Union, a, b)? {
            Preparation::SameIsland     => BooleanOutcome::new(BoundingMode::LeftSurroundsRight, Some(a)),
            Preparation::Degenerate     => BooleanOutcome::degenerate(),

            Preparation::NoCrossings { loop_a, loop_b, mode } => {
                let outcome = match mode {
                    BoundingMode::NoCollision           => { self.move_island(b, loop_a); BooleanOutcome::new(mode, Some(a)) }
                    BoundingMode::LeftSurroundsRight    => { self.remove_island(b); BooleanOutcome::new(mode, Some(a)) }
                    BoundingMode::RightSurroundsLeft    => { self.remove_island(a); self.move_island(b, loop_a); BooleanOutcome::new(mode, Some(b)) }
                    _                                   => BooleanOutcome::degenerate()
                };

                self.remove_consumed_loop(loop_a, loop_b);
                outcome
            }

            Preparation::Crossings { loop_a, loop_b, samples } => {
                self.join_at_crossings(BooleanOp::Union, a, b, loop_a, loop_b, samples)
            }
        };

        Ok(outcome)
    }
}
