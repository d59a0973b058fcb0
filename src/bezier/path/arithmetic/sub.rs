use super::combine::*;
use super::bounding_mode::*;
use super::super::graph::*;
use super::super::error::*;

impl PathGraph {
    ///
    /// Cuts island `b` out of island `a`
    ///
    /// Island `b` is reversed if necessary so that it winds in the opposite direction to `a`, which lets it be
    /// used as a hole: when `a` surrounds `b`, `b` is moved into the loop containing `a` to form a hollow in it.
    /// When `b` surrounds `a`, nothing is left and both islands are removed.
    ///
    pub fn difference(&mut self, a: NodeId, b: NodeId) -> Result<BooleanOutcome, BooleanError> {
        let outcome = match self.prepare_islands(BooleanOp::Difference, a, b)? {
            Preparation::SameIsland     => BooleanOutcome::new(BoundingMode::LeftSurroundsRight, Some(a)),
            Preparation::Degenerate     => BooleanOutcome::degenerate(),

            Preparation::NoCrossings { loop_a, loop_b, mode } => {
                let outcome = match mode {
                    BoundingMode::NoCollision           => { self.remove_island(b); BooleanOutcome::new(mode, Some(a)) }
                    BoundingMode::LeftSurroundsRight    => { self.move_island(b, loop_a); BooleanOutcome::new(mode, Some(a)) }
                    BoundingMode::RightSurroundsLeft    => { self.remove_island(a); self.remove_island(b); BooleanOutcome::new(mode, None) }
                    _                                   => BooleanOutcome::degenerate()
                };

                self.remove_consumed_loop(loop_a, loop_b);
                outcome
            }

            Preparation::Crossings { loop_a, loop_b, samples } => {
                self.join_at_crossings(BooleanOp::Difference, a, b, loop_a, loop_b, samples)
            }
        };

        Ok(outcome)
    }
}
