use super::graph::*;
use super::arithmetic::*;
use super::super::curve::*;
use super::super::super::coordinate::*;

impl PathGraph {
    ///
    /// Returns the point on the island containing `node` with the largest x coordinate
    ///
    /// Nothing in the island is to the right of this point, so a ray cast from here in the +x direction will not
    /// cross the island itself.
    ///
    pub fn extreme_point(&self, node: NodeId) -> Option<Coord2> {
        self.island_segments(node)
            .into_iter()
            .flat_map(|(_node, segment)| {
                segment.find_extremities()
                    .into_iter()
                    .map(move |t| segment.point_at_pos(t))
            })
            .fold(None, |best: Option<Coord2>, point| {
                match best {
                    Some(best) if best.x() >= point.x() => Some(best),
                    _                                   => Some(point)
                }
            })
    }

    ///
    /// Decides how two islands that do not intersect are related to each other
    ///
    /// Returns `RightSurroundsLeft` if island `a` is inside island `b`, `LeftSurroundsRight` if island `b` is inside
    /// island `a` or `NoCollision` if neither island is inside the other. The islands must not cross each other.
    ///
    pub fn classify_islands(&self, a: NodeId, b: NodeId) -> BoundingMode {
        let point_a = self.extreme_point(a);
        let point_b = self.extreme_point(b);

        if let Some(point_a) = point_a {
            if self.point_in_island(b, point_a) {
                return BoundingMode::RightSurroundsLeft;
            }
        }

        if let Some(point_b) = point_b {
            if self.point_in_island(a, point_b) {
                return BoundingMode::LeftSurroundsRight;
            }
        }

        BoundingMode::NoCollision
    }
}
