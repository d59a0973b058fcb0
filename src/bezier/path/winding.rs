use super::graph::*;
use super::super::super::coordinate::*;

///
/// The direction that an island winds in
///
/// (Directions assume that a positive y value indicates an upwards direction)
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathDirection {
    Clockwise,
    Anticlockwise
}

impl PathDirection {
    ///
    /// The direction that winds the other way
    ///
    #[inline]
    pub fn reversed(self) -> PathDirection {
        match self {
            PathDirection::Clockwise        => PathDirection::Anticlockwise,
            PathDirection::Anticlockwise    => PathDirection::Clockwise
        }
    }
}

///
/// Returns the signed area between a cubic bezier curve and the origin
///
/// Summing this over every segment of a closed path produces the area enclosed by the path: it's positive when
/// the path winds anticlockwise
///
pub fn curve_signed_area(w1: Coord2, w2: Coord2, w3: Coord2, w4: Coord2) -> f32 {
    let (x0, y0) = w1.coords();
    let (x1, y1) = w2.coords();
    let (x2, y2) = w3.coords();
    let (x3, y3) = w4.coords();

    // Green's theorem applied to the bezier polynomial
    3.0 * ((y3 - y0) * (x1 + x2) - (x3 - x0) * (y1 + y2)
        + y1 * (x0 - x2) - x1 * (y0 - y2)
        + y3 * (x2 + x0/3.0) - x3 * (y2 + y0/3.0)) / 20.0
}

impl PathGraph {
    ///
    /// Computes the signed area enclosed by the island containing `node`
    ///
    /// Anticlockwise islands have a positive area and clockwise islands a negative one. Open islands are treated
    /// as if they were closed by a straight line.
    ///
    pub fn signed_area(&self, node: NodeId) -> f32 {
        let island = self.island_nodes(node);

        let area: f32 = island.iter()
            .filter_map(|island_node| self.segment(*island_node))
            .map(|segment| {
                let (w1, w2, w3, w4) = segment.points();
                curve_signed_area(w1, w2, w3, w4)
            })
            .sum();

        // Close open islands with a line back to the start
        let closing = match (island.first(), island.last()) {
            (Some(first), Some(last)) if self.next(*last).is_none() => {
                match (self.position(*last), self.position(*first)) {
                    (Some(end), Some(start))    => (end.x()*start.y() - start.x()*end.y()) / 2.0,
                    _                           => 0.0
                }
            }

            _ => 0.0
        };

        area + closing
    }

    ///
    /// Returns the direction that the island containing `node` winds in
    ///
    pub fn winding(&self, node: NodeId) -> PathDirection {
        if self.signed_area(node) < 0.0 {
            PathDirection::Clockwise
        } else {
            PathDirection::Anticlockwise
        }
    }

    ///
    /// True if the island containing `node` winds clockwise
    ///
    #[inline]
    pub fn is_clockwise(&self, node: NodeId) -> bool {
        self.winding(node) == PathDirection::Clockwise
    }
}
