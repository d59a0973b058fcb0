use super::super::geo::*;
use super::super::coordinate::*;

///
/// Represents a straight line
///
pub trait Line : Geo {
    ///
    /// Creates a new line from points
    ///
    fn from_points(p1: Self::Point, p2: Self::Point) -> Self;

    ///
    /// Returns the two points that mark the start and end of this line
    ///
    fn points(&self) -> (Self::Point, Self::Point);

    ///
    /// Given a value t from 0 to 1, returns a point on this line
    ///
    #[inline]
    fn point_at_pos(&self, t: f32) -> Self::Point {
        let (from, to) = self.points();
        from + (to-from)*t
    }

    ///
    /// Returns the t value of the point on this line that's closest to the specified point
    ///
    /// The result is not clamped to the range 0-1, so this can be used to find where a point lies along an
    /// infinite line. A line with no length returns 0.
    ///
    #[inline]
    fn pos_for_point(&self, point: &Self::Point) -> f32 {
        let (from, to)  = self.points();
        let direction   = to-from;
        let length_sq   = direction.dot(&direction);

        if length_sq == 0.0 {
            0.0
        } else {
            (*point-from).dot(&direction) / length_sq
        }
    }
}

///
/// Extra operations available for 2D lines
///
pub trait Line2D : Line
where Self::Point: Coordinate2D {
    ///
    /// Returns a value indicating which side of the line a point is on: 1 for the left, -1 for the right and
    /// 0 for points (very nearly) on the line
    ///
    fn which_side(&self, point: &Self::Point) -> i8 {
        let (from, to)  = self.points();
        let side        = (to-from).cross(&(*point-from));

        if side.abs() < 0.000001 {
            0
        } else if side > 0.0 {
            1
        } else {
            -1
        }
    }
}

impl<L: Line> Line2D for L
where L::Point: Coordinate2D {
}

impl<Point: Coordinate+Clone> Geo for (Point, Point) {
    type Point = Point;
}

///
/// Simplest line is just a tuple of two points
///
impl<Point: Coordinate+Clone> Line for (Point, Point) {
    ///
    /// Creates a new line from points
    ///
    #[inline]
    fn from_points(p1: Self::Point, p2: Self::Point) -> Self {
        (p1, p2)
    }

    ///
    /// Returns the two points that mark the start and end of this line
    ///
    #[inline]
    fn points(&self) -> (Self::Point, Self::Point) {
        self.clone()
    }
}
