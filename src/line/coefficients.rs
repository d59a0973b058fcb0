use super::line::*;
use super::super::coordinate::*;

///
/// Computes the coefficients (a, b, c) of the equation ax+by+c=0 for the infinite line through a line segment
///
/// (a, b) is the unit normal to the left of the direction of the line, so the distances returned by
/// `distance_from_coefficients` are positive on the same side that `which_side` reports as 1. A line whose
/// start and end points are the same has no direction, and (0, 0, 0) is returned for it.
///
pub fn line_coefficients_2d<L: Line>(line: &L) -> (f32, f32, f32)
where L::Point: Coordinate2D {
    let (from, to)  = line.points();
    let direction   = to - from;
    let length      = direction.magnitude();

    if length == 0.0 {
        return (0.0, 0.0, 0.0);
    }

    let a = -direction.y() / length;
    let b = direction.x() / length;
    let c = -(a*from.x() + b*from.y());

    (a, b, c)
}

///
/// Returns the signed distance of a point from the line described by a set of coefficients
///
#[inline]
pub fn distance_from_coefficients<P: Coordinate2D>(point: &P, (a, b, c): (f32, f32, f32)) -> f32 {
    a*point.x() + b*point.y() + c
}
