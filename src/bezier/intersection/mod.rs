//!
//! # Finding intersections between curves and lines
//!
//! Lines are intersected with each other in closed form, curves are intersected with lines by solving the cubic
//! formed by substituting the line equation into the curve's polynomial, and curves are intersected with each
//! other by recursive bounding-box subdivision.
//!

mod curve_line;
mod curve_curve_bbox;

pub use self::curve_line::*;
pub use self::curve_curve_bbox::*;

use super::curve::*;
use super::super::line::*;
use super::super::consts::*;
use super::super::coordinate::*;

///
/// Returns true if a curve's control points lie on the line between its start and end points (so the curve can be
/// treated as a straight line)
///
pub fn curve_is_straight<C: BezierCurve>(curve: &C) -> bool
where C::Point: Coordinate2D {
    let start       = curve.start_point();
    let end         = curve.end_point();
    let (cp1, cp2)  = curve.control_points();

    if start.is_near_to(&end, SMALL_DISTANCE) {
        // A curve that begins and ends at the same point can only be straight if it's a point
        return cp1.is_near_to(&start, SMALL_DISTANCE) && cp2.is_near_to(&start, SMALL_DISTANCE);
    }

    let (a, b, c)   = line_coefficients_2d(&(start, end));
    let chord       = (start, end);

    [cp1, cp2].iter().all(|cp| {
        let distance    = distance_from_coefficients(cp, (a, b, c));
        let t           = chord.pos_for_point(cp);

        distance.abs() < SMALL_DISTANCE && t >= 0.0 && t <= 1.0
    })
}

///
/// Finds the (t1, t2) values where two curves intersect, choosing the algorithm from the shape of the curves
///
/// Straight curves are intersected as lines (which is exact), a straight curve and a curved one are intersected by
/// solving a cubic, and two curved curves are intersected by bounding-box subdivision.
///
pub fn curve_intersects_curve<C1: BezierCurve, C2: BezierCurve<Point=C1::Point>>(curve1: &C1, curve2: &C2, accuracy: f32) -> Vec<(f32, f32)>
where C1::Point: Coordinate2D {
    let line1 = if curve_is_straight(curve1) { Some((curve1.start_point(), curve1.end_point())) } else { None };
    let line2 = if curve_is_straight(curve2) { Some((curve2.start_point(), curve2.end_point())) } else { None };

    match (line1, line2) {
        (Some(line1), Some(line2))  => line_intersects_line(&line1, &line2).into_iter()
            .map(|(s1, s2)| (line_t_to_curve_t(curve1, &line1, s1), line_t_to_curve_t(curve2, &line2, s2)))
            .collect(),
        (Some(line1), None)         => curve_intersects_line(curve2, &line1).into_iter()
            .map(|(t2, s1, _pos)| (line_t_to_curve_t(curve1, &line1, s1), t2))
            .collect(),
        (None, Some(line2))         => curve_intersects_line(curve1, &line2).into_iter()
            .map(|(t1, s2, _pos)| (t1, line_t_to_curve_t(curve2, &line2, s2)))
            .collect(),
        (None, None)                => curve_intersects_curve_bbox(curve1, curve2, accuracy, MAX_CLIP_DEPTH)
    }
}

///
/// Straight curves whose control points are not evenly spaced don't have the same t values as the line they
/// follow, so this maps a t value on the line to the equivalent t value on the curve
///
fn line_t_to_curve_t<C: BezierCurve>(curve: &C, line: &(C::Point, C::Point), line_t: f32) -> f32
where C::Point: Coordinate2D {
    let point = line.point_at_pos(line_t);
    curve.t_for_point(&point).unwrap_or(line_t)
}
