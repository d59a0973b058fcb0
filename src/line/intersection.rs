use super::line::*;
use super::super::consts::*;
use super::super::coordinate::*;

///
/// Finds the t values where two infinite lines meet
///
/// Returns `None` if the lines are parallel (or either line has no length). The t values are not restricted to
/// the range 0-1.
///
pub fn ray_intersects_ray<L: Line>(line1: &L, line2: &L) -> Option<(f32, f32)>
where L::Point: Coordinate2D {
    let line1_points = line1.points();
    let line2_points = line2.points();

    let ((x1, y1), (x2, y2)) = (line1_points.0.coords(), line1_points.1.coords());
    let ((x3, y3), (x4, y4)) = (line2_points.0.coords(), line2_points.1.coords());

    let denominator = (y4-y3)*(x2-x1) - (x4-x3)*(y2-y1);

    // The denominator is |line1||line2|sin(angle), so this tests the angle between the lines
    let length1     = ((x2-x1)*(x2-x1) + (y2-y1)*(y2-y1)).sqrt();
    let length2     = ((x4-x3)*(x4-x3) + (y4-y3)*(y4-y3)).sqrt();

    if length1 == 0.0 || length2 == 0.0 || denominator.abs() <= PARALLEL_EPSILON * length1 * length2 {
        return None;
    }

    let ua = ((x4-x3)*(y1-y3) - (y4-y3)*(x1-x3)) / denominator;
    let ub = ((x2-x1)*(y1-y3) - (y2-y1)*(x1-x3)) / denominator;

    Some((ua, ub))
}

///
/// Returns the t values (on line1 and line2) where two line segments intersect
///
/// Parallel and collinear lines are considered not to intersect. Positions within `SMALL_T_DISTANCE` of the
/// ends of either line are clamped onto the line.
///
pub fn line_intersects_line<L: Line>(line1: &L, line2: &L) -> Option<(f32, f32)>
where L::Point: Coordinate2D {
    let (ua, ub) = ray_intersects_ray(line1, line2)?;

    let ua = clamp_t(ua)?;
    let ub = clamp_t(ub)?;

    Some((ua, ub))
}

///
/// Returns the point at which two line segments intersect (if they intersect)
///
pub fn line_intersection_point<L: Line>(line1: &L, line2: &L) -> Option<L::Point>
where L::Point: Coordinate2D {
    line_intersects_line(line1, line2)
        .map(|(ua, _ub)| line1.point_at_pos(ua))
}

///
/// Pulls t values that are just outside of the 0-1 range back onto the line, or returns None for values
/// that are too far away
///
#[inline]
fn clamp_t(t: f32) -> Option<f32> {
    if t < -SMALL_T_DISTANCE || t > 1.0 + SMALL_T_DISTANCE {
        None
    } else {
        Some(t.max(0.0).min(1.0))
    }
}
