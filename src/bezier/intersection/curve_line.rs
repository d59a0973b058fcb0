use super::super::curve::*;
use super::super::basis::*;
use super::super::solve::*;
use super::super::super::line::*;
use super::super::super::consts::*;
use super::super::super::coordinate::*;

///
/// Finds the t values where a curve crosses the infinite line through the two points of `line`
///
/// Return value is a vector of (curve_t, line_t, intersection_point) values. The line_t values are not
/// restricted to the range 0-1.
///
pub fn curve_intersects_ray<C: BezierCurve, L: Line<Point=C::Point>>(curve: &C, line: &L) -> Vec<(f32, f32, C::Point)>
where C::Point: Coordinate2D {
    // Based upon https://www.particleincell.com/2013/cubic-line-intersection/

    // Line coefficients
    let (p1, p2)    = line.points();
    let a           = p2.y()-p1.y();
    let b           = p1.x()-p2.x();
    let c           = p1.x()*(p1.y()-p2.y()) + p1.y()*(p2.x()-p1.x());

    // Bezier coefficients
    let (w2, w3)    = curve.control_points();
    let (w1, w4)    = (curve.start_point(), curve.end_point());
    let bx          = bezier_coefficients(0, &w1, &w2, &w3, &w4);
    let by          = bezier_coefficients(1, &w1, &w2, &w3, &w4);

    let p           = (
        a*bx.0+b*by.0,
        a*bx.1+b*by.1,
        a*bx.2+b*by.2,
        a*bx.3+b*by.3+c
    );

    let roots       = solve_cubic(p.0, p.1, p.2, p.3);

    roots.into_iter()
        .map(|t| {
            // Allow a small amount of 'slop' for items at the start/end as the root finding is not exact
            if t < 0.0 && t > -0.001 { 0.0 }
            else if t > 1.0 && t < 1.001 { 1.0 }
            else { t }
        })
        .filter(|t| *t >= 0.0 && *t <= 1.0)
        .map(|t| {
            let pos = de_casteljau4(t, w1, w2, w3, w4);
            let s   = line.pos_for_point(&pos);

            (t, s, pos)
        })
        .collect()
}

///
/// Find the t values where a curve intersects a line segment
///
/// Return value is a vector of (curve_t, line_t, intersection_point) values
///
pub fn curve_intersects_line<C: BezierCurve, L: Line<Point=C::Point>>(curve: &C, line: &L) -> Vec<(f32, f32, C::Point)>
where C::Point: Coordinate2D {
    // The line's length lets us convert the 'slop' distance into a t value
    let (p1, p2)    = line.points();
    let length      = p1.distance_to(&p2);
    let slop        = if length > 0.0 { SMALL_DISTANCE / length } else { 0.0 };

    curve_intersects_ray(curve, line)
        .into_iter()
        .filter(|(_t, s, _pos)| *s >= -slop && *s <= 1.0 + slop)
        .map(|(t, s, pos)| (t, s.max(0.0).min(1.0), pos))
        .collect()
}
