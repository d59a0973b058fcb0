use super::curve::*;
use super::solve::*;
use super::basis::*;
use super::super::line::*;
use super::super::consts::*;
use super::super::coordinate::*;

/// Number of samples used to find a starting point for the search for the nearest point on a full cubic curve
const NEAREST_SAMPLES: usize = 16;

/// Number of newton iterations used to refine the nearest point
const NEAREST_ITERATIONS: usize = 8;

///
/// Returns the t value of the point on a curve that's nearest to the specified point
///
/// Curves whose cubic coefficients vanish (quadratic or linear curves expressed as cubics) are solved exactly: the
/// nearest point is a root of a cubic in that case. Full cubic curves need a quintic to be solved, so they are
/// sampled and refined with Newton's method instead.
///
pub fn nearest_t_on_curve<C: BezierCurve>(curve: &C, point: &C::Point) -> f32 {
    let w1          = curve.start_point();
    let (w2, w3)    = curve.control_points();
    let w4          = curve.end_point();

    // Polynomial coefficients for each component
    let coefficients = (0..C::Point::len())
        .map(|dimension| bezier_coefficients(dimension, &w1, &w2, &w3, &w4))
        .collect::<Vec<_>>();

    let cubic_size  = coefficients.iter().fold(0.0f32, |size, (a, _, _, _)| size.max(a.abs()));
    let other_size  = coefficients.iter().fold(0.0f32, |size, (_, b, c, _)| size.max(b.abs()).max(c.abs()));

    // Candidate t values: the ends of the curve are always candidates
    let mut candidates = vec![0.0, 1.0];

    if cubic_size <= DEGENERATE_COEFFICIENT * other_size.max(1.0) {
        // Curve is really quadratic: (B(t)-P).B'(t) = 0 is a cubic
        let mut k3 = 0.0;
        let mut k2 = 0.0;
        let mut k1 = 0.0;
        let mut k0 = 0.0;

        for (dimension, (_a, b, c, d)) in coefficients.iter().enumerate() {
            let d = d - point.get(dimension);

            k3 += 2.0*b*b;
            k2 += 3.0*b*c;
            k1 += c*c + 2.0*b*d;
            k0 += c*d;
        }

        candidates.extend(clip_roots_to_curve(solve_cubic(k3, k2, k1, k0)));
    } else {
        // Pick the closest sample, then refine it
        let (best_t, _) = (0..=NEAREST_SAMPLES)
            .map(|sample| (sample as f32) / (NEAREST_SAMPLES as f32))
            .map(|t| (t, curve.point_at_pos(t).distance_to(point)))
            .fold((0.0, f32::MAX), |(best_t, best_dist), (t, dist)| if dist < best_dist { (t, dist) } else { (best_t, best_dist) });

        candidates.push(refine_nearest_t(&coefficients, point, best_t));
    }

    // Pick the candidate that's actually closest
    candidates.into_iter()
        .map(|t| (t, curve.point_at_pos(t).distance_to(point)))
        .fold((0.0, f32::MAX), |(best_t, best_dist), (t, dist)| if dist < best_dist { (t, dist) } else { (best_t, best_dist) })
        .0
}

///
/// Uses Newton's method to move t towards the nearest point to `point`
///
fn refine_nearest_t<Point: Coordinate>(coefficients: &[(f32, f32, f32, f32)], point: &Point, t: f32) -> f32 {
    let mut t = t;

    for _ in 0..NEAREST_ITERATIONS {
        // f(t) = (B(t)-P).B'(t), f'(t) = B'(t).B'(t) + (B(t)-P).B''(t)
        let mut f       = 0.0;
        let mut f_prime = 0.0;

        for (dimension, (a, b, c, d)) in coefficients.iter().enumerate() {
            let pos         = ((a*t + b)*t + c)*t + d - point.get(dimension);
            let first       = (3.0*a*t + 2.0*b)*t + c;
            let second      = 6.0*a*t + 2.0*b;

            f       += pos*first;
            f_prime += first*first + pos*second;
        }

        if f_prime.abs() < PARALLEL_EPSILON {
            break;
        }

        let next_t = (t - f/f_prime).max(0.0).min(1.0);
        if (next_t-t).abs() < SMALL_T_DISTANCE {
            t = next_t;
            break;
        }

        t = next_t;
    }

    t
}

///
/// Returns the t value of the point on a line segment that's nearest to the specified point
///
/// Unlike `Line::pos_for_point`, the result is clamped to the ends of the line.
///
pub fn nearest_t_on_line<L: Line>(line: &L, point: &L::Point) -> f32 {
    line.pos_for_point(point).max(0.0).min(1.0)
}
