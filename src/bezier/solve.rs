use super::curve::*;
use super::basis::*;
use super::super::consts::*;
use super::super::coordinate::*;

use roots::{find_roots_quadratic, find_roots_cubic, find_roots_quartic, Roots};

const CLOSE_ENOUGH: f32 = SMALL_DISTANCE * 50.0;

/// Number of newton iterations used to polish the roots returned by the closed-form solvers
const POLISH_ITERATIONS: usize = 2;

///
/// Converts a roots object into a vector
///
#[inline]
fn roots_to_vec(roots: Roots<f32>) -> Vec<f32> {
    match roots {
        Roots::No(_)    => vec![],
        Roots::One(r)   => r.to_vec(),
        Roots::Two(r)   => r.to_vec(),
        Roots::Three(r) => r.to_vec(),
        Roots::Four(r)  => r.to_vec()
    }
}

///
/// True if the leading coefficient is so small compared to the others that the polynomial should be treated as
/// having a lower degree
///
#[inline]
fn is_degenerate(leading: f32, others: &[f32]) -> bool {
    let scale = others.iter().fold(0.0f32, |scale, coeff| scale.max(coeff.abs()));

    leading.abs() <= DEGENERATE_COEFFICIENT * scale.max(DEGENERATE_COEFFICIENT)
}

///
/// Improves the accuracy of a root using Newton's method (coefficients are highest power first)
///
fn polish_root(coefficients: &[f32], root: f32) -> f32 {
    let mut root = root;

    for _ in 0..POLISH_ITERATIONS {
        // Horner's method for the value and the derivative at the same time
        let (value, derivative) = coefficients.iter()
            .fold((0.0f32, 0.0f32), |(value, derivative), coeff| (value*root + coeff, derivative*root + value));

        if derivative.abs() < PARALLEL_EPSILON || !value.is_finite() {
            break;
        }

        let next_root = root - value/derivative;
        if !next_root.is_finite() {
            break;
        }

        root = next_root;
    }

    root
}

///
/// Solves a linear equation of the form bt + c = 0
///
pub fn solve_linear(b: f32, c: f32) -> Vec<f32> {
    if b == 0.0 {
        vec![]
    } else {
        vec![-c/b]
    }
}

///
/// Finds the real roots of the quadratic at^2 + bt + c = 0
///
/// If `a` is nearly zero compared to the other coefficients, this solves the equation as a linear one
///
pub fn solve_quadratic(a: f32, b: f32, c: f32) -> Vec<f32> {
    if is_degenerate(a, &[b, c]) {
        solve_linear(b, c)
    } else {
        roots_to_vec(find_roots_quadratic(a, b, c))
    }
}

///
/// Finds the real roots of the cubic at^3 + bt^2 + ct + d = 0
///
/// Nearly-degenerate cubics are solved as quadratics to avoid dividing by a value that's almost zero
///
pub fn solve_cubic(a: f32, b: f32, c: f32, d: f32) -> Vec<f32> {
    if is_degenerate(a, &[b, c, d]) {
        solve_quadratic(b, c, d)
    } else {
        roots_to_vec(find_roots_cubic(a, b, c, d))
            .into_iter()
            .map(|root| polish_root(&[a, b, c, d], root))
            .collect()
    }
}

///
/// Finds the real roots of the quartic at^4 + bt^3 + ct^2 + dt + e = 0
///
pub fn solve_quartic(a: f32, b: f32, c: f32, d: f32, e: f32) -> Vec<f32> {
    if is_degenerate(a, &[b, c, d, e]) {
        solve_cubic(b, c, d, e)
    } else {
        roots_to_vec(find_roots_quartic(a, b, c, d, e))
            .into_iter()
            .map(|root| polish_root(&[a, b, c, d, e], root))
            .collect()
    }
}

///
/// Pulls roots that are a very small distance outside the range 0-1 back into the range, and removes
/// any roots that are further away
///
pub fn clip_roots_to_curve(roots: Vec<f32>) -> Vec<f32> {
    let mut roots = roots;

    // Clip to 0/1 for small ranges outside
    for root in roots.iter_mut() {
        if *root < 0.0 && *root > -0.001 { *root = 0.0 }
        if *root > 1.0 && *root < 1.001 { *root = 1.0 }
    }

    // Remove any roots outside the range of the function
    roots.retain(|r| r >= &0.0 && r <= &1.0);

    roots
}

///
/// Solves for t in a single dimension for a bezier curve (finds the point(s) where the basis
/// function evaluates to p)
///
pub fn solve_basis_for_t(w1: f32, w2: f32, w3: f32, w4: f32, p: f32) -> Vec<f32> {
    // Compute the coefficients for the cubic bezier function
    let (a, b, c, d) = bezier_coefficients(0, &w1, &w2, &w3, &w4);

    // Solve for p
    clip_roots_to_curve(solve_cubic(a, b, c, d-p))
}

///
/// Given a point that is close to or on the specified bezier curve, solves the 't' value that can
/// be used to retrieve it
///
pub fn solve_curve_for_t<C: BezierCurve>(curve: &C, point: &C::Point) -> Option<f32> {
    let close_enough_sq = CLOSE_ENOUGH * CLOSE_ENOUGH;

    let p1              = curve.start_point();
    let (p2, p3)        = curve.control_points();
    let p4              = curve.end_point();

    // Solve the basis function for each of the point's dimensions and pick the first that appears close enough (and within the range 0-1)
    for dimension in 0..(C::Point::len()) {
        // Solve for this dimension
        let (w1, w2, w3, w4)    = (p1.get(dimension), p2.get(dimension), p3.get(dimension), p4.get(dimension));
        let possible_t_values   = solve_basis_for_t(w1, w2, w3, w4, point.get(dimension));

        for possible_t in possible_t_values {
            // If this is an accurate enough solution, return this as the t value
            let point_at_t  = curve.point_at_pos(possible_t);
            let offset      = point_at_t - *point;
            if offset.dot(&offset) <= close_enough_sq {
                return Some(possible_t);
            }
        }
    }

    // No solution: result is None
    None
}
