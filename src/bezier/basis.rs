use super::super::coordinate::*;

///
/// The cubic bezier weighted basis function
///
#[inline]
pub fn basis<Point: Coordinate>(t: f32, w1: Point, w2: Point, w3: Point, w4: Point) -> Point {
    let t_squared           = t*t;
    let t_cubed             = t_squared*t;

    let one_minus_t         = 1.0-t;
    let one_minus_t_squared = one_minus_t*one_minus_t;
    let one_minus_t_cubed   = one_minus_t_squared*one_minus_t;

    w1*one_minus_t_cubed
        + w2*(3.0*one_minus_t_squared*t)
        + w3*(3.0*one_minus_t*t_squared)
        + w4*t_cubed
}

///
/// Performs de Casteljau's algorithm for a linear bezier curve
///
#[inline]
pub fn de_casteljau2<Point: Coordinate>(t: f32, w1: Point, w2: Point) -> Point {
    w1*(1.0-t) + w2*t
}

///
/// Performs de Casteljau's algorithm for a quadratic bezier curve
///
#[inline]
pub fn de_casteljau3<Point: Coordinate>(t: f32, w1: Point, w2: Point, w3: Point) -> Point {
    let wn1 = w1*(1.0-t) + w2*t;
    let wn2 = w2*(1.0-t) + w3*t;

    wn1*(1.0-t) + wn2*t
}

///
/// Performs de Casteljau's algorithm for a cubic bezier curve
///
#[inline]
pub fn de_casteljau4<Point: Coordinate>(t: f32, w1: Point, w2: Point, w3: Point, w4: Point) -> Point {
    let wn1 = w1*(1.0-t) + w2*t;
    let wn2 = w2*(1.0-t) + w3*t;
    let wn3 = w3*(1.0-t) + w4*t;

    de_casteljau3(t, wn1, wn2, wn3)
}

///
/// Returns the polynomial coefficients (a, b, c, d) such that at^3 + bt^2 + ct + d is the value of one
/// component of the curve at t
///
#[inline]
pub fn bezier_coefficients<Point: Coordinate>(dimension: usize, w1: &Point, w2: &Point, w3: &Point, w4: &Point) -> (f32, f32, f32, f32) {
    let (w1, w2, w3, w4) = (w1.get(dimension), w2.get(dimension), w3.get(dimension), w4.get(dimension));

    let d = w1;
    let c = 3.0*(w2-w1);
    let b = 3.0*(w3-w2)-c;
    let a = w4-w1-c-b;

    (a, b, c, d)
}
