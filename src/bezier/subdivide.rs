use super::basis::*;
use super::super::coordinate::*;

///
/// Subdivides a cubic bezier curve at a particular point, returning the weights of
/// the two component curves
///
pub fn subdivide4<Point: Coordinate>(t: f32, w1: Point, w2: Point, w3: Point, w4: Point) ->
    ((Point, Point, Point, Point),
    (Point, Point, Point, Point)) {
    // Weights (from de casteljau)
    let wn1 = w1*(1.0-t) + w2*t;
    let wn2 = w2*(1.0-t) + w3*t;
    let wn3 = w3*(1.0-t) + w4*t;

    // Further refine the weights
    let wnn1 = wn1*(1.0-t) + wn2*t;
    let wnn2 = wn2*(1.0-t) + wn3*t;

    // Get the point at which the two curves join
    let p = de_casteljau2(t, wnn1, wnn2);

    // Curves are built from the weight calculations and the final points
    ((w1, wn1, wnn1, p), (p, wnn2, wn3, w4))
}

///
/// Subdivides a cubic bezier at several t values at once, returning the weights of each of the resulting sections
///
/// The t values must be sorted in ascending order. Values of 0 or 1 produce sections with no length.
///
pub fn subdivide_many4<Point: Coordinate>(t_values: &[f32], w1: Point, w2: Point, w3: Point, w4: Point) -> Vec<(Point, Point, Point, Point)> {
    let mut sections    = Vec::with_capacity(t_values.len()+1);
    let mut remaining   = (w1, w2, w3, w4);
    let mut last_t      = 0.0;

    for t in t_values.iter() {
        // Map the t value on the original curve onto the remaining section of the curve
        let local_t = if last_t >= 1.0 { 0.0 } else { ((t-last_t)/(1.0-last_t)).max(0.0).min(1.0) };

        let (before, after) = subdivide4(local_t, remaining.0, remaining.1, remaining.2, remaining.3);
        sections.push(before);

        remaining   = after;
        last_t      = *t;
    }

    sections.push(remaining);
    sections
}
