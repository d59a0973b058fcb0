use super::basis::*;
use super::solve::*;
use super::super::geo::*;
use super::super::coordinate::*;

///
/// Finds the t values of the extremities of a curve (these are the points at which
/// the x or y value is at a minimum or maximum)
///
/// The start and end of the curve (t=0 and t=1) are always included.
///
pub fn find_extremities<Point: Coordinate>(w1: Point, w2: Point, w3: Point, w4: Point) -> Vec<f32> {
    // The 't' values where this curve has extremities we need to examine
    let mut t_extremes = vec![0.0, 1.0];

    // The derivative is a quadratic function, so we can compute the locations of these (t values) by solving the quadratic formula for them
    for component_index in 0..Point::len() {
        // Fetch the parameters for this component
        let p1 = w1.get(component_index);
        let p2 = w2.get(component_index);
        let p3 = w3.get(component_index);
        let p4 = w4.get(component_index);

        // Compute the coefficients of the derivative
        let a = (-p1 + p2*3.0 - p3*3.0 + p4)*3.0;
        let b = (p1 - p2*2.0 + p3)*6.0;
        let c = (p2 - p1)*3.0;

        // Extremities are points at which the curve has a 0 gradient (in any of its dimensions)
        t_extremes.extend(solve_quadratic(a, b, c).into_iter()
            .filter(|t| *t > 0.0 && *t < 1.0));
    }

    t_extremes
}

///
/// Finds the minimum and maximum values of one component of a cubic bezier curve
///
pub fn bounds_1d_cubic(w1: f32, w2: f32, w3: f32, w4: f32) -> (f32, f32) {
    let a = (-w1 + w2*3.0 - w3*3.0 + w4)*3.0;
    let b = (w1 - w2*2.0 + w3)*6.0;
    let c = (w2 - w1)*3.0;

    let mut min = w1.min(w4);
    let mut max = w1.max(w4);

    for t in solve_quadratic(a, b, c) {
        if t > 0.0 && t < 1.0 {
            let value = basis(t, w1, w2, w3, w4);

            min = min.min(value);
            max = max.max(value);
        }
    }

    (min, max)
}

///
/// Finds the minimum and maximum values of one component of a quadratic bezier curve
///
pub fn bounds_1d_quadratic(w1: f32, w2: f32, w3: f32) -> (f32, f32) {
    let mut min = w1.min(w3);
    let mut max = w1.max(w3);

    // The derivative is 2((w2-w1) + t(w1-2w2+w3)), so there's a single extremity
    let denominator = w1 - 2.0*w2 + w3;

    if denominator != 0.0 {
        let t = (w1 - w2) / denominator;

        if t > 0.0 && t < 1.0 {
            let value = de_casteljau3(t, w1, w2, w3);

            min = min.min(value);
            max = max.max(value);
        }
    }

    (min, max)
}

///
/// Finds the upper and lower points in a cubic curve's bounding box
///
pub fn bounding_box4<Point: Coordinate, Bounds: BoundingBox<Point=Point>>(w1: Point, w2: Point, w3: Point, w4: Point) -> Bounds {
    let mut min = vec![];
    let mut max = vec![];

    for component in 0..Point::len() {
        let (component_min, component_max) = bounds_1d_cubic(w1.get(component), w2.get(component), w3.get(component), w4.get(component));

        min.push(component_min);
        max.push(component_max);
    }

    Bounds::from_min_max(Point::from_components(&min), Point::from_components(&max))
}

///
/// Finds the upper and lower points in a quadratic curve's bounding box
///
pub fn bounding_box3<Point: Coordinate, Bounds: BoundingBox<Point=Point>>(w1: Point, w2: Point, w3: Point) -> Bounds {
    let mut min = vec![];
    let mut max = vec![];

    for component in 0..Point::len() {
        let (component_min, component_max) = bounds_1d_quadratic(w1.get(component), w2.get(component), w3.get(component));

        min.push(component_min);
        max.push(component_max);
    }

    Bounds::from_min_max(Point::from_components(&min), Point::from_components(&max))
}
