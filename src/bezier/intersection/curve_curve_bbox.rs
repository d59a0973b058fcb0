use super::super::curve::*;
use super::super::section::*;
use super::super::super::geo::*;
use super::super::super::line::*;
use super::super::super::coordinate::*;

///
/// Possible results of comparing two curve sections
///
enum CurveIntersection {
    /// Curves do not intersect
    None,

    /// Curves might intersect but need to be subdivided
    Subdivide(bool, bool),

    /// Curves have converged and need to be tested as lines
    TestAsLines
}

///
/// Determines how two sections of curve relate to each other
///
/// The bounds formed by the control points are faster to calculate than the exact curve bounds and good enough for
/// rejecting sections that can't overlap
///
fn curve_intersection_inner<'a, C1: BezierCurve, C2: BezierCurve<Point=C1::Point>>(section1: &CurveSection<'a, C1>, section2: &CurveSection<'a, C2>, accuracy: f32, depth: usize, max_depth: usize) -> CurveIntersection
where C1: 'a, C2: 'a, C1::Point: Coordinate2D {
    let bounds1 = section1.fast_bounding_box::<Bounds<_>>();
    let bounds2 = section2.fast_bounding_box::<Bounds<_>>();

    // Horizontal and vertical sections have no area, so we use a small tolerance when checking for overlaps
    if !bounds1.overlaps_with_tolerance(&bounds2, accuracy * 0.5) {
        return CurveIntersection::None;
    }

    let accuracy_sq = accuracy*accuracy;
    let converged1  = bounds1.diagonal_length_sq() <= accuracy_sq;
    let converged2  = bounds2.diagonal_length_sq() <= accuracy_sq;

    if converged1 && converged2 {
        CurveIntersection::TestAsLines
    } else if depth >= max_depth {
        // Sections that are still too large at the maximum depth are treated as not intersecting
        CurveIntersection::None
    } else {
        CurveIntersection::Subdivide(!converged1, !converged2)
    }
}

///
/// Estimates where two sections that have shrunk to (nearly) straight lines cross
///
fn intersect_as_lines<'a, C1: BezierCurve, C2: BezierCurve<Point=C1::Point>>(section1: &CurveSection<'a, C1>, section2: &CurveSection<'a, C2>, accuracy: f32) -> Option<(f32, f32)>
where C1: 'a, C2: 'a, C1::Point: Coordinate2D {
    let line1 = (section1.start_point(), section1.end_point());
    let line2 = (section2.start_point(), section2.end_point());

    if let Some((s, t)) = line_intersects_line(&line1, &line2) {
        // Map the t values back to the original curves by interpolating between the window bounds
        Some((section1.t_for_t(s), section2.t_for_t(t)))
    } else {
        // Sections that have collapsed to a point can't be tested as lines, but they can be tested for being close together
        let tiny1 = line1.0.is_near_to(&line1.1, accuracy * 0.01);
        let tiny2 = line2.0.is_near_to(&line2.1, accuracy * 0.01);

        if (tiny1 || tiny2) && section1.point_at_pos(0.5).is_near_to(&section2.point_at_pos(0.5), accuracy) {
            Some((section1.t_for_t(0.5), section2.t_for_t(0.5)))
        } else {
            None
        }
    }
}

///
/// Recursively subdivides two sections of curve, adding any intersections that are found to the results
///
fn intersect_sections<'a, C1: BezierCurve, C2: BezierCurve<Point=C1::Point>>(section1: &CurveSection<'a, C1>, section2: &CurveSection<'a, C2>, accuracy: f32, depth: usize, max_depth: usize, results: &mut Vec<(f32, f32)>)
where C1: 'a, C2: 'a, C1::Point: Coordinate2D {
    match curve_intersection_inner(section1, section2, accuracy, depth, max_depth) {
        CurveIntersection::None         => { }
        CurveIntersection::TestAsLines  => {
            if let Some(intersection) = intersect_as_lines(section1, section2, accuracy) {
                results.push(intersection);
            }
        }

        CurveIntersection::Subdivide(divide1, divide2) => {
            // Split each curve that hasn't converged at its midpoint
            let sections1 = if divide1 { vec![section1.subsection(0.0, 0.5), section1.subsection(0.5, 1.0)] } else { vec![section1.clone()] };
            let sections2 = if divide2 { vec![section2.subsection(0.0, 0.5), section2.subsection(0.5, 1.0)] } else { vec![section2.clone()] };

            for subsection1 in sections1.iter() {
                for subsection2 in sections2.iter() {
                    intersect_sections(subsection1, subsection2, accuracy, depth+1, max_depth, results);
                }
            }
        }
    }
}

///
/// Removes intersections that are at the same position as an earlier intersection
///
/// Intersections that lie on the boundary between two subdivisions are generally found twice
///
fn remove_duplicate_intersections<C1: BezierCurve>(curve1: &C1, intersections: Vec<(f32, f32)>, accuracy: f32) -> Vec<(f32, f32)> {
    let mut intersections = intersections;
    intersections.sort_by(|(a, _), (b, _)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mut result: Vec<(f32, f32)> = vec![];

    for (t1, t2) in intersections {
        let point = curve1.point_at_pos(t1);

        let is_duplicate = result.iter()
            .any(|(existing_t1, _)| curve1.point_at_pos(*existing_t1).is_near_to(&point, accuracy*2.0));

        if !is_duplicate {
            result.push((t1, t2));
        }
    }

    result
}

///
/// Determines the points where two curves intersect by recursively subdividing them and rejecting any pair of
/// sections whose bounding boxes do not overlap
///
/// `accuracy` is the size that a section's bounding box needs to shrink to before it's treated as a line, and
/// `max_depth` limits the number of subdivisions. Sections that are still too large when the maximum depth is
/// reached are discarded, so intersections of very highly curved sections can be missed if it's set too low.
///
/// The result is a list of (t1, t2) values, one for each intersection that was found.
///
pub fn curve_intersects_curve_bbox<C1: BezierCurve, C2: BezierCurve<Point=C1::Point>>(curve1: &C1, curve2: &C2, accuracy: f32, max_depth: usize) -> Vec<(f32, f32)>
where C1::Point: Coordinate2D {
    let section1        = curve1.section(0.0, 1.0);
    let section2        = curve2.section(0.0, 1.0);
    let mut results     = vec![];

    intersect_sections(&section1, &section2, accuracy, 0, max_depth, &mut results);

    remove_duplicate_intersections(curve1, results, accuracy)
}
