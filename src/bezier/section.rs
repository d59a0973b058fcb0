use super::curve::*;
use super::subdivide::*;
use super::super::geo::*;

///
/// Represents a subsection of a bezier curve
///
/// The control points of the section are computed when it's created (by subdividing the original curve twice),
/// so sections can be cheaply subdivided further while still reporting t values on the original curve.
///
#[derive(Clone)]
pub struct CurveSection<'a, C: 'a+BezierCurve> {
    /// Full curve
    curve: &'a C,

    /// Value to add to a t value to convert to this curve
    t_c: f32,

    /// Value to multiply a t value by to convert to this curve
    t_m: f32,

    /// The points making up this section (start, cp1, cp2, end)
    points: (C::Point, C::Point, C::Point, C::Point)
}

///
/// Returns the weights of the section of a cubic curve between two t values
///
pub fn section_points4<Point: Coordinate>(t_min: f32, t_max: f32, w1: Point, w2: Point, w3: Point, w4: Point) -> (Point, Point, Point, Point) {
    if t_min <= 0.0 && t_max >= 1.0 {
        return (w1, w2, w3, w4);
    }

    // Cut away the part before t_min
    let (_, after)  = subdivide4(t_min, w1, w2, w3, w4);

    // t_max relative to the part that remains
    let remaining   = 1.0 - t_min;
    let t_max       = if remaining <= 0.0 { 0.0 } else { ((t_max - t_min) / remaining).max(0.0).min(1.0) };

    let (before, _) = subdivide4(t_max, after.0, after.1, after.2, after.3);

    before
}

impl<'a, C: 'a+BezierCurve> CurveSection<'a, C> {
    ///
    /// Creates a new curve section from a region of another bezier curve
    ///
    pub fn new(curve: &'a C, t_min: f32, t_max: f32) -> CurveSection<'a, C> {
        let t_c         = t_min;
        let t_m         = t_max - t_c;
        let (cp1, cp2)  = curve.control_points();
        let points      = section_points4(t_min, t_max, curve.start_point(), cp1, cp2, curve.end_point());

        CurveSection {
            curve:  curve,
            t_m:    t_m,
            t_c:    t_c,
            points: points
        }
    }

    ///
    /// Returns the t value on the full curve for a t value on the section
    ///
    #[inline]
    pub fn t_for_t(&self, t: f32) -> f32 {
        t*self.t_m + self.t_c
    }

    ///
    /// Returns true if this section is so small as to represent a point
    ///
    #[inline]
    pub fn is_tiny(&self) -> bool {
        self.t_m.abs() < 0.000001
    }

    ///
    /// Creates a sub-section from this curve section (dividing it further)
    ///
    /// The t values of the subsection are still relative to the original curve
    ///
    pub fn subsection(&self, t_min: f32, t_max: f32) -> CurveSection<'a, C> {
        CurveSection::new(self.curve, self.t_for_t(t_min), self.t_for_t(t_max))
    }

    ///
    /// Returns the original t values (t_min, t_max) that this section was created from
    ///
    #[inline]
    pub fn original_curve_t_values(&self) -> (f32, f32) {
        (self.t_c, self.t_m+self.t_c)
    }

    ///
    /// Given a 't' value on the original curve, returns the equivalent value on this section
    ///
    #[inline]
    pub fn section_t_for_original_t(&self, t: f32) -> f32 {
        (t-self.t_c)/self.t_m
    }
}

impl<'a, C: 'a+BezierCurve> Geo for CurveSection<'a, C> {
    type Point = C::Point;
}

impl<'a, C: 'a+BezierCurve> BezierCurve for CurveSection<'a, C> {
    #[inline]
    fn start_point(&self) -> Self::Point {
        self.points.0
    }

    #[inline]
    fn end_point(&self) -> Self::Point {
        self.points.3
    }

    #[inline]
    fn control_points(&self) -> (Self::Point, Self::Point) {
        (self.points.1, self.points.2)
    }
}
