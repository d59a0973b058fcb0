use super::geo::*;
use super::super::coordinate::*;

///
/// Trait implemented by things representing axis-aligned bounding boxes
///
pub trait BoundingBox : Geo+Sized {
    ///
    /// Returns a bounding box with the specified minimum and maximum coordinates
    ///
    fn from_min_max(min: Self::Point, max: Self::Point) -> Self;

    ///
    /// Returns the minimum point of this bounding box
    ///
    fn min(&self) -> Self::Point;

    ///
    /// Returns the maximum point of this bounding box
    ///
    fn max(&self) -> Self::Point;

    ///
    /// Returns an empty bounding box
    ///
    fn empty() -> Self {
        Self::from_min_max(Self::Point::origin(), Self::Point::origin())
    }

    ///
    /// Creates a bounding box that encloses all of the specified points
    ///
    fn bounds_for_points<PointIter: IntoIterator<Item=Self::Point>>(points: PointIter) -> Self {
        let mut points  = points.into_iter();
        let first       = points.next();

        if let Some(first) = first {
            let (min, max) = points.fold((first, first), |(min, max), point| {
                (Self::Point::from_smallest_components(min, point), Self::Point::from_biggest_components(max, point))
            });

            Self::from_min_max(min, max)
        } else {
            Self::empty()
        }
    }

    ///
    /// True if this bounding box is empty
    ///
    #[inline]
    fn is_empty(&self) -> bool {
        self.min() == self.max()
    }

    ///
    /// Creates the union of this and another bounding box
    ///
    fn union_bounds(self, target: Self) -> Self {
        if self.is_empty() {
            target
        } else if target.is_empty() {
            self
        } else {
            Self::from_min_max(Self::Point::from_smallest_components(self.min(), target.min()), Self::Point::from_biggest_components(self.max(), target.max()))
        }
    }

    ///
    /// Returns true if this bounding box overlaps another
    ///
    /// Boxes that only touch along an edge do not overlap
    ///
    fn overlaps(&self, target: &Self) -> bool {
        let (min1, max1) = (self.min(), self.max());
        let (min2, max2) = (target.min(), target.max());

        for component in 0..Self::Point::len() {
            if max1.get(component) <= min2.get(component) || max2.get(component) <= min1.get(component) {
                return false;
            }
        }

        true
    }

    ///
    /// Returns true if this bounding box overlaps another after both have been grown by `tolerance`
    ///
    /// Unlike `overlaps`, boxes that touch (or have no area, such as the bounds of a horizontal line) are
    /// considered to be overlapping
    ///
    fn overlaps_with_tolerance(&self, target: &Self, tolerance: f32) -> bool {
        let (min1, max1) = (self.min(), self.max());
        let (min2, max2) = (target.min(), target.max());

        for component in 0..Self::Point::len() {
            if max1.get(component) + tolerance < min2.get(component) || max2.get(component) + tolerance < min1.get(component) {
                return false;
            }
        }

        true
    }

    ///
    /// The squared length of the diagonal of this bounding box
    ///
    #[inline]
    fn diagonal_length_sq(&self) -> f32 {
        let diagonal = self.max() - self.min();
        diagonal.dot(&diagonal)
    }
}

///
/// Type representing a bounding box
///
/// (Unlike a normal point tuple this always represents its bounds in minimum/maximum order)
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Bounds<Point: Coordinate>(Point, Point);

impl<Point: Coordinate> BoundingBox for (Point, Point) {
    #[inline]
    fn from_min_max(min: Self::Point, max: Self::Point) -> Self {
        (min, max)
    }

    #[inline]
    fn min(&self) -> Self::Point {
        Point::from_smallest_components(self.0, self.1)
    }

    #[inline]
    fn max(&self) -> Self::Point {
        Point::from_biggest_components(self.0, self.1)
    }
}

impl<Point: Coordinate> Geo for Bounds<Point> {
    type Point=Point;
}

impl<Point: Coordinate> BoundingBox for Bounds<Point> {
    #[inline]
    fn from_min_max(min: Self::Point, max: Self::Point) -> Self {
        Bounds(min, max)
    }

    #[inline]
    fn min(&self) -> Self::Point {
        self.0
    }

    #[inline]
    fn max(&self) -> Self::Point {
        self.1
    }
}
