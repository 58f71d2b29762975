//! Geometric predicates with explicit tolerance.

use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Points are counter-clockwise (positive area).
    CounterClockwise,
    /// Points are clockwise (negative area).
    Clockwise,
    /// Points are collinear (within tolerance).
    Collinear,
}

/// Computes the orientation of three points with tolerance.
///
/// Returns the orientation of the triangle formed by points `a`, `b`, `c`:
/// - `CounterClockwise` if `c` is to the left of the line from `a` to `b`
/// - `Clockwise` if `c` is to the right of the line from `a` to `b`
/// - `Collinear` if `c` is on the line (within `eps` tolerance)
///
/// The test is based on the signed area of the triangle. If the absolute
/// value of twice the signed area is less than `eps`, the points are
/// considered collinear.
///
/// # Arguments
///
/// * `a`, `b`, `c` - The three points to test
/// * `eps` - Tolerance for collinearity. This is compared against the absolute
///   value of the cross product (twice the signed area).
#[inline]
pub fn orient2d<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>, eps: F) -> Orientation {
    // Cross product of (b - a) and (c - a)
    // This equals twice the signed area of triangle ABC
    let ab = b - a;
    let ac = c - a;
    let cross = ab.cross(ac);

    if cross > eps {
        Orientation::CounterClockwise
    } else if cross < -eps {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Checks if two points coincide within tolerance.
///
/// Returns `true` if the Euclidean distance between `a` and `b` is at
/// most `eps`.
#[inline]
pub fn points_coincide<F: Float>(a: Point2<F>, b: Point2<F>, eps: F) -> bool {
    a.distance_squared(b) <= eps * eps
}

/// Checks if a point lies on a line segment within tolerance.
///
/// Returns `true` if the point `p` is within distance `eps` of the segment.
///
/// # Arguments
///
/// * `p` - The point to test
/// * `segment` - The line segment
/// * `eps` - Distance tolerance
#[inline]
pub fn point_on_segment<F: Float>(p: Point2<F>, segment: Segment2<F>, eps: F) -> bool {
    segment.distance_squared_to_point(p) <= eps * eps
}

/// Tests whether two segments cross in their interiors.
///
/// A proper crossing requires the endpoints of each segment to lie on
/// strictly opposite sides of the other segment's supporting line.
/// Shared endpoints, T-junctions, and collinear overlaps are not proper
/// crossings and return `false`.
///
/// # Arguments
///
/// * `s1`, `s2` - The segments to test
/// * `eps` - Collinearity tolerance for the underlying orientation tests
pub fn segments_properly_intersect<F: Float>(s1: Segment2<F>, s2: Segment2<F>, eps: F) -> bool {
    let o1 = orient2d(s1.start, s1.end, s2.start, eps);
    let o2 = orient2d(s1.start, s1.end, s2.end, eps);
    let o3 = orient2d(s2.start, s2.end, s1.start, eps);
    let o4 = orient2d(s2.start, s2.end, s1.end, eps);

    strictly_opposite(o1, o2) && strictly_opposite(o3, o4)
}

#[inline]
fn strictly_opposite(a: Orientation, b: Orientation) -> bool {
    matches!(
        (a, b),
        (Orientation::CounterClockwise, Orientation::Clockwise)
            | (Orientation::Clockwise, Orientation::CounterClockwise)
    )
}
