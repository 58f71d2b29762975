//! 2D ray type.

use super::{Point2, Segment2, Vec2};
use num_traits::Float;

/// Result of casting a ray against a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RayIntersection<F> {
    /// The supporting lines cross, but outside the ray or the segment.
    None,
    /// The ray crosses the segment at a single point.
    Point {
        /// The intersection point.
        point: Point2<F>,
        /// Parameter along the ray (0 = origin, in direction-vector units).
        t_ray: F,
        /// Parameter along the segment (0 = start, 1 = end).
        t_seg: F,
    },
    /// The ray and segment are parallel (possibly collinear); no single
    /// crossing point is defined.
    Parallel,
}

/// A 2D ray defined by an origin point and direction.
///
/// A ray extends infinitely from its origin in the direction specified.
/// The direction is stored as-is (not necessarily normalized).
///
/// # Example
///
/// ```
/// use fisk::primitives::{Point2, Ray2, RayIntersection, Segment2, Vec2};
///
/// let ray: Ray2<f64> = Ray2::new(Point2::origin(), Vec2::new(1.0, 0.0));
/// let wall = Segment2::new(Point2::new(5.0, -1.0), Point2::new(5.0, 1.0));
///
/// match ray.intersect_segment(&wall) {
///     RayIntersection::Point { point, .. } => assert_eq!(point.x, 5.0),
///     other => panic!("expected a hit, got {:?}", other),
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray2<F> {
    /// Origin point of the ray
    pub origin: Point2<F>,
    /// Direction vector (not necessarily normalized)
    pub direction: Vec2<F>,
}

impl<F: Float> Ray2<F> {
    /// Creates a new ray from origin and direction.
    #[inline]
    pub fn new(origin: Point2<F>, direction: Vec2<F>) -> Self {
        Self { origin, direction }
    }

    /// Creates a ray from an origin point through a target point.
    #[inline]
    pub fn from_points(origin: Point2<F>, through: Point2<F>) -> Self {
        Self {
            origin,
            direction: through - origin,
        }
    }

    /// Returns the point along the ray at parameter t.
    ///
    /// - `t = 0` returns the origin
    /// - `t > 0` returns points along the ray direction
    /// - `t < 0` returns points behind the origin (not on the ray)
    #[inline]
    pub fn point_at(&self, t: F) -> Point2<F> {
        Point2::new(
            self.origin.x + t * self.direction.x,
            self.origin.y + t * self.direction.y,
        )
    }

    /// Returns a ray rotated by the given angle (in radians) around its origin.
    #[inline]
    pub fn rotated(&self, angle: F) -> Self {
        Self {
            origin: self.origin,
            direction: self.direction.rotated(angle),
        }
    }

    /// Intersects this ray with a line segment.
    ///
    /// Returns a [`RayIntersection`] describing the outcome. A `Point` hit
    /// carries the intersection point, the ray parameter `t_ray >= 0`, and
    /// the segment parameter `t_seg` in `[0, 1]`. Parallel and collinear
    /// pairs are reported as `Parallel` so callers can decide how to treat
    /// them; everything else that misses is `None`.
    pub fn intersect_segment(&self, segment: &Segment2<F>) -> RayIntersection<F> {
        let seg_dir = segment.direction();
        let cross = self.direction.cross(seg_dir);

        if cross.abs() < F::epsilon() {
            return RayIntersection::Parallel;
        }

        // Solve origin + t_ray * dir = start + t_seg * seg_dir by Cramer's rule.
        let delta = segment.start - self.origin;
        let t_ray = delta.cross(seg_dir) / cross;
        let t_seg = delta.cross(self.direction) / cross;

        if t_ray >= F::zero() && t_seg >= F::zero() && t_seg <= F::one() {
            RayIntersection::Point {
                point: self.point_at(t_ray),
                t_ray,
                t_seg,
            }
        } else {
            RayIntersection::None
        }
    }
}
