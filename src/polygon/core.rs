//! Core polygon types and basic operations.

use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// A simple polygon represented as a sequence of vertices.
///
/// The polygon is implicitly closed (the last vertex connects to the first).
/// Vertices may be given in either winding order; operations that need a
/// specific orientation normalize internally and report results in terms of
/// the original vertex order.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<F> {
    /// The vertices of the polygon.
    pub vertices: Vec<Point2<F>>,
}

impl<F: Float> Polygon<F> {
    /// Creates a new polygon from vertices.
    #[inline]
    pub fn new(vertices: Vec<Point2<F>>) -> Self {
        Self { vertices }
    }

    /// Creates a polygon from `(x, y)` coordinate pairs.
    #[inline]
    pub fn from_coords(coords: &[(F, F)]) -> Self {
        Self {
            vertices: coords.iter().map(|&(x, y)| Point2::new(x, y)).collect(),
        }
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Iterates over the edges, including the closing edge back to the
    /// first vertex.
    pub fn edges(&self) -> impl Iterator<Item = Segment2<F>> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Segment2::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Returns the signed area of the polygon using the shoelace formula.
    ///
    /// Positive for CCW winding, negative for CW winding.
    pub fn signed_area(&self) -> F {
        polygon_signed_area(&self.vertices)
    }

    /// Returns the absolute area of the polygon.
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Returns the centroid (center of mass) of the polygon.
    pub fn centroid(&self) -> Option<Point2<F>> {
        polygon_centroid(&self.vertices)
    }

    /// Tests if a point is strictly inside the polygon.
    ///
    /// Uses even-odd ray crossing. Points on the boundary may return either
    /// true or false; use [`covers`](Self::covers) for a boundary-inclusive
    /// test.
    pub fn contains(&self, point: Point2<F>) -> bool {
        polygon_contains(&self.vertices, point)
    }

    /// Tests if a point is inside the polygon or on its boundary.
    ///
    /// A point within distance `eps` of any edge counts as covered, which
    /// makes the boundary test robust where the even-odd crossing test is
    /// not.
    pub fn covers(&self, point: Point2<F>, eps: F) -> bool {
        if polygon_contains(&self.vertices, point) {
            return true;
        }
        let eps_sq = eps * eps;
        self.edges()
            .any(|edge| edge.distance_squared_to_point(point) <= eps_sq)
    }

    /// Tests if the polygon is convex.
    pub fn is_convex(&self) -> bool {
        polygon_is_convex(&self.vertices)
    }

    /// Returns the bounding box as (min, max) points.
    pub fn bounding_box(&self) -> Option<(Point2<F>, Point2<F>)> {
        if self.vertices.is_empty() {
            return None;
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            if v.x < min.x {
                min.x = v.x;
            }
            if v.y < min.y {
                min.y = v.y;
            }
            if v.x > max.x {
                max.x = v.x;
            }
            if v.y > max.y {
                max.y = v.y;
            }
        }

        Some((min, max))
    }

    /// Ensures the polygon has CCW winding order.
    pub fn ensure_ccw(&mut self) {
        if self.signed_area() < F::zero() {
            self.vertices.reverse();
        }
    }

    /// Returns a polygon with reversed winding order.
    pub fn reversed(&self) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Self { vertices }
    }

    /// Returns the perimeter of the polygon.
    pub fn perimeter(&self) -> F {
        if self.vertices.len() < 2 {
            return F::zero();
        }

        self.edges().fold(F::zero(), |acc, e| acc + e.length())
    }
}

/// Computes the signed area of a polygon using the shoelace formula.
///
/// Positive for CCW winding, negative for CW winding.
pub fn polygon_signed_area<F: Float>(vertices: &[Point2<F>]) -> F {
    if vertices.len() < 3 {
        return F::zero();
    }

    let mut area = F::zero();
    let n = vertices.len();

    for i in 0..n {
        let j = (i + 1) % n;
        area = area + vertices[i].x * vertices[j].y;
        area = area - vertices[j].x * vertices[i].y;
    }

    area / F::from(2.0).unwrap()
}

/// Computes the absolute area of a polygon.
pub fn polygon_area<F: Float>(vertices: &[Point2<F>]) -> F {
    polygon_signed_area(vertices).abs()
}

/// Computes the centroid of a polygon.
///
/// Returns None for degenerate polygons (fewer than 3 vertices or zero area).
pub fn polygon_centroid<F: Float>(vertices: &[Point2<F>]) -> Option<Point2<F>> {
    if vertices.len() < 3 {
        return None;
    }

    let area = polygon_signed_area(vertices);
    if area.abs() < F::epsilon() {
        return None;
    }

    let mut cx = F::zero();
    let mut cy = F::zero();
    let n = vertices.len();

    for i in 0..n {
        let j = (i + 1) % n;
        let cross = vertices[i].x * vertices[j].y - vertices[j].x * vertices[i].y;
        cx = cx + (vertices[i].x + vertices[j].x) * cross;
        cy = cy + (vertices[i].y + vertices[j].y) * cross;
    }

    let six = F::from(6.0).unwrap();
    Some(Point2::new(cx / (six * area), cy / (six * area)))
}

/// Tests if a point is inside a polygon using the ray casting algorithm.
///
/// Points on the boundary may return either true or false.
pub fn polygon_contains<F: Float>(vertices: &[Point2<F>], point: Point2<F>) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let n = vertices.len();

    let mut j = n - 1;
    for i in 0..n {
        let vi = vertices[i];
        let vj = vertices[j];

        if ((vi.y > point.y) != (vj.y > point.y))
            && (point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x)
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// Tests if a polygon is convex.
///
/// Returns true if all cross products of consecutive edges have the same sign.
pub fn polygon_is_convex<F: Float>(vertices: &[Point2<F>]) -> bool {
    if vertices.len() < 3 {
        return true; // Degenerate cases are considered convex
    }

    let n = vertices.len();
    let mut sign: Option<bool> = None;

    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        let c = vertices[(i + 2) % n];

        let cross = (b.x - a.x) * (c.y - b.y) - (b.y - a.y) * (c.x - b.x);

        if cross.abs() > F::epsilon() {
            let is_positive = cross > F::zero();
            match sign {
                None => sign = Some(is_positive),
                Some(s) if s != is_positive => return false,
                _ => {}
            }
        }
    }

    true
}
