//! Polygon triangulation using ear clipping.
//!
//! Converts a simple polygon into index triples that exactly cover it.
//!
//! # Algorithm
//!
//! The ear clipping algorithm repeatedly finds and removes "ears":
//! - An ear is a triangle formed by three consecutive vertices
//! - The middle vertex must be convex (reflex vertices cannot form ears)
//! - No other remaining vertex may lie inside the ear triangle
//!
//! Each pass scans the remaining vertices from the start of the list and
//! clips the first ear it finds, which makes the output deterministic.
//!
//! # Complexity
//!
//! - Time: O(n²) for typical polygons, O(n³) in the adversarial worst case
//! - Space: O(n)
//!
//! # Example
//!
//! ```
//! use fisk::polygon::{triangulate, Polygon};
//!
//! let square: Polygon<f64> = Polygon::from_coords(&[
//!     (0.0, 0.0),
//!     (1.0, 0.0),
//!     (1.0, 1.0),
//!     (0.0, 1.0),
//! ]);
//!
//! let tri = triangulate(&square).unwrap();
//! // A square is divided into 2 triangles
//! assert_eq!(tri.len(), 2);
//! ```

use crate::error::FiskError;
use crate::polygon::Polygon;
use crate::primitives::{Point2, Segment2};
use crate::tolerance::{orient2d, segments_properly_intersect, Orientation};
use num_traits::Float;

/// A triangulation of a polygon, as triples of vertex indices.
///
/// Indices refer to the polygon's original vertex order regardless of its
/// winding; each triple is counter-clockwise.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangulation {
    /// Triangle vertex indices into the original polygon.
    pub indices: Vec<(usize, usize, usize)>,
}

impl Triangulation {
    /// Returns the number of triangles.
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns true if there are no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Sums the areas of all triangles over the given vertex coordinates.
    ///
    /// For a valid triangulation this equals the polygon's area, which makes
    /// it a convenient no-gap, no-overlap check.
    pub fn covered_area<F: Float>(&self, vertices: &[Point2<F>]) -> F {
        self.indices
            .iter()
            .map(|&(i, j, k)| triangle_area(vertices[i], vertices[j], vertices[k]))
            .fold(F::zero(), |acc, a| acc + a)
    }
}

/// Triangulates a simple polygon by ear clipping.
///
/// The polygon may have either winding; it is normalized to CCW internally
/// and the returned indices refer to the original vertex order. For a
/// polygon with n vertices the result has exactly n-2 triangles.
///
/// # Errors
///
/// - [`FiskError::TooFewVertices`] if the polygon has fewer than 3 vertices.
/// - [`FiskError::SelfIntersecting`] if two non-adjacent edges properly
///   cross. This is a best-effort check: edges that merely touch are not
///   detected.
/// - [`FiskError::NoEarFound`] if a full pass finds no ear, which means the
///   input was not a simple polygon after all (or degenerate in a way the
///   crossing check cannot see, such as repeated vertices).
///
/// # Example
///
/// ```
/// use fisk::polygon::{triangulate, Polygon};
///
/// // L-shaped polygon (concave)
/// let l_shape: Polygon<f64> = Polygon::from_coords(&[
///     (0.0, 0.0),
///     (2.0, 0.0),
///     (2.0, 1.0),
///     (1.0, 1.0),
///     (1.0, 2.0),
///     (0.0, 2.0),
/// ]);
///
/// let tri = triangulate(&l_shape).unwrap();
/// assert_eq!(tri.len(), 4); // 6 vertices -> 4 triangles
///
/// for &(i, j, k) in &tri.indices {
///     assert!(i < 6 && j < 6 && k < 6);
/// }
/// ```
pub fn triangulate<F: Float>(polygon: &Polygon<F>) -> Result<Triangulation, FiskError> {
    let n = polygon.len();

    if n < 3 {
        return Err(FiskError::TooFewVertices { count: n });
    }
    if has_proper_crossing(polygon) {
        return Err(FiskError::SelfIntersecting);
    }
    if n == 3 {
        return Ok(Triangulation {
            indices: vec![(0, 1, 2)],
        });
    }

    // Normalize to CCW, keeping a map back to original indices.
    let reversed = polygon.signed_area() < F::zero();
    let mut remaining: Vec<Point2<F>> = if reversed {
        polygon.vertices.iter().rev().copied().collect()
    } else {
        polygon.vertices.clone()
    };
    let mut index_map: Vec<usize> = if reversed {
        (0..n).rev().collect()
    } else {
        (0..n).collect()
    };

    let mut triangles: Vec<(usize, usize, usize)> = Vec::with_capacity(n - 2);

    while remaining.len() > 3 {
        let m = remaining.len();
        let mut clipped = false;

        for i in 0..m {
            let prev = (i + m - 1) % m;
            let next = (i + 1) % m;

            if is_ear(&remaining, prev, i, next) {
                triangles.push((index_map[prev], index_map[i], index_map[next]));
                remaining.remove(i);
                index_map.remove(i);
                clipped = true;
                break;
            }
        }

        if !clipped {
            return Err(FiskError::NoEarFound {
                remaining: remaining.len(),
            });
        }
    }

    triangles.push((index_map[0], index_map[1], index_map[2]));

    Ok(Triangulation { indices: triangles })
}

/// Scans all non-adjacent edge pairs for a proper crossing.
fn has_proper_crossing<F: Float>(polygon: &Polygon<F>) -> bool {
    let edges: Vec<Segment2<F>> = polygon.edges().collect();
    let n = edges.len();

    for i in 0..n {
        for j in (i + 2)..n {
            if i == 0 && j == n - 1 {
                // The closing edge is adjacent to the first.
                continue;
            }
            if segments_properly_intersect(edges[i], edges[j], F::epsilon()) {
                return true;
            }
        }
    }

    false
}

/// Checks if the vertex at `curr` forms an ear with its neighbors.
fn is_ear<F: Float>(vertices: &[Point2<F>], prev: usize, curr: usize, next: usize) -> bool {
    let a = vertices[prev];
    let b = vertices[curr];
    let c = vertices[next];

    // Reflex and collinear corners cannot be ears.
    if orient2d(a, b, c, F::epsilon()) != Orientation::CounterClockwise {
        return false;
    }

    // No other remaining vertex may lie in the candidate triangle,
    // boundary included.
    vertices
        .iter()
        .enumerate()
        .all(|(i, &v)| i == prev || i == curr || i == next || !point_in_triangle(v, a, b, c))
}

/// Checks if point p is inside triangle abc (boundary counts as inside).
fn point_in_triangle<F: Float>(p: Point2<F>, a: Point2<F>, b: Point2<F>, c: Point2<F>) -> bool {
    let d1 = sign(p, a, b);
    let d2 = sign(p, b, c);
    let d3 = sign(p, c, a);

    let has_neg = d1 < F::zero() || d2 < F::zero() || d3 < F::zero();
    let has_pos = d1 > F::zero() || d2 > F::zero() || d3 > F::zero();

    !(has_neg && has_pos)
}

/// Sign of the cross product for the point-in-triangle test.
#[inline]
fn sign<F: Float>(p1: Point2<F>, p2: Point2<F>, p3: Point2<F>) -> F {
    (p1.x - p3.x) * (p2.y - p3.y) - (p2.x - p3.x) * (p1.y - p3.y)
}

/// Absolute area of the triangle abc.
fn triangle_area<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> F {
    let two = F::from(2.0).unwrap();
    ((b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)).abs() / two
}
