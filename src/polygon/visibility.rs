//! Visibility polygon computation.
//!
//! Computes the region of a simple polygon visible from an observer using an
//! angular ray sweep: one ray bundle per polygon vertex (the exact direction
//! plus two rays a hair to either side), keeping the closest wall hit of each
//! ray. The offset rays are what let the sweep see past a silhouette vertex
//! to the wall behind it.
//!
//! # Example
//!
//! ```
//! use fisk::polygon::{visibility_polygon, Polygon};
//! use fisk::Point2;
//!
//! let room: Polygon<f64> = Polygon::from_coords(&[
//!     (0.0, 0.0),
//!     (10.0, 0.0),
//!     (10.0, 10.0),
//!     (0.0, 10.0),
//! ]);
//!
//! // From inside a convex room, the whole room is visible.
//! let visible = visibility_polygon(&room, Point2::new(5.0, 5.0)).unwrap();
//! assert!((visible.area() - room.area()).abs() < 1e-6);
//! ```

use super::core::Polygon;
use crate::error::FiskError;
use crate::primitives::{Point2, Ray2, RayIntersection, Segment2};
use crate::tolerance::{
    point_on_segment, points_coincide, segments_properly_intersect, weld_points_keep_first,
};
use num_traits::Float;
use std::cmp::Ordering;

/// Computes the visibility polygon of an observer inside a simple polygon.
///
/// Casts three rays toward every polygon vertex: the exact direction and two
/// directions offset by 1e-7 radians to either side. Each ray keeps its
/// closest wall hit, measured by squared distance from the observer. Hits
/// within 1e-8 of one another are welded (first occurrence wins) and the
/// survivors are sorted counter-clockwise by angle around the observer, so
/// the result has CCW winding.
///
/// Walls parallel or collinear to a ray produce no hit for that ray; the
/// offset rays of the same bundle cover the directions around them.
///
/// # Errors
///
/// - [`FiskError::TooFewVertices`] if `boundary` has fewer than 3 vertices.
/// - [`FiskError::ObserverOutsidePolygon`] if the observer is not inside the
///   polygon or on its boundary (within 1e-8).
/// - [`FiskError::DegenerateVisibility`] if fewer than 3 distinct points
///   survive the sweep.
///
/// # Limitations
///
/// An observer on the interior of an edge (not at a vertex) passes the
/// boundary check but the sweep around it is unreliable; nudge such
/// observers slightly inward. An observer exactly at a vertex works, but
/// its own corner is not part of the output because hits at the observer
/// are discarded.
pub fn visibility_polygon<F: Float>(
    boundary: &Polygon<F>,
    observer: Point2<F>,
) -> Result<Polygon<F>, FiskError> {
    let weld_eps = F::from(1e-8).unwrap();
    let angle_offset = F::from(1e-7).unwrap();

    if boundary.len() < 3 {
        return Err(FiskError::TooFewVertices {
            count: boundary.len(),
        });
    }
    if !boundary.covers(observer, weld_eps) {
        return Err(FiskError::ObserverOutsidePolygon);
    }

    // Walls the rays can hit. Zero-length edges carry no surface, and edges
    // the observer sits on would block every ray at distance zero.
    let walls: Vec<Segment2<F>> = boundary
        .edges()
        .filter(|e| !e.is_degenerate(weld_eps))
        .filter(|e| !point_on_segment(observer, *e, weld_eps))
        .collect();

    let mut hits: Vec<Point2<F>> = Vec::new();
    for &vertex in &boundary.vertices {
        if points_coincide(vertex, observer, weld_eps) {
            continue;
        }

        let exact = Ray2::from_points(observer, vertex);
        for ray in [
            exact,
            exact.rotated(angle_offset),
            exact.rotated(-angle_offset),
        ] {
            if let Some(hit) = closest_hit(&ray, &walls, observer, weld_eps) {
                hits.push(hit);
            }
        }
    }

    let mut points = weld_points_keep_first(&hits, weld_eps);
    if points.len() < 3 {
        return Err(FiskError::DegenerateVisibility {
            points: points.len(),
        });
    }

    points.sort_by(|a, b| {
        observer
            .angle_to(*a)
            .partial_cmp(&observer.angle_to(*b))
            .unwrap_or(Ordering::Equal)
    });

    Ok(Polygon::new(points))
}

/// Finds the closest wall hit of a ray, by squared distance from the
/// observer. Hits at the observer itself are discarded.
fn closest_hit<F: Float>(
    ray: &Ray2<F>,
    walls: &[Segment2<F>],
    observer: Point2<F>,
    eps: F,
) -> Option<Point2<F>> {
    let mut closest: Option<(Point2<F>, F)> = None;

    for wall in walls {
        match ray.intersect_segment(wall) {
            RayIntersection::Point { point, .. } => {
                if points_coincide(point, observer, eps) {
                    continue;
                }

                let dist_sq = observer.distance_squared(point);
                match closest {
                    Some((_, best)) if dist_sq >= best => {}
                    _ => closest = Some((point, dist_sq)),
                }
            }
            RayIntersection::Parallel | RayIntersection::None => {}
        }
    }

    closest.map(|(p, _)| p)
}

/// Checks if a target point is visible from the viewpoint within the boundary.
///
/// Both points must be covered by the polygon (within 1e-8 of the boundary
/// counts), and the sight line must not cross any edge. A sight line can
/// leave the polygon through a reflex vertex without properly crossing an
/// edge, so the midpoint must be covered as well.
pub fn is_visible<F: Float>(
    boundary: &Polygon<F>,
    viewpoint: Point2<F>,
    target: Point2<F>,
) -> bool {
    let eps = F::from(1e-8).unwrap();

    if boundary.len() < 3 {
        return false;
    }
    if !boundary.covers(viewpoint, eps) || !boundary.covers(target, eps) {
        return false;
    }

    let sight = Segment2::new(viewpoint, target);
    if !boundary.covers(sight.midpoint(), eps) {
        return false;
    }

    boundary
        .edges()
        .all(|edge| !segments_properly_intersect(sight, edge, eps))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square<F: Float>(size: F) -> Polygon<F> {
        Polygon::new(vec![
            Point2::new(F::zero(), F::zero()),
            Point2::new(size, F::zero()),
            Point2::new(size, size),
            Point2::new(F::zero(), size),
        ])
    }

    /// Full square minus its top-right quadrant.
    fn l_room() -> Polygon<f64> {
        Polygon::from_coords(&[
            (0.0, 0.0),
            (10.0, 0.0),
            (10.0, 5.0),
            (5.0, 5.0),
            (5.0, 10.0),
            (0.0, 10.0),
        ])
    }

    fn contains_point(points: &[Point2<f64>], target: Point2<f64>, eps: f64) -> bool {
        points.iter().any(|p| p.distance(target) <= eps)
    }

    #[test]
    fn test_convex_room_fully_visible() {
        let room: Polygon<f64> = square(10.0);
        let vis = visibility_polygon(&room, Point2::new(5.0, 5.0)).unwrap();

        assert_relative_eq!(vis.area(), room.area(), epsilon = 1e-6);

        // Every corner of the room appears among the output points.
        for &corner in &room.vertices {
            assert!(contains_point(&vis.vertices, corner, 1e-7));
        }
    }

    #[test]
    fn test_corner_viewpoint_sees_whole_convex_room() {
        let room: Polygon<f64> = square(10.0);
        let vis = visibility_polygon(&room, Point2::new(1.0, 1.0)).unwrap();

        assert_relative_eq!(vis.area(), 100.0, epsilon = 1e-6);
    }

    #[test]
    fn test_output_is_ccw() {
        let room: Polygon<f64> = square(10.0);
        let vis = visibility_polygon(&room, Point2::new(3.0, 7.0)).unwrap();

        assert!(vis.signed_area() > 0.0);
    }

    #[test]
    fn test_observer_outside() {
        let room: Polygon<f64> = square(10.0);
        let result = visibility_polygon(&room, Point2::new(20.0, 20.0));

        assert_eq!(result, Err(FiskError::ObserverOutsidePolygon));
    }

    #[test]
    fn test_too_few_vertices() {
        let line: Polygon<f64> =
            Polygon::new(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)]);
        let result = visibility_polygon(&line, Point2::new(0.5, 0.0));

        assert_eq!(result, Err(FiskError::TooFewVertices { count: 2 }));
    }

    #[test]
    fn test_observer_at_vertex() {
        // From a corner the incident edges are skipped and hits at the
        // observer are discarded, so the corner itself is missing from the
        // output and the region closes across the diagonal.
        let room: Polygon<f64> = square(10.0);
        let vis = visibility_polygon(&room, Point2::new(0.0, 0.0)).unwrap();

        assert!(vis.len() >= 3);
        assert_relative_eq!(vis.area(), 50.0, epsilon = 1e-4);
    }

    #[test]
    fn test_l_room_shadow_area() {
        // From (8, 1) the notch edge x = 5 hides a wedge of the upper arm.
        // The critical ray through the reflex corner (5, 5) exits at
        // (1.25, 10), so the hidden triangle (5,5)-(5,10)-(1.25,10) has
        // area 75/8 and the visible region 75 - 75/8.
        let room = l_room();
        let vis = visibility_polygon(&room, Point2::new(8.0, 1.0)).unwrap();

        assert_relative_eq!(vis.area(), 75.0 - 9.375, epsilon = 1e-4);

        // The shadow boundary point shows up among the output points.
        assert!(contains_point(&vis.vertices, Point2::new(1.25, 10.0), 1e-4));
    }

    #[test]
    fn test_l_room_interior_spot_sees_everything() {
        // From (2, 2) every sight line stays inside: the only shadow wedge
        // of the reflex corner lies outside the polygon.
        let room = l_room();
        let vis = visibility_polygon(&room, Point2::new(2.0, 2.0)).unwrap();

        assert_relative_eq!(vis.area(), room.area(), epsilon = 1e-4);
    }

    #[test]
    fn test_triangle_fully_visible() {
        let triangle: Polygon<f64> =
            Polygon::from_coords(&[(0.0, 0.0), (10.0, 0.0), (5.0, 10.0)]);
        let vis = visibility_polygon(&triangle, Point2::new(5.0, 3.0)).unwrap();

        assert_relative_eq!(vis.area(), triangle.area(), epsilon = 1e-6);
    }

    #[test]
    fn test_every_output_point_is_visible() {
        let room = l_room();
        let observer = Point2::new(8.0, 1.0);
        let vis = visibility_polygon(&room, observer).unwrap();

        for &p in &vis.vertices {
            assert!(is_visible(&room, observer, p), "point {:?} not visible", p);
        }
    }

    #[test]
    fn test_is_visible_direct_line() {
        let room: Polygon<f64> = square(10.0);
        assert!(is_visible(&room, Point2::new(2.0, 2.0), Point2::new(8.0, 8.0)));
    }

    #[test]
    fn test_is_visible_to_corner() {
        let room: Polygon<f64> = square(10.0);
        assert!(is_visible(&room, Point2::new(2.0, 2.0), Point2::new(0.0, 0.0)));
    }

    #[test]
    fn test_is_visible_target_outside() {
        let room: Polygon<f64> = square(10.0);
        assert!(!is_visible(
            &room,
            Point2::new(5.0, 5.0),
            Point2::new(20.0, 20.0)
        ));
    }

    #[test]
    fn test_is_visible_blocked_by_notch() {
        let room = l_room();
        assert!(!is_visible(
            &room,
            Point2::new(8.0, 1.0),
            Point2::new(4.9, 9.9)
        ));
        assert!(is_visible(
            &room,
            Point2::new(8.0, 1.0),
            Point2::new(2.0, 2.0)
        ));
    }

    #[test]
    fn test_f32_support() {
        let room: Polygon<f32> = square(10.0);
        let vis = visibility_polygon(&room, Point2::new(5.0, 5.0)).unwrap();

        assert!(vis.len() >= 4);
    }
}
