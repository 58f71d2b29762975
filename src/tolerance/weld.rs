//! Point welding within a tolerance.

use crate::primitives::Point2;
use num_traits::Float;

/// Merges points that are within `epsilon` of an earlier kept point.
///
/// Walks the input in order, keeping a point only if it is farther than
/// `epsilon` from every point already kept. Kept points keep their exact
/// input coordinates, so the first occurrence of each cluster wins and the
/// relative input order survives.
///
/// # Complexity
///
/// O(n²) time, O(n) space.
///
/// # Example
///
/// ```
/// use fisk::tolerance::weld_points_keep_first;
/// use fisk::Point2;
///
/// let points = vec![
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(0.05, 0.05), // close to the first point
///     Point2::new(1.0, 1.0),
/// ];
///
/// let welded = weld_points_keep_first(&points, 0.1);
/// assert_eq!(welded.len(), 2);
/// assert_eq!(welded[0], points[0]);
/// assert_eq!(welded[1], points[2]);
/// ```
pub fn weld_points_keep_first<F: Float>(points: &[Point2<F>], epsilon: F) -> Vec<Point2<F>> {
    let eps_sq = epsilon * epsilon;
    let mut result: Vec<Point2<F>> = Vec::with_capacity(points.len());

    for &p in points {
        let duplicate = result
            .iter()
            .any(|&kept| kept.distance_squared(p) <= eps_sq);
        if !duplicate {
            result.push(p);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let points: Vec<Point2<f64>> = Vec::new();
        assert!(weld_points_keep_first(&points, 0.1).is_empty());
    }

    #[test]
    fn test_no_duplicates() {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
        ];
        assert_eq!(weld_points_keep_first(&points, 0.1), points);
    }

    #[test]
    fn test_first_occurrence_wins() {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.05, 0.05),
            Point2::new(1.0, 1.0),
            Point2::new(1.02, 1.0),
        ];

        let welded = weld_points_keep_first(&points, 0.1);

        assert_eq!(welded.len(), 2);
        assert_eq!(welded[0], points[0]);
        assert_eq!(welded[1], points[2]);
    }

    #[test]
    fn test_dropped_points_do_not_suppress() {
        // The middle point is welded into the first, but the third is
        // measured against kept points only and survives.
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.09, 0.0),
            Point2::new(0.15, 0.0),
        ];

        let welded = weld_points_keep_first(&points, 0.1);

        assert_eq!(welded.len(), 2);
        assert_eq!(welded[0], points[0]);
        assert_eq!(welded[1], points[2]);
    }

    #[test]
    fn test_tight_tolerance_keeps_offset_pairs() {
        // Points a hair apart survive a much tighter tolerance.
        let points = vec![Point2::new(0.0, 0.0), Point2::new(1e-7, 0.0)];

        let welded = weld_points_keep_first(&points, 1e-8);
        assert_eq!(welded.len(), 2);
    }
}
