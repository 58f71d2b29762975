//! Three-coloring of a polygon triangulation.
//!
//! In any triangulation of a simple polygon the vertices can be colored
//! with three colors so that every triangle shows all three. This is the
//! coloring step of Fisk's proof of the art gallery theorem: the smallest
//! color class has at most floor(n/3) members, and placing a guard at each
//! of its vertices covers the whole polygon.
//!
//! # Example
//!
//! ```
//! use fisk::polygon::{tricolor, triangulate, Polygon};
//!
//! let square: Polygon<f64> = Polygon::from_coords(&[
//!     (0.0, 0.0),
//!     (1.0, 0.0),
//!     (1.0, 1.0),
//!     (0.0, 1.0),
//! ]);
//!
//! let tri = triangulate(&square).unwrap();
//! let coloring = tricolor(&tri.indices, 4);
//!
//! assert_eq!(coloring.colored_count(), 4);
//! assert!(coloring.verify(&tri.indices));
//! ```

use std::collections::HashSet;

/// A partition of vertex indices into three color classes.
#[derive(Debug, Clone, PartialEq)]
pub struct ThreeColoring {
    /// The three color classes, as sets of vertex indices.
    pub classes: [HashSet<usize>; 3],
}

impl ThreeColoring {
    /// Returns the total number of colored vertices.
    pub fn colored_count(&self) -> usize {
        self.classes.iter().map(|c| c.len()).sum()
    }

    /// Returns the color class of a vertex, if it has one.
    pub fn class_of(&self, vertex: usize) -> Option<usize> {
        self.classes.iter().position(|c| c.contains(&vertex))
    }

    /// Returns the index and members of the smallest color class.
    ///
    /// Ties are broken toward the lowest class index. For a polygon with n
    /// vertices the returned set has at most floor(n/3) members, which is
    /// the art gallery guard bound.
    pub fn smallest(&self) -> (usize, &HashSet<usize>) {
        let mut best = 0;
        for i in 1..3 {
            if self.classes[i].len() < self.classes[best].len() {
                best = i;
            }
        }
        (best, &self.classes[best])
    }

    /// Checks that the coloring is a proper three-coloring of the given
    /// triangulation.
    ///
    /// Returns `true` when the classes are pairwise disjoint and every
    /// triangle has its three vertices in three different classes.
    pub fn verify(&self, triangles: &[(usize, usize, usize)]) -> bool {
        for i in 0..3 {
            for j in (i + 1)..3 {
                if !self.classes[i].is_disjoint(&self.classes[j]) {
                    return false;
                }
            }
        }

        triangles.iter().all(|&(a, b, c)| {
            match (self.class_of(a), self.class_of(b), self.class_of(c)) {
                (Some(ca), Some(cb), Some(cc)) => ca != cb && cb != cc && ca != cc,
                _ => false,
            }
        })
    }
}

/// Three-colors the vertices of a triangulation by constraint propagation.
///
/// The first triangle's vertices seed the three classes. Every following
/// pass scans all triangles and, whenever a triangle has exactly two
/// vertices colored in two different classes, assigns the remaining class
/// to the third vertex. A vertex is never recolored. Triangulations of a
/// simple polygon are edge-connected, so the propagation reaches every
/// vertex.
///
/// `vertex_count` is the number of vertices in the original polygon;
/// indices in `triangles` must be below it.
///
/// # Panics
///
/// Panics if `triangles` is empty, or if a pass colors no new vertex while
/// some remain uncolored (which means the triangle set was not the
/// triangulation of a simple polygon).
///
/// # Example
///
/// ```
/// use fisk::polygon::tricolor;
///
/// // Fan triangulation of a pentagon
/// let triangles = [(0, 1, 2), (0, 2, 3), (0, 3, 4)];
/// let coloring = tricolor(&triangles, 5);
///
/// assert!(coloring.verify(&triangles));
/// let (_, guards) = coloring.smallest();
/// assert!(guards.len() <= 5 / 3);
/// ```
pub fn tricolor(triangles: &[(usize, usize, usize)], vertex_count: usize) -> ThreeColoring {
    assert!(
        !triangles.is_empty(),
        "cannot three-color an empty triangulation"
    );

    let mut color_of: Vec<Option<usize>> = vec![None; vertex_count];
    let mut colored = 0;

    let (a, b, c) = triangles[0];
    color_of[a] = Some(0);
    color_of[b] = Some(1);
    color_of[c] = Some(2);
    colored += 3;

    while colored < vertex_count {
        let before = colored;

        for &(a, b, c) in triangles {
            let known: Vec<usize> = [a, b, c]
                .iter()
                .filter_map(|&v| color_of[v])
                .collect();

            if known.len() == 2 && known[0] != known[1] {
                let free = 3 - known[0] - known[1];
                for v in [a, b, c] {
                    if color_of[v].is_none() {
                        color_of[v] = Some(free);
                        colored += 1;
                    }
                }
            }
        }

        assert!(
            colored > before,
            "three-coloring stalled with {} of {} vertices colored",
            colored,
            vertex_count
        );
    }

    let mut classes: [HashSet<usize>; 3] = Default::default();
    for (vertex, color) in color_of.iter().enumerate() {
        if let Some(color) = color {
            classes[*color].insert(vertex);
        }
    }

    ThreeColoring { classes }
}
