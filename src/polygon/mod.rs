//! Polygon operations for art gallery analysis.
//!
//! This module provides the algorithms behind guard placement:
//! - Area, centroid, and point containment
//! - Visibility polygons from an interior observer
//! - Ear clipping triangulation
//! - Three-coloring of a triangulation (Fisk's guard bound)
//!
//! # Example
//!
//! ```
//! use fisk::polygon::{tricolor, triangulate, Polygon};
//!
//! // An L-shaped gallery with six walls
//! let gallery: Polygon<f64> = Polygon::from_coords(&[
//!     (0.0, 0.0),
//!     (2.0, 0.0),
//!     (2.0, 1.0),
//!     (1.0, 1.0),
//!     (1.0, 2.0),
//!     (0.0, 2.0),
//! ]);
//!
//! let tri = triangulate(&gallery).unwrap();
//! let coloring = tricolor(&tri.indices, gallery.len());
//!
//! // The smallest color class guards the whole gallery.
//! let (_, guards) = coloring.smallest();
//! assert!(guards.len() <= gallery.len() / 3);
//! ```

mod core;
mod triangulate;
mod tricolor;
mod visibility;

pub use core::{polygon_area, polygon_centroid, polygon_contains, polygon_is_convex, Polygon};
pub use triangulate::{triangulate, Triangulation};
pub use tricolor::{tricolor, ThreeColoring};
pub use visibility::{is_visible, visibility_polygon};
