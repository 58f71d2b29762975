//! fisk - Art gallery geometry
//!
//! How many guards does a gallery need? This library computes the pieces of
//! Fisk's answer: visibility polygons for a single observer, ear clipping
//! triangulation, and a three-coloring whose smallest class places at most
//! floor(n/3) guards.

pub mod error;
pub mod polygon;
pub mod primitives;
pub mod tolerance;

pub use error::FiskError;
pub use polygon::{
    is_visible, tricolor, triangulate, visibility_polygon, Polygon, ThreeColoring, Triangulation,
};
pub use primitives::{Point2, Ray2, RayIntersection, Segment2, Vec2};
pub use tolerance::{
    orient2d, point_on_segment, points_coincide, segments_properly_intersect,
    weld_points_keep_first, Orientation,
};
