//! Epsilon-aware geometric predicates and operations.
//!
//! All functions in this module take explicit tolerance parameters.
//! No hidden epsilons are used.

mod predicates;
mod weld;

pub use predicates::{
    orient2d, point_on_segment, points_coincide, segments_properly_intersect, Orientation,
};
pub use weld::weld_points_keep_first;
