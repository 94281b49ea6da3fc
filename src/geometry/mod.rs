//! Pure geometry shared by hit testing and the eraser.
//!
//! Everything here works in the drawing surface's local coordinate space
//! and has no side effects.

mod hit_testing;
mod intersection;

pub use hit_testing::{calculate_bounds, distance_to_segment, midpoint, point_in_circle};
pub use intersection::{Intersection, circle_segment_intersections};
