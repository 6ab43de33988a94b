//! Ring segment layout.
//!
//! - [`RingGeometry`]: radius and stroke width
//! - [`layout_ring`]: weighted categories to stroke-dash parameters
//! - [`segment_at_angle`] / [`segment_at_point`]: hit testing for tooltips

mod geometry;
mod hit;
mod layout;

pub use geometry::RingGeometry;
pub use hit::{clockwise_angle, segment_at_angle, segment_at_point, Point};
pub use layout::{layout_ring, layout_ring_with_remainder, RingLayout, SegmentGeometry};
