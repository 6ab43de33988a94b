//! Hit testing: which segment sits under an angle or a pointer position.

use serde::{Deserialize, Serialize};

use super::geometry::RingGeometry;
use super::layout::{RingLayout, SegmentGeometry};

/// A point in view-box coordinates (y grows downward, as in SVG).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Clockwise angle in degrees from 12 o'clock, in `[0, 360)`.
pub fn clockwise_angle(center: Point, point: Point) -> f64 {
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    // atan2(dx, -dy) is 0 straight up and grows clockwise in y-down space.
    dx.atan2(-dy).to_degrees().rem_euclid(360.0)
}

/// Segment whose arc contains `degrees` (clockwise from 12 o'clock).
///
/// Arcs are half-open `[start, end)`, so a boundary belongs to the later
/// segment. Zero-length segments are never returned.
pub fn segment_at_angle(layout: &RingLayout, degrees: f64) -> Option<&SegmentGeometry> {
    if !degrees.is_finite() {
        return None;
    }
    let position = degrees.rem_euclid(360.0) / 360.0 * layout.circumference;
    layout
        .iter()
        .filter(|s| s.is_visible())
        .find(|s| position >= s.start() && position < s.end())
}

/// Segment under `point`, if the point lies on the ring stroke.
pub fn segment_at_point<'a>(
    layout: &'a RingLayout,
    geometry: &RingGeometry,
    center: Point,
    point: Point,
) -> Option<&'a SegmentGeometry> {
    let distance = center.distance_to(point);
    if distance < geometry.inner_radius() || distance > geometry.outer_radius() {
        return None;
    }
    segment_at_angle(layout, clockwise_angle(center, point))
}
