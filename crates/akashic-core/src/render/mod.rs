//! Rendering: SVG markup for the ring and the serializable screen model.

mod dashboard;
mod svg;

pub use dashboard::{DashboardView, SegmentView, TagChip};
pub use svg::{render_ring_svg, SvgOptions};
