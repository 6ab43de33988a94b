//! # Akashic Core Library
//!
//! Core logic for the Akashic focus tracker's main screen: a circular
//! progress ring split into one colored segment per time category, a timer
//! button, "today" / "total" labels and a tag list.
//!
//! ## Architecture
//!
//! - **Ring**: pure layout calculator mapping ordered category weights to
//!   stroke-dash parameters, plus hit testing
//! - **Timeline**: tracked time slices folded into per-period allocations
//! - **Render**: SVG markup and a serializable dashboard view model
//! - **Interaction**: typed callbacks routed from pointer events
//! - **Config**: TOML-based ring, period and palette settings
//!
//! ## Key Components
//!
//! - [`layout_ring`]: the segment geometry function
//! - [`Allocation`]: ordered category weights for one period
//! - [`Timeline`]: time slices ordered by start
//! - [`DashboardView`]: everything the screen shows
//! - [`Config`]: application configuration management

pub mod allocation;
pub mod category;
pub mod config;
pub mod error;
pub mod format;
pub mod interaction;
pub mod render;
pub mod ring;
pub mod timeline;

pub use allocation::{Allocation, AllocationEntry, ReferencePeriod, TimeWindow};
pub use category::Category;
pub use config::Config;
pub use error::{ConfigError, CoreError, ValidationError};
pub use interaction::{select_tag, PointerEvent, RingCallbacks, RingHandler, RingPointer};
pub use render::{render_ring_svg, DashboardView, SegmentView, SvgOptions, TagChip};
pub use ring::{
    layout_ring, segment_at_angle, segment_at_point, Point, RingGeometry, RingLayout,
    SegmentGeometry,
};
pub use timeline::{parse_tags, FocusSummary, TimeSlice, Timeline};
