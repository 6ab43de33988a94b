//! View model for the whole focus screen.
//!
//! Everything the screen shows is derived here from a timeline and the
//! config: ring segments with tooltip text, the timer label, the two
//! summary labels and the tag chips.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::Config;
use crate::error::{Result, ValidationError};
use crate::format::{format_clock, format_hours, format_hours_minutes};
use crate::ring::{RingGeometry, RingLayout, SegmentGeometry};
use crate::timeline::{FocusSummary, Timeline};

/// One ring segment ready for rendering and tooltips.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentView {
    pub id: String,
    pub label: String,
    pub color: String,
    pub dash_array: String,
    pub dash_offset: String,
    /// Tooltip time (`h:mm`)
    pub time: String,
}

impl From<&SegmentGeometry> for SegmentView {
    fn from(segment: &SegmentGeometry) -> Self {
        Self {
            id: segment.category.id.clone(),
            label: segment.category.label.clone(),
            color: segment.category.color.clone(),
            dash_array: segment.dash_array(),
            dash_offset: segment.dash_offset(),
            time: format_hours_minutes(segment.weight),
        }
    }
}

/// One chip in the horizontal tag list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagChip {
    pub id: String,
    pub label: String,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub geometry: RingGeometry,
    pub layout: RingLayout,
    /// Visible segments, remainder last
    pub segments: Vec<SegmentView>,
    pub timer_label: String,
    pub today_label: String,
    pub total_label: String,
    pub summary: FocusSummary,
    pub tags: Vec<TagChip>,
}

impl DashboardView {
    /// Derive the screen state at `now`.
    ///
    /// # Errors
    ///
    /// Fails on invalid ring geometry or category colors in `config`, or
    /// when `active_tag` names no configured category.
    pub fn build(
        timeline: &Timeline,
        config: &Config,
        now: DateTime<Utc>,
        active_tag: Option<&str>,
    ) -> Result<Self> {
        let geometry = config.geometry()?;
        let categories = config.categories()?;
        if let Some(tag) = active_tag {
            if !categories.iter().any(|c| c.id == tag) {
                return Err(ValidationError::UnknownCategory(tag.to_string()).into());
            }
        }

        let allocation = timeline
            .allocation(categories, config.period, now)
            .with_remainder(config.remainder()?);
        let layout = allocation.layout(&geometry)?;
        let segments = layout
            .iter()
            .filter(|s| s.is_visible())
            .map(SegmentView::from)
            .collect();

        let summary = timeline.summary(now);
        let tags = categories
            .iter()
            .map(|c| TagChip {
                id: c.id.clone(),
                label: c.label.clone(),
                color: c.color.clone(),
                icon: c.icon.clone(),
                active: active_tag == Some(c.id.as_str()),
            })
            .collect();

        Ok(Self {
            geometry,
            layout,
            segments,
            timer_label: format_clock(u64::from(config.timer.focus_minutes) * 60),
            today_label: format!("Today: {}", format_hours(summary.today_minutes)),
            total_label: format!("Total: {}", format_hours(summary.total_minutes)),
            summary,
            tags,
        })
    }
}
