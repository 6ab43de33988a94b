//! Recorded time slices and their aggregation into ring allocations.
//!
//! A time slice is one tracked span, tagged through `#tag` words in its
//! description. The timeline keeps slices ordered by start time and folds
//! them into an [`Allocation`] for a reference period, or into the
//! "today" / "total" focus summary.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::allocation::{Allocation, ReferencePeriod};
use crate::category::Category;
use crate::error::{CoreError, ValidationError};

/// One tracked span of time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlice {
    pub id: u64,
    pub start: DateTime<Utc>,
    /// `None` while the slice is still running
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TimeSlice {
    pub fn new(
        id: u64,
        start: DateTime<Utc>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Self, ValidationError> {
        let slice = Self {
            id,
            start,
            end,
            tags: Vec::new(),
            description: None,
        };
        slice.validate()?;
        Ok(slice)
    }

    /// Attach a description; its `#tags` are merged into the tag list.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        for tag in parse_tags(&description) {
            if !self.tags.contains(&tag) {
                self.tags.push(tag);
            }
        }
        self.description = Some(description);
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for tag in tags {
            let tag = tag.into().to_lowercase();
            if !self.tags.contains(&tag) {
                self.tags.push(tag);
            }
        }
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.end {
            Some(end) if end < self.start => Err(ValidationError::InvalidTimeRange {
                start: self.start,
                end,
            }),
            _ => Ok(()),
        }
    }

    pub fn is_running(&self) -> bool {
        self.end.is_none()
    }

    /// End time, with a running slice counted up to `now`.
    pub fn end_or(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        self.end.unwrap_or(now).max(self.start)
    }

    pub fn duration(&self, now: DateTime<Utc>) -> Duration {
        self.end_or(now) - self.start
    }

    /// First category, in category order, named by one of this slice's tags.
    pub fn category_in<'a>(&self, categories: &'a [Category]) -> Option<&'a Category> {
        categories
            .iter()
            .find(|c| self.tags.iter().any(|t| t.eq_ignore_ascii_case(&c.id)))
    }
}

/// Extract `#tag` words from a description, lowercased, in first-seen order.
pub fn parse_tags(description: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for word in description.split_whitespace() {
        let Some(rest) = word.strip_prefix('#') else {
            continue;
        };
        let tag: String = rest
            .chars()
            .take_while(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
            .collect::<String>()
            .to_lowercase();
        if !tag.is_empty() && !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

/// Focus totals for the summary labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FocusSummary {
    pub today_minutes: f64,
    pub total_minutes: f64,
}

/// Time slices ordered by start time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    slices: Vec<TimeSlice>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from unordered slices, validating each one.
    pub fn from_slices(slices: Vec<TimeSlice>) -> Result<Self, ValidationError> {
        let mut timeline = Self::new();
        for slice in slices {
            timeline.insert(slice)?;
        }
        Ok(timeline)
    }

    /// Parse a JSON array of slices.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let slices: Vec<TimeSlice> = serde_json::from_str(json)?;
        Ok(Self::from_slices(slices)?)
    }

    /// Read a JSON slice log from disk.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Insert keeping start order; equal starts keep insertion order.
    pub fn insert(&mut self, slice: TimeSlice) -> Result<(), ValidationError> {
        slice.validate()?;
        let pos = self.slices.partition_point(|s| s.start <= slice.start);
        self.slices.insert(pos, slice);
        Ok(())
    }

    pub fn remove(&mut self, id: u64) -> Option<TimeSlice> {
        let pos = self.slices.iter().position(|s| s.id == id)?;
        Some(self.slices.remove(pos))
    }

    pub fn slices(&self) -> &[TimeSlice] {
        &self.slices
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Fold the slices overlapping `period` into an allocation.
    ///
    /// Every category appears in the given order, even at weight 0. Time
    /// whose tags match no category lands in a trailing `other` entry.
    /// Capacity is the period length in minutes.
    pub fn allocation(
        &self,
        categories: &[Category],
        period: ReferencePeriod,
        now: DateTime<Utc>,
    ) -> Allocation {
        let window = period.window(now);
        let mut allocation = Allocation::with_capacity(period.capacity_minutes());
        for category in categories {
            allocation.accumulate(category.clone(), 0.0);
        }

        let mut unmatched = 0.0;
        for slice in &self.slices {
            let minutes = to_minutes(window.overlap(slice.start, slice.end_or(now)));
            if minutes <= 0.0 {
                continue;
            }
            match slice.category_in(categories) {
                Some(category) => {
                    allocation.accumulate(category.clone(), minutes);
                }
                None => unmatched += minutes,
            }
        }
        if unmatched > 0.0 {
            allocation.accumulate(Category::other(), unmatched);
        }
        allocation
    }

    pub fn summary(&self, now: DateTime<Utc>) -> FocusSummary {
        let today = ReferencePeriod::Day.window(now);
        let mut summary = FocusSummary {
            today_minutes: 0.0,
            total_minutes: 0.0,
        };
        for slice in &self.slices {
            summary.today_minutes += to_minutes(today.overlap(slice.start, slice.end_or(now)));
            summary.total_minutes += to_minutes(slice.duration(now));
        }
        summary
    }
}

fn to_minutes(d: Duration) -> f64 {
    d.num_milliseconds() as f64 / 60_000.0
}
