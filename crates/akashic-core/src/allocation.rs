//! Per-period category allocations and the reference period they fill.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::category::Category;
use crate::error::ValidationError;
use crate::ring::{layout_ring_with_remainder, RingGeometry, RingLayout};

/// One category and its weight (minutes by convention).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationEntry {
    pub category: Category,
    pub weight: f64,
}

impl AllocationEntry {
    pub fn new(category: Category, weight: f64) -> Self {
        Self { category, weight }
    }
}

/// Ordered category weights for a single reporting period.
///
/// Order is the legend order; the ring draws segments in the same order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    entries: Vec<AllocationEntry>,
    capacity: Option<f64>,
    remainder: Category,
}

impl Default for Allocation {
    fn default() -> Self {
        Self::new()
    }
}

impl Allocation {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            capacity: None,
            remainder: Category::remainder(),
        }
    }

    /// Allocation whose full ring corresponds to `capacity`.
    pub fn with_capacity(capacity: f64) -> Self {
        Self {
            capacity: Some(capacity),
            ..Self::new()
        }
    }

    pub fn with_remainder(mut self, remainder: Category) -> Self {
        self.remainder = remainder;
        self
    }

    /// Add `weight` to `category`. A category already present keeps its
    /// position and accumulates.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidAllocation`] when `weight` is
    /// negative or not finite, or when the accumulated weight overflows.
    /// The allocation is left unchanged.
    pub fn add(&mut self, category: Category, weight: f64) -> Result<&mut Self, ValidationError> {
        let current = self.weight_of(&category.id).unwrap_or(0.0);
        let accumulated = current + weight;
        if !(weight.is_finite() && weight >= 0.0) || !accumulated.is_finite() {
            return Err(ValidationError::InvalidAllocation {
                category: category.id,
                weight,
            });
        }
        self.accumulate(category, weight);
        Ok(self)
    }

    /// Unchecked [`Allocation::add`] for weights derived from time spans.
    pub(crate) fn accumulate(&mut self, category: Category, weight: f64) {
        match self.entries.iter_mut().find(|e| e.category.id == category.id) {
            Some(entry) => entry.weight += weight,
            None => self.entries.push(AllocationEntry::new(category, weight)),
        }
    }

    pub fn entries(&self) -> &[AllocationEntry] {
        &self.entries
    }

    pub fn capacity(&self) -> Option<f64> {
        self.capacity
    }

    pub fn remainder(&self) -> &Category {
        &self.remainder
    }

    pub fn weight_of(&self, id: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.category.id == id)
            .map(|e| e.weight)
    }

    pub fn total_weight(&self) -> f64 {
        self.entries.iter().map(|e| e.weight).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Compute the ring layout for this allocation.
    pub fn layout(&self, geometry: &RingGeometry) -> Result<RingLayout, ValidationError> {
        layout_ring_with_remainder(
            &self.entries,
            geometry,
            self.capacity,
            self.remainder.clone(),
        )
    }
}

/// A half-open `[start, end)` span of wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, ValidationError> {
        if end < start {
            return Err(ValidationError::InvalidTimeRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn length(&self) -> Duration {
        self.end - self.start
    }

    /// Overlap between this window and `[start, end)`.
    pub fn overlap(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Duration {
        let lo = start.max(self.start);
        let hi = end.min(self.end);
        if hi > lo {
            hi - lo
        } else {
            Duration::zero()
        }
    }
}

/// What the full ring stands for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReferencePeriod {
    /// The last `minutes` before now
    Session { minutes: u32 },
    /// The UTC calendar day containing now
    #[default]
    Day,
    /// The last `hours` before now
    Rolling { hours: u32 },
}

impl ReferencePeriod {
    pub fn window(&self, now: DateTime<Utc>) -> TimeWindow {
        match *self {
            ReferencePeriod::Session { minutes } => TimeWindow {
                start: now - Duration::minutes(i64::from(minutes)),
                end: now,
            },
            ReferencePeriod::Day => {
                let start = now
                    .date_naive()
                    .and_hms_opt(0, 0, 0)
                    .map(|naive| naive.and_utc())
                    .unwrap_or(now);
                TimeWindow {
                    start,
                    end: start + Duration::days(1),
                }
            }
            ReferencePeriod::Rolling { hours } => TimeWindow {
                start: now - Duration::hours(i64::from(hours)),
                end: now,
            },
        }
    }

    /// Length of the period in minutes; the ring's capacity.
    pub fn capacity_minutes(&self) -> f64 {
        match *self {
            ReferencePeriod::Session { minutes } => f64::from(minutes),
            ReferencePeriod::Day => 24.0 * 60.0,
            ReferencePeriod::Rolling { hours } => f64::from(hours) * 60.0,
        }
    }
}

/// Parses `day`, `session:MINUTES` or `rolling:HOURS`.
impl FromStr for ReferencePeriod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidPeriod(s.to_string());
        let (kind, amount) = match s.split_once(':') {
            Some((kind, amount)) => (kind, Some(amount)),
            None => (s, None),
        };
        let amount = amount
            .map(|a| a.trim().parse::<u32>().map_err(|_| invalid()))
            .transpose()?;

        match (kind.trim().to_ascii_lowercase().as_str(), amount) {
            ("day", None) => Ok(ReferencePeriod::Day),
            ("session", Some(minutes)) if minutes > 0 => Ok(ReferencePeriod::Session { minutes }),
            ("rolling", Some(hours)) if hours > 0 => Ok(ReferencePeriod::Rolling { hours }),
            _ => Err(invalid()),
        }
    }
}
