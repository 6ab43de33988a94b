//! Ring segment layout calculator.
//!
//! Turns an ordered list of weighted categories into stroke-dash
//! parameters for one `<circle>` per category. Each circle draws a single
//! visible arc (`dash_length`) followed by an invisible arc that fills the
//! rest of the circumference (`dash_gap`), shifted along the path by
//! `rotation_offset` so segments stack clockwise from 12 o'clock with no
//! gaps. A trailing remainder segment covers whatever length is left.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::geometry::RingGeometry;
use crate::allocation::AllocationEntry;
use crate::category::Category;
use crate::error::ValidationError;

/// Remainders smaller than this share of the circumference are float noise.
const REMAINDER_EPSILON: f64 = 1e-9;

/// Stroke-dash parameters for one ring segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentGeometry {
    pub category: Category,
    /// Input weight (minutes by convention)
    pub weight: f64,
    /// Visible arc length
    pub dash_length: f64,
    /// Invisible arc length, `circumference - dash_length`
    pub dash_gap: f64,
    /// Negative cumulative length of all earlier segments
    pub rotation_offset: f64,
}

impl SegmentGeometry {
    fn new(category: Category, weight: f64, dash_length: f64, start: f64, circumference: f64) -> Self {
        Self {
            category,
            weight,
            dash_length,
            dash_gap: circumference - dash_length,
            rotation_offset: 0.0 - start,
        }
    }

    /// Arc position where this segment starts.
    pub fn start(&self) -> f64 {
        0.0 - self.rotation_offset
    }

    /// Arc position where this segment ends.
    pub fn end(&self) -> f64 {
        self.start() + self.dash_length
    }

    /// `stroke-dasharray` value.
    pub fn dash_array(&self) -> String {
        format!("{:.2} {:.2}", self.dash_length, self.dash_gap)
    }

    /// `stroke-dashoffset` value.
    pub fn dash_offset(&self) -> String {
        format!("{:.2}", self.rotation_offset)
    }

    pub fn is_visible(&self) -> bool {
        self.dash_length > 0.0
    }
}

/// Full ring: named segments in category order, then the remainder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingLayout {
    pub circumference: f64,
    pub segments: Vec<SegmentGeometry>,
    pub remainder: SegmentGeometry,
}

impl RingLayout {
    /// Named segments followed by the remainder.
    pub fn iter(&self) -> impl Iterator<Item = &SegmentGeometry> {
        self.segments.iter().chain(std::iter::once(&self.remainder))
    }

    /// Sum of every dash length, remainder included.
    pub fn total_length(&self) -> f64 {
        self.iter().map(|s| s.dash_length).sum()
    }

    /// True when no named segment has a visible arc.
    pub fn is_empty(&self) -> bool {
        self.segments.iter().all(|s| !s.is_visible())
    }

    pub fn segment(&self, id: &str) -> Option<&SegmentGeometry> {
        self.iter().find(|s| s.category.id == id)
    }
}

/// Lay out `entries` on a ring with the default neutral remainder.
///
/// Without a capacity the named segments share the whole circumference.
/// With a capacity the denominator is `max(total_weight, capacity)`, so
/// unallocated capacity shows up as the remainder and an overfull
/// allocation simply fills the ring.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidAllocation`] for a negative or
/// non-finite weight, [`ValidationError::InvalidRingGeometry`] for a bad
/// radius or stroke width and [`ValidationError::InvalidCapacity`] for a
/// non-positive capacity.
pub fn layout_ring(
    entries: &[AllocationEntry],
    geometry: &RingGeometry,
    capacity: Option<f64>,
) -> Result<RingLayout, ValidationError> {
    layout_ring_with_remainder(entries, geometry, capacity, Category::remainder())
}

/// Same as [`layout_ring`] with a caller-chosen remainder category.
pub fn layout_ring_with_remainder(
    entries: &[AllocationEntry],
    geometry: &RingGeometry,
    capacity: Option<f64>,
    remainder: Category,
) -> Result<RingLayout, ValidationError> {
    geometry.validate()?;
    for entry in entries {
        if !(entry.weight.is_finite() && entry.weight >= 0.0) {
            return Err(ValidationError::InvalidAllocation {
                category: entry.category.id.clone(),
                weight: entry.weight,
            });
        }
    }
    if let Some(cap) = capacity {
        if !(cap.is_finite() && cap > 0.0) {
            return Err(ValidationError::InvalidCapacity(cap));
        }
    }

    let circumference = geometry.circumference();
    let total: f64 = entries.iter().map(|e| e.weight).sum();

    // Weights scaled by the largest one; the scaled sum stays finite.
    let scale = entries.iter().map(|e| e.weight).fold(0.0, f64::max);
    let scaled_total: f64 = if scale > 0.0 {
        entries.iter().map(|e| e.weight / scale).sum()
    } else {
        0.0
    };
    let denominator = match capacity {
        Some(cap) if scaled_total > cap / scale => {
            warn!(total, capacity = cap, "allocation exceeds ring capacity; filling ring");
            scaled_total
        }
        Some(cap) => cap / scale,
        None => scaled_total,
    };

    let mut segments = Vec::with_capacity(entries.len());
    let mut cursor = 0.0;
    for entry in entries {
        let length = if scale > 0.0 {
            entry.weight / scale / denominator * circumference
        } else {
            0.0
        };
        segments.push(SegmentGeometry::new(
            entry.category.clone(),
            entry.weight,
            length,
            cursor,
            circumference,
        ));
        cursor += length;
    }

    let mut remainder_length = (circumference - cursor).max(0.0);
    if remainder_length < circumference * REMAINDER_EPSILON {
        remainder_length = 0.0;
    }
    let remainder_weight = capacity.map_or(0.0, |cap| (cap - total).max(0.0));
    let remainder = SegmentGeometry::new(
        remainder,
        remainder_weight,
        remainder_length,
        cursor,
        circumference,
    );

    debug!(
        segments = segments.len(),
        total,
        circumference,
        remainder = remainder_length,
        "computed ring layout"
    );

    Ok(RingLayout {
        circumference,
        segments,
        remainder,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(pairs: &[(&str, f64)]) -> Vec<AllocationEntry> {
        pairs
            .iter()
            .map(|(id, w)| AllocationEntry::new(Category::new(*id, *id, "#0ea5e9"), *w))
            .collect()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn reference_example_radius_45() {
        let e = entries(&[
            ("work", 25.0),
            ("study", 12.5),
            ("reading", 12.5),
            ("exercise", 12.5),
        ]);
        let layout = layout_ring(&e, &RingGeometry::default(), Some(300.0)).unwrap();

        let lengths: Vec<f64> = layout.iter().map(|s| s.dash_length).collect();
        let expected = [23.56, 11.78, 11.78, 11.78, 223.84];
        assert_eq!(lengths.len(), expected.len());
        for (got, want) in lengths.iter().zip(expected) {
            assert!(close(*got, want), "got {got}, want {want}");
        }
        assert!(close(layout.total_length(), 282.74));
        assert_eq!(layout.remainder.weight, 237.5);
    }

    #[test]
    fn offsets_are_negative_cumulative_lengths() {
        let e = entries(&[("a", 1.0), ("b", 2.0), ("c", 3.0)]);
        let layout = layout_ring(&e, &RingGeometry::default(), None).unwrap();

        assert_eq!(layout.segments[0].rotation_offset, 0.0);
        let mut cumulative = 0.0;
        for seg in &layout.segments {
            assert!((seg.rotation_offset + cumulative).abs() < 1e-9);
            cumulative += seg.dash_length;
        }
        assert!((layout.remainder.rotation_offset + cumulative).abs() < 1e-9);
    }

    #[test]
    fn gap_fills_rest_of_circle() {
        let e = entries(&[("a", 1.0), ("b", 3.0)]);
        let layout = layout_ring(&e, &RingGeometry::default(), None).unwrap();
        for seg in layout.iter() {
            assert!((seg.dash_length + seg.dash_gap - layout.circumference).abs() < 1e-9);
        }
    }

    #[test]
    fn zero_total_yields_empty_ring() {
        let e = entries(&[("a", 0.0), ("b", 0.0)]);
        let layout = layout_ring(&e, &RingGeometry::default(), None).unwrap();
        assert!(layout.is_empty());
        assert!(layout.segments.iter().all(|s| s.dash_length == 0.0));
        assert_eq!(layout.remainder.dash_length, layout.circumference);
        assert_eq!(layout.remainder.rotation_offset, 0.0);
    }

    #[test]
    fn no_entries_yields_full_remainder() {
        let layout = layout_ring(&[], &RingGeometry::default(), Some(60.0)).unwrap();
        assert!(layout.segments.is_empty());
        assert_eq!(layout.remainder.dash_length, layout.circumference);
        assert_eq!(layout.remainder.weight, 60.0);
    }

    #[test]
    fn capacity_leaves_remainder() {
        let e = entries(&[("work", 15.0)]);
        let layout = layout_ring(&e, &RingGeometry::default(), Some(60.0)).unwrap();
        let c = layout.circumference;
        assert!((layout.segments[0].dash_length - c / 4.0).abs() < 1e-9);
        assert!((layout.remainder.dash_length - c * 0.75).abs() < 1e-9);
        assert_eq!(layout.remainder.weight, 45.0);
        assert!(layout.remainder.category.is_remainder());
    }

    #[test]
    fn overfull_allocation_fills_ring() {
        let e = entries(&[("work", 90.0), ("study", 30.0)]);
        let layout = layout_ring(&e, &RingGeometry::default(), Some(60.0)).unwrap();
        let c = layout.circumference;
        assert!((layout.segments[0].dash_length - c * 0.75).abs() < 1e-9);
        assert_eq!(layout.remainder.dash_length, 0.0);
        assert_eq!(layout.remainder.weight, 0.0);
    }

    #[test]
    fn negative_weight_is_rejected() {
        let e = entries(&[("work", -5.0)]);
        let err = layout_ring(&e, &RingGeometry::default(), None).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidAllocation {
                category: "work".into(),
                weight: -5.0
            }
        );
    }

    #[test]
    fn huge_weights_still_fill_the_circle() {
        let layout = layout_ring(&entries(&[("work", 1e307)]), &RingGeometry::default(), None)
            .unwrap();
        assert!((layout.segments[0].dash_length - layout.circumference).abs() < 1e-9);
        assert_eq!(layout.remainder.dash_length, 0.0);

        let e = entries(&[("work", f64::MAX), ("study", f64::MAX)]);
        let layout = layout_ring(&e, &RingGeometry::default(), Some(60.0)).unwrap();
        let half = layout.circumference / 2.0;
        for seg in &layout.segments {
            assert!((seg.dash_length - half).abs() < 1e-9);
            assert!(seg.dash_gap.is_finite());
        }
        assert!((layout.segments[1].rotation_offset + half).abs() < 1e-9);
        assert!((layout.total_length() - layout.circumference).abs() < 1e-9);
    }

    #[test]
    fn tiny_weights_against_huge_capacity_stay_finite() {
        let e = entries(&[("work", 1e-300)]);
        let layout = layout_ring(&e, &RingGeometry::default(), Some(1e300)).unwrap();
        assert!(layout.segments[0].dash_length.is_finite());
        assert!((layout.total_length() - layout.circumference).abs() < 1e-9);
    }

    #[test]
    fn nan_weight_is_rejected() {
        let e = entries(&[("work", f64::NAN)]);
        assert!(matches!(
            layout_ring(&e, &RingGeometry::default(), None),
            Err(ValidationError::InvalidAllocation { .. })
        ));
    }

    #[test]
    fn bad_radius_is_rejected() {
        let geometry = RingGeometry {
            radius: 0.0,
            stroke_width: 8.0,
        };
        let err = layout_ring(&entries(&[("a", 1.0)]), &geometry, None).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidRingGeometry { .. }));
    }

    #[test]
    fn bad_capacity_is_rejected() {
        let err = layout_ring(&entries(&[("a", 1.0)]), &RingGeometry::default(), Some(0.0))
            .unwrap_err();
        assert_eq!(err, ValidationError::InvalidCapacity(0.0));
    }

    #[test]
    fn dash_strings_use_two_decimals() {
        let e = entries(&[("work", 1.0), ("study", 1.0)]);
        let layout = layout_ring(&e, &RingGeometry::default(), None).unwrap();
        assert_eq!(layout.segments[0].dash_array(), "141.37 141.37");
        assert_eq!(layout.segments[0].dash_offset(), "0.00");
        assert_eq!(layout.segments[1].dash_offset(), "-141.37");
    }

    #[test]
    fn stroke_width_does_not_change_arcs() {
        let e = entries(&[("a", 2.0), ("b", 5.0)]);
        let thin = layout_ring(&e, &RingGeometry::new(45.0, 1.0).unwrap(), None).unwrap();
        let thick = layout_ring(&e, &RingGeometry::new(45.0, 20.0).unwrap(), None).unwrap();
        assert_eq!(thin, thick);
    }
}
