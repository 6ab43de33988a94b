//! Fixed ring dimensions.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::error::ValidationError;

/// Radius and stroke width of the progress ring, in view-box units.
///
/// The stroke width is purely visual; it never enters the arc math, but
/// hit testing uses it to decide whether a point lies on the ring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingGeometry {
    pub radius: f64,
    pub stroke_width: f64,
}

impl Default for RingGeometry {
    fn default() -> Self {
        Self {
            radius: 45.0,
            stroke_width: 8.0,
        }
    }
}

impl RingGeometry {
    /// Build a validated geometry.
    pub fn new(radius: f64, stroke_width: f64) -> Result<Self, ValidationError> {
        let geometry = Self {
            radius,
            stroke_width,
        };
        geometry.validate()?;
        Ok(geometry)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(ValidationError::InvalidRingGeometry {
                field: "radius",
                value: self.radius,
            });
        }
        if !(self.stroke_width.is_finite() && self.stroke_width > 0.0) {
            return Err(ValidationError::InvalidRingGeometry {
                field: "stroke_width",
                value: self.stroke_width,
            });
        }
        Ok(())
    }

    /// `2 * π * r`
    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius
    }

    /// Radius of the disc inside the stroke (the timer button area).
    pub fn inner_radius(&self) -> f64 {
        (self.radius - self.stroke_width / 2.0).max(0.0)
    }

    pub fn outer_radius(&self) -> f64 {
        self.radius + self.stroke_width / 2.0
    }
}
