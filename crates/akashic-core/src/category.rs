//! Time categories shown as ring segments and tag chips.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Id of the trailing segment covering unclaimed ring length.
pub const REMAINDER_ID: &str = "idle";
/// Id of the bucket for tracked time whose tags match no category.
pub const OTHER_ID: &str = "other";

pub const DEFAULT_REMAINDER_COLOR: &str = "#475569";
const OTHER_COLOR: &str = "#94a3b8";

/// A time category with its display attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Stable identifier, also used as the tag name (e.g. "work")
    pub id: String,
    /// Human-readable label
    pub label: String,
    /// Hex color (`#rgb` or `#rrggbb`)
    pub color: String,
    /// Optional icon name for the tag chip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Category {
    pub fn new(id: impl Into<String>, label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            color: color.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Built-in categories in legend order.
    pub fn default_palette() -> Vec<Category> {
        vec![
            Category::new("work", "Work", "#0ea5e9").with_icon("laptop-code"),
            Category::new("study", "Study", "#8b5cf6").with_icon("book"),
            Category::new("reading", "Reading", "#10b981").with_icon("book-open"),
            Category::new("exercise", "Exercise", "#f43f5e").with_icon("dumbbell"),
            Category::new("music", "Music", "#f59e0b").with_icon("music"),
        ]
    }

    /// The neutral trailing segment.
    pub fn remainder() -> Self {
        Self::remainder_with_color(DEFAULT_REMAINDER_COLOR)
    }

    pub fn remainder_with_color(color: impl Into<String>) -> Self {
        Category::new(REMAINDER_ID, "Idle", color)
    }

    /// Bucket for tracked time with no known tag.
    pub fn other() -> Self {
        Category::new(OTHER_ID, "Other", OTHER_COLOR)
    }

    pub fn is_remainder(&self) -> bool {
        self.id == REMAINDER_ID
    }

    /// Check the color is a `#rgb` or `#rrggbb` hex string.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if is_hex_color(&self.color) {
            Ok(())
        } else {
            Err(ValidationError::InvalidColor {
                category: self.id.clone(),
                color: self.color.clone(),
            })
        }
    }
}

fn is_hex_color(s: &str) -> bool {
    match s.strip_prefix('#') {
        Some(hex) => {
            matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}
