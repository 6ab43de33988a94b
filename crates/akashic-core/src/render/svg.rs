//! SVG markup for the progress ring.

use crate::format::format_hours_minutes;
use crate::ring::{RingGeometry, RingLayout};

/// Output options for [`render_ring_svg`].
#[derive(Debug, Clone)]
pub struct SvgOptions {
    /// Square view-box edge; the ring is centered in it
    pub view_size: f64,
    /// Optional class on the root element
    pub class: Option<String>,
    /// Emit a `<title>` per segment (native tooltip)
    pub titles: bool,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            view_size: 100.0,
            class: Some("progress-ring".to_string()),
            titles: true,
        }
    }
}

/// Render one `<circle>` per visible segment, remainder last.
///
/// Circles sit in a group rotated -90° so dash offset 0 starts at
/// 12 o'clock and segments run clockwise.
pub fn render_ring_svg(layout: &RingLayout, geometry: &RingGeometry, options: &SvgOptions) -> String {
    let size = options.view_size;
    let c = size / 2.0;
    let mut svg = String::new();

    svg.push_str("<svg xmlns=\"http://www.w3.org/2000/svg\"");
    if let Some(class) = &options.class {
        svg.push_str(&format!(" class=\"{}\"", escape_xml(class)));
    }
    svg.push_str(&format!(" viewBox=\"0 0 {size:.2} {size:.2}\">"));
    svg.push_str(&format!("<g transform=\"rotate(-90 {c:.2} {c:.2})\">"));

    for segment in layout.iter().filter(|s| s.is_visible()) {
        let class = if segment.category.is_remainder() {
            "segment remainder"
        } else {
            "segment"
        };
        svg.push_str(&format!(
            "<circle class=\"{class}\" data-category=\"{}\" cx=\"{c:.2}\" cy=\"{c:.2}\" r=\"{:.2}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{:.2}\" stroke-dasharray=\"{}\" stroke-dashoffset=\"{}\"",
            escape_xml(&segment.category.id),
            geometry.radius,
            escape_xml(&segment.category.color),
            geometry.stroke_width,
            segment.dash_array(),
            segment.dash_offset(),
        ));
        if options.titles {
            svg.push_str(&format!(
                "><title>{} {}</title></circle>",
                escape_xml(&segment.category.label),
                format_hours_minutes(segment.weight)
            ));
        } else {
            svg.push_str("/>");
        }
    }

    svg.push_str("</g></svg>");
    svg
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
