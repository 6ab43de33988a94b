//! Typed interaction hooks for the ring view.
//!
//! The view never looks elements up by id. Whoever owns the behavior
//! (timer control, tooltip, tag selection) passes a [`RingHandler`] down,
//! and [`RingPointer`] turns raw pointer events into calls on it using
//! the ring geometry.

use crate::category::Category;
use crate::error::ValidationError;
use crate::ring::{segment_at_point, Point, RingGeometry, RingLayout, SegmentGeometry};

/// Receives ring interactions. Every method defaults to a no-op.
pub trait RingHandler {
    /// Pointer clicked inside the timer button disc.
    fn on_timer_click(&mut self) {}

    /// Hovered segment changed; `None` when the pointer left every segment.
    fn on_segment_hover(&mut self, _segment: Option<&SegmentGeometry>) {}

    /// A tag chip was selected.
    fn on_tag_select(&mut self, _category: &Category) {}
}

type HoverFn = Box<dyn FnMut(Option<&SegmentGeometry>)>;

/// Closure-backed [`RingHandler`].
#[derive(Default)]
pub struct RingCallbacks {
    pub on_timer_click: Option<Box<dyn FnMut()>>,
    pub on_segment_hover: Option<HoverFn>,
    pub on_tag_select: Option<Box<dyn FnMut(&Category)>>,
}

impl RingHandler for RingCallbacks {
    fn on_timer_click(&mut self) {
        if let Some(f) = self.on_timer_click.as_mut() {
            f();
        }
    }

    fn on_segment_hover(&mut self, segment: Option<&SegmentGeometry>) {
        if let Some(f) = self.on_segment_hover.as_mut() {
            f(segment);
        }
    }

    fn on_tag_select(&mut self, category: &Category) {
        if let Some(f) = self.on_tag_select.as_mut() {
            f(category);
        }
    }
}

/// Raw pointer input in view-box coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Move { x: f64, y: f64 },
    Click { x: f64, y: f64 },
    Leave,
}

/// Routes pointer events over one rendered layout.
#[derive(Debug)]
pub struct RingPointer<'a> {
    layout: &'a RingLayout,
    geometry: RingGeometry,
    center: Point,
    hovered: Option<String>,
}

impl<'a> RingPointer<'a> {
    pub fn new(layout: &'a RingLayout, geometry: RingGeometry, center: Point) -> Self {
        Self {
            layout,
            geometry,
            center,
            hovered: None,
        }
    }

    /// Id of the segment currently under the pointer.
    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub fn dispatch<H: RingHandler + ?Sized>(&mut self, event: PointerEvent, handler: &mut H) {
        match event {
            PointerEvent::Move { x, y } => {
                let point = Point::new(x, y);
                let segment = segment_at_point(self.layout, &self.geometry, self.center, point);
                self.set_hover(segment, handler);
            }
            PointerEvent::Click { x, y } => {
                if self.center.distance_to(Point::new(x, y)) < self.geometry.inner_radius() {
                    handler.on_timer_click();
                }
            }
            PointerEvent::Leave => self.set_hover(None, handler),
        }
    }

    fn set_hover<H: RingHandler + ?Sized>(
        &mut self,
        segment: Option<&'a SegmentGeometry>,
        handler: &mut H,
    ) {
        let id = segment.map(|s| s.category.id.clone());
        if id != self.hovered {
            self.hovered = id;
            handler.on_segment_hover(segment);
        }
    }
}

/// Look `id` up in the ordered tag list and notify `handler`.
pub fn select_tag<'c, H: RingHandler + ?Sized>(
    categories: &'c [Category],
    id: &str,
    handler: &mut H,
) -> Result<&'c Category, ValidationError> {
    let category = categories
        .iter()
        .find(|c| c.id == id)
        .ok_or_else(|| ValidationError::UnknownCategory(id.to_string()))?;
    handler.on_tag_select(category);
    Ok(category)
}
