use crate::constants::TIMER_RADIUS;
use crate::markup::{CarouselMarkup, Rect};

const BUTTON_SIZE: f32 = 48.0;
const BUTTON_INSET: f32 = 16.0;
const DOT_SIZE: f32 = 12.0;
const DOT_GAP: f32 = 10.0;
const DOT_INSET: f32 = 24.0;
const RING_INSET: f32 = 16.0;

/// What sits under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Prev,
    Next,
    Dot(usize),
    Inside,
    Outside,
}

/// Placement of the carousel's parts, derived from its bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub bounds: Rect,
    pub prev: Rect,
    pub next: Rect,
    pub dots: Vec<Rect>,
    pub ring_center: (f32, f32),
    pub ring_radius: f32,
}

impl Layout {
    pub fn compute(bounds: Rect, dot_count: usize) -> Layout {
        let mid_y = bounds.y + bounds.height * 0.5;

        let prev = Rect::new(
            bounds.x + BUTTON_INSET,
            mid_y - BUTTON_SIZE * 0.5,
            BUTTON_SIZE,
            BUTTON_SIZE,
        );
        let next = Rect::new(
            bounds.x + bounds.width - BUTTON_INSET - BUTTON_SIZE,
            mid_y - BUTTON_SIZE * 0.5,
            BUTTON_SIZE,
            BUTTON_SIZE,
        );

        // Dots are centered in a row along the bottom edge
        let row_width = dot_count as f32 * DOT_SIZE + dot_count.saturating_sub(1) as f32 * DOT_GAP;
        let row_x = bounds.x + (bounds.width - row_width) * 0.5;
        let row_y = bounds.y + bounds.height - DOT_INSET - DOT_SIZE;
        let dots = (0..dot_count)
            .map(|i| Rect::new(row_x + i as f32 * (DOT_SIZE + DOT_GAP), row_y, DOT_SIZE, DOT_SIZE))
            .collect();

        let ring_center = (
            bounds.x + bounds.width - RING_INSET - TIMER_RADIUS,
            bounds.y + RING_INSET + TIMER_RADIUS,
        );

        Layout { bounds, prev, next, dots, ring_center, ring_radius: TIMER_RADIUS }
    }

    /// Resolves a pointer position; absent or hidden controls are transparent.
    pub fn hit_test(&self, markup: &CarouselMarkup, x: f32, y: f32) -> Hit {
        if !self.bounds.contains(x, y) {
            return Hit::Outside;
        }
        if markup.prev.as_ref().is_some_and(|c| !c.hidden) && self.prev.contains(x, y) {
            return Hit::Prev;
        }
        if markup.next.as_ref().is_some_and(|c| !c.hidden) && self.next.contains(x, y) {
            return Hit::Next;
        }
        match self.dots.iter().position(|dot| dot.contains(x, y)) {
            Some(i) => Hit::Dot(i),
            None => Hit::Inside,
        }
    }
}

/// Scale that fits a `width` x `height` image inside `frame` without cropping.
pub fn fit_scale(width: f32, height: f32, frame: Rect) -> f32 {
    if width <= 0.0 || height <= 0.0 {
        return 1.0;
    }
    (frame.width / width).min(frame.height / height)
}
