//! Structural contract between the controller and whatever hosts it.
//!
//! A carousel is a box holding an ordered list of slides, one dot per slide,
//! optional prev/next controls and an optional countdown ring. The controller
//! only flips the flags stored here; drawing them is the host's business.

use crate::constants::TIMER_CIRCUMFERENCE;
use crate::state::SlideRole;

/// Axis-aligned box in viewport coordinates.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    /// True when any vertical part of the box is on screen.
    pub fn intersects_viewport(&self, viewport: Viewport) -> bool {
        self.top() < viewport.height && self.bottom() > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Default, Clone)]
pub struct SlideElement {
    pub role: SlideRole,
}

#[derive(Debug, Default, Clone)]
pub struct DotElement {
    pub active: bool,
}

/// A prev or next button.
#[derive(Debug, Default, Clone)]
pub struct Control {
    pub hidden: bool,
}

/// Circular countdown indicator; `stroke_offset` runs from the full
/// circumference (cycle just started) down to zero (cycle over).
#[derive(Debug, Clone)]
pub struct ProgressRing {
    pub hidden: bool,
    pub stroke_offset: f32,
}

impl Default for ProgressRing {
    fn default() -> Self {
        Self { hidden: false, stroke_offset: TIMER_CIRCUMFERENCE }
    }
}

#[derive(Debug, Clone)]
pub struct CarouselMarkup {
    pub slides: Vec<SlideElement>,
    pub dots: Vec<DotElement>,
    pub prev: Option<Control>,
    pub next: Option<Control>,
    pub progress: Option<ProgressRing>,
    pub paused: bool,
    pub bounds: Rect,
}

impl CarouselMarkup {
    /// Bare container with `count` slides and nothing else. The first slide
    /// starts out active, as served markup does before any controller runs.
    pub fn new(count: usize, bounds: Rect) -> Self {
        let mut slides = vec![SlideElement::default(); count];
        if let Some(first) = slides.first_mut() {
            first.role = SlideRole::Active;
        }
        Self {
            slides,
            dots: Vec::new(),
            prev: None,
            next: None,
            progress: None,
            paused: false,
            bounds,
        }
    }

    /// Container with every optional part present: one dot per slide,
    /// both controls and the countdown ring.
    pub fn full(count: usize, bounds: Rect) -> Self {
        Self::new(count, bounds)
            .with_dots()
            .with_controls()
            .with_progress()
    }

    pub fn with_dots(mut self) -> Self {
        self.dots = vec![DotElement::default(); self.slides.len()];
        if let Some(first) = self.dots.first_mut() {
            first.active = true;
        }
        self
    }

    pub fn with_controls(mut self) -> Self {
        self.prev = Some(Control::default());
        self.next = Some(Control::default());
        self
    }

    pub fn with_progress(mut self) -> Self {
        self.progress = Some(ProgressRing::default());
        self
    }

    /// Index of the slide carrying the `active` role, if exactly one does.
    pub fn active_slide(&self) -> Option<usize> {
        let mut active = self.slides.iter().enumerate().filter(|(_, s)| s.role == SlideRole::Active);
        match (active.next(), active.next()) {
            (Some((i, _)), None) => Some(i),
            _ => None,
        }
    }

    pub fn active_dot(&self) -> Option<usize> {
        let mut active = self.dots.iter().enumerate().filter(|(_, d)| d.active);
        match (active.next(), active.next()) {
            (Some((i, _)), None) => Some(i),
            _ => None,
        }
    }
}
