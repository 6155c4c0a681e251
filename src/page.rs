//! The document hosting carousels: viewport, scrolling and the page-wide
//! keyboard listener.

use std::time::Instant;

use tracing::debug;

use crate::carousel::Carousel;
use crate::config::CarouselConfig;
use crate::input::{CarouselEvent, Disposition, Key};
use crate::markup::{CarouselMarkup, Viewport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CarouselId(usize);

#[derive(Debug)]
pub struct Page {
    viewport: Viewport,
    height: f32,
    scroll_y: f32,
    carousels: Vec<Carousel>,
}

impl Page {
    /// `height` is the full document height; it never drops below the viewport.
    pub fn new(viewport: Viewport, height: f32) -> Self {
        Self {
            viewport,
            height: height.max(viewport.height),
            scroll_y: 0.0,
            carousels: Vec::new(),
        }
    }

    /// Binds a controller to the featured carousel, if the document has one.
    pub fn mount(
        &mut self,
        markup: Option<CarouselMarkup>,
        config: CarouselConfig,
        now: Instant,
    ) -> Option<CarouselId> {
        let Some(mut markup) = markup else {
            debug!("No featured carousel on the page");
            return None;
        };
        // Markup bounds are given in document coordinates
        markup.bounds.y -= self.scroll_y;
        self.carousels.push(Carousel::init(markup, config, now));
        Some(CarouselId(self.carousels.len() - 1))
    }

    pub fn carousel(&self, id: CarouselId) -> Option<&Carousel> {
        self.carousels.get(id.0)
    }

    pub fn carousel_mut(&mut self, id: CarouselId) -> Option<&mut Carousel> {
        self.carousels.get_mut(id.0)
    }

    pub fn carousels(&self) -> impl Iterator<Item = (CarouselId, &Carousel)> {
        self.carousels.iter().enumerate().map(|(i, c)| (CarouselId(i), c))
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Window resize. Keeps the scroll position inside the document.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.height = self.height.max(viewport.height);
        self.scroll_by(0.0);
    }

    /// Scrolls the document; positive `dy` moves content up.
    pub fn scroll_by(&mut self, dy: f32) {
        let max_scroll = (self.height - self.viewport.height).max(0.0);
        let target = (self.scroll_y + dy).clamp(0.0, max_scroll);
        let applied = target - self.scroll_y;
        if applied == 0.0 {
            return;
        }
        self.scroll_y = target;
        for carousel in self.carousels.iter_mut() {
            carousel.markup_mut().bounds.y -= applied;
        }
    }

    pub fn dispatch(&mut self, id: CarouselId, event: CarouselEvent, now: Instant) -> Disposition {
        match self.carousels.get_mut(id.0) {
            Some(carousel) => carousel.handle(event, now),
            None => Disposition::IGNORED,
        }
    }

    /// Routes a key press to every carousel holding a keyboard registration.
    pub fn key_down(&mut self, key: Key, now: Instant) -> Disposition {
        let viewport = self.viewport;
        let mut disposition = Disposition::IGNORED;
        for carousel in self.carousels.iter_mut().filter(|c| c.listens_for_keys()) {
            let outcome = carousel.handle_key(key, viewport, now);
            disposition.prevent_default |= outcome.prevent_default;
            disposition.stop_propagation |= outcome.stop_propagation;
        }
        disposition
    }

    /// Host tick: deferred actions first, then one animation frame.
    pub fn update(&mut self, now: Instant) {
        for carousel in self.carousels.iter_mut() {
            carousel.update(now);
        }
    }

    pub fn unload(&mut self) {
        for carousel in self.carousels.iter_mut() {
            carousel.teardown();
        }
    }
}
