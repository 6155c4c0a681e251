//! The carousel controller: slide roles, autoplay, countdown ring and input.
//!
//! The controller never reads a clock. The host passes `now` into every call
//! and drives two callbacks: [`Carousel::run_timers`] for deferred actions and
//! [`Carousel::animation_frame`] once per display refresh.

use std::time::{Duration, Instant};

use tracing::{debug, trace, warn};

use crate::config::CarouselConfig;
use crate::input::{CarouselEvent, Disposition, Key};
use crate::markup::{CarouselMarkup, Viewport};
use crate::state::SlideRole;
use crate::timer::{TimerHandle, TimerQueue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Task {
    Advance { generation: u64 },
    ClearPrev { slide: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Fewer than two slides: nothing is wired.
    Static,
    Running,
    TornDown,
}

/// One autoplay cycle: the pending advance and the countdown animation.
/// Replaced as a whole on every start, dropped as a whole on every stop.
#[derive(Debug)]
struct AutoplaySession {
    generation: u64,
    tick: TimerHandle,
    animating: bool,
}

#[derive(Debug)]
pub struct Carousel {
    markup: CarouselMarkup,
    config: CarouselConfig,
    status: Status,

    current_index: usize,
    paused: bool,
    timer_start: Instant,
    remaining: Duration,

    session: Option<AutoplaySession>,
    generation: u64,
    timers: TimerQueue<Task>,
    listening_keys: bool,
}

impl Carousel {
    /// Binds a controller to `markup` and starts autoplay.
    ///
    /// With fewer than two slides the controls and ring are hidden and the
    /// carousel stays static: no handlers, no timers.
    pub fn init(markup: CarouselMarkup, config: CarouselConfig, now: Instant) -> Self {
        let remaining = config.interval();
        let mut carousel = Self {
            markup,
            config,
            status: Status::Static,
            current_index: 0,
            paused: false,
            timer_start: now,
            remaining,
            session: None,
            generation: 0,
            timers: TimerQueue::new(),
            listening_keys: false,
        };

        if carousel.markup.slides.len() < 2 {
            carousel.hide_navigation();
            debug!("Carousel has {} slide(s), staying static", carousel.markup.slides.len());
            return carousel;
        }

        if !carousel.markup.dots.is_empty() && carousel.markup.dots.len() != carousel.markup.slides.len() {
            warn!(
                "Carousel has {} dots for {} slides",
                carousel.markup.dots.len(),
                carousel.markup.slides.len()
            );
        }

        for (i, slide) in carousel.markup.slides.iter_mut().enumerate() {
            slide.role = if i == 0 { SlideRole::Active } else { SlideRole::Idle };
        }
        carousel.update_dots();
        let circumference = carousel.config.ring_circumference;
        if let Some(ring) = carousel.markup.progress.as_mut() {
            ring.stroke_offset = circumference;
        }

        carousel.status = Status::Running;
        carousel.listening_keys = true;
        carousel.start_autoplay(now);
        debug!("Carousel started with {} slides", carousel.markup.slides.len());
        carousel
    }

    fn hide_navigation(&mut self) {
        if let Some(prev) = self.markup.prev.as_mut() {
            prev.hidden = true;
        }
        if let Some(next) = self.markup.next.as_mut() {
            next.hidden = true;
        }
        if let Some(progress) = self.markup.progress.as_mut() {
            progress.hidden = true;
        }
    }

    pub fn markup(&self) -> &CarouselMarkup {
        &self.markup
    }

    /// Host-side access for layout changes such as moving the bounding box.
    pub fn markup_mut(&mut self) -> &mut CarouselMarkup {
        &mut self.markup
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Time left in the cycle that the next resume will schedule.
    pub fn remaining_time(&self) -> Duration {
        self.remaining
    }

    pub fn is_autoplaying(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_animating(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.animating)
    }

    /// When the pending autoplay advance fires, if one is pending.
    pub fn autoplay_deadline(&self) -> Option<Instant> {
        self.session.as_ref().and_then(|s| self.timers.deadline(s.tick))
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Whether the page-wide keyboard listener is registered.
    pub fn listens_for_keys(&self) -> bool {
        self.listening_keys
    }

    fn is_running(&self) -> bool {
        self.status == Status::Running
    }

    pub fn go_to_slide(&mut self, index: usize, now: Instant) {
        if !self.is_running() {
            return;
        }
        if index >= self.markup.slides.len() {
            warn!("Ignoring navigation to slide {} of {}", index, self.markup.slides.len());
            return;
        }
        if index == self.current_index {
            return;
        }

        let previous = self.current_index;
        self.current_index = index;

        // Only the newest outgoing slide keeps the transient role
        for slide in self.markup.slides.iter_mut() {
            if slide.role == SlideRole::Prev {
                slide.role = SlideRole::Idle;
            }
        }
        self.markup.slides[previous].role = SlideRole::Prev;
        self.markup.slides[index].role = SlideRole::Active;
        self.timers.schedule(now, self.config.transition(), Task::ClearPrev { slide: previous });

        self.update_dots();
        self.reset_autoplay(now);
        debug!("Slide {} -> {}", previous, index);
    }

    pub fn next_slide(&mut self, now: Instant) {
        let count = self.markup.slides.len();
        if count == 0 {
            return;
        }
        self.go_to_slide((self.current_index + 1) % count, now);
    }

    pub fn prev_slide(&mut self, now: Instant) {
        let count = self.markup.slides.len();
        if count == 0 {
            return;
        }
        self.go_to_slide((self.current_index + count - 1) % count, now);
    }

    fn update_dots(&mut self) {
        for (i, dot) in self.markup.dots.iter_mut().enumerate() {
            dot.active = i == self.current_index;
        }
    }

    fn start_autoplay(&mut self, now: Instant) {
        if self.paused {
            return;
        }
        self.timer_start = now;
        self.remaining = self.config.interval();
        self.begin_session(now, self.config.interval());
    }

    fn begin_session(&mut self, now: Instant, delay: Duration) {
        self.generation += 1;
        let generation = self.generation;
        let tick = self.timers.schedule(now, delay, Task::Advance { generation });
        self.session = Some(AutoplaySession {
            generation,
            tick,
            animating: self.markup.progress.is_some(),
        });
        trace!("Autoplay session {} fires in {:?}", generation, delay);
    }

    /// Cancels the pending advance and the countdown animation. Safe to call
    /// when nothing is running.
    pub fn stop_autoplay(&mut self) {
        if let Some(session) = self.session.take() {
            self.timers.cancel(session.tick);
        }
    }

    /// Stops autoplay and, unless paused, starts a fresh full cycle.
    pub fn reset_autoplay(&mut self, now: Instant) {
        self.stop_autoplay();
        if !self.paused {
            self.start_autoplay(now);
        }
    }

    pub fn pause(&mut self, now: Instant) {
        if !self.is_running() || self.paused {
            return;
        }
        self.paused = true;
        self.markup.paused = true;

        // An overdue cycle leaves nothing; resume then fires on the next tick
        let elapsed = now.saturating_duration_since(self.timer_start);
        self.remaining = self.config.interval().saturating_sub(elapsed);

        self.stop_autoplay();
        debug!("Paused with {:?} remaining", self.remaining);
    }

    /// Picks the cycle up where [`Carousel::pause`] left it.
    ///
    /// The stored remaining time is reset to the full interval right away,
    /// so a second pause before the rescheduled advance fires measures
    /// against the full interval.
    pub fn resume(&mut self, now: Instant) {
        if !self.is_running() || !self.paused {
            return;
        }
        self.paused = false;
        self.markup.paused = false;

        self.timer_start = now;
        self.begin_session(now, self.remaining);
        self.remaining = self.config.interval();
        debug!("Resumed");
    }

    /// Fires every deferred action due at `now`, each as of its own deadline.
    pub fn run_timers(&mut self, now: Instant) {
        if self.timers.is_empty() {
            return;
        }
        while let Some((deadline, task)) = self.timers.pop_due(now) {
            match task {
                Task::Advance { generation } => {
                    if self.session.as_ref().is_some_and(|s| s.generation == generation) {
                        trace!("Autoplay session {} fired", generation);
                        self.next_slide(deadline);
                    } else {
                        trace!("Dropping stale autoplay tick {}", generation);
                    }
                }
                Task::ClearPrev { slide } => {
                    if let Some(slide) = self.markup.slides.get_mut(slide) {
                        if slide.role == SlideRole::Prev {
                            slide.role = SlideRole::Idle;
                        }
                    }
                }
            }
        }
    }

    /// Display-refresh callback: writes the countdown ring offset.
    pub fn animation_frame(&mut self, now: Instant) {
        if self.paused {
            return;
        }
        let elapsed = now.saturating_duration_since(self.timer_start);
        let progress = (elapsed.as_secs_f32() / self.config.interval().as_secs_f32()).min(1.0);
        let circumference = self.config.ring_circumference;

        let Some(session) = self.session.as_mut() else {
            return;
        };
        if !session.animating {
            return;
        }
        let Some(ring) = self.markup.progress.as_mut() else {
            session.animating = false;
            return;
        };

        ring.stroke_offset = circumference * (1.0 - progress);
        if progress >= 1.0 {
            session.animating = false;
        }
    }

    pub fn update(&mut self, now: Instant) {
        self.run_timers(now);
        self.animation_frame(now);
    }

    /// Container-scoped events: controls, dots and pointer hover.
    pub fn handle(&mut self, event: CarouselEvent, now: Instant) -> Disposition {
        if !self.is_running() {
            return Disposition::IGNORED;
        }
        match event {
            CarouselEvent::PrevActivated if self.markup.prev.is_some() => {
                self.prev_slide(now);
                Disposition::CONSUMED
            }
            CarouselEvent::NextActivated if self.markup.next.is_some() => {
                self.next_slide(now);
                Disposition::CONSUMED
            }
            CarouselEvent::DotActivated(index) if index < self.markup.dots.len() => {
                self.go_to_slide(index, now);
                Disposition::IGNORED
            }
            CarouselEvent::PointerEnter => {
                self.pause(now);
                Disposition::IGNORED
            }
            CarouselEvent::PointerLeave => {
                self.resume(now);
                Disposition::IGNORED
            }
            _ => Disposition::IGNORED,
        }
    }

    /// Page-wide key press. Arrow keys navigate only while the carousel is
    /// at least partly inside the viewport.
    pub fn handle_key(&mut self, key: Key, viewport: Viewport, now: Instant) -> Disposition {
        if !self.listening_keys || !self.markup.bounds.intersects_viewport(viewport) {
            return Disposition::IGNORED;
        }
        match key {
            Key::ArrowLeft => {
                self.prev_slide(now);
                Disposition::PREVENTED
            }
            Key::ArrowRight => {
                self.next_slide(now);
                Disposition::PREVENTED
            }
            Key::Other => Disposition::IGNORED,
        }
    }

    /// Page unload: cancels autoplay and pending cleanups and releases the
    /// keyboard listener.
    pub fn teardown(&mut self) {
        self.stop_autoplay();
        self.timers.clear();
        self.listening_keys = false;
        self.status = Status::TornDown;
        debug!("Carousel torn down");
    }
}
