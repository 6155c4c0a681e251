/// Events scoped to the carousel container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    PrevActivated,
    NextActivated,
    DotActivated(usize),
    PointerEnter,
    PointerLeave,
}

/// Keys seen by the page-wide keyboard listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Other,
}

/// What the host should do with an event after the controller saw it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Disposition {
    pub prevent_default: bool,
    pub stop_propagation: bool,
}

impl Disposition {
    /// Left untouched; the host applies its default behavior.
    pub const IGNORED: Self = Self { prevent_default: false, stop_propagation: false };
    /// Default action suppressed, still bubbles.
    pub const PREVENTED: Self = Self { prevent_default: true, stop_propagation: false };
    /// Default action suppressed and bubbling stopped.
    pub const CONSUMED: Self = Self { prevent_default: true, stop_propagation: true };
}
