/// Visual role of a slide, mirrored by the styling layer.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum SlideRole {
    #[default]
    Idle,   // Not shown
    Active, // The slide currently on display
    Prev,   // Outgoing slide, kept briefly for the exit transition
}
