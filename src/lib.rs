pub mod app;
pub mod carousel;
pub mod config;
pub mod constants;
pub mod error;
pub mod input;
pub mod layout;
pub mod markup;
pub mod page;
pub mod render;
pub mod slide;
pub mod state;
pub mod texture_loader;
pub mod timer;

pub use carousel::{Carousel, Status};
pub use config::{AppConfig, CarouselConfig};
pub use error::{Error, Result};
pub use input::{CarouselEvent, Disposition, Key};
pub use markup::{CarouselMarkup, Rect, Viewport};
pub use page::{CarouselId, Page};
pub use state::SlideRole;
