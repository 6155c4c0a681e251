use std::time::Duration;

pub const INTERVAL: Duration = Duration::from_millis(5000);   // Autoplay cycle length
pub const TRANSITION: Duration = Duration::from_millis(600);  // Lifetime of the transient `prev` role
pub const TIMER_RADIUS: f32 = 18.0;                           // Countdown ring radius
pub const TIMER_CIRCUMFERENCE: f32 = 113.097;                 // 2 * PI * 18

pub const WINDOW_WIDTH: i32 = 1280;
pub const WINDOW_HEIGHT: i32 = 720;
pub const FPS: u32 = 60;

pub const PAGE_MARGIN: f32 = 40.0;                            // Space around the carousel on the page
pub const PAGE_HEIGHT_FACTOR: f32 = 2.5;                      // Document height relative to the viewport
pub const SCROLL_STEP: f32 = 60.0;                            // Pixels per mouse-wheel notch
