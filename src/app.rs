//! Desktop host: a raylib window plays the page, the mouse is the pointer
//! and closing the window unloads the page.

use std::path::Path;
use std::time::Instant;

use rand::seq::SliceRandom;
use raylib::prelude::*;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::constants::*;
use crate::error::{Error, Result};
use crate::input::{CarouselEvent, Key};
use crate::layout::{Hit, Layout};
use crate::markup::{CarouselMarkup, Rect, Viewport};
use crate::page::{CarouselId, Page};
use crate::render::{draw_carousel, draw_page};
use crate::slide::Slide;
use crate::texture_loader::{load_sorted_image_paths, load_texture_with_exif_rotation};

/// Carousel box in document coordinates for a given viewport.
pub fn carousel_frame(viewport: Viewport) -> Rect {
    let width = (viewport.width - PAGE_MARGIN * 2.0).max(0.0);
    let height = (viewport.height * 0.7).min(width * 9.0 / 16.0).max(0.0);
    Rect::new(PAGE_MARGIN, PAGE_MARGIN, width, height)
}

fn screen_viewport(rl: &RaylibHandle) -> Viewport {
    Viewport {
        width: rl.get_screen_width() as f32,
        height: rl.get_screen_height() as f32,
    }
}

pub fn run(config: &AppConfig, image_directory: &Path) -> Result<()> {
    let mut image_paths = load_sorted_image_paths(image_directory)?;
    if config.slides.shuffle {
        image_paths.shuffle(&mut rand::rng());
    }
    info!("Found {} images in {}", image_paths.len(), image_directory.display());

    let (mut rl, thread) = raylib::init()
        .size(config.window.width, config.window.height)
        .title(&config.window.title)
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(config.window.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load Slides ---
    let mut slides = Vec::new();
    for path in &image_paths {
        match load_texture_with_exif_rotation(&mut rl, &thread, path) {
            Ok(texture) => slides.push(Slide::new(texture)),
            Err(e) => warn!("Skipping slide: {}", e),
        }
    }
    if slides.is_empty() {
        return Err(Error::NoImages(image_directory.to_path_buf()));
    }

    let viewport = screen_viewport(&rl);
    let mut page = Page::new(viewport, viewport.height * PAGE_HEIGHT_FACTOR);
    let markup = CarouselMarkup::full(slides.len(), carousel_frame(viewport));
    let Some(id) = page.mount(Some(markup), config.carousel.clone(), Instant::now()) else {
        return Ok(());
    };
    info!("Showing {} slides", slides.len());

    let transition = config.carousel.transition().as_secs_f32();
    let mut hovering = false;

    // --- Main Loop ---
    while !rl.window_should_close() {
        let now = Instant::now();
        let dt = rl.get_frame_time();

        if rl.is_window_resized() {
            resize(&mut page, id, screen_viewport(&rl));
        }

        let wheel = rl.get_mouse_wheel_move();
        if wheel != 0.0 {
            page.scroll_by(-wheel * SCROLL_STEP);
        }

        // --- Input ---
        let Some(carousel) = page.carousel(id) else {
            break;
        };
        let layout = Layout::compute(carousel.markup().bounds, carousel.markup().dots.len());
        let mouse = rl.get_mouse_position();
        let hit = if rl.is_cursor_on_screen() {
            layout.hit_test(carousel.markup(), mouse.x, mouse.y)
        } else {
            Hit::Outside
        };

        let inside = hit != Hit::Outside;
        if inside != hovering {
            hovering = inside;
            let event = if inside { CarouselEvent::PointerEnter } else { CarouselEvent::PointerLeave };
            page.dispatch(id, event, now);
        }

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            let event = match hit {
                Hit::Prev => Some(CarouselEvent::PrevActivated),
                Hit::Next => Some(CarouselEvent::NextActivated),
                Hit::Dot(i) => Some(CarouselEvent::DotActivated(i)),
                Hit::Inside | Hit::Outside => None,
            };
            if let Some(event) = event {
                page.dispatch(id, event, now);
            }
        }

        for (raylib_key, key) in [
            (KeyboardKey::KEY_LEFT, Key::ArrowLeft),
            (KeyboardKey::KEY_RIGHT, Key::ArrowRight),
        ] {
            if rl.is_key_pressed(raylib_key) {
                page.key_down(key, now);
            }
        }
        // Up/Down are not carousel keys; their default action scrolls the page
        for (raylib_key, dy) in [(KeyboardKey::KEY_DOWN, SCROLL_STEP), (KeyboardKey::KEY_UP, -SCROLL_STEP)] {
            if rl.is_key_pressed(raylib_key) && !page.key_down(Key::Other, now).prevent_default {
                page.scroll_by(dy);
            }
        }

        // --- Update Logic ---
        page.update(now);

        let Some(carousel) = page.carousel(id) else {
            break;
        };
        for (slide, element) in slides.iter_mut().zip(carousel.markup().slides.iter()) {
            slide.update(element.role, dt, transition);
        }

        // --- Render ---
        let layout = Layout::compute(carousel.markup().bounds, carousel.markup().dots.len());
        let content_top = layout.bounds.y + page.scroll_y() + layout.bounds.height + PAGE_MARGIN;
        let mut d = rl.begin_drawing(&thread);
        draw_page(&mut d, &page, content_top);
        draw_carousel(&mut d, carousel, &slides, &layout);
    }

    page.unload();
    info!("Page unloaded");
    Ok(())
}

/// Window resize: refit the carousel box, keeping its place in the document.
fn resize(page: &mut Page, id: CarouselId, viewport: Viewport) {
    page.set_viewport(viewport);
    let scroll_y = page.scroll_y();
    if let Some(carousel) = page.carousel_mut(id) {
        let mut frame = carousel_frame(viewport);
        frame.y -= scroll_y;
        carousel.markup_mut().bounds = frame;
    }
}
