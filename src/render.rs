use raylib::prelude::*;

use crate::carousel::Carousel;
use crate::layout::Layout;
use crate::markup::{Control, Rect};
use crate::page::Page;
use crate::slide::Slide;
use crate::state::SlideRole;

const BACKGROUND: Color = Color::new(18, 18, 24, 255);
const FRAME: Color = Color::new(8, 8, 12, 255);
const CONTENT: Color = Color::new(40, 40, 52, 255);
const CONTROL: Color = Color::new(0, 0, 0, 140);
const DOT_IDLE: Color = Color::new(255, 255, 255, 90);
const RING_TRACK: Color = Color::new(255, 255, 255, 60);

const RING_THICKNESS: f32 = 3.0;
const CONTENT_ROW: f32 = 28.0;

impl From<Rect> for Rectangle {
    fn from(r: Rect) -> Rectangle {
        Rectangle::new(r.x, r.y, r.width, r.height)
    }
}

/// Placeholder text rows filling the document below the carousels.
pub fn draw_page(d: &mut RaylibDrawHandle, page: &Page, content_top: f32) {
    d.clear_background(BACKGROUND);

    let viewport = page.viewport();
    let mut y = content_top - page.scroll_y();
    let mut row = 0;
    while y < viewport.height {
        if y + CONTENT_ROW > 0.0 {
            // Vary row widths so the page reads like a paragraph
            let width = viewport.width * if row % 4 == 3 { 0.45 } else { 0.8 };
            d.draw_rectangle_rec(
                Rectangle::new(viewport.width * 0.1, y, width, CONTENT_ROW * 0.5),
                CONTENT,
            );
        }
        y += CONTENT_ROW;
        row += 1;
    }
}

pub fn draw_carousel(d: &mut RaylibDrawHandle, carousel: &Carousel, slides: &[Slide], layout: &Layout) {
    let markup = carousel.markup();
    d.draw_rectangle_rec(Rectangle::from(layout.bounds), FRAME);

    // Outgoing slide underneath the incoming one
    for (slide, element) in slides.iter().zip(markup.slides.iter()) {
        if element.role == SlideRole::Prev {
            slide.draw(d, layout.bounds);
        }
    }
    for (slide, element) in slides.iter().zip(markup.slides.iter()) {
        if element.role == SlideRole::Active {
            slide.draw(d, layout.bounds);
        }
    }

    draw_control(d, markup.prev.as_ref(), layout.prev, -1.0);
    draw_control(d, markup.next.as_ref(), layout.next, 1.0);

    for (dot, rect) in markup.dots.iter().zip(layout.dots.iter()) {
        let center = Vector2::new(rect.x + rect.width * 0.5, rect.y + rect.height * 0.5);
        let color = if dot.active { Color::WHITE } else { DOT_IDLE };
        d.draw_circle_v(center, rect.width * 0.5, color);
    }

    if let Some(ring) = markup.progress.as_ref().filter(|r| !r.hidden) {
        let center = Vector2::new(layout.ring_center.0, layout.ring_center.1);
        let inner = layout.ring_radius - RING_THICKNESS;
        let outer = layout.ring_radius;
        d.draw_circle_v(center, outer + 4.0, CONTROL);
        d.draw_ring(center, inner, outer, 0.0, 360.0, 48, RING_TRACK);

        // Stroke offset runs from the full circumference down to zero
        let circumference = carousel.config().ring_circumference;
        let remaining = (ring.stroke_offset / circumference).clamp(0.0, 1.0);
        if remaining > 0.0 {
            d.draw_ring(center, inner, outer, -90.0, -90.0 + 360.0 * remaining, 48, Color::WHITE);
        }

        if markup.paused {
            let bar = Rectangle::new(center.x - 5.0, center.y - 6.0, 3.0, 12.0);
            d.draw_rectangle_rec(bar, Color::WHITE);
            d.draw_rectangle_rec(Rectangle::new(bar.x + 7.0, bar.y, bar.width, bar.height), Color::WHITE);
        }
    }
}

/// Round button with a chevron; `direction` is -1 for prev, 1 for next.
fn draw_control(d: &mut RaylibDrawHandle, control: Option<&Control>, rect: Rect, direction: f32) {
    if control.is_none_or(|c| c.hidden) {
        return;
    }
    let center = Vector2::new(rect.x + rect.width * 0.5, rect.y + rect.height * 0.5);
    d.draw_circle_v(center, rect.width * 0.5, CONTROL);

    let arm = rect.width * 0.18;
    let tip = Vector2::new(center.x + direction * arm * 0.5, center.y);
    let back = center.x - direction * arm * 0.5;
    d.draw_line_ex(Vector2::new(back, center.y - arm), tip, 3.0, Color::WHITE);
    d.draw_line_ex(Vector2::new(back, center.y + arm), tip, 3.0, Color::WHITE);
}
