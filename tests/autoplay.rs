use std::time::{Duration, Instant};

use carousel::{Carousel, CarouselConfig, CarouselEvent, CarouselMarkup, Disposition, Key, Page, Rect, Viewport};

const VIEWPORT: Viewport = Viewport { width: 1280.0, height: 720.0 };

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn three_slides(t0: Instant) -> Carousel {
    let markup = CarouselMarkup::full(3, Rect::new(40.0, 40.0, 1200.0, 500.0));
    Carousel::init(markup, CarouselConfig::default(), t0)
}

#[test]
fn autoplay_advances_every_interval_and_wraps() {
    let t0 = Instant::now();
    let mut carousel = three_slides(t0);
    assert_eq!(carousel.current_index(), 0);

    carousel.update(t0 + ms(4999));
    assert_eq!(carousel.current_index(), 0);
    carousel.update(t0 + ms(5000));
    assert_eq!(carousel.current_index(), 1);
    carousel.update(t0 + ms(10_000));
    assert_eq!(carousel.current_index(), 2);
    carousel.update(t0 + ms(15_000));
    assert_eq!(carousel.current_index(), 0);
}

#[test]
fn late_host_tick_catches_up() {
    let t0 = Instant::now();
    let mut carousel = three_slides(t0);
    carousel.update(t0 + ms(15_000));
    assert_eq!(carousel.current_index(), 0);
    assert_eq!(carousel.autoplay_deadline(), Some(t0 + ms(20_000)));
}

#[test]
fn hover_pause_resumes_with_remaining_time() {
    let t0 = Instant::now();
    let mut carousel = three_slides(t0);

    carousel.update(t0 + ms(2000));
    carousel.handle(CarouselEvent::PointerEnter, t0 + ms(2000));
    assert_eq!(carousel.remaining_time(), ms(3000));

    // Nothing moves while the pointer is over the carousel
    carousel.update(t0 + ms(6000));
    assert_eq!(carousel.current_index(), 0);

    carousel.handle(CarouselEvent::PointerLeave, t0 + ms(6000));
    carousel.update(t0 + ms(8999));
    assert_eq!(carousel.current_index(), 0);
    carousel.update(t0 + ms(9000));
    assert_eq!(carousel.current_index(), 1);

    // Following cycle is a full interval again
    carousel.update(t0 + ms(13_999));
    assert_eq!(carousel.current_index(), 1);
    carousel.update(t0 + ms(14_000));
    assert_eq!(carousel.current_index(), 2);
}

#[test]
fn second_pause_before_resumed_tick_measures_full_interval() {
    let t0 = Instant::now();
    let mut carousel = three_slides(t0);

    carousel.pause(t0 + ms(2000));
    carousel.resume(t0 + ms(6000));
    carousel.pause(t0 + ms(7000));
    // 5000 - 1000, not 3000 - 1000
    assert_eq!(carousel.remaining_time(), ms(4000));

    carousel.resume(t0 + ms(8000));
    carousel.update(t0 + ms(11_999));
    assert_eq!(carousel.current_index(), 0);
    carousel.update(t0 + ms(12_000));
    assert_eq!(carousel.current_index(), 1);
}

#[test]
fn manual_navigation_restarts_cycle() {
    let t0 = Instant::now();
    let mut carousel = three_slides(t0);

    assert_eq!(carousel.handle(CarouselEvent::NextActivated, t0 + ms(4000)), Disposition::CONSUMED);
    assert_eq!(carousel.current_index(), 1);
    carousel.update(t0 + ms(5000));
    assert_eq!(carousel.current_index(), 1);
    carousel.update(t0 + ms(9000));
    assert_eq!(carousel.current_index(), 2);
}

#[test]
fn ring_restarts_on_every_cycle() {
    let t0 = Instant::now();
    let mut carousel = three_slides(t0);
    let circumference = carousel.config().ring_circumference;
    let offset = |c: &Carousel| c.markup().progress.as_ref().unwrap().stroke_offset;

    carousel.update(t0 + ms(4000));
    assert!((offset(&carousel) - circumference * 0.2).abs() < 0.01);

    carousel.update(t0 + ms(5000));
    assert_eq!(carousel.current_index(), 1);
    assert!((offset(&carousel) - circumference).abs() < 0.01);
}

#[test]
fn single_slide_never_schedules() {
    let t0 = Instant::now();
    let mut page = Page::new(VIEWPORT, 2000.0);
    let markup = CarouselMarkup::full(1, Rect::new(40.0, 40.0, 1200.0, 500.0));
    let id = page.mount(Some(markup), CarouselConfig::default(), t0).unwrap();

    assert_eq!(page.key_down(Key::ArrowRight, t0), Disposition::IGNORED);
    page.update(t0 + ms(60_000));

    let carousel = page.carousel(id).unwrap();
    assert!(!carousel.is_autoplaying());
    assert_eq!(carousel.pending_timers(), 0);
    assert!(carousel.markup().prev.as_ref().unwrap().hidden);
    assert!(carousel.markup().progress.as_ref().unwrap().hidden);
    // The lone slide stays visible without the controller touching it
    assert_eq!(carousel.markup().active_slide(), Some(0));
}

#[test]
fn keyboard_ignored_when_scrolled_off_screen() {
    let t0 = Instant::now();
    let mut page = Page::new(VIEWPORT, 3000.0);
    let markup = CarouselMarkup::full(3, Rect::new(40.0, 40.0, 1200.0, 500.0));
    let id = page.mount(Some(markup), CarouselConfig::default(), t0).unwrap();

    page.scroll_by(1000.0);
    assert_eq!(page.key_down(Key::ArrowRight, t0), Disposition::IGNORED);
    assert_eq!(page.key_down(Key::ArrowLeft, t0), Disposition::IGNORED);
    assert_eq!(page.carousel(id).unwrap().current_index(), 0);

    page.scroll_by(-1000.0);
    assert_eq!(page.key_down(Key::ArrowRight, t0), Disposition::PREVENTED);
    assert_eq!(page.carousel(id).unwrap().current_index(), 1);
}
