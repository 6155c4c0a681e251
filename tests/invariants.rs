use std::time::{Duration, Instant};

use proptest::prelude::*;

use carousel::{Carousel, CarouselConfig, CarouselEvent, CarouselMarkup, Rect, SlideRole};

#[derive(Debug, Clone)]
enum Action {
    Next,
    Prev,
    Dot(usize),
    Enter,
    Leave,
    Wait(u64),
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::Next),
        Just(Action::Prev),
        (0usize..12).prop_map(Action::Dot),
        Just(Action::Enter),
        Just(Action::Leave),
        (0u64..12_000).prop_map(Action::Wait),
    ]
}

fn assert_consistent(carousel: &Carousel) {
    let markup = carousel.markup();
    assert_eq!(markup.active_slide(), Some(carousel.current_index()));
    assert_eq!(markup.active_dot(), Some(carousel.current_index()));
    assert!(markup.slides.iter().filter(|s| s.role == SlideRole::Prev).count() <= 1);
    assert_eq!(carousel.is_autoplaying(), !carousel.is_paused());
}

proptest! {
    #[test]
    fn exactly_one_active_slide(count in 2usize..8, actions in prop::collection::vec(action(), 0..40)) {
        let t0 = Instant::now();
        let markup = CarouselMarkup::full(count, Rect::new(0.0, 0.0, 800.0, 400.0));
        let mut carousel = Carousel::init(markup, CarouselConfig::default(), t0);
        let mut now = t0;
        assert_consistent(&carousel);

        for action in actions {
            match action {
                Action::Next => { carousel.handle(CarouselEvent::NextActivated, now); }
                Action::Prev => { carousel.handle(CarouselEvent::PrevActivated, now); }
                Action::Dot(i) => { carousel.handle(CarouselEvent::DotActivated(i), now); }
                Action::Enter => { carousel.handle(CarouselEvent::PointerEnter, now); }
                Action::Leave => { carousel.handle(CarouselEvent::PointerLeave, now); }
                Action::Wait(n) => {
                    now += Duration::from_millis(n);
                    carousel.update(now);
                }
            }
            assert_consistent(&carousel);
        }
    }

    #[test]
    fn next_then_prev_is_identity(count in 2usize..10, start in 0usize..10, forward_first in any::<bool>()) {
        let t0 = Instant::now();
        let markup = CarouselMarkup::full(count, Rect::default());
        let mut carousel = Carousel::init(markup, CarouselConfig::default(), t0);
        let start = start % count;
        carousel.go_to_slide(start, t0);

        if forward_first {
            carousel.next_slide(t0);
            carousel.prev_slide(t0);
        } else {
            carousel.prev_slide(t0);
            carousel.next_slide(t0);
        }
        prop_assert_eq!(carousel.current_index(), start);
    }

    #[test]
    fn pause_twice_equals_pause_once(elapsed in 0u64..10_000, gap in 0u64..10_000) {
        let t0 = Instant::now();
        let mut once = Carousel::init(CarouselMarkup::full(3, Rect::default()), CarouselConfig::default(), t0);
        let mut twice = Carousel::init(CarouselMarkup::full(3, Rect::default()), CarouselConfig::default(), t0);
        let at = t0 + Duration::from_millis(elapsed);

        once.pause(at);
        twice.pause(at);
        twice.pause(at + Duration::from_millis(gap));
        prop_assert_eq!(once.remaining_time(), twice.remaining_time());

        let resume_at = at + Duration::from_millis(gap);
        once.resume(resume_at);
        twice.resume(resume_at);
        twice.resume(resume_at + Duration::from_millis(gap));
        prop_assert_eq!(once.autoplay_deadline(), twice.autoplay_deadline());
    }
}
