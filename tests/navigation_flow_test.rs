use tui_folio::input::{InputNormalizer, ScrollRegion, TouchPoint, WheelDelta, WheelTarget};
use tui_folio::nav::{ChangeCause, NavRequest, NavigationController, Phase};
use tui_folio::types::{Direction, Section, COOLDOWN_MS, TICK_MS, WHEEL_SETTLE_MS};

use crossterm::event::KeyCode;

/// Normalizer and controller wired together the way the viewer does it.
struct Harness {
    input: InputNormalizer,
    nav: NavigationController,
}

impl Harness {
    fn new() -> Self {
        Self {
            input: InputNormalizer::new(),
            nav: NavigationController::new(),
        }
    }

    fn route(&mut self, direction: Option<Direction>) -> Section {
        if let Some(direction) = direction {
            self.nav.apply(NavRequest::Direction(direction));
        }
        self.nav.section()
    }

    fn swipe(&mut self, from: (f32, f32), to: (f32, f32)) -> Section {
        self.input.touch_start(TouchPoint::new(from.0, from.1));
        let outcome = self.input.touch_end(TouchPoint::new(to.0, to.1));
        self.route(outcome.direction)
    }

    fn key(&mut self, code: KeyCode) -> Section {
        let outcome = self.input.key(code);
        self.route(outcome.direction)
    }

    fn wheel(&mut self, dx: f32, dy: f32, target: WheelTarget) -> Section {
        let outcome = self.input.wheel(WheelDelta::new(dx, dy), target);
        self.route(outcome.direction)
    }

    fn advance(&mut self, ms: u32) -> Section {
        let mut left = ms;
        while left > 0 {
            let step = left.min(TICK_MS);
            let settled = self.input.update(step);
            self.route(settled);
            self.nav.update(step);
            left -= step;
        }
        self.nav.section()
    }
}

fn region(scroll_top: f32) -> WheelTarget {
    WheelTarget::Region(ScrollRegion {
        scroll_top,
        scroll_left: 0.0,
        scroll_height: 1200.0,
        client_height: 400.0,
    })
}

#[test]
fn swipe_tour_through_every_section() {
    let mut h = Harness::new();

    assert_eq!(h.swipe((500.0, 400.0), (300.0, 410.0)), Section::Experience);
    h.advance(COOLDOWN_MS);
    assert_eq!(h.swipe((300.0, 400.0), (520.0, 380.0)), Section::Main);
    h.advance(COOLDOWN_MS);
    assert_eq!(h.swipe((300.0, 400.0), (520.0, 380.0)), Section::Projects);
    h.advance(COOLDOWN_MS);
    assert_eq!(h.swipe((300.0, 400.0), (120.0, 380.0)), Section::Main);
    h.advance(COOLDOWN_MS);
    assert_eq!(h.swipe((300.0, 400.0), (310.0, 650.0)), Section::Contact);
    h.advance(COOLDOWN_MS);
    assert_eq!(h.swipe((300.0, 650.0), (310.0, 400.0)), Section::Main);
}

#[test]
fn swipe_exactly_at_threshold_does_not_navigate() {
    let mut h = Harness::new();
    assert_eq!(h.swipe((400.0, 300.0), (300.0, 300.0)), Section::Main);
    assert!(!h.input.is_cooling_down());
    assert_eq!(h.swipe((400.0, 300.0), (299.0, 300.0)), Section::Experience);
}

#[test]
fn second_gesture_inside_cooldown_is_dropped() {
    let mut h = Harness::new();
    assert_eq!(h.key(KeyCode::Left), Section::Experience);

    // Right would go home, but the window is still open.
    assert_eq!(h.key(KeyCode::Right), Section::Experience);
    assert_eq!(h.swipe((100.0, 100.0), (400.0, 100.0)), Section::Experience);
    h.advance(COOLDOWN_MS - TICK_MS);
    assert_eq!(h.key(KeyCode::Right), Section::Experience);

    h.advance(TICK_MS);
    assert_eq!(h.key(KeyCode::Right), Section::Main);
}

#[test]
fn dropped_gestures_do_not_extend_the_cooldown() {
    let mut h = Harness::new();
    h.key(KeyCode::Down);
    for _ in 0..10 {
        h.key(KeyCode::Up);
        h.advance(40);
    }
    // 400ms in. The drops above must not have re-armed the window.
    h.advance(100);
    assert_eq!(h.key(KeyCode::Up), Section::Main);
}

#[test]
fn mouse_wheel_notches_never_navigate() {
    let mut h = Harness::new();
    for _ in 0..5 {
        assert_eq!(h.wheel(0.0, 120.0, WheelTarget::Surface), Section::Main);
        assert_eq!(h.wheel(0.0, -100.0, WheelTarget::Surface), Section::Main);
    }
    h.advance(WHEEL_SETTLE_MS * 2);
    assert_eq!(h.nav.section(), Section::Main);
    assert!(!h.input.is_cooling_down());
}

#[test]
fn trackpad_gesture_navigates_after_it_settles() {
    let mut h = Harness::new();
    assert_eq!(h.wheel(0.0, 60.0, WheelTarget::Surface), Section::Main);
    assert_eq!(h.wheel(0.0, 60.0, WheelTarget::Surface), Section::Main);
    assert_eq!(h.advance(WHEEL_SETTLE_MS - TICK_MS), Section::Main);
    assert_eq!(h.advance(TICK_MS), Section::Contact);
}

#[test]
fn small_trackpad_deltas_are_not_accumulated() {
    let mut h = Harness::new();
    for _ in 0..10 {
        h.wheel(-40.0, 0.0, WheelTarget::Surface);
    }
    assert_eq!(h.advance(WHEEL_SETTLE_MS), Section::Main);
}

#[test]
fn mid_scroll_wheel_passes_through_to_the_region() {
    let mut h = Harness::new();
    h.key(KeyCode::Left);
    h.advance(COOLDOWN_MS);

    let outcome = h.input.wheel(WheelDelta::new(0.0, -60.0), region(300.0));
    assert_eq!(outcome.direction, None);
    assert!(!outcome.prevent_default);
    assert_eq!(h.nav.section(), Section::Experience);
}

#[test]
fn scrolling_past_the_top_leaves_the_section() {
    let mut h = Harness::new();
    h.key(KeyCode::Right);
    h.advance(COOLDOWN_MS);
    assert_eq!(h.wheel(0.0, -60.0, region(0.0)), Section::Main);
}

#[test]
fn boundary_wheel_during_cooldown_is_still_consumed() {
    let mut h = Harness::new();
    h.key(KeyCode::Right);

    let outcome = h.input.wheel(WheelDelta::new(0.0, -60.0), region(0.0));
    assert_eq!(outcome.direction, None);
    assert!(outcome.prevent_default);
    assert_eq!(h.nav.section(), Section::Projects);
}

#[test]
fn jumps_ignore_the_gesture_cooldown() {
    let mut h = Harness::new();
    h.key(KeyCode::Left);
    assert!(h.input.is_cooling_down());

    let change = h.nav.apply(NavRequest::Jump(Section::Contact)).unwrap();
    assert_eq!(change.from, Section::Experience);
    assert_eq!(change.cause, ChangeCause::Jump);
    assert_eq!(h.nav.section(), Section::Contact);
}

#[test]
fn jump_to_projects_works_from_every_section_while_cooling_down() {
    for start in Section::ALL {
        let mut input = InputNormalizer::new();
        let mut nav = NavigationController::starting_at(start);
        input.key(KeyCode::Left);
        assert!(input.is_cooling_down());

        let change = nav.apply(NavRequest::Jump(Section::Projects));
        assert_eq!(nav.section(), Section::Projects, "from {start:?}");
        if start == Section::Projects {
            assert_eq!(change, None);
        } else {
            let change = change.unwrap();
            assert_eq!(change.from, start);
            assert_eq!(change.cause, ChangeCause::Jump);
        }
    }
}

#[test]
fn up_returns_home_from_every_section_and_is_inert_on_main() {
    for start in [Section::Experience, Section::Projects, Section::Contact] {
        let mut nav = NavigationController::starting_at(start);
        let change = nav.apply_direction(Direction::Up).unwrap();
        assert_eq!(change.to, Section::Main, "from {start:?}");
    }
    let mut nav = NavigationController::new();
    assert_eq!(nav.apply_direction(Direction::Up), None);
}

#[test]
fn sections_without_a_row_ignore_the_direction() {
    let mut nav = NavigationController::starting_at(Section::Experience);
    assert_eq!(nav.apply_direction(Direction::Left), None);
    assert_eq!(nav.apply_direction(Direction::Down), None);
    assert_eq!(nav.section(), Section::Experience);
}

#[test]
fn transition_exits_then_enters_within_the_cooldown() {
    let mut h = Harness::new();
    h.key(KeyCode::Left);
    assert!(matches!(
        h.nav.presence().phase(),
        Phase::Exiting {
            from: Section::Main,
            to: Section::Experience,
            ..
        }
    ));
    assert_eq!(h.nav.frame().section, Section::Main);

    h.advance(208);
    assert!(matches!(
        h.nav.presence().phase(),
        Phase::Entering {
            section: Section::Experience,
            ..
        }
    ));

    h.advance(208);
    assert!(h.nav.presence().is_settled());
    assert!(h.input.is_cooling_down());
}
