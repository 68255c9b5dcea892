use chart_touch::data_types::{
    AxisLock, GestureState, InteractionConfig, Phase, TouchAction, TouchEvent, TrackedPoint,
};
use chart_touch::tools::ZoomAxes;
use chart_touch::touch::{ClassifiedAction, ClassifierConfig, GestureClassifier, ZoomButton};
use chart_touch::Rect;
use glam::Vec2;

fn classifier(config: InteractionConfig) -> GestureClassifier {
    GestureClassifier::new(ClassifierConfig::from(&config))
}

fn strict_pan() -> InteractionConfig {
    InteractionConfig {
        pan_strict: true,
        ..InteractionConfig::default()
    }
}

fn strict_zoom() -> InteractionConfig {
    InteractionConfig {
        zoom_strict: true,
        ..InteractionConfig::default()
    }
}

fn pinch(t: u64, a: (f32, f32), b: (f32, f32)) -> TouchEvent {
    TouchEvent::pinch(t, Vec2::new(a.0, a.1), Vec2::new(b.0, b.1))
}

#[test]
fn test_down_returns_nothing_and_starts_tracking() {
    let c = classifier(InteractionConfig::default());
    let mut state = GestureState::default();
    assert_eq!(c.process(&mut state, &TouchEvent::down(0, 10.0, 20.0), None), None);
    assert_eq!(state.phase, Phase::Tracking);
    assert_eq!(state.previous_primary, TrackedPoint::At(Vec2::new(10.0, 20.0)));
}

#[test]
fn test_free_pan_keeps_diagonal_motion() {
    let c = classifier(InteractionConfig::default());
    let mut state = GestureState::default();
    c.process(&mut state, &TouchEvent::down(0, 10.0, 10.0), None);
    let action = c.process(&mut state, &TouchEvent::moved(16, 15.0, 18.0), None);
    assert_eq!(action.and_then(|a| a.pan_delta()), Some(Vec2::new(5.0, 8.0)));
    assert_eq!(state.pan_lock, AxisLock::None);
}

#[test]
fn test_strict_pan_locks_x_for_the_rest_of_the_gesture() {
    let c = classifier(strict_pan());
    let mut state = GestureState::default();
    c.process(&mut state, &TouchEvent::down(0, 0.0, 0.0), None);

    let first = c.process(&mut state, &TouchEvent::moved(16, 6.0, 4.0), None);
    assert_eq!(first.and_then(|a| a.pan_delta()), Some(Vec2::new(6.0, 0.0)));
    assert_eq!(state.pan_lock, AxisLock::X);

    let second = c.process(&mut state, &TouchEvent::moved(32, 7.0, 30.0), None);
    assert_eq!(second.and_then(|a| a.pan_delta()), Some(Vec2::new(1.0, 0.0)));
}

#[test]
fn test_strict_pan_locks_y_when_vertical_dominates() {
    let c = classifier(strict_pan());
    let mut state = GestureState::default();
    c.process(&mut state, &TouchEvent::down(0, 0.0, 0.0), None);
    let first = c.process(&mut state, &TouchEvent::moved(16, 2.0, -9.0), None);
    assert_eq!(first.and_then(|a| a.pan_delta()), Some(Vec2::new(0.0, -9.0)));
    assert_eq!(state.pan_lock, AxisLock::Y);

    // Pure horizontal motion is fully suppressed once locked to Y.
    let second = c.process(&mut state, &TouchEvent::moved(32, 20.0, -9.0), None);
    assert_eq!(second, None);
}

#[test]
fn test_lock_is_cleared_by_up_and_retaken_after_down() {
    let c = classifier(strict_pan());
    let mut state = GestureState::default();
    c.process(&mut state, &TouchEvent::down(0, 0.0, 0.0), None);
    c.process(&mut state, &TouchEvent::moved(16, 10.0, 0.0), None);
    assert_eq!(state.pan_lock, AxisLock::X);

    c.process(&mut state, &TouchEvent::up(32, 10.0, 0.0), None);
    assert_eq!(state.pan_lock, AxisLock::None);
    assert_eq!(state.phase, Phase::Idle);

    c.process(&mut state, &TouchEvent::down(100, 0.0, 0.0), None);
    assert_eq!(state.pan_lock, AxisLock::None);
    c.process(&mut state, &TouchEvent::moved(116, 0.0, 10.0), None);
    assert_eq!(state.pan_lock, AxisLock::Y);
}

#[test]
fn test_move_without_down_only_records_a_baseline() {
    let c = classifier(InteractionConfig::default());
    let mut state = GestureState::default();
    assert_eq!(c.process(&mut state, &TouchEvent::moved(0, 500.0, 500.0), None), None);
    let next = c.process(&mut state, &TouchEvent::moved(16, 503.0, 500.0), None);
    assert_eq!(next.and_then(|a| a.pan_delta()), Some(Vec2::new(3.0, 0.0)));
}

#[test]
fn test_pointer_up_invalidates_baseline() {
    let c = classifier(InteractionConfig::default());
    let mut state = GestureState::default();
    c.process(&mut state, &TouchEvent::down(0, 10.0, 10.0), None);
    c.process(&mut state, &pinch(10, (10.0, 10.0), (60.0, 60.0)), None);
    c.process(
        &mut state,
        &TouchEvent::pointer_up(20, Vec2::new(10.0, 10.0), Vec2::new(60.0, 60.0)),
        None,
    );
    assert_eq!(state.previous_primary, TrackedPoint::Invalid);
    assert_eq!(state.previous_secondary, None);

    // The remaining finger reports from far away: no jump.
    assert_eq!(c.process(&mut state, &TouchEvent::moved(30, 60.0, 60.0), None), None);
    let next = c.process(&mut state, &TouchEvent::moved(40, 62.0, 60.0), None);
    assert_eq!(next.and_then(|a| a.pan_delta()), Some(Vec2::new(2.0, 0.0)));
}

#[test]
fn test_first_pinch_sample_is_a_baseline() {
    let c = classifier(InteractionConfig::default());
    let mut state = GestureState::default();
    c.process(&mut state, &TouchEvent::down(0, 0.0, 0.0), None);
    assert_eq!(c.process(&mut state, &pinch(10, (0.0, 0.0), (100.0, 50.0)), None), None);
    assert_eq!(state.previous_secondary, Some(Vec2::new(100.0, 50.0)));
}

#[test]
fn test_pinch_ratio_inside_band_zooms() {
    let c = classifier(InteractionConfig::default());
    let mut state = GestureState::default();
    c.process(&mut state, &TouchEvent::down(0, 0.0, 0.0), None);
    c.process(&mut state, &pinch(10, (0.0, 0.0), (100.0, 100.0)), None);
    let action = c.process(&mut state, &pinch(20, (0.0, 0.0), (105.0, 101.0)), None);
    match action {
        Some(ClassifiedAction::Zoom { rate, axes, focus }) => {
            assert!((rate - 1.05).abs() < 1e-6);
            assert_eq!(axes, ZoomAxes::BOTH);
            assert_eq!(focus, Vec2::new(52.5, 50.5));
        }
        other => panic!("expected zoom, got {other:?}"),
    }
}

#[test]
fn test_pinch_ratio_outside_band_is_discarded_but_baseline_moves() {
    let c = classifier(InteractionConfig::default());
    let mut state = GestureState::default();
    c.process(&mut state, &TouchEvent::down(0, 0.0, 0.0), None);
    c.process(&mut state, &pinch(10, (0.0, 0.0), (100.0, 100.0)), None);
    assert_eq!(c.process(&mut state, &pinch(20, (0.0, 0.0), (120.0, 100.0)), None), None);
    assert_eq!(state.previous_secondary, Some(Vec2::new(120.0, 100.0)));

    // Measured against the updated positions, 126 / 120 = 1.05.
    let action = c.process(&mut state, &pinch(30, (0.0, 0.0), (126.0, 100.0)), None);
    assert!(matches!(action, Some(ClassifiedAction::Zoom { .. })));
}

#[test]
fn test_unchanged_distance_is_not_a_zoom() {
    let c = classifier(InteractionConfig::default());
    let mut state = GestureState::default();
    c.process(&mut state, &TouchEvent::down(0, 0.0, 0.0), None);
    c.process(&mut state, &pinch(10, (0.0, 0.0), (100.0, 100.0)), None);
    assert_eq!(c.process(&mut state, &pinch(20, (5.0, 5.0), (105.0, 105.0)), None), None);
}

#[test]
fn test_coincident_pointers_produce_no_ratio() {
    let c = classifier(InteractionConfig::default());
    let mut state = GestureState::default();
    c.process(&mut state, &TouchEvent::down(0, 50.0, 50.0), None);
    c.process(&mut state, &pinch(10, (50.0, 50.0), (50.0, 50.0)), None);
    assert_eq!(c.process(&mut state, &pinch(20, (50.0, 50.0), (52.0, 52.0)), None), None);
}

#[test]
fn test_strict_zoom_locks_to_dominant_axis() {
    let c = classifier(strict_zoom());
    let mut state = GestureState::default();
    c.process(&mut state, &TouchEvent::down(0, 0.0, 0.0), None);
    c.process(&mut state, &pinch(10, (0.0, 0.0), (100.0, 100.0)), None);

    let first = c.process(&mut state, &pinch(20, (0.0, 0.0), (101.0, 106.0)), None);
    assert!(matches!(
        first,
        Some(ClassifiedAction::Zoom { axes, .. }) if axes == ZoomAxes::new(false, true)
    ));
    assert_eq!(state.zoom_lock, AxisLock::Y);

    // X now changes more, but the gesture stays on Y: 106 -> 108.12 is 1.02.
    let second = c.process(&mut state, &pinch(30, (0.0, 0.0), (107.0, 108.12)), None);
    match second {
        Some(ClassifiedAction::Zoom { rate, axes, .. }) => {
            assert!((rate - 1.02).abs() < 1e-4);
            assert_eq!(axes, ZoomAxes::new(false, true));
        }
        other => panic!("expected zoom, got {other:?}"),
    }
}

#[test]
fn test_second_pointer_pans_when_zoom_disabled() {
    let config = InteractionConfig {
        zoom_enabled: false,
        ..InteractionConfig::default()
    };
    let c = classifier(config);
    let mut state = GestureState::default();
    c.process(&mut state, &TouchEvent::down(0, 0.0, 0.0), None);
    let action = c.process(&mut state, &pinch(10, (4.0, 0.0), (100.0, 100.0)), None);
    assert_eq!(action.and_then(|a| a.pan_delta()), Some(Vec2::new(4.0, 0.0)));
}

#[test]
fn test_pan_disabled_produces_no_pan() {
    let config = InteractionConfig {
        pan_enabled: false,
        ..InteractionConfig::default()
    };
    let c = classifier(config);
    let mut state = GestureState::default();
    c.process(&mut state, &TouchEvent::down(0, 0.0, 0.0), None);
    assert_eq!(c.process(&mut state, &TouchEvent::moved(10, 30.0, 0.0), None), None);
}

#[test]
fn test_zoom_button_thirds_on_down() {
    let c = classifier(InteractionConfig::default());
    let region = Rect::from_ltrb(0.0, 0.0, 90.0, 30.0);
    let cases = [
        (29.0, ZoomButton::In),
        (30.0, ZoomButton::Out),
        (59.0, ZoomButton::Out),
        (60.0, ZoomButton::Reset),
        (89.0, ZoomButton::Reset),
    ];
    for (x, expected) in cases {
        let mut state = GestureState::default();
        let action = c.process(&mut state, &TouchEvent::down(0, x, 10.0), Some(region));
        assert_eq!(action, Some(ClassifiedAction::ButtonZoom(expected)), "tap at x={x}");
    }
}

#[test]
fn test_tap_outside_zoom_buttons_is_not_a_button() {
    let c = classifier(InteractionConfig::default());
    let region = Rect::from_ltrb(0.0, 0.0, 90.0, 30.0);
    let mut state = GestureState::default();
    assert_eq!(c.process(&mut state, &TouchEvent::down(0, 45.0, 40.0), Some(region)), None);
}

#[test]
fn test_pointer_down_resets_pinch_baseline() {
    let c = classifier(InteractionConfig::default());
    let mut state = GestureState::default();
    c.process(&mut state, &TouchEvent::down(0, 0.0, 0.0), None);
    c.process(&mut state, &pinch(10, (0.0, 0.0), (100.0, 100.0)), None);
    let event = TouchEvent::new(
        TouchAction::PointerDown,
        20,
        &[Vec2::ZERO, Vec2::new(100.0, 100.0)],
    );
    c.process(&mut state, &event, None);
    assert_eq!(state.previous_secondary, None);
    assert_eq!(state.previous_primary, TrackedPoint::Invalid);
}
