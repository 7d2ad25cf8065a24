use std::time::{Duration, Instant};

use scroll_picker::{Input, Item, Picker, PickerEvent, PickerOptions, Pointer};

fn picker(options: PickerOptions) -> Picker {
    Picker::new(options, 40.0).unwrap()
}

fn abc() -> Picker {
    picker(PickerOptions::new(["a", "b", "c"]))
}

fn numbered(count: usize) -> Vec<Item> {
    (0..count).map(|i| Item::new(i.to_string())).collect()
}

fn ms(t0: Instant, ms: u64) -> Instant {
    t0 + Duration::from_millis(ms)
}

fn change(index: usize, label: &str) -> PickerEvent {
    PickerEvent::Change {
        index,
        item: Item::new(label),
    }
}

// =============================================================================
// Stepping
// =============================================================================

#[test]
fn test_wheel_down_moves_to_next_row() {
    let mut p = abc();
    let t0 = Instant::now();

    // The selection is reported when the transition ends, not before.
    assert!(p.wheel(5.0, t0).is_empty());
    assert_eq!(p.selected_index(), 2);
    assert_eq!(p.translate(), 0.0);

    assert_eq!(p.transition_end(), vec![change(2, "c")]);
}

#[test]
fn test_wheel_up_moves_to_previous_row() {
    let mut p = abc();
    let t0 = Instant::now();

    p.wheel(-3.0, t0);
    assert_eq!(p.translate(), 80.0);
    assert_eq!(p.transition_end(), vec![change(0, "a")]);
}

#[test]
fn test_wheel_at_last_row_reports_nothing() {
    let mut p = picker(PickerOptions::new(["a", "b", "c"]).initial_index(2));
    let t0 = Instant::now();

    assert!(p.wheel(5.0, t0).is_empty());
    assert_eq!(p.selected_index(), 2);
    assert_eq!(p.translate(), 0.0);
    assert!(p.transition_end().is_empty());
}

#[test]
fn test_small_wheel_delta_is_ignored() {
    let mut p = abc();
    let t0 = Instant::now();

    p.wheel(1.0, t0);
    p.wheel(-0.5, t0);
    assert_eq!(p.selected_index(), 1);
    assert!(p.transition_end().is_empty());
}

#[test]
fn test_consecutive_steps_report_once() {
    let mut p = picker(PickerOptions::new(numbered(10)));
    let t0 = Instant::now();

    p.wheel(120.0, t0);
    p.wheel(120.0, ms(t0, 50));
    assert_eq!(p.selected_index(), 7);

    assert_eq!(p.transition_end(), vec![change(7, "7")]);
    assert!(p.transition_end().is_empty());
}

#[test]
fn test_wheel_back_to_committed_row_reports_nothing() {
    let mut p = abc();
    let t0 = Instant::now();

    p.wheel(10.0, t0);
    p.wheel(-10.0, ms(t0, 50));
    assert!(p.transition_end().is_empty());
    assert_eq!(p.selected_index(), 1);
}

// =============================================================================
// Disabled rows
// =============================================================================

#[test]
fn test_wheel_skips_disabled_in_scroll_direction() {
    let items = vec![
        Item::new("a"),
        Item::new("b"),
        Item::disabled("c"),
        Item::new("d"),
    ];
    let mut p = picker(PickerOptions::new(items).initial_index(1));
    let t0 = Instant::now();

    p.wheel(10.0, t0);
    assert_eq!(p.selected_index(), 3);
    assert_eq!(p.transition_end(), vec![change(3, "d")]);

    p.wheel(-10.0, ms(t0, 400));
    assert_eq!(p.selected_index(), 1);
    assert_eq!(p.transition_end(), vec![change(1, "b")]);
}

#[test]
fn test_wheel_into_disabled_tail_is_a_no_op() {
    let items = vec![Item::new("a"), Item::new("b"), Item::disabled("c")];
    let mut p = picker(PickerOptions::new(items));
    let t0 = Instant::now();

    p.wheel(10.0, t0);
    assert_eq!(p.selected_index(), 1);
    assert_eq!(p.translate(), 40.0);
    assert!(p.transition_end().is_empty());
}

// =============================================================================
// Completion
// =============================================================================

#[test]
fn test_tick_completes_wheel_step() {
    let mut p = abc();
    let t0 = Instant::now();

    p.wheel(5.0, t0);
    assert!(p.tick(ms(t0, 100)).is_empty());
    assert_eq!(p.tick(ms(t0, 300)), vec![change(2, "c")]);
    assert!(p.tick(ms(t0, 400)).is_empty());
    assert!(p.transition_end().is_empty());
}

#[test]
fn test_transition_end_after_drag_is_ignored() {
    let mut p = abc();
    let t0 = Instant::now();

    p.press(Pointer::Touch, 60.0, t0);
    p.release(Pointer::Touch, 60.0, ms(t0, 20));
    assert!(p.transition_end().is_empty());
    assert!(p.tick(ms(t0, 400)).is_empty());
}

#[test]
fn test_transition_end_input() {
    let mut p = abc();
    let t0 = Instant::now();

    p.handle(Input::Wheel { delta_y: 40.0 }, t0);
    assert_eq!(p.handle(Input::TransitionEnd, ms(t0, 300)), vec![change(2, "c")]);
}

#[test]
fn test_reduced_motion_reports_immediately() {
    let mut p = picker(PickerOptions::new(["a", "b", "c"]).reduced_motion());
    let t0 = Instant::now();

    assert_eq!(p.wheel(5.0, t0), vec![change(2, "c")]);
    assert!(!p.is_animating(t0));
    assert_eq!(p.rendered_translate(t0), 0.0);
}

// =============================================================================
// Interaction with drags
// =============================================================================

#[test]
fn test_press_cancels_pending_wheel_completion() {
    let mut p = abc();
    let t0 = Instant::now();

    p.wheel(5.0, t0);
    p.press(Pointer::Mouse, 100.0, ms(t0, 50));
    assert!(p.transition_end().is_empty());

    // The drag commit reports the row the wheel moved to.
    let events = p.release(Pointer::Mouse, 100.0, ms(t0, 60));
    assert_eq!(events.last(), Some(&change(2, "c")));
}

#[test]
fn test_wheel_onto_dragged_position_reports_immediately() {
    let mut p = picker(PickerOptions::new(numbered(10)));
    let t0 = Instant::now();

    p.press(Pointer::Touch, 300.0, t0);
    p.move_to(Pointer::Touch, 260.0, ms(t0, 10));

    // The content is already drawn one row down, so the step has nothing to
    // animate and there is no transition to wait for.
    assert_eq!(p.wheel(5.0, ms(t0, 20)), vec![change(6, "6")]);
    assert_eq!(p.selected_index(), 6);
    for step in 1..=20 {
        assert!(p.tick(ms(t0, 20 + step * 30)).is_empty());
    }
}

#[test]
fn test_wheel_and_drag_share_position() {
    let mut p = picker(PickerOptions::new(numbered(10)));
    let t0 = Instant::now();

    p.wheel(10.0, t0);
    p.transition_end();
    assert_eq!(p.translate(), -160.0);

    // The drag starts from where the wheel left the content.
    p.press(Pointer::Touch, 300.0, ms(t0, 400));
    p.move_to(Pointer::Touch, 340.0, ms(t0, 420));
    assert_eq!(p.rendered_translate(ms(t0, 420)), -120.0);
    p.release(Pointer::Touch, 340.0, ms(t0, 700));

    assert_eq!(p.selected_index(), 5);
    assert_eq!(p.translate(), p.geometry().translate_for_index(5));
}
