#![allow(clippy::float_cmp)]

use super::*;

fn strip() -> DragStrip {
    DragStrip::new(DragBounds::default())
}

fn translate_of(actions: &[DragAction]) -> Option<f64> {
    actions.iter().find_map(|a| match a {
        DragAction::Translate(x) => Some(*x),
        _ => None,
    })
}

// =============================================================
// clamp / DragBounds
// =============================================================

#[test]
fn clamp_inside_range_is_identity() {
    assert_eq!(clamp(-10.0, -3000.0, 0.0), -10.0);
}

#[test]
fn clamp_is_inclusive_at_both_ends() {
    assert_eq!(clamp(0.0, -3000.0, 0.0), 0.0);
    assert_eq!(clamp(-3000.0, -3000.0, 0.0), -3000.0);
}

#[test]
fn clamp_outside_range_snaps_to_bound() {
    assert_eq!(clamp(25.0, -3000.0, 0.0), 0.0);
    assert_eq!(clamp(-3500.0, -3000.0, 0.0), -3000.0);
}

#[test]
fn bounds_default_is_hero_range() {
    let b = DragBounds::default();
    assert_eq!(b.min(), -3000.0);
    assert_eq!(b.max(), 0.0);
}

#[test]
fn bounds_reject_inverted() {
    assert!(matches!(DragBounds::new(1.0, 0.0), Err(ConfigError::InvalidBounds { .. })));
}

#[test]
fn bounds_reject_nan() {
    assert!(DragBounds::new(f64::NAN, 0.0).is_err());
    assert!(DragBounds::new(0.0, f64::NAN).is_err());
}

#[test]
fn bounds_accept_zero_width() {
    let b = DragBounds::new(5.0, 5.0).unwrap();
    assert_eq!(b.clamp(100.0), 5.0);
}

// =============================================================
// Mount
// =============================================================

#[test]
fn mount_resets_transform_to_zero() {
    assert_eq!(strip().mount(), vec![DragAction::Translate(0.0)]);
}

// =============================================================
// pointer_down
// =============================================================

#[test]
fn pointer_down_captures_and_shows_grabbing() {
    let mut s = strip();
    let actions = s.pointer_down(500.0, 7);
    assert_eq!(actions, vec![DragAction::CapturePointer(7), DragAction::SetCursor(Cursor::Grabbing)]);
    assert!(s.is_dragging());
    assert_eq!(s.state(), DragState::Dragging { anchor_x: 500.0 });
}

#[test]
fn second_pointer_down_re_anchors() {
    let mut s = strip();
    s.pointer_down(500.0, 1);
    s.pointer_down(200.0, 2);
    assert_eq!(translate_of(&s.pointer_move(190.0)), Some(-10.0));
}

// =============================================================
// pointer_move
// =============================================================

#[test]
fn move_before_down_is_noop() {
    let mut s = strip();
    assert!(s.pointer_move(100.0).is_empty());
    assert!(s.pointer_move(-4000.0).is_empty());
    assert_eq!(s.live_offset(), 0.0);
    assert_eq!(s.committed_offset(), 0.0);
}

#[test]
fn move_applies_delta_from_anchor() {
    let mut s = strip();
    s.pointer_down(500.0, 1);
    assert_eq!(s.pointer_move(450.0), vec![DragAction::Translate(-50.0)]);
    assert_eq!(s.live_offset(), -50.0);
    assert_eq!(s.committed_offset(), 0.0);
}

#[test]
fn move_right_from_zero_clamps_to_zero() {
    let mut s = strip();
    s.pointer_down(100.0, 1);
    assert_eq!(translate_of(&s.pointer_move(400.0)), Some(0.0));
}

#[test]
fn move_far_left_clamps_to_min() {
    let mut s = strip();
    s.pointer_down(3600.0, 1);
    assert_eq!(translate_of(&s.pointer_move(100.0)), Some(-3000.0));
}

#[test]
fn clamped_for_any_move_sequence() {
    let mut s = strip();
    s.pointer_down(0.0, 1);
    for x in [-100.0, 5000.0, -9000.0, 12.5, -2999.0, 0.0, 3000.0] {
        let applied = translate_of(&s.pointer_move(x)).unwrap();
        assert!((-3000.0..=0.0).contains(&applied), "x {x} applied {applied}");
    }
}

// =============================================================
// pointer_up
// =============================================================

#[test]
fn pointer_up_commits_live_offset() {
    let mut s = strip();
    s.pointer_down(500.0, 3);
    s.pointer_move(450.0);
    let actions = s.pointer_up(3);
    assert_eq!(actions, vec![DragAction::SetCursor(Cursor::Grab), DragAction::ReleasePointer(3)]);
    assert!(!s.is_dragging());
    assert_eq!(s.committed_offset(), -50.0);
}

#[test]
fn pointer_up_while_idle_is_noop() {
    let mut s = strip();
    assert!(s.pointer_up(1).is_empty());
    assert_eq!(s.state(), DragState::Idle);
}

#[test]
fn moves_after_up_are_ignored() {
    let mut s = strip();
    s.pointer_down(500.0, 1);
    s.pointer_move(450.0);
    s.pointer_up(1);
    assert!(s.pointer_move(0.0).is_empty());
    assert_eq!(s.live_offset(), -50.0);
}

#[test]
fn click_without_move_keeps_committed() {
    let mut s = strip();
    s.pointer_down(500.0, 1);
    s.pointer_move(400.0);
    s.pointer_up(1);
    s.pointer_down(10.0, 1);
    s.pointer_up(1);
    assert_eq!(s.committed_offset(), -100.0);
}

#[test]
fn offsets_accumulate_across_drags() {
    let mut s = strip();
    s.pointer_down(500.0, 1);
    s.pointer_move(450.0);
    s.pointer_up(1);
    s.pointer_down(300.0, 1);
    assert_eq!(translate_of(&s.pointer_move(280.0)), Some(-70.0));
}

#[test]
fn custom_bounds_are_respected() {
    let mut s = DragStrip::new(DragBounds::new(-100.0, 50.0).unwrap());
    s.pointer_down(0.0, 1);
    assert_eq!(translate_of(&s.pointer_move(80.0)), Some(50.0));
    assert_eq!(translate_of(&s.pointer_move(-500.0)), Some(-100.0));
}
