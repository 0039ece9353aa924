#![allow(clippy::float_cmp)]

use super::*;

fn center() -> SlotStyle {
    Slot::Center.style()
}

// =============================================================
// Slot styles
// =============================================================

#[test]
fn center_style_matches_table() {
    let s = center();
    assert_eq!((s.x, s.y, s.scale, s.opacity), (0.0, 0.0, 1.4, 1.0));
    assert_eq!(s.blur, Blur::None);
    assert_eq!(s.z_index, 3);
}

#[test]
fn right_style_matches_table() {
    let s = Slot::Right.style();
    assert_eq!((s.x, s.y, s.scale, s.opacity), (220.0, -90.0, 0.95, 0.4));
    assert_eq!(s.blur, Blur::Px(3));
    assert_eq!(s.z_index, 2);
}

#[test]
fn left_style_matches_table() {
    let s = Slot::Left.style();
    assert_eq!((s.x, s.y, s.scale, s.opacity), (-290.0, 200.0, 0.65, 0.4));
    assert_eq!(s.blur, Blur::Px(6));
    assert_eq!(s.z_index, 2);
}

#[test]
fn hidden_style_matches_table() {
    let s = Slot::Hidden.style();
    assert_eq!((s.x, s.y, s.scale, s.opacity), (0.0, 0.0, 0.9, 0.0));
    assert_eq!(s.blur, Blur::Px(10));
    assert_eq!(s.z_index, 0);
}

#[test]
fn css_strings_for_center() {
    let s = center();
    assert_eq!(s.transform(), "translate(0px, 0px) scale(1.4)");
    assert_eq!(s.opacity_css(), "1");
    assert_eq!(s.filter(), "none");
    assert_eq!(s.z_index_css(), "3");
}

#[test]
fn css_strings_for_hidden() {
    let s = Slot::Hidden.style();
    assert_eq!(s.transform(), "translate(0px, 0px) scale(0.9)");
    assert_eq!(s.opacity_css(), "0");
    assert_eq!(s.filter(), "blur(10px)");
    assert_eq!(s.z_index_css(), "0");
}

// =============================================================
// Offsets
// =============================================================

#[test]
fn circular_offset_zero_slides_is_none() {
    assert_eq!(circular_offset(0, 0, 0), None);
    assert_eq!(circular_offset(3, 1, 0), None);
}

#[test]
fn circular_offset_wraps_behind_active() {
    assert_eq!(circular_offset(0, 1, 6), Some(5));
    assert_eq!(circular_offset(4, 5, 6), Some(5));
    assert_eq!(circular_offset(5, 5, 6), Some(0));
}

#[test]
fn circular_offset_extra_elements_wrap() {
    // Element 7 renders as if it were element 1 of six slides.
    assert_eq!(circular_offset(7, 0, 6), Some(1));
    assert_eq!(circular_offset(6, 0, 6), Some(0));
}

// =============================================================
// Full layout
// =============================================================

#[test]
fn layout_holds_table_for_every_active_index() {
    let n = 6;
    for active in 0..n {
        let styles = layout(active, n, n);
        assert_eq!(styles.len(), n);
        for (i, style) in styles.iter().enumerate() {
            let offset = (i + n - active) % n;
            let expected = match offset {
                0 => Slot::Center,
                1 => Slot::Right,
                5 => Slot::Left,
                _ => Slot::Hidden,
            };
            assert_eq!(*style, expected.style(), "active {active}, element {i}");
        }
    }
}

#[test]
fn layout_six_slides_active_zero() {
    assert_eq!(
        slots(0, 6, 6),
        vec![Slot::Center, Slot::Right, Slot::Hidden, Slot::Hidden, Slot::Hidden, Slot::Left]
    );
}

#[test]
fn layout_exactly_one_center_when_elements_match_slides() {
    for n in 1..=8 {
        for active in 0..n {
            let centers = slots(active, n, n).into_iter().filter(|s| *s == Slot::Center).count();
            assert_eq!(centers, 1, "n {n}, active {active}");
        }
    }
}

#[test]
fn layout_zero_slides_is_empty() {
    assert!(layout(0, 0, 4).is_empty());
}

#[test]
fn layout_no_elements_is_empty() {
    assert!(layout(2, 6, 0).is_empty());
}

#[test]
fn layout_fewer_elements_than_slides() {
    // Active slide has no element; element 0 sits behind it.
    assert_eq!(slots(1, 6, 2), vec![Slot::Left, Slot::Center]);
    assert_eq!(slots(3, 6, 2), vec![Slot::Hidden, Slot::Hidden]);
}

// =============================================================
// Small lists: first matching rule wins
// =============================================================

#[test]
fn one_slide_is_always_center() {
    assert_eq!(slots(0, 1, 1), vec![Slot::Center]);
}

#[test]
fn two_slides_neighbor_is_right_not_left() {
    assert_eq!(slots(0, 2, 2), vec![Slot::Center, Slot::Right]);
    assert_eq!(slots(1, 2, 2), vec![Slot::Right, Slot::Center]);
}

#[test]
fn three_slides_fill_all_visible_slots() {
    assert_eq!(slots(0, 3, 3), vec![Slot::Center, Slot::Right, Slot::Left]);
    assert_eq!(slots(1, 3, 3), vec![Slot::Left, Slot::Center, Slot::Right]);
    assert_eq!(slots(2, 3, 3), vec![Slot::Right, Slot::Left, Slot::Center]);
}

#[test]
fn for_offset_precedence() {
    assert_eq!(Slot::for_offset(0, 1), Slot::Center);
    assert_eq!(Slot::for_offset(1, 2), Slot::Right);
    assert_eq!(Slot::for_offset(2, 3), Slot::Left);
    assert_eq!(Slot::for_offset(2, 6), Slot::Hidden);
}
