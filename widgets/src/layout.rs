//! Carousel slot layout.
//!
//! Every image element is assigned a [`Slot`] from its circular distance to
//! the active index. Roles rotate with the index; elements are never
//! reordered in the document.
//!
//! Rules are matched in the fixed order center, right, left, hidden. With one
//! or two slides several rules can describe the same offset and the earlier
//! rule wins: a single slide is always centered, and with two slides the
//! non-active one is the right neighbor, never the left.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use crate::consts::{LEFT_SLOT_X_PX, LEFT_SLOT_Y_PX, RIGHT_SLOT_X_PX, RIGHT_SLOT_Y_PX};
use crate::style::{self, Blur};

/// Screen role of a carousel image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// The active slide.
    Center,
    /// One step ahead of the active slide.
    Right,
    /// One step behind the active slide (wrapping).
    Left,
    /// Everything else.
    Hidden,
}

impl Slot {
    /// Resolve the slot for a circular `offset` among `slide_count` slides.
    #[must_use]
    pub fn for_offset(offset: usize, slide_count: usize) -> Self {
        if offset == 0 {
            Self::Center
        } else if offset == 1 {
            Self::Right
        } else if offset + 1 == slide_count {
            Self::Left
        } else {
            Self::Hidden
        }
    }

    /// Visual properties for this slot.
    #[must_use]
    pub fn style(self) -> SlotStyle {
        match self {
            Self::Center => SlotStyle { x: 0.0, y: 0.0, scale: 1.4, opacity: 1.0, blur: Blur::None, z_index: 3 },
            Self::Right => SlotStyle {
                x: RIGHT_SLOT_X_PX,
                y: RIGHT_SLOT_Y_PX,
                scale: 0.95,
                opacity: 0.4,
                blur: Blur::Px(3),
                z_index: 2,
            },
            Self::Left => SlotStyle {
                x: LEFT_SLOT_X_PX,
                y: LEFT_SLOT_Y_PX,
                scale: 0.65,
                opacity: 0.4,
                blur: Blur::Px(6),
                z_index: 2,
            },
            Self::Hidden => SlotStyle { x: 0.0, y: 0.0, scale: 0.9, opacity: 0.0, blur: Blur::Px(10), z_index: 0 },
        }
    }
}

/// Declarative style for one image element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotStyle {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub opacity: f64,
    pub blur: Blur,
    pub z_index: i32,
}

impl SlotStyle {
    /// CSS `transform` value.
    #[must_use]
    pub fn transform(&self) -> String {
        style::translate_scale(self.x, self.y, self.scale)
    }

    /// CSS `opacity` value.
    #[must_use]
    pub fn opacity_css(&self) -> String {
        style::opacity(self.opacity)
    }

    /// CSS `filter` value.
    #[must_use]
    pub fn filter(&self) -> String {
        self.blur.to_string()
    }

    /// CSS `z-index` value.
    #[must_use]
    pub fn z_index_css(&self) -> String {
        self.z_index.to_string()
    }
}

/// Circular distance from `active` to `element`, or `None` when there are no slides.
///
/// `element` may exceed `slide_count` when the page carries more images than
/// slides; the result still lands in `[0, slide_count)`.
#[must_use]
pub fn circular_offset(element: usize, active: usize, slide_count: usize) -> Option<usize> {
    if slide_count == 0 {
        return None;
    }
    let active = active % slide_count;
    Some((element % slide_count + slide_count - active) % slide_count)
}

/// Compute the style of every image element for the given active index.
///
/// Returns one entry per element, or an empty list when `slide_count` is zero.
#[must_use]
pub fn layout(active: usize, slide_count: usize, element_count: usize) -> Vec<SlotStyle> {
    slots(active, slide_count, element_count).into_iter().map(Slot::style).collect()
}

/// Slot roles for every element; the same lookup as [`layout`] without styles.
#[must_use]
pub fn slots(active: usize, slide_count: usize, element_count: usize) -> Vec<Slot> {
    (0..element_count)
        .filter_map(|i| circular_offset(i, active, slide_count))
        .map(|offset| Slot::for_offset(offset, slide_count))
        .collect()
}
