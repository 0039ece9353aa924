//! CSS value formatting.
//!
//! Numbers are written with Rust's shortest `Display` form, which matches what
//! a browser produces when a number is interpolated into a style string:
//! `1.0` prints as `1`, `1.4` as `1.4`, `-50.0` as `-50`.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use std::fmt;

/// Cursor affordance shown on the hero strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    /// Idle, ready to be dragged.
    Grab,
    /// A drag is in progress.
    Grabbing,
}

impl Cursor {
    /// CSS `cursor` value.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Grab => "grab",
            Self::Grabbing => "grabbing",
        }
    }
}

/// Gaussian blur applied through the `filter` property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blur {
    /// No filter; serialized as the literal `none`.
    None,
    /// `blur(Npx)`.
    Px(u32),
}

impl fmt::Display for Blur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Px(px) => write!(f, "blur({px}px)"),
        }
    }
}

/// `translateX(<x>px)` for the hero strip.
#[must_use]
pub fn translate_x(x: f64) -> String {
    format!("translateX({x}px)")
}

/// `translate(<x>px, <y>px) scale(<s>)` for a carousel image.
#[must_use]
pub fn translate_scale(x: f64, y: f64, scale: f64) -> String {
    format!("translate({x}px, {y}px) scale({scale})")
}

/// Opacity as a CSS number.
#[must_use]
pub fn opacity(value: f64) -> String {
    value.to_string()
}
