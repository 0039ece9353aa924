//! Shared numeric constants for the widgets crate.

// ── Hero strip ──────────────────────────────────────────────────

/// Furthest the hero strip may travel to the left, in CSS pixels.
pub const MAX_LEFT_PX: f64 = -3000.0;

/// Furthest the hero strip may travel to the right, in CSS pixels.
pub const MAX_RIGHT_PX: f64 = 0.0;

// ── Carousel ────────────────────────────────────────────────────

/// Delay between fading the info block out and swapping its text.
pub const TEXT_FADE_DELAY_MS: u32 = 160;

/// Horizontal offset of the right-neighbor slot.
pub const RIGHT_SLOT_X_PX: f64 = 220.0;

/// Vertical offset of the right-neighbor slot.
pub const RIGHT_SLOT_Y_PX: f64 = -90.0;

/// Horizontal offset of the left-neighbor slot.
pub const LEFT_SLOT_X_PX: f64 = -290.0;

/// Vertical offset of the left-neighbor slot.
pub const LEFT_SLOT_Y_PX: f64 = 200.0;
