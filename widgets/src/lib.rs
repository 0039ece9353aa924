//! Browser-free core for the landing page widgets.
//!
//! Both widgets on the page are modelled here as plain state machines that
//! return lists of actions. The host crate owns the DOM handles, feeds pointer
//! and click events in, and applies the returned actions to the elements it
//! resolved at mount time. Nothing in this crate touches `web_sys`, so every
//! rule can be exercised with `cargo test` on the native target.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`drag`] | Hero strip drag state machine and [`drag::DragAction`] |
//! | [`carousel`] | Carousel index cycling, render generations and [`carousel::CarouselAction`] |
//! | [`layout`] | Offset-to-slot lookup for carousel images |
//! | [`style`] | CSS value formatting for transforms, filters and opacity |
//! | [`slide`] | Slide records and the embedded catalog |
//! | [`config`] | Element ids, bounds and timing with serde defaults |
//! | [`error`] | Error types for catalog and config parsing |
//! | [`consts`] | Shared numeric constants (drag bounds, fade delay) |

pub mod carousel;
pub mod config;
pub mod consts;
pub mod drag;
pub mod error;
pub mod layout;
pub mod slide;
pub mod style;
