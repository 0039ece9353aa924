//! Page configuration: element ids, drag bounds and carousel timing.
//!
//! DESIGN
//! ======
//! Defaults reproduce the page exactly; the page entry always mounts with
//! [`PageConfig::default`]. Every struct deserializes with `#[serde(default)]`
//! so a partial document only overrides the fields it names.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::carousel::TextSwapPolicy;
use crate::consts::{MAX_LEFT_PX, MAX_RIGHT_PX, TEXT_FADE_DELAY_MS};
use crate::drag::DragBounds;
use crate::error::ConfigError;

/// Configuration for both widgets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub hero: HeroConfig,
    pub carousel: CarouselConfig,
}

impl PageConfig {
    /// Check bounds ordering and that no element id or selector is empty.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidBounds`] for inverted or NaN hero bounds and
    /// [`ConfigError::EmptySelector`] naming the first blank id or selector.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.hero.validate()?;
        self.carousel.validate()
    }
}

/// Hero drag strip settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    /// Id of the draggable strip element.
    pub element_id: String,
    /// Leftmost translation in pixels (inclusive).
    pub min_offset: f64,
    /// Rightmost translation in pixels (inclusive).
    pub max_offset: f64,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self { element_id: "alien-slider".into(), min_offset: MAX_LEFT_PX, max_offset: MAX_RIGHT_PX }
    }
}

impl HeroConfig {
    /// Validated drag bounds.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidBounds`] when `min_offset > max_offset` or either is NaN.
    pub fn bounds(&self) -> Result<DragBounds, ConfigError> {
        DragBounds::new(self.min_offset, self.max_offset)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.element_id, "hero.element_id")?;
        self.bounds().map(|_| ())
    }
}

/// Carousel settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Id of the container whose background follows the active slide.
    pub container_id: String,
    /// Selector for the image elements, in slide order.
    pub images_selector: String,
    /// Id of the button that steps back.
    pub prev_button_id: String,
    /// Id of the button that steps forward.
    pub next_button_id: String,
    /// Id of the block faded during text swaps.
    pub info_id: String,
    /// Id of the title element.
    pub title_id: String,
    /// Id of the description element.
    pub description_id: String,
    /// Delay before swapping text and fading back in.
    pub text_fade_delay_ms: u32,
    /// How overlapping deferred swaps are resolved.
    pub text_swap: TextSwapPolicy,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            container_id: "main-slider".into(),
            images_selector: "#slider-images .alien-img".into(),
            prev_button_id: "left-btn".into(),
            next_button_id: "right-btn".into(),
            info_id: "slider-info".into(),
            title_id: "slider-title".into(),
            description_id: "slider-desc".into(),
            text_fade_delay_ms: TEXT_FADE_DELAY_MS,
            text_swap: TextSwapPolicy::default(),
        }
    }
}

impl CarouselConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.container_id, "carousel.container_id")?;
        require_non_empty(&self.images_selector, "carousel.images_selector")?;
        require_non_empty(&self.prev_button_id, "carousel.prev_button_id")?;
        require_non_empty(&self.next_button_id, "carousel.next_button_id")?;
        require_non_empty(&self.info_id, "carousel.info_id")?;
        require_non_empty(&self.title_id, "carousel.title_id")?;
        require_non_empty(&self.description_id, "carousel.description_id")
    }
}

fn require_non_empty(value: &str, field: &'static str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::EmptySelector(field));
    }
    Ok(())
}
