//! Carousel model: circular active index, render passes and deferred text swaps.
//!
//! DESIGN
//! ======
//! Every render is a full, idempotent restyle computed from the active index
//! alone, so the host can apply it without diffing. Each render also bumps a
//! generation counter that travels with the scheduled text swap. Under
//! [`TextSwapPolicy::Overlap`] the counter is informational and every swap
//! fires, which lets an older timer fade the info block back in while a newer
//! transition is still pending. [`TextSwapPolicy::LatestOnly`] drops swaps
//! whose generation has been superseded.
//!
//! The swap resolves its text from the active slide when it fires, not when
//! it was scheduled.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

use serde::{Deserialize, Serialize};

use crate::consts::TEXT_FADE_DELAY_MS;
use crate::layout::{self, SlotStyle};
use crate::slide::{Catalog, Slide};

/// How deferred text swaps from overlapping renders are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextSwapPolicy {
    /// Every scheduled swap applies, in timer order.
    #[default]
    Overlap,
    /// Only the swap from the most recent render applies.
    LatestOnly,
}

/// Side effects requested by the carousel.
#[derive(Debug, Clone, PartialEq)]
pub enum CarouselAction {
    /// Set the container's `background` verbatim.
    SetBackground(String),
    /// Restyle image element `index`.
    StyleImage { index: usize, style: SlotStyle },
    /// Set the info block's opacity to 0.
    FadeOutInfo,
    /// Call [`Carousel::text_swap`] with `generation` after `delay_ms`.
    ScheduleTextSwap { generation: u64, delay_ms: u32 },
    /// Replace the title text.
    SetTitle(String),
    /// Replace the description text.
    SetDescription(String),
    /// Set the info block's opacity to 1.
    FadeInInfo,
}

/// Optional carousel elements the page actually provides.
///
/// A missing container drops the background, and the text fade only runs
/// when the info block, title and description are all present. Images are
/// styled regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselParts {
    /// Container whose background follows the active slide.
    pub container: bool,
    /// Info block together with its title and description.
    pub text_block: bool,
}

impl Default for CarouselParts {
    fn default() -> Self {
        Self { container: true, text_block: true }
    }
}

/// Carousel state over a fixed slide catalog.
#[derive(Debug, Clone)]
pub struct Carousel {
    catalog: Catalog,
    element_count: usize,
    parts: CarouselParts,
    active: usize,
    generation: u64,
    policy: TextSwapPolicy,
    fade_delay_ms: u32,
}

impl Carousel {
    /// Create a carousel over `catalog` driving `element_count` image elements.
    #[must_use]
    pub fn new(catalog: Catalog, element_count: usize) -> Self {
        Self {
            catalog,
            element_count,
            parts: CarouselParts::default(),
            active: 0,
            generation: 0,
            policy: TextSwapPolicy::default(),
            fade_delay_ms: TEXT_FADE_DELAY_MS,
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: TextSwapPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn with_parts(mut self, parts: CarouselParts) -> Self {
        self.parts = parts;
        self
    }

    #[must_use]
    pub fn with_fade_delay_ms(mut self, delay_ms: u32) -> Self {
        self.fade_delay_ms = delay_ms;
        self
    }

    // --- Navigation ---

    /// Initial paint at index 0.
    pub fn mount(&mut self) -> Vec<CarouselAction> {
        self.render()
    }

    /// Step forward one slide, wrapping at the end.
    pub fn advance(&mut self) -> Vec<CarouselAction> {
        let n = self.catalog.len();
        if n == 0 {
            return Vec::new();
        }
        self.active = (self.active + 1) % n;
        self.render()
    }

    /// Step back one slide, wrapping at the start.
    pub fn retreat(&mut self) -> Vec<CarouselAction> {
        let n = self.catalog.len();
        if n == 0 {
            return Vec::new();
        }
        self.active = (self.active + n - 1) % n;
        self.render()
    }

    /// Full restyle for the current index. Empty when there are no slides.
    pub fn render(&mut self) -> Vec<CarouselAction> {
        let Some(slide) = self.catalog.get(self.active) else {
            return Vec::new();
        };
        self.generation = self.generation.wrapping_add(1);

        let mut actions = Vec::with_capacity(self.element_count + 3);
        if self.parts.container {
            actions.push(CarouselAction::SetBackground(slide.background.clone()));
        }
        actions.extend(
            layout::layout(self.active, self.catalog.len(), self.element_count)
                .into_iter()
                .enumerate()
                .map(|(index, style)| CarouselAction::StyleImage { index, style }),
        );
        if self.parts.text_block {
            actions.push(CarouselAction::FadeOutInfo);
            actions.push(CarouselAction::ScheduleTextSwap { generation: self.generation, delay_ms: self.fade_delay_ms });
        }
        actions
    }

    /// Deferred half of a render: swap the text and fade back in.
    ///
    /// Returns nothing when the swap is stale under
    /// [`TextSwapPolicy::LatestOnly`], the text block is absent, or there are
    /// no slides.
    pub fn text_swap(&self, generation: u64) -> Vec<CarouselAction> {
        if !self.parts.text_block {
            return Vec::new();
        }
        if self.policy == TextSwapPolicy::LatestOnly && generation != self.generation {
            return Vec::new();
        }
        let Some(slide) = self.active_slide() else {
            return Vec::new();
        };
        vec![
            CarouselAction::SetTitle(slide.name.clone()),
            CarouselAction::SetDescription(slide.description.clone()),
            CarouselAction::FadeInInfo,
        ]
    }

    // --- Queries ---

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn active_slide(&self) -> Option<&Slide> {
        self.catalog.get(self.active)
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.catalog.len()
    }

    #[must_use]
    pub fn element_count(&self) -> usize {
        self.element_count
    }

    /// Generation of the most recent render.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn parts(&self) -> CarouselParts {
        self.parts
    }

    #[must_use]
    pub fn policy(&self) -> TextSwapPolicy {
        self.policy
    }
}
