//! Slide records and the catalog embedded at build time.

#[cfg(test)]
#[path = "slide_test.rs"]
mod slide_test;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

const BUILTIN_CATALOG: &str = include_str!("../assets/slides.json");

/// One carousel entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Title shown in the info block.
    pub name: String,
    /// Image asset path. Not checked for existence.
    pub image_path: String,
    /// Body text shown in the info block.
    pub description: String,
    /// CSS `background` value for the carousel container, applied verbatim.
    pub background: String,
}

/// Ordered, immutable list of slides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    slides: Vec<Slide>,
}

impl Catalog {
    #[must_use]
    pub fn new(slides: Vec<Slide>) -> Self {
        Self { slides }
    }

    /// The six slides shipped with the page.
    ///
    /// # Errors
    ///
    /// [`CatalogError::Parse`] if the embedded catalog is malformed.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parse a JSON array of slide records.
    ///
    /// # Errors
    ///
    /// [`CatalogError::Parse`] when `json` is not an array of complete slide records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let slides: Vec<Slide> = serde_json::from_str(json)?;
        Ok(Self { slides })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }
}
