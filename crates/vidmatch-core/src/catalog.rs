//! Catalogue source abstraction.
//!
//! The [`CatalogSource`] trait is the seam between the matcher and
//! whatever holds the records. The application crate provides the CSV
//! backend; [`InMemoryCatalog`] serves tests and embedding scenarios.
//!
//! Loading returns the full ordered record set: a record's position is
//! its identity, so sources must preserve row order across loads.

use anyhow::Result;

use crate::models::Video;

/// Abstract catalogue backend.
pub trait CatalogSource {
    /// Load the full catalogue, in stable record order. Sources
    /// normalize missing description fields to empty strings.
    fn load(&self) -> Result<Vec<Video>>;
}

/// Catalogue held directly in memory.
pub struct InMemoryCatalog {
    videos: Vec<Video>,
}

impl InMemoryCatalog {
    pub fn new(videos: Vec<Video>) -> Self {
        Self { videos }
    }
}

impl CatalogSource for InMemoryCatalog {
    fn load(&self) -> Result<Vec<Video>> {
        Ok(self.videos.clone())
    }
}
