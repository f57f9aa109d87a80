//! Core data models used throughout vidmatch.
//!
//! These types represent the catalogue records that flow through the
//! loading, selection, and matching pipeline.

use serde::{Deserialize, Serialize};

/// One video record in the catalogue.
///
/// The record's position in the loaded catalogue is its identity: the
/// similarity matcher reports corpus indices, and an index into the
/// catalogue joins a match back to its playback URL and view count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// Opaque playback reference. Never interpreted, only displayed.
    pub video_url: String,
    /// Concatenated description text. Missing values are normalized to
    /// an empty string by the catalogue loader before reaching the
    /// matcher.
    pub full_text: String,
    /// Popularity metric, used only by the popular-selection helper.
    pub views: u64,
}
