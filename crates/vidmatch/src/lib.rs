//! # vidmatch
//!
//! **A local-first video catalogue browser and similarity recommender.**
//!
//! vidmatch loads a flat CSV catalogue of videos and exposes three ways
//! to explore it: a browse screen (popular + random picks), a
//! case-insensitive substring search, and a TF-IDF cosine-similarity
//! recommendation that finds the catalogue entry closest to a free-text
//! description.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────┐   ┌──────────────────┐   ┌───────────────┐
//! │  CSV file  │──▶│  CsvCatalog       │──▶│  vidmatch-core │
//! │ (catalog)  │   │ load + normalize │   │ matcher/select │
//! └────────────┘   └──────────────────┘   └──────┬────────┘
//!                                                │
//!                                          ┌─────▼─────┐
//!                                          │ CLI (vid) │
//!                                          └───────────┘
//! ```
//!
//! ## Data Flow
//!
//! 1. Every command re-reads the configured CSV through
//!    [`catalog::CsvCatalog`], normalizing missing descriptions to
//!    empty strings. There is no cache; the file on disk is the truth.
//! 2. `browse` ranks by view count and draws a random sample
//!    (`vidmatch_core::select`).
//! 3. `search` filters descriptions by substring containment.
//! 4. `recommend` builds a fresh TF-IDF model over the description
//!    corpus (`vidmatch_core::matcher`) and returns the single nearest
//!    entry by cosine similarity. The two query paths are deliberately
//!    separate mechanisms.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing and validation |
//! | [`catalog`] | CSV catalogue backend for `CatalogSource` |
//! | [`session`] | Session context passed to the rendering layer |
//! | [`browse`] | Popular + random browse screen |
//! | [`search`] | Substring search over descriptions |
//! | [`recommend`] | TF-IDF cosine similarity recommendation |
//! | [`stats`] | Catalogue overview |

pub mod browse;
pub mod catalog;
pub mod config;
pub mod recommend;
pub mod search;
pub mod session;
pub mod stats;

pub use vidmatch_core::catalog::CatalogSource;
pub use vidmatch_core::matcher::{MatchResult, MatcherError, VectorSpaceModel};
pub use vidmatch_core::models::Video;
