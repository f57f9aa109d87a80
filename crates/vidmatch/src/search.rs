//! Substring search over catalogue descriptions.
//!
//! Case-insensitive containment filter, deliberately distinct from the
//! TF-IDF recommendation path in [`crate::recommend`]: search answers
//! "which descriptions mention this text", recommend answers "which
//! single description is most similar". The two mechanisms are kept
//! separate by design.

use anyhow::Result;
use serde::Serialize;

use vidmatch_core::catalog::CatalogSource;
use vidmatch_core::models::Video;

use crate::catalog::{excerpt, CsvCatalog};
use crate::config::Config;

/// Search response, also the `--json` shape.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    /// Matches before the `max_results` cap was applied.
    pub total_matches: usize,
    pub results: Vec<SearchHit>,
}

/// One search result with its catalogue index.
#[derive(Debug, Serialize)]
pub struct SearchHit {
    pub index: usize,
    #[serde(flatten)]
    pub video: Video,
}

/// Filter the catalogue by case-insensitive substring containment.
///
/// A blank query matches nothing. Results keep catalogue order.
pub fn search_catalog(videos: &[Video], query: &str, max_results: usize) -> SearchResponse {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return SearchResponse {
            query: query.to_string(),
            total_matches: 0,
            results: Vec::new(),
        };
    }

    let matches: Vec<SearchHit> = videos
        .iter()
        .enumerate()
        .filter(|(_, v)| v.full_text.to_lowercase().contains(&needle))
        .map(|(index, video)| SearchHit {
            index,
            video: video.clone(),
        })
        .collect();

    let total_matches = matches.len();
    let results = matches.into_iter().take(max_results).collect();

    SearchResponse {
        query: query.to_string(),
        total_matches,
        results,
    }
}

/// CLI entry point — loads the catalogue, filters, prints results.
pub fn run_search(
    config: &Config,
    query: &str,
    limit_override: Option<usize>,
    json: bool,
) -> Result<()> {
    let videos = CsvCatalog::new(&config.catalog.path).load()?;
    let max_results = limit_override.unwrap_or(config.search.max_results);
    let response = search_catalog(&videos, query, max_results);

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    if response.results.is_empty() {
        println!("No results.");
        return Ok(());
    }

    println!(
        "{} match{} for \"{}\":",
        response.total_matches,
        if response.total_matches == 1 { "" } else { "es" },
        response.query
    );
    println!();
    for (i, hit) in response.results.iter().enumerate() {
        println!(
            "{}. [{} views] {}",
            i + 1,
            hit.video.views,
            excerpt(&hit.video.full_text)
        );
        println!("    url: {}", hit.video.video_url);
    }
    if response.total_matches > response.results.len() {
        println!();
        println!(
            "(showing {} of {} matches)",
            response.results.len(),
            response.total_matches
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(url: &str, text: &str) -> Video {
        Video {
            video_url: url.to_string(),
            full_text: text.to_string(),
            views: 0,
        }
    }

    fn fixture() -> Vec<Video> {
        vec![
            video("v/1", "cat on a mat"),
            video("v/2", "dog in a fog"),
            video("v/3", "Cat and dog"),
        ]
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let response = search_catalog(&fixture(), "CAT", 10);
        assert_eq!(response.total_matches, 2);
        assert_eq!(response.results[0].index, 0);
        assert_eq!(response.results[1].index, 2);
    }

    #[test]
    fn test_search_respects_max_results() {
        let response = search_catalog(&fixture(), "o", 2);
        assert_eq!(response.total_matches, 3);
        assert_eq!(response.results.len(), 2);
    }

    #[test]
    fn test_blank_query_matches_nothing() {
        let response = search_catalog(&fixture(), "   ", 10);
        assert_eq!(response.total_matches, 0);
        assert!(response.results.is_empty());
    }

    #[test]
    fn test_no_match() {
        let response = search_catalog(&fixture(), "zebra", 10);
        assert!(response.results.is_empty());
    }
}
