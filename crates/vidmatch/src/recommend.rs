//! TF-IDF similarity recommendation.
//!
//! Builds a fresh vector space model over the catalogue's description
//! corpus and returns the single entry most similar to the user's
//! free-text query. The model lives only for the invocation; a changed
//! catalogue is picked up on the next run because nothing is cached.

use anyhow::Result;
use serde::Serialize;

use vidmatch_core::catalog::CatalogSource;
use vidmatch_core::matcher::{MatcherError, VectorSpaceModel};
use vidmatch_core::models::Video;

use crate::catalog::CsvCatalog;
use crate::config::Config;

/// Recommendation result, also the `--json` shape. `score` carries
/// full precision; the human output rounds to two decimals.
#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub query: String,
    /// Catalogue index of the most similar entry.
    pub index: usize,
    /// Cosine similarity in `[-1.0, 1.0]`.
    pub score: f64,
    pub video_url: String,
    pub text: String,
    pub corpus_size: usize,
    pub vocabulary_size: usize,
}

/// Match a query against the catalogue's description corpus.
///
/// # Errors
///
/// [`MatcherError::EmptyCorpus`] when the catalogue is empty or no
/// description yields an indexable term. Callers render this as a
/// no-results state; it is never recovered into a fabricated match.
pub fn recommend_video(
    videos: &[Video],
    query: &str,
) -> Result<RecommendResponse, MatcherError> {
    let corpus: Vec<String> = videos.iter().map(|v| v.full_text.clone()).collect();
    let model = VectorSpaceModel::build(corpus)?;
    let result = model.best_match(query);

    Ok(RecommendResponse {
        query: query.to_string(),
        video_url: videos[result.index].video_url.clone(),
        corpus_size: model.len(),
        vocabulary_size: model.vocabulary_size(),
        index: result.index,
        score: result.score,
        text: result.text,
    })
}

/// CLI entry point — loads the catalogue, matches, prints the result.
pub fn run_recommend(config: &Config, query: &str, json: bool) -> Result<()> {
    let videos = CsvCatalog::new(&config.catalog.path).load()?;

    let response = match recommend_video(&videos, query) {
        Ok(response) => response,
        Err(MatcherError::EmptyCorpus) => {
            if json {
                println!("null");
            } else {
                println!("No results. The catalogue has no usable descriptions.");
            }
            return Ok(());
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    if response.score == 0.0 {
        println!("No results. The query shares no terms with the catalogue.");
        return Ok(());
    }

    println!("Recommendation");
    println!("  [{:.2}] {}", response.score, response.video_url);
    println!("  description: \"{}\"", response.text.replace('\n', " "));
    println!(
        "  corpus: {} videos, {} terms",
        response.corpus_size, response.vocabulary_size
    );

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

    #[test]
    fn test_recommend_joins_match_back_to_url() {
        let videos = vec![
            video("v/mat", "cat on a mat"),
            video("v/fog", "dog in a fog"),
            video("v/both", "cat and dog"),
        ];
        let response = recommend_video(&videos, "cat").unwrap();
        assert_eq!(response.index, 2);
        assert_eq!(response.video_url, "v/both");
        assert_eq!(response.text, "cat and dog");
        assert!(response.score > 0.0);
        assert_eq!(response.corpus_size, 3);
    }

    #[test]
    fn test_recommend_empty_catalogue_is_empty_corpus() {
        let err = recommend_video(&[], "cat").unwrap_err();
        assert_eq!(err, MatcherError::EmptyCorpus);
    }

    #[test]
    fn test_recommend_blank_descriptions_is_empty_corpus() {
        let videos = vec![video("v/1", ""), video("v/2", "")];
        let err = recommend_video(&videos, "cat").unwrap_err();
        assert_eq!(err, MatcherError::EmptyCorpus);
    }

    #[test]
    fn test_recommend_empty_query_scores_zero() {
        let videos = vec![video("v/1", "cat videos"), video("v/2", "dog videos")];
        let response = recommend_video(&videos, "").unwrap();
        assert_eq!(response.score, 0.0);
        assert_eq!(response.index, 0);
    }
}
