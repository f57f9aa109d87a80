//! The browse screen: popular videos plus a random sample.
//!
//! This is the default view of the catalogue when the user has no query
//! in mind, mirroring a video portal's front page.

use anyhow::Result;
use serde::Serialize;

use vidmatch_core::catalog::CatalogSource;
use vidmatch_core::models::Video;
use vidmatch_core::select;

use crate::catalog::{excerpt, CsvCatalog};
use crate::config::Config;
use crate::session::SessionContext;

/// Structured browse screen, also the `--json` response shape.
#[derive(Debug, Serialize)]
pub struct BrowseResponse {
    pub session: SessionContext,
    pub popular: Vec<Video>,
    pub random: Vec<Video>,
}

/// Assemble the browse screen from an already-loaded catalogue.
pub fn browse_catalog(
    videos: &[Video],
    session: &SessionContext,
    popular_count: usize,
    random_count: usize,
) -> BrowseResponse {
    let popular = select::popular(videos, popular_count)
        .into_iter()
        .cloned()
        .collect();
    let mut rng = rand::thread_rng();
    let random = select::sample(videos, random_count, &mut rng)
        .into_iter()
        .cloned()
        .collect();

    BrowseResponse {
        session: session.clone(),
        popular,
        random,
    }
}

/// CLI entry point — loads the catalogue and prints the browse screen.
pub fn run_browse(
    config: &Config,
    session: &SessionContext,
    popular_override: Option<usize>,
    random_override: Option<usize>,
    json: bool,
) -> Result<()> {
    let videos = CsvCatalog::new(&config.catalog.path).load()?;

    let response = browse_catalog(
        &videos,
        session,
        popular_override.unwrap_or(config.browse.popular_count),
        random_override.unwrap_or(config.browse.random_count),
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    println!("{}", session.greeting());
    println!();

    if videos.is_empty() {
        println!("Catalogue is empty.");
        return Ok(());
    }

    println!("Popular videos:");
    print_list(&response.popular);

    println!("Random picks:");
    print_list(&response.random);

    Ok(())
}

fn print_list(videos: &[Video]) {
    for (i, video) in videos.iter().enumerate() {
        println!(
            "{}. [{} views] {}",
            i + 1,
            video.views,
            excerpt(&video.full_text)
        );
        println!("    url: {}", video.video_url);
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(url: &str, text: &str, views: u64) -> Video {
        Video {
            video_url: url.to_string(),
            full_text: text.to_string(),
            views,
        }
    }

    #[test]
    fn test_browse_screen_sections() {
        let videos = vec![
            video("v/1", "quiet cooking", 10),
            video("v/2", "loud gaming", 500),
            video("v/3", "calm hiking", 80),
        ];
        let session = SessionContext::guest();
        let response = browse_catalog(&videos, &session, 2, 2);

        assert_eq!(response.popular.len(), 2);
        assert_eq!(response.popular[0].video_url, "v/2");
        assert_eq!(response.popular[1].video_url, "v/3");
        assert_eq!(response.random.len(), 2);
        assert!(!response.session.registered);
    }

    #[test]
    fn test_browse_empty_catalogue() {
        let session = SessionContext::guest();
        let response = browse_catalog(&[], &session, 5, 5);
        assert!(response.popular.is_empty());
        assert!(response.random.is_empty());
    }
}
