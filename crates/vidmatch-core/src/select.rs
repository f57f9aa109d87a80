//! Popular and random catalogue selection.
//!
//! Backs the browse screen: a top-N-by-views list and a uniform random
//! sample. Both return at most `n` references and never panic on a
//! short or empty catalogue.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::Video;

/// Top `n` videos by view count, descending.
///
/// Deterministic: equal view counts are broken toward the lower
/// catalogue index.
pub fn popular(videos: &[Video], n: usize) -> Vec<&Video> {
    let mut order: Vec<usize> = (0..videos.len()).collect();
    order.sort_by(|&a, &b| videos[b].views.cmp(&videos[a].views).then(a.cmp(&b)));
    order.truncate(n);
    order.into_iter().map(|i| &videos[i]).collect()
}

/// Uniform random sample of `n` videos without replacement.
///
/// The RNG is caller-supplied so tests can seed it; the application
/// passes `rand::thread_rng()`.
pub fn sample<'a, R: Rng + ?Sized>(videos: &'a [Video], n: usize, rng: &mut R) -> Vec<&'a Video> {
    videos.choose_multiple(rng, n).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn video(url: &str, views: u64) -> Video {
        Video {
            video_url: url.to_string(),
            full_text: String::new(),
            views,
        }
    }

    #[test]
    fn test_popular_orders_by_views_desc() {
        let videos = vec![video("v/a", 10), video("v/b", 300), video("v/c", 45)];
        let top = popular(&videos, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].video_url, "v/b");
        assert_eq!(top[1].video_url, "v/c");
    }

    #[test]
    fn test_popular_tie_breaks_toward_lower_index() {
        let videos = vec![video("v/a", 50), video("v/b", 50), video("v/c", 50)];
        let top = popular(&videos, 3);
        let urls: Vec<&str> = top.iter().map(|v| v.video_url.as_str()).collect();
        assert_eq!(urls, vec!["v/a", "v/b", "v/c"]);
    }

    #[test]
    fn test_popular_short_catalogue() {
        let videos = vec![video("v/a", 1)];
        assert_eq!(popular(&videos, 5).len(), 1);
        assert!(popular(&[], 5).is_empty());
    }

    #[test]
    fn test_sample_size_capped_at_catalogue() {
        let videos = vec![video("v/a", 1), video("v/b", 2)];
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(sample(&videos, 5, &mut rng).len(), 2);
        assert_eq!(sample(&videos, 1, &mut rng).len(), 1);
        assert!(sample(&[], 3, &mut rng).is_empty());
    }

    #[test]
    fn test_sample_has_no_duplicates() {
        let videos: Vec<Video> = (0..20).map(|i| video(&format!("v/{}", i), i)).collect();
        let mut rng = StdRng::seed_from_u64(42);
        let picked = sample(&videos, 10, &mut rng);
        let mut urls: Vec<&str> = picked.iter().map(|v| v.video_url.as_str()).collect();
        urls.sort_unstable();
        urls.dedup();
        assert_eq!(urls.len(), 10);
    }
}
