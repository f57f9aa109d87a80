//! Catalogue overview.
//!
//! A quick summary of what the configured CSV holds: record count,
//! description coverage, and view totals. Used by `vid stats` to
//! sanity-check a dataset before browsing or recommending against it.

use anyhow::Result;

use vidmatch_core::catalog::CatalogSource;

use crate::catalog::CsvCatalog;
use crate::config::Config;

/// Run the stats command: load the catalogue and print a summary.
pub fn run_stats(config: &Config) -> Result<()> {
    let path = &config.catalog.path;
    let videos = CsvCatalog::new(path).load()?;

    let file_size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);
    let described = videos
        .iter()
        .filter(|v| !v.full_text.trim().is_empty())
        .count();
    let total_views: u64 = videos.iter().map(|v| v.views).sum();
    let max_views = videos.iter().map(|v| v.views).max().unwrap_or(0);

    println!("vidmatch — Catalogue Stats");
    println!("==========================");
    println!();
    println!("  Catalogue:   {}", path.display());
    println!("  Size:        {}", format_bytes(file_size));
    println!();
    println!("  Videos:      {}", videos.len());
    println!(
        "  Described:   {} / {} ({}%)",
        described,
        videos.len(),
        if videos.is_empty() {
            0
        } else {
            (described * 100) / videos.len()
        }
    );
    println!("  Total views: {}", total_views);
    println!("  Max views:   {}", max_views);
    println!();

    Ok(())
}

/// Format a byte count as a human-readable string.
fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KB");
        assert_eq!(format_bytes(3 * 1024 * 1024), "3.0 MB");
    }
}
