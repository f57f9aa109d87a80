//! CSV catalogue backend.
//!
//! Reads the configured CSV file into [`Video`] records. Raw rows are
//! normalized before they reach the matcher: a missing or empty
//! `full_text` becomes `""`, a missing `views` becomes `0`. A row that
//! cannot be parsed at all is a load error with file and line context,
//! not a silent skip.
//!
//! The catalogue is re-read on every command invocation. The file on
//! disk is the single source of truth; there is no cache to invalidate.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

use vidmatch_core::catalog::CatalogSource;
use vidmatch_core::models::Video;

/// Raw CSV row before normalization. Column names match the source
/// dataset; unknown columns are ignored.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(default)]
    full_text: Option<String>,
    video_url: String,
    #[serde(default)]
    views: Option<u64>,
}

/// CSV-file implementation of [`CatalogSource`].
pub struct CsvCatalog {
    path: PathBuf,
}

impl CsvCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for CsvCatalog {
    fn load(&self) -> Result<Vec<Video>> {
        let mut reader = csv::Reader::from_path(&self.path)
            .with_context(|| format!("Failed to open catalogue: {}", self.path.display()))?;

        let mut videos = Vec::new();
        for (i, row) in reader.deserialize::<CsvRecord>().enumerate() {
            // Line 1 is the header, so record i lives on line i + 2.
            let record = row.with_context(|| {
                format!("Malformed row at line {} in {}", i + 2, self.path.display())
            })?;
            videos.push(Video {
                video_url: record.video_url,
                full_text: record.full_text.unwrap_or_default(),
                views: record.views.unwrap_or(0),
            });
        }
        Ok(videos)
    }
}

/// Single-line display excerpt of a description.
pub(crate) fn excerpt(text: &str) -> String {
    let flat = text.replace('\n', " ");
    let flat = flat.trim();
    if flat.is_empty() {
        return "(no description)".to_string();
    }
    let truncated: String = flat.chars().take(96).collect();
    if truncated.len() < flat.len() {
        format!("{}...", truncated.trim_end())
    } else {
        truncated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_preserves_row_order() {
        let file = write_csv(
            "full_text,video_url,views\n\
             cat on a mat,https://v.example/1,120\n\
             dog in a fog,https://v.example/2,45\n",
        );
        let videos = CsvCatalog::new(file.path()).load().unwrap();
        assert_eq!(videos.len(), 2);
        assert_eq!(videos[0].full_text, "cat on a mat");
        assert_eq!(videos[0].views, 120);
        assert_eq!(videos[1].video_url, "https://v.example/2");
    }

    #[test]
    fn test_missing_description_and_views_normalized() {
        let file = write_csv(
            "full_text,video_url,views\n\
             ,https://v.example/1,\n",
        );
        let videos = CsvCatalog::new(file.path()).load().unwrap();
        assert_eq!(videos[0].full_text, "");
        assert_eq!(videos[0].views, 0);
    }

    #[test]
    fn test_extra_columns_ignored() {
        let file = write_csv(
            "title,full_text,video_url,views,channel\n\
             Cats,cat on a mat,https://v.example/1,120,pets\n",
        );
        let videos = CsvCatalog::new(file.path()).load().unwrap();
        assert_eq!(videos[0].full_text, "cat on a mat");
    }

    #[test]
    fn test_malformed_views_is_a_load_error() {
        let file = write_csv(
            "full_text,video_url,views\n\
             cat on a mat,https://v.example/1,lots\n",
        );
        let err = CsvCatalog::new(file.path()).load().unwrap_err();
        assert!(err.to_string().contains("line 2"), "got: {:#}", err);
    }

    #[test]
    fn test_missing_file_is_a_load_error() {
        let err = CsvCatalog::new("does/not/exist.csv").load().unwrap_err();
        assert!(err.to_string().contains("Failed to open"));
    }

    #[test]
    fn test_excerpt_flattens_and_truncates() {
        assert_eq!(excerpt("  two\nlines  "), "two lines");
        assert_eq!(excerpt(""), "(no description)");
        let long = "x".repeat(200);
        assert!(excerpt(&long).ends_with("..."));
    }
}
