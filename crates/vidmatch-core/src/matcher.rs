//! TF-IDF vector space model and cosine-similarity matching.
//!
//! [`VectorSpaceModel::build`] turns an ordered corpus of description
//! texts into a sparse document-term weight matrix;
//! [`VectorSpaceModel::best_match`] projects a free-text query into the
//! same vocabulary and returns the single most similar document.
//!
//! # Algorithm
//!
//! 1. Tokenize each document: lowercase, split on non-alphanumeric
//!    characters, keep tokens of length >= 2.
//! 2. Assign vocabulary indices in first-seen order and count the
//!    document frequency `df(t)` of every term.
//! 3. Weight each (document, term) pair as `tf × idf` with the smoothed
//!    inverse document frequency `idf(t) = ln((1 + N) / (1 + df(t))) + 1`,
//!    then L2-normalize each document row.
//! 4. A query is projected with the same tokenizer and idf weights;
//!    terms outside the vocabulary contribute nothing and the
//!    vocabulary never grows from queries.
//! 5. Cosine similarity reduces to a sparse dot product because both
//!    sides are unit vectors. A zero query vector (empty or entirely
//!    out-of-vocabulary query) scores 0.0 against every document —
//!    defined, never NaN.
//!
//! The model is immutable once built; a changed corpus requires a
//! rebuild. Build and match share one tokenizer and one idf table, so
//! the scheme stays internally consistent.

use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;

/// Error kind surfaced by [`VectorSpaceModel::build`].
///
/// Callers must not silently recover: an empty corpus has no meaningful
/// nearest neighbor, and the presentation layer should show its
/// no-results state instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatcherError {
    /// The corpus has zero documents, or tokenization left the
    /// vocabulary empty (for example, every document is an empty
    /// string).
    #[error("empty corpus: no documents with indexable terms")]
    EmptyCorpus,
}

/// The most similar corpus document for a query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    /// Index of the winning document in the corpus the model was built
    /// from. Ties are broken toward the lowest index.
    pub index: usize,
    /// The winning document's text, verbatim.
    pub text: String,
    /// Cosine similarity in `[-1.0, 1.0]` at full precision. Rounding
    /// is a display concern.
    pub score: f64,
}

/// Immutable TF-IDF representation of a fixed corpus.
///
/// Built once per catalogue load and queried any number of times.
/// Rebuilding is the only way to reflect a corpus change.
#[derive(Debug)]
pub struct VectorSpaceModel {
    /// term → column index, assigned in first-seen order.
    vocabulary: HashMap<String, usize>,
    /// Smoothed idf per column.
    idf: Vec<f64>,
    /// One sparse row per document: (column, weight) sorted by column,
    /// L2-normalized. Empty documents have empty rows.
    rows: Vec<Vec<(usize, f64)>>,
    /// Original document texts, for [`MatchResult::text`].
    corpus: Vec<String>,
}

impl VectorSpaceModel {
    /// Build a model from an ordered corpus of documents.
    ///
    /// Documents may be empty strings; callers normalize missing
    /// entries to `""` beforehand. The build is deterministic given an
    /// identical corpus.
    ///
    /// # Errors
    ///
    /// [`MatcherError::EmptyCorpus`] if the corpus has zero documents
    /// or no document yields a single indexable term.
    pub fn build(corpus: Vec<String>) -> Result<Self, MatcherError> {
        if corpus.is_empty() {
            return Err(MatcherError::EmptyCorpus);
        }

        let tokenized: Vec<Vec<String>> = corpus.iter().map(|d| tokenize(d)).collect();

        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut doc_freq: Vec<usize> = Vec::new();
        for tokens in &tokenized {
            let mut seen_in_doc: Vec<usize> = Vec::new();
            for term in tokens {
                let col = match vocabulary.get(term) {
                    Some(&col) => col,
                    None => {
                        let col = vocabulary.len();
                        vocabulary.insert(term.clone(), col);
                        doc_freq.push(0);
                        col
                    }
                };
                if !seen_in_doc.contains(&col) {
                    seen_in_doc.push(col);
                    doc_freq[col] += 1;
                }
            }
        }

        if vocabulary.is_empty() {
            return Err(MatcherError::EmptyCorpus);
        }

        let n = corpus.len() as f64;
        let idf: Vec<f64> = doc_freq
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let rows: Vec<Vec<(usize, f64)>> = tokenized
            .iter()
            .map(|tokens| {
                let mut counts: HashMap<usize, f64> = HashMap::new();
                for term in tokens {
                    let col = vocabulary[term.as_str()];
                    *counts.entry(col).or_insert(0.0) += 1.0;
                }
                let mut row: Vec<(usize, f64)> =
                    counts.into_iter().map(|(col, tf)| (col, tf * idf[col])).collect();
                row.sort_by_key(|&(col, _)| col);
                l2_normalize(&mut row);
                row
            })
            .collect();

        Ok(Self {
            vocabulary,
            idf,
            rows,
            corpus,
        })
    }

    /// Number of documents in the corpus the model was built from.
    pub fn len(&self) -> usize {
        self.corpus.len()
    }

    /// A built model always holds at least one document.
    pub fn is_empty(&self) -> bool {
        self.corpus.is_empty()
    }

    /// Number of distinct terms observed across the corpus.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Cosine similarity of the query against every corpus document,
    /// in corpus order.
    ///
    /// An empty or entirely out-of-vocabulary query yields `0.0` for
    /// every document.
    pub fn similarities(&self, query: &str) -> Vec<f64> {
        let query_vec = self.project(query);
        self.rows
            .iter()
            .map(|row| sparse_dot(&query_vec, row))
            .collect()
    }

    /// Find the corpus document most similar to the query.
    ///
    /// # Guarantees
    ///
    /// - Deterministic: identical model and query always produce an
    ///   identical result.
    /// - Ties are broken toward the lowest document index (the scan
    ///   only replaces the leader on a strictly greater score).
    /// - A zero query vector scores `0.0` everywhere and therefore
    ///   matches document 0 — never an error, never NaN.
    pub fn best_match(&self, query: &str) -> MatchResult {
        let sims = self.similarities(query);

        let mut best_index = 0;
        let mut best_score = sims[0];
        for (index, &score) in sims.iter().enumerate().skip(1) {
            if score > best_score {
                best_index = index;
                best_score = score;
            }
        }

        MatchResult {
            index: best_index,
            text: self.corpus[best_index].clone(),
            score: best_score,
        }
    }

    /// Project a query into the model's vocabulary as a unit-length
    /// sparse vector. Unknown terms are ignored.
    fn project(&self, query: &str) -> Vec<(usize, f64)> {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for term in tokenize(query) {
            if let Some(&col) = self.vocabulary.get(term.as_str()) {
                *counts.entry(col).or_insert(0.0) += 1.0;
            }
        }
        let mut vec: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(col, tf)| (col, tf * self.idf[col]))
            .collect();
        vec.sort_by_key(|&(col, _)| col);
        l2_normalize(&mut vec);
        vec
    }
}

/// Lowercase, split on non-alphanumeric boundaries, keep tokens of
/// length >= 2 (single characters carry no signal and the original
/// dataset's vectorizer discarded them the same way).
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.len() >= 2)
        .map(|t| t.to_string())
        .collect()
}

/// Scale a sparse vector to unit L2 length. A zero vector is left as
/// is, so downstream dot products stay 0.0 instead of dividing by
/// zero.
fn l2_normalize(vec: &mut [(usize, f64)]) {
    let norm: f64 = vec.iter().map(|&(_, w)| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for (_, w) in vec.iter_mut() {
            *w /= norm;
        }
    }
}

/// Dot product of two sparse vectors sorted by column index.
fn sparse_dot(a: &[(usize, f64)], b: &[(usize, f64)]) -> f64 {
    let mut dot = 0.0;
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                dot += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    dot
}
