//! Result records for fuzzy replacement.

use serde::{Deserialize, Serialize};

/// Outcome of matching one source string against the candidate list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuzzExtraction {
    /// The source string exactly as supplied.
    pub source: String,
    /// Best candidate in its original form, or `None` when nothing reached the cutoff.
    pub replacement: Option<String>,
    /// Similarity (0.0 to 100.0) of the accepted candidate; 0.0 without a match.
    pub score: f64,
}

impl FuzzExtraction {
    /// Record for a source with no qualifying candidate.
    pub fn unmatched(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            replacement: None,
            score: 0.0,
        }
    }

    pub fn is_match(&self) -> bool {
        self.replacement.is_some()
    }
}

/// One [`FuzzExtraction`] per source string, in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FuzzExtractions {
    pub extractions: Vec<FuzzExtraction>,
}

impl FuzzExtractions {
    pub fn new(extractions: Vec<FuzzExtraction>) -> Self {
        Self { extractions }
    }

    pub fn len(&self) -> usize {
        self.extractions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extractions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FuzzExtraction> {
        self.extractions.iter()
    }

    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.extractions.iter().map(|e| e.source.as_str())
    }

    pub fn replacements(&self) -> impl Iterator<Item = Option<&str>> {
        self.extractions.iter().map(|e| e.replacement.as_deref())
    }

    pub fn scores(&self) -> impl Iterator<Item = f64> + '_ {
        self.extractions.iter().map(|e| e.score)
    }

    pub fn matched_count(&self) -> usize {
        self.extractions.iter().filter(|e| e.is_match()).count()
    }

    /// The replacement for each source, falling back to the source itself.
    pub fn replaced(&self) -> impl Iterator<Item = &str> {
        self.extractions
            .iter()
            .map(|e| e.replacement.as_deref().unwrap_or(&e.source))
    }
}

impl FromIterator<FuzzExtraction> for FuzzExtractions {
    fn from_iter<I: IntoIterator<Item = FuzzExtraction>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for FuzzExtractions {
    type Item = FuzzExtraction;
    type IntoIter = std::vec::IntoIter<FuzzExtraction>;

    fn into_iter(self) -> Self::IntoIter {
        self.extractions.into_iter()
    }
}

impl<'a> IntoIterator for &'a FuzzExtractions {
    type Item = &'a FuzzExtraction;
    type IntoIter = std::slice::Iter<'a, FuzzExtraction>;

    fn into_iter(self) -> Self::IntoIter {
        self.extractions.iter()
    }
}
