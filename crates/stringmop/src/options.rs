//! Configuration options for normalization and matching.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StringMopError};
use crate::process::ScorerKind;

/// Minimum score a candidate needs to count as a match when no cutoff is given.
pub const DEFAULT_SCORE_CUTOFF: f64 = 90.0;

/// Options for [`normalize_with`](crate::normalize_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeOptions {
    /// Fold to uppercase instead of lowercase.
    pub to_uppercase: bool,

    /// Replace every run of whitespace with a single space.
    /// Leading and trailing whitespace is stripped either way.
    pub collapse_whitespace: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            to_uppercase: false,
            collapse_whitespace: true,
        }
    }
}

impl NormalizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_uppercase(mut self, enable: bool) -> Self {
        self.to_uppercase = enable;
        self
    }

    #[must_use]
    pub fn with_collapse_whitespace(mut self, enable: bool) -> Self {
        self.collapse_whitespace = enable;
        self
    }
}

/// Options controlling [`fuzz_replace_with`](crate::fuzz_replace_with).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchOptions {
    /// Minimum similarity (0.0 to 100.0) for a candidate to be accepted.
    pub score_cutoff: f64,

    /// Similarity algorithm used to compare normalized strings.
    pub scorer: ScorerKind,

    /// Normalization applied to both sides before scoring.
    pub normalize: NormalizeOptions,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            score_cutoff: DEFAULT_SCORE_CUTOFF,
            scorer: ScorerKind::default(),
            normalize: NormalizeOptions::default(),
        }
    }
}

impl MatchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_score_cutoff(mut self, score_cutoff: f64) -> Self {
        self.score_cutoff = score_cutoff;
        self
    }

    #[must_use]
    pub fn with_scorer(mut self, scorer: ScorerKind) -> Self {
        self.scorer = scorer;
        self
    }

    #[must_use]
    pub fn with_normalize(mut self, normalize: NormalizeOptions) -> Self {
        self.normalize = normalize;
        self
    }

    /// Checks that the cutoff lies on the score scale.
    ///
    /// # Errors
    ///
    /// Returns [`StringMopError::InvalidScoreCutoff`] for NaN, infinite, or
    /// out-of-range cutoffs.
    pub fn validate(&self) -> Result<()> {
        if self.score_cutoff.is_finite() && (0.0..=100.0).contains(&self.score_cutoff) {
            Ok(())
        } else {
            Err(StringMopError::InvalidScoreCutoff(self.score_cutoff))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_lowercase_and_collapse() {
        let options = NormalizeOptions::default();
        assert!(!options.to_uppercase);
        assert!(options.collapse_whitespace);
    }

    #[test]
    fn default_cutoff_is_ninety() {
        let options = MatchOptions::default();
        assert_eq!(options.score_cutoff, 90.0);
        assert_eq!(options.scorer, ScorerKind::WRatio);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_cutoffs() {
        for cutoff in [-1.0, 100.5, f64::NAN, f64::INFINITY] {
            let options = MatchOptions::new().with_score_cutoff(cutoff);
            assert!(
                matches!(options.validate(), Err(StringMopError::InvalidScoreCutoff(_))),
                "cutoff {cutoff} should be rejected"
            );
        }
    }

    #[test]
    fn boundary_cutoffs_are_valid() {
        assert!(MatchOptions::new().with_score_cutoff(0.0).validate().is_ok());
        assert!(MatchOptions::new().with_score_cutoff(100.0).validate().is_ok());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let options: MatchOptions = serde_json::from_str(r#"{"score_cutoff": 75.0}"#).unwrap();
        assert_eq!(options.score_cutoff, 75.0);
        assert_eq!(options.normalize, NormalizeOptions::default());

        let options: MatchOptions =
            serde_json::from_str(r#"{"scorer": "jaro_winkler", "normalize": {"to_uppercase": true}}"#)
                .unwrap();
        assert_eq!(options.scorer, ScorerKind::JaroWinkler);
        assert!(options.normalize.to_uppercase);
        assert!(options.normalize.collapse_whitespace);
    }
}
