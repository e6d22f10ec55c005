//! Similarity scoring and best-match selection over a list of choices.
//!
//! Scores are reported on a 0.0 to 100.0 scale. Selection keeps the first
//! choice among equal scores, so results are stable with respect to the
//! order of the candidate list.

use std::borrow::Cow;

use rapidfuzz::distance::{indel, jaro_winkler, levenshtein};
use serde::{Deserialize, Serialize};

use crate::normalize::normalize_with;
use crate::options::NormalizeOptions;
use crate::ratio::wratio;

/// Score of two identical strings.
pub const PERFECT_SCORE: f64 = 100.0;

/// Similarity algorithm used to compare two processed strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScorerKind {
    /// Weighted blend of plain, token and partial ratios. See [`wratio`].
    #[default]
    #[serde(rename = "wratio")]
    WRatio,
    /// Normalized Indel similarity (insertions and deletions only).
    Ratio,
    /// Normalized Levenshtein similarity (unit-cost substitutions).
    Levenshtein,
    /// Jaro-Winkler similarity, favouring shared prefixes.
    JaroWinkler,
}

impl ScorerKind {
    /// Similarity of `a` and `b` in `[0, 100]`.
    #[must_use]
    pub fn score(self, a: &str, b: &str) -> f64 {
        match self {
            Self::WRatio => wratio(a, b),
            Self::Ratio => indel::normalized_similarity(a.chars(), b.chars()) * PERFECT_SCORE,
            Self::Levenshtein => {
                levenshtein::normalized_similarity(a.chars(), b.chars()) * PERFECT_SCORE
            }
            Self::JaroWinkler => jaro_winkler::similarity(a.chars(), b.chars()) * PERFECT_SCORE,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::WRatio => "wratio",
            Self::Ratio => "ratio",
            Self::Levenshtein => "levenshtein",
            Self::JaroWinkler => "jaro_winkler",
        }
    }
}

/// Preprocessing applied to the query and to every choice before scoring.
pub trait Processor {
    fn process<'s>(&self, input: &'s str) -> Cow<'s, str>;
}

/// Compares strings exactly as given.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Processor for Identity {
    fn process<'s>(&self, input: &'s str) -> Cow<'s, str> {
        Cow::Borrowed(input)
    }
}

impl Processor for NormalizeOptions {
    fn process<'s>(&self, input: &'s str) -> Cow<'s, str> {
        Cow::Owned(normalize_with(input, self))
    }
}

impl<F> Processor for F
where
    F: Fn(&str) -> String,
{
    fn process<'s>(&self, input: &'s str) -> Cow<'s, str> {
        Cow::Owned(self(input))
    }
}

/// A choice that cleared the score cutoff.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extraction<'a> {
    /// The choice as it appears in the input list, before processing.
    pub choice: &'a str,
    /// Similarity in `[0, 100]` between the processed query and choice.
    pub score: f64,
    /// Position of the choice in the input list.
    pub index: usize,
}

/// Finds the best-scoring choice for `query`.
///
/// Returns `None` when `choices` is empty or no choice scores at least
/// `score_cutoff`. Among equal best scores the lowest index wins.
///
/// ```
/// use stringmop::{Identity, ScorerKind, extract_one};
///
/// let choices = ["apple", "banana", "cherry"];
/// let best = extract_one("bannana", &choices, &Identity, ScorerKind::Ratio, 90.0).unwrap();
/// assert_eq!(best.choice, "banana");
/// assert_eq!(best.index, 1);
/// ```
pub fn extract_one<'a, S, P>(
    query: &str,
    choices: &'a [S],
    processor: &P,
    scorer: ScorerKind,
    score_cutoff: f64,
) -> Option<Extraction<'a>>
where
    S: AsRef<str>,
    P: Processor + ?Sized,
{
    let query = processor.process(query);
    let mut best: Option<Extraction<'a>> = None;

    for (index, choice) in choices.iter().enumerate() {
        let choice = choice.as_ref();
        let score = scorer.score(&query, &processor.process(choice));
        if score >= score_cutoff && best.is_none_or(|current| score > current.score) {
            best = Some(Extraction {
                choice,
                score,
                index,
            });
            if score >= PERFECT_SCORE {
                break;
            }
        }
    }

    best
}

/// Scores every choice against `query` and returns those at or above
/// `score_cutoff`, best first.
///
/// Equal scores keep their input order. `limit` truncates the result.
pub fn extract<'a, S, P>(
    query: &str,
    choices: &'a [S],
    processor: &P,
    scorer: ScorerKind,
    score_cutoff: f64,
    limit: Option<usize>,
) -> Vec<Extraction<'a>>
where
    S: AsRef<str>,
    P: Processor + ?Sized,
{
    let query = processor.process(query);
    let mut hits: Vec<Extraction<'a>> = choices
        .iter()
        .enumerate()
        .filter_map(|(index, choice)| {
            let choice = choice.as_ref();
            let score = scorer.score(&query, &processor.process(choice));
            (score >= score_cutoff).then_some(Extraction {
                choice,
                score,
                index,
            })
        })
        .collect();

    hits.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.index.cmp(&b.index)));
    if let Some(limit) = limit {
        hits.truncate(limit);
    }
    hits
}
