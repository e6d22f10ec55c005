//! Batch fuzzy replacement of source strings by their closest candidate.

use tracing::{debug, debug_span, trace};

use crate::normalize::normalize_with;
use crate::options::MatchOptions;
use crate::process::{Extraction, Identity, extract_one};
use crate::types::{FuzzExtraction, FuzzExtractions};

/// Matches every source against `candidates` with default normalization and
/// the default scorer.
///
/// A source whose best candidate scores below `score_cutoff` (or that meets
/// an empty candidate list) gets no replacement and a score of 0.
///
/// ```
/// use stringmop::fuzz_replace;
///
/// let result = fuzz_replace(
///     &["apple", "bannana", "cherry"],
///     &["apple", "banana", "cherry"],
///     90.0,
/// );
/// let replaced: Vec<_> = result.replacements().collect();
/// assert_eq!(replaced, [Some("apple"), Some("banana"), Some("cherry")]);
/// ```
pub fn fuzz_replace<S, C>(sources: &[S], candidates: &[C], score_cutoff: f64) -> FuzzExtractions
where
    S: AsRef<str>,
    C: AsRef<str>,
{
    let options = MatchOptions::default().with_score_cutoff(score_cutoff);
    fuzz_replace_with(sources, candidates, &options)
}

/// Matches every source against `candidates` using explicit options.
///
/// Both sides are normalized with `options.normalize` for scoring only; the
/// records keep the original source and candidate text.
pub fn fuzz_replace_with<S, C>(
    sources: &[S],
    candidates: &[C],
    options: &MatchOptions,
) -> FuzzExtractions
where
    S: AsRef<str>,
    C: AsRef<str>,
{
    let span = debug_span!(
        "fuzz_replace",
        sources = sources.len(),
        candidates = candidates.len(),
        scorer = options.scorer.name(),
        score_cutoff = options.score_cutoff,
    );
    let _guard = span.enter();

    // Normalization is pure, so each candidate only needs it once per batch.
    let normalized: Vec<String> = candidates
        .iter()
        .map(|candidate| normalize_with(candidate.as_ref(), &options.normalize))
        .collect();

    let extractions: FuzzExtractions = sources
        .iter()
        .enumerate()
        .map(|(position, source)| {
            let source = source.as_ref();
            let query = normalize_with(source, &options.normalize);
            let hit = extract_one(
                &query,
                &normalized,
                &Identity,
                options.scorer,
                options.score_cutoff,
            );
            match &hit {
                Some(found) => trace!(position, index = found.index, score = found.score, "matched"),
                None => trace!(position, "no candidate reached the cutoff"),
            }
            build_extraction(source, hit, candidates)
        })
        .collect();

    debug!(
        matched = extractions.matched_count(),
        unmatched = extractions.len() - extractions.matched_count(),
        "fuzzy replacement finished"
    );
    extractions
}

/// Builds the record for one source, mapping the hit back to the original
/// candidate text.
fn build_extraction<C: AsRef<str>>(
    source: &str,
    hit: Option<Extraction<'_>>,
    candidates: &[C],
) -> FuzzExtraction {
    match hit {
        Some(hit) => FuzzExtraction {
            source: source.to_string(),
            replacement: Some(candidates[hit.index].as_ref().to_string()),
            score: hit.score,
        },
        None => FuzzExtraction::unmatched(source),
    }
}
