//! Composite ratios built on `rapidfuzz`'s Indel ratio.
//!
//! Every function returns a score in `[0, 100]`. [`wratio`] combines the
//! others and is the default scorer for replacement.

use std::collections::BTreeSet;

use rapidfuzz::fuzz::{self, RatioBatchComparator};

use crate::process::PERFECT_SCORE;

/// Scale applied to token-based ratios inside [`wratio`].
const TOKEN_SCALE: f64 = 0.95;

/// Scale applied to partial ratios when the lengths differ moderately.
const PARTIAL_SCALE: f64 = 0.9;

/// Scale applied to partial ratios when one string is at least eight times
/// longer than the other.
const LONG_PARTIAL_SCALE: f64 = 0.6;

/// Length ratio below which [`wratio`] compares whole strings and tokens.
const FULL_LENGTH_RATIO: f64 = 1.5;

/// Length ratio from which partial matches use [`LONG_PARTIAL_SCALE`].
const LONG_LENGTH_RATIO: f64 = 8.0;

/// Normalized Indel similarity. Two empty strings score 100.
#[must_use]
pub fn ratio(a: &str, b: &str) -> f64 {
    fuzz::ratio(a.chars(), b.chars()) * PERFECT_SCORE
}

/// Best [`ratio`] of the shorter string against any same-length window of
/// the longer one, including windows that hang over either end.
///
/// # Example
/// ```
/// use stringmop::partial_ratio;
///
/// assert_eq!(partial_ratio("serrano", "jamon serrano"), 100.0);
/// ```
#[must_use]
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (short, long) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };

    if short.is_empty() {
        return if long.is_empty() { PERFECT_SCORE } else { 0.0 };
    }

    let best = best_window(short, long);
    if best < PERFECT_SCORE && short.len() == long.len() {
        return best.max(best_window(long, short));
    }
    best
}

fn best_window(needle: &[char], haystack: &[char]) -> f64 {
    let n = needle.len();
    let m = haystack.len();
    let scorer = RatioBatchComparator::new(needle.iter().copied());

    let prefixes = (1..n).map(move |end| &haystack[..end]);
    let windows = (0..=m - n).map(move |start| &haystack[start..start + n]);
    let suffixes = (m - n + 1..m).map(move |start| &haystack[start..]);

    let mut best = 0.0_f64;
    for window in prefixes.chain(windows).chain(suffixes) {
        let score = scorer.similarity(window.iter().copied()) * PERFECT_SCORE;
        if score > best {
            best = score;
            if best >= PERFECT_SCORE {
                break;
            }
        }
    }
    best
}

fn sorted_tokens(s: &str) -> Vec<&str> {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens
}

/// Tokens of two strings split into shared and one-sided sets, each sorted.
struct TokenSets<'a> {
    shared: Vec<&'a str>,
    only_a: Vec<&'a str>,
    only_b: Vec<&'a str>,
}

impl<'a> TokenSets<'a> {
    fn new(a: &'a str, b: &'a str) -> Self {
        let a: BTreeSet<&str> = a.split_whitespace().collect();
        let b: BTreeSet<&str> = b.split_whitespace().collect();
        Self {
            shared: a.intersection(&b).copied().collect(),
            only_a: a.difference(&b).copied().collect(),
            only_b: b.difference(&a).copied().collect(),
        }
    }
}

/// [`ratio`] after sorting the whitespace-separated tokens of both strings.
///
/// # Example
/// ```
/// use stringmop::token_sort_ratio;
///
/// assert_eq!(token_sort_ratio("serrano jamon", "jamon serrano"), 100.0);
/// ```
#[must_use]
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    ratio(&sorted_tokens(a).join(" "), &sorted_tokens(b).join(" "))
}

/// Compares the shared tokens against each side's shared-plus-remaining
/// tokens. A string whose tokens are a subset of the other's scores 100.
#[must_use]
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    let sets = TokenSets::new(a, b);
    if sets.shared.is_empty() && (sets.only_a.is_empty() || sets.only_b.is_empty()) {
        return 0.0;
    }
    if !sets.shared.is_empty() && (sets.only_a.is_empty() || sets.only_b.is_empty()) {
        return PERFECT_SCORE;
    }

    let shared = sets.shared.join(" ");
    let with_shared = |rest: &[&str]| {
        if shared.is_empty() {
            rest.join(" ")
        } else {
            format!("{shared} {}", rest.join(" "))
        }
    };
    let full_a = with_shared(&sets.only_a);
    let full_b = with_shared(&sets.only_b);

    let score = ratio(&full_a, &full_b);
    if shared.is_empty() {
        return score;
    }
    score
        .max(ratio(&shared, &full_a))
        .max(ratio(&shared, &full_b))
}

/// Best of the partial ratio over sorted tokens and over the one-sided token
/// sets. Any shared token scores 100.
#[must_use]
pub fn partial_token_ratio(a: &str, b: &str) -> f64 {
    let tokens_a = sorted_tokens(a);
    let tokens_b = sorted_tokens(b);
    let sets = TokenSets::new(a, b);
    if !sets.shared.is_empty() {
        return PERFECT_SCORE;
    }

    let score = partial_ratio(&tokens_a.join(" "), &tokens_b.join(" "));
    // Without duplicate tokens the one-sided sets equal the token lists.
    if tokens_a.len() == sets.only_a.len() && tokens_b.len() == sets.only_b.len() {
        return score;
    }
    score.max(partial_ratio(&sets.only_a.join(" "), &sets.only_b.join(" ")))
}

/// Weighted blend of [`ratio`], token ratios and partial ratios, picking the
/// comparisons that suit the length difference of the two strings.
///
/// Strings of similar length (ratio below 1.5) take the best of the plain
/// ratio and the token ratios scaled by 0.95. Otherwise partial ratios join
/// in, scaled by 0.9, or by 0.6 once one string is eight times longer.
/// Returns 0 when either string is empty.
///
/// # Example
/// ```
/// use stringmop::wratio;
///
/// assert_eq!(wratio("serrano jamon", "jamon serrano"), 95.0);
/// assert_eq!(wratio("serrano", "jamon serrano"), 90.0);
/// assert_eq!(wratio("", "apple"), 0.0);
/// ```
#[must_use]
pub fn wratio(a: &str, b: &str) -> f64 {
    let len_a = a.chars().count();
    let len_b = b.chars().count();
    if len_a == 0 || len_b == 0 {
        return 0.0;
    }

    let len_ratio = len_a.max(len_b) as f64 / len_a.min(len_b) as f64;
    let base = ratio(a, b);

    if len_ratio < FULL_LENGTH_RATIO {
        let tokens = token_sort_ratio(a, b).max(token_set_ratio(a, b));
        return base.max(tokens * TOKEN_SCALE);
    }

    let partial_scale = if len_ratio < LONG_LENGTH_RATIO {
        PARTIAL_SCALE
    } else {
        LONG_PARTIAL_SCALE
    };
    let best = base.max(partial_ratio(a, b) * partial_scale);
    best.max(partial_token_ratio(a, b) * TOKEN_SCALE * partial_scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 0.01, "expected {expected}, got {actual}");
    }

    #[test]
    fn ratio_of_empty_strings_is_perfect() {
        assert_eq!(ratio("", ""), PERFECT_SCORE);
        assert_eq!(ratio("", "apple"), 0.0);
    }

    #[test]
    fn partial_ratio_finds_substring() {
        assert_eq!(partial_ratio("this is a test", "this is a test!"), PERFECT_SCORE);
        assert_eq!(partial_ratio("jamon serrano", "serrano"), PERFECT_SCORE);
    }

    #[test]
    fn partial_ratio_scores_overhanging_windows() {
        // "bcd" only overlaps "cdxxxx" through a prefix window.
        approx(partial_ratio("bcd", "cdxxxx"), 80.0);
        approx(partial_ratio("abcd", "xxabcxx"), 75.0);
    }

    #[test]
    fn partial_ratio_of_empty_strings() {
        assert_eq!(partial_ratio("", ""), PERFECT_SCORE);
        assert_eq!(partial_ratio("", "apple"), 0.0);
    }

    #[test]
    fn token_sort_ignores_word_order() {
        assert_eq!(
            token_sort_ratio("fuzzy wuzzy was a bear", "wuzzy fuzzy was a bear"),
            PERFECT_SCORE
        );
    }

    #[test]
    fn token_set_treats_subsets_as_perfect() {
        assert_eq!(
            token_set_ratio("fuzzy was a bear", "fuzzy fuzzy was a bear"),
            PERFECT_SCORE
        );
        approx(token_set_ratio("jamon serrano", "iberico serrano"), 70.0);
        assert_eq!(token_set_ratio("", "apple"), 0.0);
    }

    #[test]
    fn partial_token_ratio_short_circuits_on_shared_token() {
        assert_eq!(partial_token_ratio("serrano", "jamon serrano"), PERFECT_SCORE);
        approx(partial_token_ratio("serano", "jamon serrano"), 83.33);
    }

    #[test]
    fn wratio_scales_token_matches_for_similar_lengths() {
        assert_eq!(wratio("serrano jamon", "jamon serrano"), PERFECT_SCORE * TOKEN_SCALE);
        approx(wratio("judias verdes", "judias verde"), 96.0);
    }

    #[test]
    fn wratio_scales_partial_matches_for_different_lengths() {
        assert_eq!(wratio("serrano", "jamon serrano"), PERFECT_SCORE * PARTIAL_SCALE);
        assert_eq!(wratio("hello", "hello world"), 90.0);
        approx(wratio("this is a test", "this is a new test!!!"), 85.5);
    }

    #[test]
    fn wratio_scales_partial_matches_harder_for_long_strings() {
        assert_eq!(
            wratio("abc", "abc xxxxxxxxxxxxxxxxxxxxxx"),
            PERFECT_SCORE * LONG_PARTIAL_SCALE
        );
    }

    #[test]
    fn wratio_prefers_plain_ratio_when_higher() {
        approx(wratio("bannana", "banana"), 92.31);
        assert_eq!(wratio("apple", "apple"), PERFECT_SCORE);
    }

    #[test]
    fn wratio_of_empty_side_is_zero() {
        assert_eq!(wratio("", ""), 0.0);
        assert_eq!(wratio("", "apple"), 0.0);
        assert_eq!(wratio("apple", ""), 0.0);
    }
}
