//! String normalization and best-match fuzzy replacement.
//!
//! [`normalize`] turns free text into a canonical comparable form (case
//! folding, whitespace tidying, ASCII transliteration). [`fuzz_replace`]
//! uses it as the preprocessing step for picking, per source string, the
//! most similar candidate above a score cutoff, scored by [`wratio`] unless
//! another [`ScorerKind`] is chosen.

#![deny(unsafe_code)]

pub mod error;
pub mod fuzz;
pub mod normalize;
pub mod options;
pub mod process;
pub mod ratio;
pub mod types;

pub use error::{Result, StringMopError};
pub use fuzz::{fuzz_replace, fuzz_replace_with};
pub use normalize::{normalize, normalize_with, transliterate};
pub use options::{DEFAULT_SCORE_CUTOFF, MatchOptions, NormalizeOptions};
pub use process::{Extraction, Identity, PERFECT_SCORE, Processor, ScorerKind, extract, extract_one};
pub use ratio::{partial_ratio, token_set_ratio, token_sort_ratio, wratio};
pub use types::{FuzzExtraction, FuzzExtractions};
