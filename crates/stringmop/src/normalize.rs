//! Canonical string form used to compare free text.
//!
//! Normalization runs in a fixed order:
//! 1. Case folding (lowercase by default, uppercase on request)
//! 2. Stripping leading and trailing whitespace
//! 3. Collapsing interior whitespace runs to a single space (optional)
//! 4. Transliterating non-ASCII characters to ASCII
//!
//! Case and whitespace are handled on the original text so transliteration
//! only ever sees folded, tidied input.

use unidecode::unidecode_char;

use crate::options::NormalizeOptions;

/// Normalizes a string with the default options: lowercase, collapsed
/// whitespace, ASCII only.
///
/// ```
/// assert_eq!(stringmop::normalize(" Héllo \tWórld! "), "hello world!");
/// ```
pub fn normalize(input: &str) -> String {
    normalize_with(input, &NormalizeOptions::default())
}

/// Normalizes a string with explicit options.
///
/// ```
/// use stringmop::{NormalizeOptions, normalize_with};
///
/// let upper = NormalizeOptions::new().with_uppercase(true);
/// assert_eq!(normalize_with(" Héllo \tWórld! ", &upper), "HELLO WORLD!");
///
/// let keep = NormalizeOptions::new().with_collapse_whitespace(false);
/// assert_eq!(normalize_with(" Héllo  \tWórld! ", &keep), "hello  \tworld!");
/// ```
pub fn normalize_with(input: &str, options: &NormalizeOptions) -> String {
    let folded = fold_case(input, options.to_uppercase);
    let tidied = tidy_whitespace(&folded, options.collapse_whitespace);
    if tidied.is_ascii() {
        return tidied;
    }

    // Table entries can carry their own casing and padding ("Zhong ").
    let mut ascii = transliterate(&tidied);
    if options.to_uppercase {
        ascii.make_ascii_uppercase();
    } else {
        ascii.make_ascii_lowercase();
    }
    tidy_whitespace(&ascii, options.collapse_whitespace)
}

/// Maps every non-ASCII character to its closest ASCII approximation.
///
/// ASCII characters pass through unchanged. Characters the table has no
/// entry for are dropped.
pub fn transliterate(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        if ch.is_ascii() {
            out.push(ch);
        } else {
            out.push_str(unidecode_char(ch));
        }
    }
    out
}

fn fold_case(input: &str, to_uppercase: bool) -> String {
    if to_uppercase {
        input.to_uppercase()
    } else {
        input.to_lowercase()
    }
}

fn tidy_whitespace(input: &str, collapse: bool) -> String {
    let trimmed = input.trim();
    if collapse {
        trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JAMON: &str = " Jamón \tSerrano  \n";

    fn options(to_uppercase: bool, collapse_whitespace: bool) -> NormalizeOptions {
        NormalizeOptions {
            to_uppercase,
            collapse_whitespace,
        }
    }

    #[test]
    fn empty_input_stays_empty() {
        for upper in [false, true] {
            for collapse in [false, true] {
                assert_eq!(normalize_with("", &options(upper, collapse)), "");
            }
        }
    }

    #[test]
    fn default_lowercases_and_collapses() {
        assert_eq!(normalize(JAMON), "jamon serrano");
    }

    #[test]
    fn uppercase_explicit() {
        assert_eq!(normalize_with(JAMON, &options(true, true)), "JAMON SERRANO");
        assert_eq!(normalize_with(JAMON, &options(false, true)), "jamon serrano");
    }

    #[test]
    fn keep_interior_whitespace() {
        assert_eq!(normalize_with(JAMON, &options(false, false)), "jamon \tserrano");
        assert_eq!(normalize_with(" a  \t b ", &options(false, false)), "a  \t b");
    }

    #[test]
    fn collapses_mixed_whitespace() {
        assert_eq!(normalize(" a  \t b "), "a b");
        assert_eq!(normalize("a\u{00A0}\u{2003}b"), "a b");
    }

    #[test]
    fn transliterates_accents() {
        assert_eq!(normalize("Café"), "cafe");
        assert_eq!(normalize("Ñandú"), "nandu");
        assert_eq!(normalize_with("Café", &options(true, true)), "CAFE");
    }

    #[test]
    fn sharp_s_expands_in_both_directions() {
        assert_eq!(normalize("Straße"), "strasse");
        assert_eq!(normalize_with("Straße", &options(true, true)), "STRASSE");
    }

    #[test]
    fn transliteration_output_is_settled() {
        let out = normalize(" 中文 ");
        assert!(out.is_ascii());
        assert!(!out.chars().any(|c| c.is_ascii_uppercase()));
        assert_eq!(out, out.trim());
        assert!(!out.contains("  "));
    }

    #[test]
    fn transliterate_keeps_ascii_untouched() {
        assert_eq!(transliterate("Tab\tand\nnewline!"), "Tab\tand\nnewline!");
        assert_eq!(transliterate("Crème Brûlée"), "Creme Brulee");
    }
}
