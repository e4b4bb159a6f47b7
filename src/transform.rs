//! The mirror transformation.
//!
//! A word is mirrored by swapping the case of every letter and then reversing
//! the whole sequence of characters. Digits, punctuation, whitespace and other
//! symbols keep their value but move with the reversal.

/// Mirror a word: swap the case of each letter, then reverse the characters.
///
/// The result always has the same number of characters as the input.
///
/// ```
/// assert_eq!(mirror::transform::mirror_word("fOoBar25"), "52RAbOoF");
/// ```
pub fn mirror_word(word: &str) -> String {
    word.chars().rev().map(swap_case).collect()
}

/// Swap the case of a single character.
///
/// Letters whose case mapping is not a single character (`ß` uppercases to
/// `SS`) are returned unchanged.
fn swap_case(c: char) -> char {
    if c.is_lowercase() {
        single(c.to_uppercase()).unwrap_or(c)
    } else if c.is_uppercase() {
        single(c.to_lowercase()).unwrap_or(c)
    } else {
        c
    }
}

fn single(mut mapped: impl Iterator<Item = char>) -> Option<char> {
    match (mapped.next(), mapped.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirror_lowercase() {
        assert_eq!(mirror_word("foo"), "OOF");
        assert_eq!(mirror_word("bar"), "RAB");
    }

    #[test]
    fn test_mirror_uppercase() {
        assert_eq!(mirror_word("BAR"), "rab");
        assert_eq!(mirror_word("ABC"), "cba");
    }

    #[test]
    fn test_mirror_mixed_case() {
        assert_eq!(mirror_word("FoO"), "oOf");
        assert_eq!(mirror_word("AaA"), "aAa");
    }

    #[test]
    fn test_mirror_with_digits() {
        assert_eq!(mirror_word("abc123"), "321CBA");
        assert_eq!(mirror_word("fOoBar25"), "52RAbOoF");
        assert_eq!(mirror_word("a1B2c3"), "3C2b1A");
        assert_eq!(mirror_word("123"), "321");
    }

    #[test]
    fn test_mirror_punctuation_and_spaces() {
        assert_eq!(mirror_word("Hello-World!"), "!DLROw-OLLEh");
        assert_eq!(mirror_word("Hello World"), "DLROw OLLEh");
        assert_eq!(mirror_word("!@#"), "#@!");
    }

    #[test]
    fn test_mirror_empty_and_single_char() {
        assert_eq!(mirror_word(""), "");
        assert_eq!(mirror_word("a"), "A");
        assert_eq!(mirror_word("Z"), "z");
    }

    #[test]
    fn test_mirror_non_ascii_letters() {
        assert_eq!(mirror_word("Ärger"), "REGRä");
        assert_eq!(mirror_word("straße"), "EßARTS");
    }

    #[test]
    fn test_mirror_preserves_char_count() {
        for word in ["", "x", "fOoBar25", "straße", "İstanbul", "ǅemal", "🙂 ok"] {
            assert_eq!(
                mirror_word(word).chars().count(),
                word.chars().count(),
                "length changed for {word:?}"
            );
        }
    }

    #[test]
    fn test_mirror_is_deterministic() {
        assert_eq!(mirror_word("Deterministic"), mirror_word("Deterministic"));
    }
}
