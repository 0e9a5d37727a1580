//! Accent folding and case folding for letter comparison.
//!
//! The card catalogue is French: names carry acute/grave/circumflex accents
//! and cedillas. A player guessing `e` must match `é`, `è`, and `ê`, and a
//! guessed `ç` counts as `c`. The folding is NFKD decomposition with the
//! combining marks stripped, then lowercasing.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Strips diacritics and lowercases `text`.
///
/// Applied to secret words at game creation and to every guessed letter
/// before comparison. Characters without a decomposition (digits, spaces,
/// punctuation) pass through unchanged apart from lowercasing.
pub fn normalize(text: &str) -> String {
    text.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Normalizes a single guessed character.
///
/// Returns the first character of the folded form, or `None` for input
/// that folds away entirely (a lone combining mark).
pub fn normalize_letter(c: char) -> Option<char> {
    let mut buf = [0u8; 4];
    normalize(c.encode_utf8(&mut buf)).chars().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_french_accents() {
        assert_eq!(normalize("Pot de Cupidité"), "pot de cupidite");
        assert_eq!(normalize("TÉNÈBRES"), "tenebres");
        assert_eq!(normalize("Force de Miroir"), "force de miroir");
    }

    #[test]
    fn test_normalize_handles_cedilla_and_circumflex() {
        assert_eq!(normalize("Garçon"), "garcon");
        assert_eq!(normalize("Forêt"), "foret");
    }

    #[test]
    fn test_normalize_keeps_separators() {
        assert_eq!(normalize("Yeux-Bleus d'Acier"), "yeux-bleus d'acier");
    }

    #[test]
    fn test_normalize_letter_folds_to_base_letter() {
        assert_eq!(normalize_letter('É'), Some('e'));
        assert_eq!(normalize_letter('ç'), Some('c'));
        assert_eq!(normalize_letter('A'), Some('a'));
        assert_eq!(normalize_letter('z'), Some('z'));
    }

    #[test]
    fn test_normalize_letter_plain_combining_mark_is_none() {
        // U+0301 COMBINING ACUTE ACCENT on its own has no base letter.
        assert_eq!(normalize_letter('\u{0301}'), None);
    }
}
