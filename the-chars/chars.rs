//! Character predicates backing word segmentation and case conversion.

/// A character that belongs to a word: any Unicode letter or digit.
///
/// Note that `_` is deliberately NOT a word character here, unlike the
/// usual editor definition. Underscores act as word separators so that
/// `snake_case` input segments into its parts.
#[inline]
pub fn char_is_word(ch: char) -> bool {
  ch.is_alphanumeric()
}

/// Straight or curly apostrophe. These are removed during segmentation
/// without introducing a word boundary ("don't" stays one word).
#[inline]
pub fn char_is_apostrophe(ch: char) -> bool {
  matches!(ch, '\'' | '\u{2019}')
}

/// True when a camelCase word boundary sits between `prev` and `next`:
/// a lowercase letter or digit immediately followed by an uppercase letter.
#[inline]
pub fn char_is_camel_boundary(prev: char, next: char) -> bool {
  (prev.is_lowercase() || prev.is_numeric()) && next.is_uppercase()
}
