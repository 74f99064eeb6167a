//! Word segmentation: splitting text into maximal letter/digit runs.
//!
//! This is the shared primitive behind the case converters. Three rules,
//! applied in one pass:
//!
//! 1. Apostrophes (straight and curly) are dropped in place without
//!    opening a word boundary, so "don't" segments as `dont`.
//! 2. A lowercase-or-digit character immediately followed by an uppercase
//!    character is a camelCase boundary ("fooBar" -> `foo`, `Bar`).
//! 3. Every maximal run of non-letter/digit characters is a single
//!    boundary, however long.
//!
//! Character case is preserved in the output; callers lowercase the input
//! first when they want lowercase words (see [`crate::case`]).

use the_chars::chars::{
  char_is_apostrophe,
  char_is_camel_boundary,
  char_is_word,
};

/// Segment `input` into its words, in source order. Input with no letters
/// or digits yields an empty Vec, never a Vec holding an empty string.
pub fn words(input: &str) -> Vec<String> {
  let mut out = Vec::new();
  let mut current = String::new();
  let mut prev: Option<char> = None;

  for ch in input.chars() {
    if char_is_apostrophe(ch) {
      // Removed without becoming a boundary; the surrounding characters
      // are treated as adjacent ("o'Brien" behaves like "oBrien").
      continue;
    }
    if char_is_word(ch) {
      if let Some(prev) = prev
        && char_is_camel_boundary(prev, ch)
        && !current.is_empty()
      {
        out.push(std::mem::take(&mut current));
      }
      current.push(ch);
    } else if !current.is_empty() {
      out.push(std::mem::take(&mut current));
    }
    prev = Some(ch);
  }
  if !current.is_empty() {
    out.push(current);
  }
  out
}
