//! Grapheme-level helpers: counting, reversing and measuring
//! user-perceived characters.
//!
//! With the default `unicode-graphemes` feature these operate on extended
//! grapheme clusters via [`unicode_segmentation`]. Without it they fall
//! back to per-codepoint iteration, which keeps surrogate-free text
//! correct but splits combined clusters (emoji with modifiers, combining
//! accents). The backend is fixed at build time; callers never observe
//! which one is in use beyond the cluster boundaries themselves.

#[cfg(feature = "unicode-graphemes")]
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Count user-perceived characters.
#[cfg(feature = "unicode-graphemes")]
#[must_use]
pub fn count_graphemes(text: &str) -> usize {
  text.graphemes(true).count()
}

/// Count user-perceived characters (codepoint fallback).
#[cfg(not(feature = "unicode-graphemes"))]
#[must_use]
pub fn count_graphemes(text: &str) -> usize {
  text.chars().count()
}

/// Reverse user-perceived characters, keeping each cluster intact.
#[cfg(feature = "unicode-graphemes")]
#[must_use]
pub fn reverse_graphemes(text: &str) -> String {
  text.graphemes(true).rev().collect()
}

/// Reverse user-perceived characters (codepoint fallback).
#[cfg(not(feature = "unicode-graphemes"))]
#[must_use]
pub fn reverse_graphemes(text: &str) -> String {
  text.chars().rev().collect()
}

/// Returns the visual width of a single grapheme cluster.
#[must_use]
pub fn grapheme_width(g: &str) -> usize {
  if g.is_ascii() {
    // Fast-path for pure ASCII: each byte renders with width 1.
    g.len()
  } else {
    // Ensure a minimum width of 1 for ill-formed clusters.
    UnicodeWidthStr::width(g).max(1)
  }
}
