//! Levenshtein edit distance and normalized similarity.

use std::time::Instant;

/// Minimum number of single-character insertions, deletions and
/// substitutions needed to turn `a` into `b`.
///
/// Characters are compared as Unicode scalar values, not grapheme
/// clusters: two strings that differ only in how a combining mark is
/// composed report a nonzero distance even when they render identically.
///
/// Memory is O(min(m, n)): the distance matrix is collapsed to a single
/// rolling row sized to the shorter input, so inputs in the 10^5 range
/// stay cheap on space. Time is O(m * n) as for any exact Levenshtein.
pub fn levenshtein(a: &str, b: &str) -> usize {
  if a == b {
    return 0;
  }

  let mut a: Vec<char> = a.chars().collect();
  let mut b: Vec<char> = b.chars().collect();
  if a.is_empty() {
    return b.len();
  }
  if b.is_empty() {
    return a.len();
  }
  // The distance is symmetric, so keep the shorter string on the row
  // axis and the rolling row stays at min(m, n) + 1 entries.
  if a.len() > b.len() {
    std::mem::swap(&mut a, &mut b);
  }

  let start = tracing::enabled!(tracing::Level::DEBUG).then(Instant::now);

  // row[i] holds the distance between a[..i] and b[..j] for the current
  // outer iteration j; prev_diag carries the j-1 diagonal cell.
  let mut row: Vec<usize> = (0..=a.len()).collect();
  for (j, &bc) in b.iter().enumerate() {
    let mut prev_diag = row[0];
    row[0] = j + 1;
    for (i, &ac) in a.iter().enumerate() {
      let up = row[i + 1];
      let cost = if ac == bc { 0 } else { 1 };
      row[i + 1] = (up + 1) // deletion
        .min(row[i] + 1) // insertion
        .min(prev_diag + cost); // substitution
      prev_diag = up;
    }
  }
  let distance = row[a.len()];

  if let Some(start) = start {
    tracing::debug!(
      "levenshtein over {}x{} chars in {:?}",
      a.len(),
      b.len(),
      start.elapsed()
    );
  }
  distance
}

/// Similarity score in [0, 1] based on normalized Levenshtein distance.
/// Two empty strings are defined as fully similar.
pub fn similarity(a: &str, b: &str) -> f64 {
  let max_len = a.chars().count().max(b.chars().count());
  if max_len == 0 {
    return 1.0;
  }
  1.0 - levenshtein(a, b) as f64 / max_len as f64
}
