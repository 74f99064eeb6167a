//! Case conversion built on top of the word segmenter.
//!
//! camelCase and PascalCase lowercase the whole input before segmenting,
//! so acronym casing is discarded ("getHTTPResponse" -> "getHttpResponse"
//! is NOT what happens; it becomes "gethttpresponse" words first). The
//! separated targets (snake/kebab/CONSTANT) segment the original mixture
//! instead, so camel boundaries in the source still split words.

use crate::{
  Tendril,
  segment::words,
  slug::strip_diacritics,
  wrap::normalize_whitespace,
};

/// Append `word` with its first char uppercased and the rest untouched.
fn push_capitalized(buf: &mut Tendril, word: &str) {
  let mut chars = word.chars();
  if let Some(head) = chars.next() {
    buf.extend(head.to_uppercase());
    buf.push_str(chars.as_str());
  }
}

pub fn to_camel_case(input: &str) -> Tendril {
  let lowered = input.to_lowercase();
  let mut buf = Tendril::new();
  for (i, word) in words(&lowered).iter().enumerate() {
    if i == 0 {
      buf.push_str(word);
    } else {
      push_capitalized(&mut buf, word);
    }
  }
  buf
}

pub fn to_pascal_case(input: &str) -> Tendril {
  let lowered = input.to_lowercase();
  let mut buf = Tendril::new();
  for word in &words(&lowered) {
    push_capitalized(&mut buf, word);
  }
  buf
}

fn to_separated_case(input: &str, sep: char, upper: bool) -> Tendril {
  let mut buf = Tendril::new();
  for (i, word) in words(input).iter().enumerate() {
    if i > 0 {
      buf.push(sep);
    }
    let stripped = strip_diacritics(word);
    if upper {
      buf.push_str(&stripped.to_uppercase());
    } else {
      buf.push_str(&stripped.to_lowercase());
    }
  }
  buf
}

pub fn to_snake_case(input: &str) -> Tendril {
  to_separated_case(input, '_', false)
}

pub fn to_kebab_case(input: &str) -> Tendril {
  to_separated_case(input, '-', false)
}

pub fn to_constant_case(input: &str) -> Tendril {
  to_separated_case(input, '_', true)
}

/// Uppercase the first character, leave the rest alone.
pub fn capitalize(input: &str) -> Tendril {
  let mut buf = Tendril::new();
  let mut chars = input.chars();
  if let Some(head) = chars.next() {
    buf.extend(head.to_uppercase());
    buf.push_str(chars.as_str());
  }
  buf
}

/// Lowercase the first character, leave the rest alone.
pub fn decapitalize(input: &str) -> Tendril {
  let mut buf = Tendril::new();
  let mut chars = input.chars();
  if let Some(head) = chars.next() {
    buf.extend(head.to_lowercase());
    buf.push_str(chars.as_str());
  }
  buf
}

/// Collapse whitespace, uppercase the first character, lowercase the
/// rest.
pub fn to_sentence_case(input: &str) -> Tendril {
  let normalized = normalize_whitespace(input, false);
  let mut buf = Tendril::new();
  let mut chars = normalized.chars();
  if let Some(head) = chars.next() {
    buf.extend(head.to_uppercase());
    buf.push_str(&chars.as_str().to_lowercase());
  }
  buf
}

/// First letter of up to `max_letters` words, uppercased.
pub fn initials(input: &str, max_letters: usize) -> Tendril {
  let mut buf = Tendril::new();
  for word in words(input).iter().take(max_letters) {
    if let Some(head) = word.chars().next() {
      buf.extend(head.to_uppercase());
    }
  }
  buf
}

/// Options for [`to_title_case`].
#[derive(Debug, Clone, Default)]
pub struct TitleCaseOptions {
  /// Extra words (beyond the built-in English set) kept lowercase when
  /// they are neither the first nor the last token.
  pub small_words: Vec<String>,
  /// Words always rendered fully uppercase, e.g. acronyms.
  pub force_upper: Vec<String>,
}

const DEFAULT_SMALL_WORDS: &[&str] = &[
  "a", "an", "and", "as", "at", "but", "by", "for", "in", "of", "on", "or", "the", "to", "nor",
  "per", "vs", "via",
];

const TITLE_SEPARATORS: &[char] = &[
  '-', '\u{2013}', '\u{2014}', '/', ':', ';', '!', '?', '"', '\'', '(', ')', '[', ']',
];

/// Title-case with small-word handling. Separators (whitespace and common
/// punctuation) pass through untouched; small words stay lowercase unless
/// they open or close the title.
pub fn to_title_case(input: &str, options: &TitleCaseOptions) -> Tendril {
  let tokens = title_tokens(input);
  let mut buf = Tendril::new();

  for (idx, token) in tokens.iter().enumerate() {
    let is_separator = token
      .chars()
      .all(|c| c.is_whitespace() || TITLE_SEPARATORS.contains(&c));
    if is_separator {
      buf.push_str(token);
      continue;
    }

    let upper = token.to_uppercase();
    if options.force_upper.iter().any(|w| w.to_uppercase() == upper) {
      buf.push_str(&upper);
      continue;
    }

    let lower = token.to_lowercase();
    let is_first = idx == 0;
    let is_last = idx == tokens.len() - 1;
    let is_small = DEFAULT_SMALL_WORDS.contains(&lower.as_str())
      || options.small_words.iter().any(|w| w.to_lowercase() == lower);
    if !is_first && !is_last && is_small {
      buf.push_str(&lower);
      continue;
    }

    push_capitalized(&mut buf, &lower);
  }
  buf
}

/// Split into words, whitespace runs and single separator chars, keeping
/// everything so the title can be reassembled verbatim.
fn title_tokens(input: &str) -> Vec<&str> {
  let mut tokens = Vec::new();
  let mut start = 0;
  let mut in_whitespace = false;

  for (i, c) in input.char_indices() {
    if TITLE_SEPARATORS.contains(&c) {
      if start < i {
        tokens.push(&input[start..i]);
      }
      tokens.push(&input[i..i + c.len_utf8()]);
      start = i + c.len_utf8();
      in_whitespace = false;
    } else if c.is_whitespace() != in_whitespace {
      if start < i {
        tokens.push(&input[start..i]);
      }
      start = i;
      in_whitespace = c.is_whitespace();
    }
  }
  if start < input.len() {
    tokens.push(&input[start..]);
  }
  tokens
}
