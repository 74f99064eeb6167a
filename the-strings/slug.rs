//! Slugs, safe filenames and diacritic stripping.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::{
  UnicodeNormalization,
  char::is_combining_mark,
};

/// Remove diacritics by NFD-decomposing and dropping combining marks:
/// "crème brûlée" -> "creme brulee".
pub fn strip_diacritics(input: &str) -> String {
  input.nfd().filter(|&c| !is_combining_mark(c)).collect()
}

/// Options for [`slugify`].
#[derive(Debug, Clone)]
pub struct SlugifyOptions {
  /// Lowercase the final slug.
  pub lower: bool,
  /// Separator replacing runs of non-alphanumeric characters.
  pub separator: char,
  /// Characters exempt from replacement, passed through as-is.
  pub preserve: Vec<char>,
  /// Strip leading/trailing separators.
  pub trim: bool,
}

impl Default for SlugifyOptions {
  fn default() -> Self {
    SlugifyOptions {
      lower: true,
      separator: '-',
      preserve: Vec::new(),
      trim: true,
    }
  }
}

/// Convert text to a URL-friendly slug: diacritics stripped, every run of
/// non-alphanumerics collapsed into one separator.
pub fn slugify(input: &str, options: &SlugifyOptions) -> String {
  let stripped = strip_diacritics(input);
  let mut out = String::with_capacity(stripped.len());
  let mut pending_sep = false;

  for ch in stripped.chars() {
    if ch.is_alphanumeric() || options.preserve.contains(&ch) {
      if pending_sep && (!out.is_empty() || !options.trim) {
        out.push(options.separator);
      }
      pending_sep = false;
      out.push(ch);
    } else {
      pending_sep = true;
    }
  }
  if pending_sep && !options.trim {
    out.push(options.separator);
  }

  if options.lower { out.to_lowercase() } else { out }
}

/// Options for [`sanitize_filename`].
#[derive(Debug, Clone)]
pub struct SanitizeFilenameOptions {
  /// Replacement for characters that are unsafe in filenames.
  pub replacement: char,
  /// Maximum length in chars.
  pub max_length: usize,
}

impl Default for SanitizeFilenameOptions {
  fn default() -> Self {
    SanitizeFilenameOptions {
      replacement: '-',
      max_length: 255,
    }
  }
}

static FILENAME_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Sanitize a string for safe cross-platform use as a filename.
pub fn sanitize_filename(input: &str, options: &SanitizeFilenameOptions) -> String {
  let name: String = strip_diacritics(input)
    .chars()
    .map(|c| {
      if matches!(c, '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0') {
        options.replacement
      } else {
        c
      }
    })
    .collect();
  let name = FILENAME_WS.replace_all(&name, " ");
  // Trailing dots go first; a dot that ends up trailing only after the
  // trim below is kept, matching the documented order of operations.
  let name = name.trim_end_matches('.').trim();

  if name.is_empty() {
    return "untitled".to_string();
  }
  name.chars().take(options.max_length).collect()
}

static PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{P}+").unwrap());

/// Remove Unicode punctuation characters.
pub fn remove_punctuation(input: &str) -> String {
  PUNCTUATION.replace_all(input, "").into_owned()
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn test_strip_diacritics() {
    assert_eq!(strip_diacritics("crème brûlée"), "creme brulee");
    assert_eq!(strip_diacritics("naïve"), "naive");
    assert_eq!(strip_diacritics("plain"), "plain");
    assert_eq!(strip_diacritics(""), "");
  }

  #[test]
  fn test_slugify_defaults() {
    let opts = SlugifyOptions::default();
    assert_eq!(slugify("Hello, World!", &opts), "hello-world");
    assert_eq!(slugify("Crème Brûlée", &opts), "creme-brulee");
    assert_eq!(slugify("  --spaced--  ", &opts), "spaced");
    assert_eq!(slugify("", &opts), "");
    assert_eq!(slugify("!!!", &opts), "");
  }

  #[test]
  fn test_slugify_options() {
    let opts = SlugifyOptions {
      separator: '_',
      ..Default::default()
    };
    assert_eq!(slugify("Hello World", &opts), "hello_world");

    let opts = SlugifyOptions {
      lower: false,
      ..Default::default()
    };
    assert_eq!(slugify("Hello World", &opts), "Hello-World");

    let opts = SlugifyOptions {
      preserve: vec!['.'],
      ..Default::default()
    };
    assert_eq!(slugify("v1.2.3 release", &opts), "v1.2.3-release");

    let opts = SlugifyOptions {
      trim: false,
      ..Default::default()
    };
    assert_eq!(slugify("!hi!", &opts), "-hi-");
  }

  #[test]
  fn test_sanitize_filename() {
    let opts = SanitizeFilenameOptions::default();
    assert_eq!(sanitize_filename("report: final?.txt", &opts), "report- final-.txt");
    assert_eq!(sanitize_filename("a/b\\c", &opts), "a-b-c");
    assert_eq!(sanitize_filename("ending...", &opts), "ending");
    assert_eq!(sanitize_filename("  lots   of \t space  ", &opts), "lots of space");
    assert_eq!(sanitize_filename("", &opts), "untitled");
    assert_eq!(sanitize_filename("...", &opts), "untitled");
  }

  #[test]
  fn test_sanitize_filename_max_length() {
    let opts = SanitizeFilenameOptions {
      max_length: 5,
      ..Default::default()
    };
    assert_eq!(sanitize_filename("abcdefghij", &opts), "abcde");
  }

  #[test]
  fn test_remove_punctuation() {
    assert_eq!(remove_punctuation("hello, world!"), "hello world");
    assert_eq!(remove_punctuation("¿qué?"), "qué");
    assert_eq!(remove_punctuation("no punct"), "no punct");
  }
}
