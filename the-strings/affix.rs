//! Prefix/suffix helpers and marker-delimited extraction.

use std::borrow::Cow;

/// True if the string is empty or whitespace-only.
pub fn is_blank(input: &str) -> bool {
  input.trim().is_empty()
}

/// Prepend `prefix` unless it is already there.
pub fn ensure_prefix<'a>(input: &'a str, prefix: &str) -> Cow<'a, str> {
  if input.starts_with(prefix) {
    Cow::Borrowed(input)
  } else {
    Cow::Owned(format!("{prefix}{input}"))
  }
}

/// Append `suffix` unless it is already there.
pub fn ensure_suffix<'a>(input: &'a str, suffix: &str) -> Cow<'a, str> {
  if input.ends_with(suffix) {
    Cow::Borrowed(input)
  } else {
    Cow::Owned(format!("{input}{suffix}"))
  }
}

pub fn starts_with_any(input: &str, prefixes: &[&str]) -> bool {
  prefixes.iter().any(|p| input.starts_with(p))
}

pub fn ends_with_any(input: &str, suffixes: &[&str]) -> bool {
  suffixes.iter().any(|s| input.ends_with(s))
}

pub fn contains_any(input: &str, needles: &[&str]) -> bool {
  needles.iter().any(|n| input.contains(n))
}

/// Substring between the first `start` at or after byte offset `from`
/// and the next `end` after it. None when either marker is missing.
pub fn between<'a>(input: &'a str, start: &str, end: &str, from: usize) -> Option<&'a str> {
  let tail = input.get(from..)?;
  let open = tail.find(start)? + from + start.len();
  let close = input[open..].find(end)? + open;
  Some(&input[open..close])
}

/// All non-overlapping substrings between `start`/`end` marker pairs,
/// scanning left to right.
pub fn between_all<'a>(input: &'a str, start: &str, end: &str) -> Vec<&'a str> {
  let mut out = Vec::new();
  let mut idx = 0;
  while idx < input.len() {
    let Some(open) = input[idx..].find(start).map(|i| i + idx + start.len()) else {
      break;
    };
    let Some(close) = input[open..].find(end).map(|i| i + open) else {
      break;
    };
    out.push(&input[open..close]);
    // Guarantee progress even with empty markers.
    idx = (close + end.len()).max(idx + 1);
  }
  out
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn test_is_blank() {
    assert!(is_blank(""));
    assert!(is_blank("   \t\n"));
    assert!(!is_blank(" x "));
  }

  #[test]
  fn test_ensure_prefix_suffix() {
    assert_eq!(ensure_prefix("example.com", "https://"), "https://example.com");
    assert_eq!(ensure_prefix("https://example.com", "https://"), "https://example.com");
    assert!(matches!(ensure_prefix("https://x", "https://"), Cow::Borrowed(_)));

    assert_eq!(ensure_suffix("file", ".txt"), "file.txt");
    assert_eq!(ensure_suffix("file.txt", ".txt"), "file.txt");
  }

  #[test]
  fn test_any_family() {
    assert!(starts_with_any("foobar", &["baz", "foo"]));
    assert!(!starts_with_any("foobar", &["baz"]));
    assert!(starts_with_any("x", &["", "y"]));

    assert!(ends_with_any("foo.rs", &[".rs", ".toml"]));
    assert!(!ends_with_any("foo.py", &[".rs"]));

    assert!(contains_any("hello world", &["lo w"]));
    assert!(!contains_any("hello", &["xyz"]));
    assert!(!contains_any("hello", &[]));
  }

  #[test]
  fn test_between() {
    assert_eq!(between("a [b] c", "[", "]", 0), Some("b"));
    assert_eq!(between("a [b] [c]", "[", "]", 4), Some("c"));
    assert_eq!(between("no markers", "[", "]", 0), None);
    assert_eq!(between("[open only", "[", "]", 0), None);
    assert_eq!(between("<<x>>", "<<", ">>", 0), Some("x"));
  }

  #[test]
  fn test_between_all() {
    assert_eq!(between_all("a {x} b {y} c", "{", "}"), vec!["x", "y"]);
    assert_eq!(between_all("{1}{2}{3}", "{", "}"), vec!["1", "2", "3"]);
    assert_eq!(between_all("none", "{", "}"), Vec::<&str>::new());
    assert_eq!(between_all("{unclosed {a}", "{", "}"), vec!["unclosed {a"]);
  }
}
