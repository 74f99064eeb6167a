//! Escaping and stripping: regex literals, HTML entities, ANSI codes.

use once_cell::sync::Lazy;
use regex::Regex;

/// Escape special characters so the string matches itself literally
/// inside a regular expression.
pub fn escape_regex(input: &str) -> String {
  regex::escape(input)
}

/// Escape the five HTML-significant characters.
pub fn escape_html(input: &str) -> String {
  let mut out = String::with_capacity(input.len());
  for ch in input.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#39;"),
      _ => out.push(ch),
    }
  }
  out
}

/// Undo [`escape_html`]. `&amp;` is handled last so double-escaped text
/// unescapes one level at a time.
pub fn unescape_html(input: &str) -> String {
  input
    .replace("&lt;", "<")
    .replace("&gt;", ">")
    .replace("&quot;", "\"")
    .replace("&#39;", "'")
    .replace("&amp;", "&")
}

static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Remove tag-shaped spans. This is not an HTML parser; comments, CDATA
/// and `>` inside attribute values are out of scope.
pub fn strip_html(input: &str) -> String {
  HTML_TAG.replace_all(input, "").into_owned()
}

static ANSI: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"[\x1b\x{9b}][\[\]()#;?]*(?:[0-9]{1,4}(?:;[0-9]{0,4})*)?[0-9A-ORZcf-nqry=><]")
    .unwrap()
});

/// Strip ANSI escape sequences (colors, cursor movement, CSI in general).
pub fn strip_ansi(input: &str) -> String {
  ANSI.replace_all(input, "").into_owned()
}
