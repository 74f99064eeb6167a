//! Greedy word wrapping, dedenting and whitespace normalization.

use once_cell::sync::Lazy;
use regex::Regex;
use the_chars::line_ending::{
  LineEnding,
  split_lines,
};

/// Options for [`word_wrap`].
#[derive(Debug, Clone)]
pub struct WrapOptions {
  /// Maximum rendered line length in chars, indent included. A width of
  /// zero disables wrapping entirely: the input is returned with the
  /// indent prepended and nothing else touched.
  pub width: usize,
  /// Chop words longer than `width` into width-sized chunks. When false,
  /// an oversized word is carried onto its own line and left intact.
  pub break_long_words: bool,
  /// Prefix prepended to every output line, blank ones included.
  pub indent: String,
  /// Terminator joining the output lines.
  pub line_ending: LineEnding,
}

impl Default for WrapOptions {
  fn default() -> Self {
    WrapOptions {
      width: 80,
      break_long_words: false,
      indent: String::new(),
      line_ending: LineEnding::LF,
    }
  }
}

/// Reflow `input` so every output line renders within `options.width`
/// chars.
///
/// Each source line (CRLF, CR and LF all terminate lines) is wrapped
/// independently and contributes at least one output line, so blank lines
/// survive. Tokens are words and whitespace runs; a line is packed
/// greedily, never looking ahead. A whitespace run that overflows the
/// line forces a break and is dropped rather than carried over or
/// re-emitted.
pub fn word_wrap(input: &str, options: &WrapOptions) -> String {
  let WrapOptions {
    width,
    break_long_words,
    ref indent,
    line_ending,
  } = *options;

  if width == 0 {
    let mut out = String::with_capacity(indent.len() + input.len());
    out.push_str(indent);
    out.push_str(input);
    return out;
  }

  let mut out: Vec<String> = Vec::new();
  for line in split_lines(input) {
    let mut current = String::new();
    let mut current_len = 0usize; // chars, not bytes

    for token in split_runs(line) {
      let token_len = token.chars().count();
      let is_whitespace = token.starts_with(|c: char| c.is_whitespace());
      let must_break = break_long_words && !is_whitespace && token_len > width;

      // Greedy accumulation. An empty line accepts any token that is not
      // about to be force-broken, even one wider than the target width.
      if current_len + token_len <= width || (current_len == 0 && !must_break) {
        current.push_str(token);
        current_len += token_len;
        continue;
      }

      if is_whitespace {
        // Oversized whitespace run: forced line break. The run itself is
        // dropped, not carried onto the next line.
        flush(&mut out, indent, &current);
        current.clear();
        current_len = 0;
        continue;
      }

      if must_break {
        let space_left = width.saturating_sub(current_len);
        if space_left > 0 {
          // Fill what remains of the line from the head of the word,
          // then chop the rest.
          let at = byte_index_at(token, space_left);
          current.push_str(&token[..at]);
          flush(&mut out, indent, &current);
          current.clear();
          chunk_word(&mut out, indent, &token[at..], width, &mut current);
        } else {
          if current_len > 0 {
            flush(&mut out, indent, &current);
            current.clear();
          }
          chunk_word(&mut out, indent, token, width, &mut current);
        }
        current_len = current.chars().count();
        continue;
      }

      // A word that fits a line of its own, or one we were told not to
      // break: start a fresh line with it.
      flush(&mut out, indent, &current);
      current.clear();
      current.push_str(token);
      current_len = token_len;
    }

    // Every source line flushes at least once, even when empty.
    flush(&mut out, indent, &current);
  }
  out.join(line_ending.as_str())
}

/// Append `indent + current` (right-trimmed) as a completed line.
fn flush(out: &mut Vec<String>, indent: &str, current: &str) {
  let content = current.trim_end();
  let mut line = String::with_capacity(indent.len() + content.len());
  line.push_str(indent);
  line.push_str(content);
  out.push(line);
}

/// Chop `word` into width-sized chunks. Full chunks are flushed
/// immediately; a trailing partial chunk becomes the new current line.
fn chunk_word(
  out: &mut Vec<String>,
  indent: &str,
  word: &str,
  width: usize,
  current: &mut String,
) {
  let mut rest = word;
  while !rest.is_empty() {
    let at = byte_index_at(rest, width);
    let (chunk, tail) = rest.split_at(at);
    if chunk.chars().count() == width {
      flush(out, indent, chunk);
    } else {
      current.push_str(chunk);
    }
    rest = tail;
  }
}

/// Byte offset of the `n`-th char, or the string's length when it has
/// fewer than `n` chars.
fn byte_index_at(s: &str, n: usize) -> usize {
  s.char_indices().nth(n).map_or(s.len(), |(i, _)| i)
}

/// Iterator over alternating word and whitespace runs of a line.
struct Runs<'a> {
  rest: &'a str,
}

impl<'a> Iterator for Runs<'a> {
  type Item = &'a str;

  fn next(&mut self) -> Option<&'a str> {
    let first = self.rest.chars().next()?;
    let in_whitespace = first.is_whitespace();
    let end = self
      .rest
      .char_indices()
      .find(|&(_, c)| c.is_whitespace() != in_whitespace)
      .map_or(self.rest.len(), |(i, _)| i);
    let (run, rest) = self.rest.split_at(end);
    self.rest = rest;
    Some(run)
  }
}

fn split_runs(line: &str) -> Runs<'_> {
  Runs { rest: line }
}

/// Remove the common leading-space indentation from a multiline string.
/// When `trim` is set, leading and trailing newlines are stripped first.
pub fn dedent(input: &str, trim: bool) -> String {
  let text = if trim {
    input.trim_start_matches('\n').trim_end_matches('\n')
  } else {
    input
  };

  let mut min_indent: Option<usize> = None;
  for line in text.split('\n') {
    if line.trim().is_empty() {
      continue;
    }
    let prefix = line.chars().take_while(|c| c.is_whitespace()).count();
    min_indent = Some(min_indent.map_or(prefix, |m| m.min(prefix)));
  }
  let Some(min_indent) = min_indent.filter(|&m| m > 0) else {
    return text.to_string();
  };

  let lines: Vec<&str> = text
    .split('\n')
    .map(|line| {
      // Only lines that actually start with `min_indent` spaces are cut;
      // tab-indented lines are left alone.
      if line.len() >= min_indent && line.as_bytes()[..min_indent].iter().all(|&b| b == b' ') {
        &line[min_indent..]
      } else {
        line
      }
    })
    .collect();
  lines.join("\n")
}

static LINE_BREAKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n?|\x{2028}|\x{2029}").unwrap());
static HORIZONTAL_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t\x0B\x0C]+").unwrap());
static BLANK_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());
static ANY_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Collapse whitespace runs to single spaces and trim the ends. With
/// `preserve_newlines`, line structure survives: line breaks (including
/// U+2028/U+2029) normalize to `\n`, horizontal runs collapse to one
/// space, and runs of blank lines cap at a single blank line.
pub fn normalize_whitespace(input: &str, preserve_newlines: bool) -> String {
  if preserve_newlines {
    let normalized = LINE_BREAKS.replace_all(input, "\n");
    let collapsed = HORIZONTAL_WS.replace_all(&normalized, " ");
    BLANK_RUNS.replace_all(&collapsed, "\n\n").trim().to_string()
  } else {
    ANY_WS.replace_all(input, " ").trim().to_string()
  }
}

#[cfg(test)]
mod test {
  use super::*;

  fn wrap(input: &str, width: usize) -> String {
    word_wrap(input, &WrapOptions {
      width,
      ..Default::default()
    })
  }

  fn wrap_breaking(input: &str, width: usize) -> String {
    word_wrap(input, &WrapOptions {
      width,
      break_long_words: true,
      ..Default::default()
    })
  }

  #[test]
  fn test_basic_wrap() {
    assert_eq!(wrap("The quick brown fox", 10), "The quick\nbrown fox");
    assert_eq!(wrap("a b c", 80), "a b c");
    assert_eq!(wrap("", 10), "");
  }

  #[test]
  fn test_width_zero_passthrough() {
    assert_eq!(wrap("anything at all\nuntouched", 0), "anything at all\nuntouched");
    let opts = WrapOptions {
      width: 0,
      indent: "> ".to_string(),
      ..Default::default()
    };
    assert_eq!(word_wrap("raw", &opts), "> raw");
  }

  #[test]
  fn test_long_word_carried_when_not_breaking() {
    // Oversized word is not force-broken; it gets its own line.
    assert_eq!(wrap("hi supercalifragilistic", 5), "hi\nsupercalifragilistic");
    assert_eq!(wrap("supercalifragilistic", 5), "supercalifragilistic");
  }

  #[test]
  fn test_long_word_chopped_when_breaking() {
    let out = wrap_breaking("supercalifragilistic", 5);
    let lines: Vec<&str> = out.split('\n').collect();
    assert_eq!(lines.len(), 5);
    assert!(lines.iter().all(|l| l.chars().count() <= 5));
    assert_eq!(lines.concat(), "supercalifragilistic");
  }

  #[test]
  fn test_break_fills_remaining_space_first() {
    // "ab " leaves two columns; the word's head tops the line up before
    // chunking starts.
    let out = wrap_breaking("ab cdefghij", 5);
    assert_eq!(out, "ab cd\nefghi\nj");
  }

  #[test]
  fn test_oversized_whitespace_run_is_dropped() {
    // The seven-space run can't fit; it forces a break and vanishes.
    let out = wrap("ab       cd", 5);
    assert_eq!(out, "ab\ncd");
  }

  #[test]
  fn test_blank_lines_survive() {
    assert_eq!(wrap("a\n\nb", 10), "a\n\nb");
    assert_eq!(wrap("a\r\n\r\nb", 10), "a\n\nb");
  }

  #[test]
  fn test_indent_applies_to_every_line() {
    let opts = WrapOptions {
      width: 10,
      indent: "  ".to_string(),
      ..Default::default()
    };
    assert_eq!(word_wrap("The quick brown fox", &opts), "  The quick\n  brown fox");
  }

  #[test]
  fn test_crlf_output() {
    let opts = WrapOptions {
      width: 10,
      line_ending: LineEnding::Crlf,
      ..Default::default()
    };
    assert_eq!(word_wrap("The quick brown fox", &opts), "The quick\r\nbrown fox");
  }

  #[test]
  fn test_exact_fit_boundary() {
    assert_eq!(wrap("abcde fghij", 5), "abcde\nfghij");
    assert_eq!(wrap("ab cd", 5), "ab cd");
  }

  #[test]
  fn test_dedent() {
    assert_eq!(dedent("  a\n  b", true), "a\nb");
    assert_eq!(dedent("    a\n  b", true), "  a\nb");
    assert_eq!(dedent("\n  a\n  b\n", true), "a\nb");
    assert_eq!(dedent("a\n  b", true), "a\n  b");
    // Blank lines don't count toward the minimum.
    assert_eq!(dedent("  a\n\n  b", true), "a\n\nb");
  }

  #[test]
  fn test_normalize_whitespace() {
    assert_eq!(normalize_whitespace("  a\t b  ", false), "a b");
    assert_eq!(normalize_whitespace("a\r\nb", true), "a\nb");
    assert_eq!(normalize_whitespace("a\n\n\n\nb", true), "a\n\nb");
    assert_eq!(normalize_whitespace("a \u{2028}b", true), "a \nb");
    assert_eq!(normalize_whitespace("a\nb", false), "a b");
  }

  quickcheck::quickcheck! {
      fn lines_respect_width_when_breaking(input: String, raw_width: u8) -> bool {
          let width = usize::from(raw_width % 40) + 1;
          let out = word_wrap(&input, &WrapOptions {
              width,
              break_long_words: true,
              ..Default::default()
          });
          out.split('\n').all(|line| line.chars().count() <= width)
      }

      fn output_has_at_least_one_line_per_source_line(input: String, raw_width: u8) -> bool {
          let width = usize::from(raw_width % 40) + 1;
          let source_lines = split_lines(&input).count();
          let out = wrap(&input, width);
          out.split('\n').count() >= source_lines
      }
  }
}
