//! Line ending recognition and terminator-aware line splitting.

#[cfg(target_os = "windows")]
pub const NATIVE_LINE_ENDING: LineEnding = LineEnding::Crlf;

#[cfg(not(target_os = "windows"))]
pub const NATIVE_LINE_ENDING: LineEnding = LineEnding::LF;

/// The line terminators recognized when reflowing text: CRLF, lone CR and
/// lone LF are each a single boundary.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum LineEnding {
  /// CarriageReturn followed by LineFeed.
  Crlf,

  /// U+000A -- LineFeed
  LF,

  /// U+000D -- CarriageReturn
  CR,
}

impl LineEnding {
  #[inline]
  pub const fn len_chars(&self) -> usize {
    match self {
      Self::Crlf => 2,
      _ => 1,
    }
  }

  #[inline]
  pub const fn as_str(&self) -> &'static str {
    match self {
      Self::Crlf => "\u{000D}\u{000A}",
      Self::LF => "\u{000A}",
      Self::CR => "\u{000D}",
    }
  }

  #[inline]
  pub const fn from_char(ch: char) -> Option<LineEnding> {
    match ch {
      '\u{000A}' => Some(LineEnding::LF),
      '\u{000D}' => Some(LineEnding::CR),
      _ => None,
    }
  }

  // Normally we'd want to implement the FromStr trait, but in this case
  // that would force us into a different return type than from_char,
  // which would be weird.
  #[allow(clippy::should_implement_trait)]
  #[inline]
  pub fn from_str(g: &str) -> Option<LineEnding> {
    match g {
      "\u{000D}\u{000A}" => Some(LineEnding::Crlf),
      "\u{000A}" => Some(LineEnding::LF),
      "\u{000D}" => Some(LineEnding::CR),
      _ => None,
    }
  }
}

#[inline]
pub fn str_is_line_ending(s: &str) -> bool {
  LineEnding::from_str(s).is_some()
}

/// Iterator over the lines of a string, with CRLF, CR and LF each acting
/// as one terminator. See [`split_lines`].
pub struct SplitLines<'a> {
  rest: Option<&'a str>,
}

impl<'a> Iterator for SplitLines<'a> {
  type Item = &'a str;

  fn next(&mut self) -> Option<&'a str> {
    let rest = self.rest?;
    // Scanning bytes is fine: both terminators are ASCII, and an ASCII
    // byte never appears inside a multi-byte UTF-8 sequence.
    let bytes = rest.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
      match b {
        b'\n' => {
          self.rest = Some(&rest[i + 1..]);
          return Some(&rest[..i]);
        },
        b'\r' => {
          let skip = if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
          self.rest = Some(&rest[i + skip..]);
          return Some(&rest[..i]);
        },
        _ => {},
      }
    }
    self.rest = None;
    Some(rest)
  }
}

/// Split `text` into lines, yielding one piece per terminator plus the
/// trailing remainder. Unlike [`str::lines`], a trailing terminator
/// produces a final empty line, and an empty input yields one empty
/// line rather than none. Reflow treats every such piece as a source
/// line, so blank lines survive wrapping.
pub fn split_lines(text: &str) -> SplitLines<'_> {
  SplitLines { rest: Some(text) }
}
