//! Length-bounded truncation with ellipsis.

/// Options for [`truncate`].
#[derive(Debug, Clone)]
pub struct TruncateOptions {
  /// Marker appended where text was cut.
  pub ellipsis: String,
  /// Back up to the last space inside the cut so words stay whole.
  pub keep_words: bool,
}

impl Default for TruncateOptions {
  fn default() -> Self {
    TruncateOptions {
      ellipsis: "\u{2026}".to_string(),
      keep_words: false,
    }
  }
}

/// Truncate to at most `max_length` chars, ellipsis included. A budget
/// smaller than the ellipsis returns a prefix of the ellipsis itself.
pub fn truncate(input: &str, max_length: usize, options: &TruncateOptions) -> String {
  let input_len = input.chars().count();
  if input_len <= max_length {
    return input.to_string();
  }
  let ellipsis_len = options.ellipsis.chars().count();
  if max_length <= ellipsis_len {
    return options.ellipsis.chars().take(max_length).collect();
  }

  let mut cut = max_length - ellipsis_len;
  if options.keep_words {
    let mut last_space = None;
    for (i, c) in input.chars().take(cut).enumerate() {
      if c == ' ' {
        last_space = Some(i);
      }
    }
    // A space at position zero would leave nothing; keep the hard cut.
    if let Some(at) = last_space
      && at > 0
    {
      cut = at;
    }
  }

  let mut out: String = input.chars().take(cut).collect();
  out.push_str(&options.ellipsis);
  out
}

/// Truncate the middle, keeping the head and tail around the ellipsis.
/// The head gets the extra char when the kept budget is odd.
pub fn truncate_middle(input: &str, max_length: usize, ellipsis: &str) -> String {
  let input_len = input.chars().count();
  if input_len <= max_length {
    return input.to_string();
  }
  let ellipsis_len = ellipsis.chars().count();
  if max_length <= ellipsis_len {
    return ellipsis.chars().take(max_length).collect();
  }

  let keep = max_length - ellipsis_len;
  let head = keep.div_ceil(2);
  let tail = keep / 2;

  let mut out: String = input.chars().take(head).collect();
  out.push_str(ellipsis);
  out.extend(input.chars().skip(input_len - tail));
  out
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn test_truncate_basic() {
    let opts = TruncateOptions::default();
    assert_eq!(truncate("hello world", 20, &opts), "hello world");
    assert_eq!(truncate("hello world", 8, &opts), "hello w\u{2026}");
    assert_eq!(truncate("hello", 5, &opts), "hello");
  }

  #[test]
  fn test_truncate_tiny_budget() {
    let opts = TruncateOptions {
      ellipsis: "...".to_string(),
      ..Default::default()
    };
    assert_eq!(truncate("hello world", 2, &opts), "..");
    assert_eq!(truncate("hello world", 0, &opts), "");
  }

  #[test]
  fn test_truncate_keep_words() {
    let opts = TruncateOptions {
      keep_words: true,
      ..Default::default()
    };
    assert_eq!(truncate("the quick brown fox", 12, &opts), "the quick\u{2026}");
    // No space inside the cut: fall back to the hard cut.
    assert_eq!(truncate("abcdefghij", 6, &opts), "abcde\u{2026}");
  }

  #[test]
  fn test_truncate_counts_chars_not_bytes() {
    let opts = TruncateOptions::default();
    assert_eq!(truncate("åéîøü-åéîøü", 7, &opts), "åéîøü-\u{2026}");
  }

  #[test]
  fn test_truncate_middle() {
    assert_eq!(truncate_middle("hello world", 20, "\u{2026}"), "hello world");
    assert_eq!(truncate_middle("abcdefghij", 5, "\u{2026}"), "ab\u{2026}ij");
    assert_eq!(truncate_middle("abcdefghij", 6, "\u{2026}"), "abc\u{2026}ij");
    assert_eq!(truncate_middle("abcdefghij", 1, ".."), ".");
  }
}
