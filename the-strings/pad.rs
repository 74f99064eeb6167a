//! Masking, centering and fixed-length shaping.

/// Options for [`mask`].
#[derive(Debug, Clone)]
pub struct MaskOptions {
  /// Chars left visible at the start.
  pub show_start: usize,
  /// Chars left visible at the end.
  pub show_end: usize,
  /// Replacement for everything in between.
  pub mask_char: char,
}

impl Default for MaskOptions {
  fn default() -> Self {
    MaskOptions {
      show_start: 0,
      show_end: 4,
      mask_char: '\u{2022}',
    }
  }
}

/// Mask a string except for the first/last N chars. When the visible
/// head and tail cover the whole string, it is returned unmasked (the
/// regions never overlap).
pub fn mask(input: &str, options: &MaskOptions) -> String {
  let chars: Vec<char> = input.chars().collect();
  let shown_start = options.show_start.min(chars.len());
  let shown_end = chars.len().saturating_sub(options.show_end).max(shown_start);

  let mut out = String::with_capacity(input.len());
  out.extend(&chars[..shown_start]);
  for _ in shown_start..shown_end {
    out.push(options.mask_char);
  }
  out.extend(&chars[shown_end..]);
  out
}

/// Center-pad to `width` chars; the right side gets the extra char when
/// the padding is odd. Input already at or past `width` is untouched.
pub fn center(input: &str, width: usize, pad_char: char) -> String {
  let input_len = input.chars().count();
  if input_len >= width {
    return input.to_string();
  }
  let total = width - input_len;
  let left = total / 2;

  let mut out = String::with_capacity(input.len() + total);
  for _ in 0..left {
    out.push(pad_char);
  }
  out.push_str(input);
  for _ in 0..total - left {
    out.push(pad_char);
  }
  out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TruncateDirection {
  #[default]
  End,
  Start,
  Middle,
}

/// Options for [`to_fixed_length`].
#[derive(Debug, Clone)]
pub struct FixedLengthOptions {
  pub pad_char: char,
  pub truncate_direction: TruncateDirection,
}

impl Default for FixedLengthOptions {
  fn default() -> Self {
    FixedLengthOptions {
      pad_char: ' ',
      truncate_direction: TruncateDirection::End,
    }
  }
}

/// Force a string to exactly `length` chars by end-padding or truncating
/// in the configured direction.
pub fn to_fixed_length(input: &str, length: usize, options: &FixedLengthOptions) -> String {
  let input_len = input.chars().count();
  if input_len == length {
    return input.to_string();
  }
  if input_len < length {
    let mut out = String::with_capacity(input.len() + (length - input_len));
    out.push_str(input);
    for _ in input_len..length {
      out.push(options.pad_char);
    }
    return out;
  }

  match options.truncate_direction {
    TruncateDirection::End => input.chars().take(length).collect(),
    TruncateDirection::Start => input.chars().skip(input_len - length).collect(),
    TruncateDirection::Middle => {
      let head = length / 2;
      let tail = length - head;
      let mut out: String = input.chars().take(head).collect();
      out.extend(input.chars().skip(input_len - tail));
      out
    },
  }
}
