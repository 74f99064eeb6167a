//! Human-readable list joining and English ordinals.

use crate::Tendril;

/// How the final element of a list attaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStyle {
  /// "a, b and c"
  Conjunction,
  /// "a, b or c"
  Disjunction,
  /// "a, b, c"
  Unit,
}

/// Join items into an English-style list. No Oxford comma.
pub fn humanize_list<S: AsRef<str>>(items: &[S], style: ListStyle) -> String {
  match items {
    [] => String::new(),
    [only] => only.as_ref().to_string(),
    [head @ .., last] => {
      let head = head.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(", ");
      let last = last.as_ref();
      match style {
        ListStyle::Conjunction => format!("{head} and {last}"),
        ListStyle::Disjunction => format!("{head} or {last}"),
        ListStyle::Unit => format!("{head}, {last}"),
      }
    },
  }
}

/// English ordinal: 1 -> "1st", 22 -> "22nd", 113 -> "113th". Teens
/// always take "th"; negative numbers fall through to "th" as well.
pub fn ordinal(n: i64) -> Tendril {
  let suffix = match n % 100 {
    11..=13 => "th",
    v => match v % 10 {
      1 => "st",
      2 => "nd",
      3 => "rd",
      _ => "th",
    },
  };
  format!("{n}{suffix}").into()
}
