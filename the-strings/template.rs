//! Simple placeholder interpolation: "Hello {name}".

use std::collections::HashMap;

use regex::Regex;

/// Options for [`template`].
#[derive(Debug, Clone)]
pub struct TemplateOptions {
  /// Opening delimiter.
  pub start: String,
  /// Closing delimiter.
  pub end: String,
  /// Replace placeholders with missing keys by the empty string instead
  /// of leaving them in place.
  pub strict: bool,
}

impl Default for TemplateOptions {
  fn default() -> Self {
    TemplateOptions {
      start: "{".to_string(),
      end: "}".to_string(),
      strict: false,
    }
  }
}

/// Substitute `{key}`-style placeholders from `vars`. Keys are trimmed,
/// so `{ name }` and `{name}` are the same placeholder. Unknown keys are
/// left verbatim unless `strict` is set.
pub fn template(input: &str, vars: &HashMap<&str, &str>, options: &TemplateOptions) -> String {
  if input.is_empty() {
    return String::new();
  }
  let pattern = format!(
    "{}(.*?){}",
    regex::escape(&options.start),
    regex::escape(&options.end)
  );
  // Both delimiters are escaped literals, so the pattern always compiles.
  let re = Regex::new(&pattern).unwrap();

  re.replace_all(input, |caps: &regex::Captures| {
    let key = caps[1].trim();
    match vars.get(key) {
      Some(value) => (*value).to_string(),
      None if options.strict => String::new(),
      None => caps[0].to_string(),
    }
  })
  .into_owned()
}
