//! Pragmatic format validators. All of these return bool and never
//! raise; a malformed input is simply `false`.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]{2,}$").unwrap());

static UUID: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[1-5][0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$")
    .unwrap()
});

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{4}|[0-9a-fA-F]{8})$").unwrap()
});

/// Loose email shape check: something@something.tld. Deliberately not
/// RFC 5322; quoted local parts and comments are rejected.
pub fn is_email(input: &str) -> bool {
  EMAIL.is_match(input)
}

/// RFC 4122 UUID, versions 1-5, any case.
pub fn is_uuid(input: &str) -> bool {
  UUID.is_match(input)
}

/// Absolute URL that the `url` parser accepts.
pub fn is_url(input: &str) -> bool {
  Url::parse(input).is_ok()
}

/// CSS hex color: #RGB, #RGBA, #RRGGBB or #RRGGBBAA.
pub fn is_hex_color(input: &str) -> bool {
  HEX_COLOR.is_match(input)
}
