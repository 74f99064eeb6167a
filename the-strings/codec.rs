//! Base64 helpers over UTF-8 text.

use base64::{
  Engine as _,
  engine::general_purpose::{
    STANDARD,
    URL_SAFE_NO_PAD,
  },
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
  #[error("invalid base64: {0}")]
  Decode(#[from] base64::DecodeError),

  #[error("decoded bytes are not valid UTF-8: {0}")]
  Utf8(#[from] std::string::FromUtf8Error),
}

/// Encode UTF-8 text on the standard alphabet, with padding.
pub fn base64_encode(input: &str) -> String {
  STANDARD.encode(input)
}

/// Decode standard-alphabet base64 into UTF-8 text.
pub fn base64_decode(input: &str) -> Result<String, CodecError> {
  let bytes = STANDARD.decode(input)?;
  Ok(String::from_utf8(bytes)?)
}

/// Encode on the URL-safe alphabet without padding, as used in JWTs and
/// URL fragments.
pub fn base64_url_encode(input: &str) -> String {
  URL_SAFE_NO_PAD.encode(input)
}

/// Decode URL-safe base64. Padding, if present, is tolerated.
pub fn base64_url_decode(input: &str) -> Result<String, CodecError> {
  let bytes = URL_SAFE_NO_PAD.decode(input.trim_end_matches('='))?;
  Ok(String::from_utf8(bytes)?)
}
