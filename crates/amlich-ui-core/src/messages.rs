//! User-facing strings, keyed by
//! failure kind so deployments can
//! re-word or re-localize them
//! without touching code. Defaults
//! are the Vietnamese strings the
//! application ships with.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Messages {
  /// Server answered with an error
  /// status.
  pub response_error: String,
  /// Request never reached the
  /// server.
  pub send_error: String
}

impl Default for Messages {
  fn default() -> Self {
    Self {
      response_error:
        "Có lỗi xảy ra. Vui lòng \
         thử lại."
          .to_string(),
      send_error:
        "Không thể kết nối đến máy \
         chủ."
          .to_string()
    }
  }
}
