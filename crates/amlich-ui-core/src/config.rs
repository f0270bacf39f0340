//! Integration contract with the
//! server-rendered templates.
//!
//! The glue binds to fixed ids,
//! selectors and attribute names.
//! Defaults match the shipped
//! templates; a page may override
//! any of them (and the message
//! catalog) through an embedded
//! JSON config block.

use anyhow::Context;
use serde::Deserialize;

use crate::messages::Messages;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
  pub theme_toggle_id: String,
  /// Moon icon; visible in light
  /// mode.
  pub theme_dark_icon_id: String,
  /// Sun icon; visible in dark
  /// mode.
  pub theme_light_icon_id: String,
  pub theme_storage_key: String,
  pub dark_class: String,
  pub hidden_class: String,
  pub loading_indicator_id: String,
  pub note_form_container_id: String,
  pub new_note_selector: String,
  pub search_input_selector: String,
  pub nav_link_selector: String,
  pub nav_active_class: String,
  pub tooltip_attribute: String,
  /// Marker stamped on anchors that
  /// already have pointer listeners,
  /// so re-installs after a swap
  /// stay strictly additive.
  pub tooltip_wired_attribute: String,
  pub tooltip_id: String,
  pub tooltip_offset_px: f64,
  pub banner_ttl_ms: u32,
  pub request_header_name: String,
  pub request_header_value: String,
  pub swap_animation_class: String
}

impl Default for BootstrapConfig {
  fn default() -> Self {
    Self {
      theme_toggle_id:
        "theme-toggle".to_string(),
      theme_dark_icon_id:
        "theme-toggle-dark-icon"
          .to_string(),
      theme_light_icon_id:
        "theme-toggle-light-icon"
          .to_string(),
      theme_storage_key:
        "theme".to_string(),
      dark_class:
        "dark".to_string(),
      hidden_class:
        "hidden".to_string(),
      loading_indicator_id:
        "loading-indicator"
          .to_string(),
      note_form_container_id:
        "note-form-container"
          .to_string(),
      new_note_selector:
        "[hx-get=\"/notes/new\"]"
          .to_string(),
      search_input_selector:
        "input[type=\"search\"]"
          .to_string(),
      nav_link_selector:
        ".nav-link".to_string(),
      nav_active_class:
        "active".to_string(),
      tooltip_attribute:
        "data-tooltip".to_string(),
      tooltip_wired_attribute:
        "data-tooltip-wired"
          .to_string(),
      tooltip_id:
        "custom-tooltip".to_string(),
      tooltip_offset_px: 5.0,
      banner_ttl_ms: 5_000,
      request_header_name:
        "X-Requested-With"
          .to_string(),
      request_header_value:
        "XMLHttpRequest".to_string(),
      swap_animation_class:
        "form-slide-in".to_string()
    }
  }
}

impl BootstrapConfig {
  /// Selector for every element
  /// carrying a tooltip annotation.
  pub fn tooltip_selector(
    &self
  ) -> String {
    format!(
      "[{}]",
      self.tooltip_attribute
    )
  }
}

/// Page-level settings: contract
/// overrides plus message catalog.
#[derive(
  Debug, Clone, Default, Deserialize,
)]
#[serde(default)]
pub struct BootSettings {
  pub config:   BootstrapConfig,
  pub messages: Messages
}

impl BootSettings {
  /// Parses a page-embedded JSON
  /// block. Absent fields keep
  /// their defaults.
  pub fn from_json(
    raw: &str
  ) -> anyhow::Result<Self> {
    serde_json::from_str(raw)
      .context(
        "malformed ui bootstrap \
         config block"
      )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_survive_partial_override()
  {
    let settings =
      BootSettings::from_json(
        r#"{
          "config": {
            "theme_storage_key": "lich-theme"
          },
          "messages": {
            "send_error": "offline"
          }
        }"#
      )
      .expect("valid block");

    assert_eq!(
      settings
        .config
        .theme_storage_key,
      "lich-theme"
    );
    assert_eq!(
      settings.config.tooltip_id,
      "custom-tooltip"
    );
    assert_eq!(
      settings.messages.send_error,
      "offline"
    );
    assert_eq!(
      settings
        .messages
        .response_error,
      Messages::default()
        .response_error
    );
  }

  #[test]
  fn malformed_block_is_an_error() {
    assert!(
      BootSettings::from_json("{")
        .is_err()
    );
  }
}
