use anyhow::Context;
use serde::Deserialize;
use tracing::{
  error,
  info
};

pub const DEFAULT_STORAGE_KEY: &str =
  "ls-tasks-v1";

fn default_storage_key() -> String {
  DEFAULT_STORAGE_KEY.to_string()
}

fn default_confirm_clear_message()
-> String {
  "Delete all completed tasks?"
    .to_string()
}

fn default_entry_placeholder() -> String {
  "What needs doing?".to_string()
}

fn config_true() -> bool {
  true
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct AppConfig {
  #[serde(default = "default_storage_key")]
  pub storage_key:               String,
  #[serde(
    default = "default_confirm_clear_message"
  )]
  pub confirm_clear_message:     String,
  #[serde(default = "config_true")]
  pub autofocus_on_fine_pointer: bool,
  #[serde(
    default = "default_entry_placeholder"
  )]
  pub entry_placeholder:         String
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      storage_key:               default_storage_key(),
      confirm_clear_message:     default_confirm_clear_message(),
      autofocus_on_fine_pointer: true,
      entry_placeholder:         default_entry_placeholder()
    }
  }
}

impl AppConfig {
  pub fn from_toml_str(
    raw: &str
  ) -> anyhow::Result<Self> {
    let mut config =
      toml::from_str::<AppConfig>(raw)
        .context(
          "failed parsing app config"
        )?;
    config.sanitize();
    Ok(config)
  }

  /// Parse failures fall back to the
  /// defaults; the page must still start.
  pub fn load_or_default(
    raw: &str
  ) -> Self {
    match Self::from_toml_str(raw) {
      | Ok(config) => {
        info!(
          storage_key = %config.storage_key,
          autofocus = config.autofocus_on_fine_pointer,
          "loaded app config"
        );
        config
      }
      | Err(error) => {
        error!(
          error = %format!("{error:#}"),
          "failed loading app config; \
           using defaults"
        );
        AppConfig::default()
      }
    }
  }

  fn sanitize(&mut self) {
    if self.storage_key.trim().is_empty() {
      self.storage_key =
        default_storage_key();
    }
    if self
      .confirm_clear_message
      .trim()
      .is_empty()
    {
      self.confirm_clear_message =
        default_confirm_clear_message();
    }
  }
}

#[cfg(test)]
mod config_tests {
  use super::*;

  #[test]
  fn empty_file_uses_defaults() {
    assert_eq!(
      AppConfig::from_toml_str("")
        .expect("parse"),
      AppConfig::default()
    );
  }

  #[test]
  fn partial_file_keeps_other_defaults() {
    let config = AppConfig::from_toml_str(
      "autofocus_on_fine_pointer = false\n"
    )
    .expect("parse");
    assert!(!config.autofocus_on_fine_pointer);
    assert_eq!(
      config.storage_key,
      DEFAULT_STORAGE_KEY
    );
  }

  #[test]
  fn blank_storage_key_is_replaced() {
    let config = AppConfig::from_toml_str(
      "storage_key = \"  \"\n"
    )
    .expect("parse");
    assert_eq!(
      config.storage_key,
      DEFAULT_STORAGE_KEY
    );
  }

  #[test]
  fn invalid_toml_falls_back() {
    assert!(
      AppConfig::from_toml_str("storage_key = [")
        .is_err()
    );
    assert_eq!(
      AppConfig::load_or_default("storage_key = ["),
      AppConfig::default()
    );
  }

  #[test]
  fn bundled_config_parses() {
    let config = AppConfig::from_toml_str(
      include_str!(
        "../../tasklist-gui/ui/assets/app.toml"
      )
    )
    .expect("bundled config");
    assert_eq!(
      config.storage_key,
      DEFAULT_STORAGE_KEY
    );
  }
}
