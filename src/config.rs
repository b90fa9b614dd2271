//! Scene configuration, read from TOML.
//!
//! Every field is optional:
//!
//! ```toml
//! width = 1280.0
//! height = 720.0
//! border_margin = 1.0
//! obstacle_half_extent = 25.0
//! ```
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  #[error("failed to read config: {0}")]
  Io(#[from] std::io::Error),
  #[error("failed to parse config: {0}")]
  Parse(#[from] toml::de::Error),
  #[error("invalid `{field}`: {reason}")]
  Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneConfig {
  /// Width of the visible area. The border's right wall sits at `x = width`.
  #[serde(default = "default_width")]
  pub width: f64,
  /// Height of the visible area. The border's bottom wall sits at `y = height`.
  #[serde(default = "default_height")]
  pub height: f64,
  /// How far the top and left border walls sit outside the origin.
  #[serde(default = "default_border_margin")]
  pub border_margin: f64,
  /// Half the side length of the square obstacles added by [`Scene::add_box`].
  ///
  /// [`Scene::add_box`]: crate::scene::Scene::add_box
  #[serde(default = "default_obstacle_half_extent")]
  pub obstacle_half_extent: f64,
}

fn default_width() -> f64 {
  1280.0
}

fn default_height() -> f64 {
  720.0
}

fn default_border_margin() -> f64 {
  1.0
}

fn default_obstacle_half_extent() -> f64 {
  25.0
}

impl Default for SceneConfig {
  fn default() -> Self {
    SceneConfig {
      width: default_width(),
      height: default_height(),
      border_margin: default_border_margin(),
      obstacle_half_extent: default_obstacle_half_extent(),
    }
  }
}

impl SceneConfig {
  pub fn from_toml_str(text: &str) -> Result<SceneConfig, ConfigError> {
    let config: SceneConfig = toml::from_str(text)?;
    config.validate()?;
    Ok(config)
  }

  pub fn load(path: impl AsRef<Path>) -> Result<SceneConfig, ConfigError> {
    let path = path.as_ref();
    let config = SceneConfig::from_toml_str(&fs::read_to_string(path)?)?;
    log::info!("loaded scene config from {}", path.display());
    Ok(config)
  }

  pub fn validate(&self) -> Result<(), ConfigError> {
    positive("width", self.width)?;
    positive("height", self.height)?;
    positive("obstacle_half_extent", self.obstacle_half_extent)?;
    if !self.border_margin.is_finite() || self.border_margin < 0.0 {
      return Err(ConfigError::Invalid {
        field: "border_margin",
        reason: format!("expected a non-negative number, got {}", self.border_margin),
      });
    }
    Ok(())
  }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
  if value.is_finite() && value > 0.0 {
    Ok(())
  } else {
    Err(ConfigError::Invalid {
      field,
      reason: format!("expected a positive number, got {}", value),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use claims::{assert_matches, assert_ok};

  #[test]
  fn empty_is_default() {
    let config = assert_ok!(SceneConfig::from_toml_str(""));
    assert_eq!(config, SceneConfig::default());
    assert_eq!(config.width, 1280.0);
    assert_eq!(config.height, 720.0);
    assert_eq!(config.border_margin, 1.0);
    assert_eq!(config.obstacle_half_extent, 25.0);
  }

  #[test]
  fn partial() {
    let config = assert_ok!(SceneConfig::from_toml_str(
      "width = 800.0\nobstacle_half_extent = 10.0"
    ));
    assert_eq!(config.width, 800.0);
    assert_eq!(config.height, 720.0);
    assert_eq!(config.obstacle_half_extent, 10.0);
  }

  #[test]
  fn rejects_unknown_fields() {
    assert_matches!(
      SceneConfig::from_toml_str("depth = 3.0"),
      Err(ConfigError::Parse(_))
    );
  }

  #[test]
  fn rejects_bad_values() {
    assert_matches!(
      SceneConfig::from_toml_str("width = 0.0"),
      Err(ConfigError::Invalid { field: "width", .. })
    );
    assert_matches!(
      SceneConfig::from_toml_str("height = -5.0"),
      Err(ConfigError::Invalid { field: "height", .. })
    );
    assert_matches!(
      SceneConfig::from_toml_str("border_margin = -1.0"),
      Err(ConfigError::Invalid { field: "border_margin", .. })
    );
    assert_matches!(
      SceneConfig::from_toml_str("obstacle_half_extent = nan"),
      Err(ConfigError::Invalid { field: "obstacle_half_extent", .. })
    );
    assert_ok!(SceneConfig::from_toml_str("border_margin = 0.0"));
  }

  #[test]
  fn load_missing_file() {
    assert_matches!(
      SceneConfig::load("/nonexistent/sightline.toml"),
      Err(ConfigError::Io(_))
    );
  }
}
