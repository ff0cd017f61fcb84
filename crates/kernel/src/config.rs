//! Character tuning and config-file loading.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::gait::Gait;
use crate::surface::Capsule;

/// Errors from loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported config extension: {0:?}")]
    UnsupportedFormat(String),
    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Load a config file, picking the format from the extension
/// (`.yaml`/`.yml` or `.json`).
pub fn load_config<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ConfigError> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let text = std::fs::read_to_string(path)?;
    let value = match ext.as_str() {
        "yaml" | "yml" => serde_yaml::from_str(&text)?,
        "json" => serde_json::from_str(&text)?,
        _ => return Err(ConfigError::UnsupportedFormat(ext)),
    };
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(value)
}

/// Reject anything that is not a finite, strictly positive number.
pub fn ensure_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("expected a positive number, got {value}"),
        })
    }
}

/// Reject anything that is not a finite, non-negative number.
pub fn ensure_non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("expected a non-negative number, got {value}"),
        })
    }
}

/// Tuning for the medium resolver and its motion policies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterConfig {
    pub capsule: Capsule,

    // Ground movement
    pub gait: Gait,

    // Jumping
    pub jump_force: f32,
    pub coyote_time: f32,
    pub max_jumps: u32,

    // Air movement
    pub drag: f32,
    pub air_control: f32,
    pub air_acceleration: f32,
    /// Horizontal speed below which air acceleration kicks in.
    pub air_accel_boost_threshold: f32,
    pub ascending_gravity: f32,
    pub descending_gravity: f32,

    // Wall movement
    pub wall_climb_gait: Gait,
    pub wall_check_length: f32,
    /// Minimum horizontal facing toward a wall for it to be climbable.
    pub climb_or_run_dot_threshold: f32,
    pub wall_pull: f32,
}

impl Default for CharacterConfig {
    fn default() -> Self {
        Self {
            capsule: Capsule::default(),
            gait: Gait::default(),
            jump_force: 5.0,
            coyote_time: 0.15,
            max_jumps: 2,
            drag: 0.06,
            air_control: 1.4,
            air_acceleration: 8.0,
            air_accel_boost_threshold: 4.0,
            ascending_gravity: 12.0,
            descending_gravity: 16.0,
            wall_climb_gait: Gait::wall_climb(),
            wall_check_length: 0.25,
            climb_or_run_dot_threshold: 0.5,
            wall_pull: 1.0,
        }
    }
}

impl CharacterConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive("capsule.height", self.capsule.height)?;
        ensure_positive("capsule.radius", self.capsule.radius)?;
        if self.capsule.height < self.capsule.radius * 2.0 {
            return Err(ConfigError::Invalid {
                field: "capsule.height",
                reason: format!(
                    "height {} is below twice the radius {}",
                    self.capsule.height, self.capsule.radius
                ),
            });
        }
        for (field, gait) in [("gait", &self.gait), ("wall_climb_gait", &self.wall_climb_gait)] {
            ensure_positive(field, gait.speed)?;
            ensure_positive(field, gait.acceleration)?;
            ensure_non_negative(field, gait.deceleration)?;
        }
        if self.max_jumps == 0 {
            return Err(ConfigError::Invalid {
                field: "max_jumps",
                reason: "at least one jump is required".into(),
            });
        }
        ensure_positive("jump_force", self.jump_force)?;
        ensure_non_negative("coyote_time", self.coyote_time)?;
        ensure_non_negative("drag", self.drag)?;
        ensure_non_negative("air_control", self.air_control)?;
        ensure_non_negative("air_acceleration", self.air_acceleration)?;
        ensure_non_negative("air_accel_boost_threshold", self.air_accel_boost_threshold)?;
        ensure_non_negative("ascending_gravity", self.ascending_gravity)?;
        ensure_non_negative("descending_gravity", self.descending_gravity)?;
        ensure_positive("wall_check_length", self.wall_check_length)?;
        ensure_non_negative("wall_pull", self.wall_pull)?;
        if !(-1.0..=1.0).contains(&self.climb_or_run_dot_threshold) {
            return Err(ConfigError::Invalid {
                field: "climb_or_run_dot_threshold",
                reason: format!(
                    "{} is outside [-1, 1]",
                    self.climb_or_run_dot_threshold
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_reference_tuning() {
        let c = CharacterConfig::default();
        assert_eq!(c.jump_force, 5.0);
        assert_eq!(c.coyote_time, 0.15);
        assert_eq!(c.max_jumps, 2);
        assert_eq!(c.drag, 0.06);
        assert_eq!(c.air_control, 1.4);
        assert_eq!(c.air_acceleration, 8.0);
        assert_eq!(c.air_accel_boost_threshold, 4.0);
        assert_eq!(c.ascending_gravity, 12.0);
        assert_eq!(c.descending_gravity, 16.0);
        assert_eq!(c.wall_check_length, 0.25);
        assert_eq!(c.climb_or_run_dot_threshold, 0.5);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "jump_force: 7.5\ngait:\n  speed: 9.0").unwrap();

        let c: CharacterConfig = load_config(file.path()).unwrap();
        assert_eq!(c.jump_force, 7.5);
        assert_eq!(c.gait.speed, 9.0);
        assert_eq!(c.gait.acceleration, Gait::default().acceleration);
        assert_eq!(c.drag, 0.06);
    }

    #[test]
    fn json_config_loads() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"max_jumps": 3, "capsule": {{"height": 1.6}}}}"#).unwrap();

        let c: CharacterConfig = load_config(file.path()).unwrap();
        assert_eq!(c.max_jumps, 3);
        assert_eq!(c.capsule.height, 1.6);
        assert_eq!(c.capsule.radius, 0.5);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        let err = load_config::<CharacterConfig>(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }

    #[test]
    fn validate_rejects_bad_values() {
        let c = CharacterConfig {
            max_jumps: 0,
            ..Default::default()
        };
        assert!(matches!(
            c.validate(),
            Err(ConfigError::Invalid { field: "max_jumps", .. })
        ));

        let c = CharacterConfig {
            capsule: Capsule {
                height: 0.6,
                radius: 0.5,
            },
            ..Default::default()
        };
        assert!(c.validate().is_err());

        let c = CharacterConfig {
            drag: f32::NAN,
            ..Default::default()
        };
        assert!(c.validate().is_err());

        let c = CharacterConfig {
            climb_or_run_dot_threshold: 1.5,
            ..Default::default()
        };
        assert!(c.validate().is_err());
    }
}
