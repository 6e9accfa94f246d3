//! Configuration for the matchers
//!
//! Settings come from a TOML file, then environment variable overrides are
//! applied on top. Every field has a default, so an empty or partial file is
//! valid.

use crate::constants::{config as names, matcher as defaults};
use crate::error::{LnagError, LnagResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Tunable thresholds of the near-tie search.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct MatcherConfig {
    /// Log10 distance from the best score that still counts as a near-tie
    #[serde(default = "default_score_tolerance")]
    pub score_tolerance: f64,
    /// Ratios below this are discarded
    #[serde(default = "default_min_ratio")]
    pub min_ratio: f64,
    /// Ratios above this are discarded
    #[serde(default = "default_max_ratio")]
    pub max_ratio: f64,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            score_tolerance: default_score_tolerance(),
            min_ratio: default_min_ratio(),
            max_ratio: default_max_ratio(),
        }
    }
}

impl MatcherConfig {
    /// Whether `ratio` falls inside the acceptance window. NaN never does.
    pub fn accepts_ratio(&self, ratio: f64) -> bool {
        (self.min_ratio..=self.max_ratio).contains(&ratio)
    }

    /// Reject settings the matchers cannot work with.
    pub fn validate(&self) -> LnagResult<()> {
        if !self.score_tolerance.is_finite() || self.score_tolerance < 0.0 {
            return Err(LnagError::configuration(
                "score_tolerance",
                format!("must be a finite number >= 0, got {}", self.score_tolerance),
            ));
        }
        if !self.min_ratio.is_finite() || self.min_ratio <= 0.0 {
            return Err(LnagError::configuration(
                "min_ratio",
                format!("must be a finite number > 0, got {}", self.min_ratio),
            ));
        }
        if !self.max_ratio.is_finite() || self.max_ratio <= self.min_ratio {
            return Err(LnagError::configuration(
                "max_ratio",
                format!(
                    "must be finite and greater than min_ratio ({}), got {}",
                    self.min_ratio, self.max_ratio
                ),
            ));
        }
        Ok(())
    }
}

/// Top-level configuration file layout.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct LnagConfig {
    #[serde(default)]
    pub matcher: MatcherConfig,
}

impl LnagConfig {
    /// Load configuration from `path`, `LNAG_CONFIG_PATH`, or `lnag.toml`.
    ///
    /// Only the implicit `lnag.toml` may be missing; an explicitly named file
    /// that cannot be read is an error.
    pub fn load(path: Option<&Path>) -> LnagResult<Self> {
        let (config_path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => match std::env::var(names::CONFIG_PATH_ENV) {
                Ok(p) => (PathBuf::from(p), true),
                Err(_) => (PathBuf::from(names::DEFAULT_CONFIG_FILE), false),
            },
        };

        let config_str = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(err) if !explicit && err.kind() == std::io::ErrorKind::NotFound => {
                warn!(
                    "Configuration file '{}' not found. Using default configuration.",
                    config_path.display()
                );
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(LnagError::configuration_general(format!(
                    "cannot read '{}': {err}",
                    config_path.display()
                )));
            }
        };

        let config = Self::from_toml(&config_str)?;
        info!(path = %config_path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml(contents: &str) -> LnagResult<Self> {
        let config: Self = toml::from_str(contents)
            .map_err(|err| LnagError::configuration_general(format!("invalid TOML: {err}")))?;
        config.matcher.validate()?;
        Ok(config)
    }

    /// Apply `LNAG_*` environment variable overrides, then re-validate.
    pub fn apply_env_overrides(mut self) -> LnagResult<Self> {
        let overrides = [
            (names::SCORE_TOLERANCE_ENV, &mut self.matcher.score_tolerance),
            (names::MIN_RATIO_ENV, &mut self.matcher.min_ratio),
            (names::MAX_RATIO_ENV, &mut self.matcher.max_ratio),
        ];
        for (var, slot) in overrides {
            if let Ok(raw) = std::env::var(var) {
                match raw.parse::<f64>() {
                    Ok(value) => {
                        debug!(var, value, "Applying environment override");
                        *slot = value;
                    }
                    Err(_) => warn!(var, raw = %raw, "Ignoring non-numeric environment override"),
                }
            }
        }
        self.matcher.validate()?;
        Ok(self)
    }
}

fn default_score_tolerance() -> f64 {
    defaults::DEFAULT_SCORE_TOLERANCE
}
fn default_min_ratio() -> f64 {
    defaults::DEFAULT_MIN_RATIO
}
fn default_max_ratio() -> f64 {
    defaults::DEFAULT_MAX_RATIO
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    fn clear_env() {
        // SAFETY: tests touching the environment are #[serial].
        unsafe {
            std::env::remove_var(names::CONFIG_PATH_ENV);
            std::env::remove_var(names::SCORE_TOLERANCE_ENV);
            std::env::remove_var(names::MIN_RATIO_ENV);
            std::env::remove_var(names::MAX_RATIO_ENV);
        }
    }

    #[test]
    fn test_defaults_match_documented_constants() {
        let config = MatcherConfig::default();
        assert_eq!(config.score_tolerance, 0.1);
        assert_eq!(config.min_ratio, 0.01);
        assert_eq!(config.max_ratio, 100_000.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_accepts_ratio_window_is_inclusive() {
        let config = MatcherConfig::default();
        assert!(config.accepts_ratio(0.01));
        assert!(config.accepts_ratio(100_000.0));
        assert!(!config.accepts_ratio(0.009));
        assert!(!config.accepts_ratio(100_001.0));
        assert!(!config.accepts_ratio(f64::NAN));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = LnagConfig::from_toml("[matcher]\nscore_tolerance = 0.25\n").unwrap();
        assert_eq!(config.matcher.score_tolerance, 0.25);
        assert_eq!(config.matcher.min_ratio, 0.01);

        let empty = LnagConfig::from_toml("").unwrap();
        assert_eq!(empty, LnagConfig::default());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = LnagConfig::from_toml("[matcher]\nmin_ratio = 10.0\nmax_ratio = 5.0\n").unwrap_err();
        assert!(matches!(err, LnagError::Configuration { setting: Some(ref s), .. } if s == "max_ratio"));

        let err = LnagConfig::from_toml("[matcher]\nscore_tolerance = -1.0\n").unwrap_err();
        assert_eq!(err.category(), "configuration");

        assert!(LnagConfig::from_toml("[matcher\n").is_err());
    }

    #[test]
    #[serial]
    fn test_load_from_explicit_path() {
        clear_env();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[matcher]\nmax_ratio = 5000.0").unwrap();

        let config = LnagConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.matcher.max_ratio, 5000.0);
    }

    #[test]
    #[serial]
    fn test_missing_explicit_path_is_an_error() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(LnagConfig::load(Some(&missing)).is_err());
    }

    #[test]
    #[serial]
    fn test_env_overrides_apply_and_validate() {
        clear_env();
        unsafe {
            std::env::set_var(names::SCORE_TOLERANCE_ENV, "0.05");
            std::env::set_var(names::MAX_RATIO_ENV, "not-a-number");
        }
        let config = LnagConfig::default().apply_env_overrides().unwrap();
        assert_eq!(config.matcher.score_tolerance, 0.05);
        assert_eq!(config.matcher.max_ratio, 100_000.0);

        unsafe {
            std::env::set_var(names::MIN_RATIO_ENV, "0");
        }
        assert!(LnagConfig::default().apply_env_overrides().is_err());
        clear_env();
    }
}
