//! Build-time configuration for the client.
//!
//! Values come from environment variables captured at compile time with
//! `option_env!`, since a CSR bundle has no process environment at runtime.

use query_cache::QueryClientConfig;
use thiserror::Error;

/// Enables developer overlays when set to a truthy value.
pub const BUILD_MODE_ENV: &str = "EMBER_DEV";
/// Overrides the query client stale time, in milliseconds.
pub const STALE_TIME_ENV: &str = "EMBER_QUERY_STALE_TIME_MS";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors raised while parsing build-time configuration.
pub enum ConfigError {
    /// The build-mode flag was set to an unrecognized value.
    #[error("unrecognized {var} value `{value}`; expected a boolean or development/production")]
    InvalidBuildMode {
        /// Variable name.
        var: &'static str,
        /// Raw value.
        value: String,
    },
    /// A numeric setting was not a non-negative integer.
    #[error("{var} must be a non-negative integer, got `{value}`")]
    InvalidInteger {
        /// Variable name.
        var: &'static str,
        /// Raw value.
        value: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Distinguishes development bundles from production bundles.
pub enum BuildMode {
    /// Developer overlays are mounted.
    Development,
    /// Developer overlays are omitted entirely.
    #[default]
    Production,
}

impl BuildMode {
    /// Parses the build-mode flag. An absent or blank flag means production.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBuildMode`] for unrecognized values.
    pub fn parse(raw: Option<&str>) -> Result<Self, ConfigError> {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Ok(Self::Production);
        };
        match raw.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" | "dev" | "development" => Ok(Self::Development),
            "0" | "false" | "no" | "off" | "prod" | "production" => Ok(Self::Production),
            _ => Err(ConfigError::InvalidBuildMode {
                var: BUILD_MODE_ENV,
                value: raw.to_string(),
            }),
        }
    }

    /// Returns `true` when developer overlays should be mounted.
    pub fn devtools_enabled(self) -> bool {
        matches!(self, Self::Development)
    }

    /// Stable lowercase token for logs.
    pub fn token(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Typed client configuration.
pub struct AppConfig {
    /// Development or production bundle.
    pub build_mode: BuildMode,
    /// Settings for the shared query client.
    pub query: QueryClientConfig,
}

impl AppConfig {
    /// Builds configuration from raw variable values.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] encountered.
    pub fn from_vars(
        build_mode: Option<&str>,
        stale_time_ms: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut query = QueryClientConfig::default();
        if let Some(stale_time_ms) = parse_stale_time(stale_time_ms)? {
            query.stale_time_ms = stale_time_ms;
        }
        Ok(Self {
            build_mode: BuildMode::parse(build_mode)?,
            query,
        })
    }

    /// Builds configuration setting by setting, keeping every value that parsed.
    ///
    /// A rejected value falls back to its own default and is returned alongside
    /// the configuration; it never resets the other settings.
    pub fn from_vars_lenient(
        build_mode: Option<&str>,
        stale_time_ms: Option<&str>,
    ) -> (Self, Vec<ConfigError>) {
        let mut config = Self::default();
        let mut errors = Vec::new();
        match BuildMode::parse(build_mode) {
            Ok(mode) => config.build_mode = mode,
            Err(err) => errors.push(err),
        }
        match parse_stale_time(stale_time_ms) {
            Ok(Some(stale_time_ms)) => config.query.stale_time_ms = stale_time_ms,
            Ok(None) => {}
            Err(err) => errors.push(err),
        }
        (config, errors)
    }

    /// Reads the variables captured at compile time. Rejected values are
    /// logged and replaced by their defaults.
    pub fn from_build_env() -> Self {
        let (config, errors) =
            Self::from_vars_lenient(option_env!("EMBER_DEV"), option_env!("EMBER_QUERY_STALE_TIME_MS"));
        for err in errors {
            leptos::logging::warn!("ember config value rejected, using its default: {err}");
        }
        config
    }
}

fn parse_stale_time(raw: Option<&str>) -> Result<Option<u64>, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(None);
    };
    raw.parse()
        .map(Some)
        .map_err(|_| ConfigError::InvalidInteger {
            var: STALE_TIME_ENV,
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn absent_or_blank_flag_is_production() {
        assert_eq!(BuildMode::parse(None), Ok(BuildMode::Production));
        assert_eq!(BuildMode::parse(Some("  ")), Ok(BuildMode::Production));
        assert!(!BuildMode::Production.devtools_enabled());
    }

    #[test]
    fn truthy_flags_enable_devtools() {
        for raw in ["1", "true", "TRUE", "yes", "on", "dev", "Development"] {
            let mode = BuildMode::parse(Some(raw)).expect("truthy value");
            assert!(mode.devtools_enabled(), "{raw} should enable devtools");
        }
    }

    #[test]
    fn falsy_flags_disable_devtools() {
        for raw in ["0", "false", "no", "off", "prod", "production"] {
            assert_eq!(BuildMode::parse(Some(raw)), Ok(BuildMode::Production));
        }
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert_eq!(
            BuildMode::parse(Some("maybe")),
            Err(ConfigError::InvalidBuildMode {
                var: BUILD_MODE_ENV,
                value: "maybe".to_string(),
            })
        );
    }

    #[test]
    fn stale_time_override_is_parsed() {
        let config = AppConfig::from_vars(Some("true"), Some("30000")).expect("config");
        assert_eq!(config.build_mode, BuildMode::Development);
        assert_eq!(config.query.stale_time_ms, 30_000);
    }

    #[test]
    fn bad_stale_time_is_rejected() {
        let err = AppConfig::from_vars(None, Some("-5")).expect_err("negative");
        assert!(matches!(err, ConfigError::InvalidInteger { var, .. } if var == STALE_TIME_ENV));
    }

    #[test]
    fn bad_stale_time_keeps_development_flag() {
        let (config, errors) = AppConfig::from_vars_lenient(Some("1"), Some("abc"));
        assert_eq!(config.build_mode, BuildMode::Development);
        assert_eq!(config.query, QueryClientConfig::default());
        assert_eq!(
            errors,
            vec![ConfigError::InvalidInteger {
                var: STALE_TIME_ENV,
                value: "abc".to_string(),
            }]
        );
    }

    #[test]
    fn bad_flag_keeps_stale_time_override() {
        let (config, errors) = AppConfig::from_vars_lenient(Some("maybe"), Some("500"));
        assert_eq!(config.build_mode, BuildMode::Production);
        assert_eq!(config.query.stale_time_ms, 500);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn defaults_match_production_with_library_stale_time() {
        let config = AppConfig::from_vars(None, None).expect("config");
        assert_eq!(config, AppConfig::default());
        assert_eq!(
            config.query.stale_time_ms,
            query_cache::DEFAULT_STALE_TIME_MS
        );
    }
}
