//! Sample configuration loaded from environment variables.
//!
//! Every value is optional and falls back to a default. A value that is
//! present but unparsable is reported rather than ignored.

use std::str::FromStr;

/// Largest accepted magnitude of `RANGE_QUERY_UPDATE_OFFSET`.
///
/// Keeps every element and range sum of the differential check inside `i64`.
pub const MAX_UPDATE_OFFSET: i64 = 1 << 32;

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

/// Differential check settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoConfig {
    /// Trees of every length in `1..max_length` are checked.
    pub max_length: usize,
    /// Element `k` is updated to `k + update_offset` during the check.
    pub update_offset: i64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            max_length: 100,
            update_offset: 100,
        }
    }
}

impl DemoConfig {
    /// Loads configuration from the process environment (and `.env`).
    ///
    /// # Environment Variables
    ///
    /// - `RANGE_QUERY_MAX_LENGTH`: exclusive upper bound on tree lengths
    ///   (default: 100)
    /// - `RANGE_QUERY_UPDATE_OFFSET`: value added to an index when it is
    ///   updated (default: 100)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a value cannot be parsed,
    /// `RANGE_QUERY_MAX_LENGTH` is below 2, or `RANGE_QUERY_UPDATE_OFFSET`
    /// exceeds [`MAX_UPDATE_OFFSET`] in magnitude.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let max_length = parse_optional(&lookup, "RANGE_QUERY_MAX_LENGTH", defaults.max_length)?;
        if max_length < 2 {
            return Err(ConfigError::InvalidValue {
                key: "RANGE_QUERY_MAX_LENGTH".to_string(),
                message: format!("must be at least 2, got {max_length}"),
            });
        }
        let update_offset =
            parse_optional(&lookup, "RANGE_QUERY_UPDATE_OFFSET", defaults.update_offset)?;
        if !(-MAX_UPDATE_OFFSET..=MAX_UPDATE_OFFSET).contains(&update_offset) {
            return Err(ConfigError::InvalidValue {
                key: "RANGE_QUERY_UPDATE_OFFSET".to_string(),
                message: format!("must be within ±{MAX_UPDATE_OFFSET}, got {update_offset}"),
            });
        }

        Ok(Self {
            max_length,
            update_offset,
        })
    }
}

fn parse_optional<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key).map_or(Ok(default), |raw| {
        raw.trim()
            .parse()
            .map_err(|error: T::Err| ConfigError::InvalidValue {
                key: key.to_string(),
                message: error.to_string(),
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[rstest]
    fn missing_values_use_defaults() {
        let config = DemoConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, DemoConfig::default());
    }

    #[rstest]
    fn present_values_are_parsed() {
        let config = DemoConfig::from_lookup(lookup_from(&[
            ("RANGE_QUERY_MAX_LENGTH", "20"),
            ("RANGE_QUERY_UPDATE_OFFSET", " -5 "),
        ]))
        .unwrap();
        assert_eq!(config.max_length, 20);
        assert_eq!(config.update_offset, -5);
    }

    #[rstest]
    #[case("RANGE_QUERY_MAX_LENGTH", "many")]
    #[case("RANGE_QUERY_MAX_LENGTH", "1")]
    #[case("RANGE_QUERY_UPDATE_OFFSET", "1.5")]
    #[case("RANGE_QUERY_UPDATE_OFFSET", "9223372036854775807")]
    #[case("RANGE_QUERY_UPDATE_OFFSET", "-4294967297")]
    fn invalid_values_are_reported(#[case] key: &str, #[case] value: &str) {
        let error = DemoConfig::from_lookup(lookup_from(&[(key, value)])).unwrap_err();
        assert!(matches!(error, ConfigError::InvalidValue { key: reported, .. } if reported == key));
    }

    #[rstest]
    #[case(MAX_UPDATE_OFFSET)]
    #[case(-MAX_UPDATE_OFFSET)]
    fn offset_at_limit_is_accepted(#[case] offset: i64) {
        let raw = offset.to_string();
        let config =
            DemoConfig::from_lookup(lookup_from(&[("RANGE_QUERY_UPDATE_OFFSET", &raw)])).unwrap();
        assert_eq!(config.update_offset, offset);
    }
}
