use std::env::{self, VarError};

use dotenvy::dotenv;
use thiserror::Error;

pub const DEFAULT_CONTENT_MAX_LENGTH: usize = 500;
pub const DEFAULT_PAGE_MAX_LIMIT: i64 = 20;
pub const DEFAULT_QUERY_MAX_LENGTH: usize = 100;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("An error occured while getting {0} env param")]
    Unreadable(&'static str),
    #[error("An error occured while parsing {name} env param: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Limits applied by [`crate::presentation::http::validators::MessageHandlerValidator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatorConfig {
    pub content_max_length: usize,
    pub page_max_limit: i64,
    pub query_max_length: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            content_max_length: DEFAULT_CONTENT_MAX_LENGTH,
            page_max_limit: DEFAULT_PAGE_MAX_LIMIT,
            query_max_length: DEFAULT_QUERY_MAX_LENGTH,
        }
    }
}

impl ValidatorConfig {
    /// Reads overrides from the environment (and `.env`), keeping defaults for unset values.
    pub fn try_parse() -> Result<ValidatorConfig, ConfigError> {
        let _ = dotenv();

        Self::from_lookup(|name| env::var(name))
    }

    pub fn from_lookup<F>(lookup: F) -> Result<ValidatorConfig, ConfigError>
    where
        F: Fn(&'static str) -> Result<String, VarError>,
    {
        let defaults = ValidatorConfig::default();

        Ok(ValidatorConfig {
            content_max_length: optional::<_, usize>(&lookup, "SMS_CONTENT_MAX_LENGTH")?
                .unwrap_or(defaults.content_max_length),
            page_max_limit: optional::<_, i64>(&lookup, "MESSAGE_PAGE_MAX_LIMIT")?
                .unwrap_or(defaults.page_max_limit),
            query_max_length: optional::<_, usize>(&lookup, "MESSAGE_QUERY_MAX_LENGTH")?
                .unwrap_or(defaults.query_max_length),
        })
    }
}

fn optional<F, T>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&'static str) -> Result<String, VarError>,
    T: std::str::FromStr + PartialOrd + Default,
{
    let raw = match lookup(name) {
        Ok(raw) => raw,
        Err(VarError::NotPresent) => return Ok(None),
        Err(VarError::NotUnicode(_)) => return Err(ConfigError::Unreadable(name)),
    };

    match raw.trim().parse::<T>() {
        Ok(value) if value > T::default() => Ok(Some(value)),
        _ => Err(ConfigError::Invalid { name, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::{ConfigError, ValidatorConfig};

    fn lookup_from(
        vars: &[(&'static str, &str)],
    ) -> impl Fn(&'static str) -> Result<String, VarError> {
        let vars: HashMap<&'static str, String> =
            vars.iter().map(|(k, v)| (*k, v.to_string())).collect();
        move |name| vars.get(name).cloned().ok_or(VarError::NotPresent)
    }

    #[test]
    fn unset_variables_keep_defaults() {
        let config = ValidatorConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ValidatorConfig::default());
        assert_eq!(config.content_max_length, 500);
        assert_eq!(config.page_max_limit, 20);
        assert_eq!(config.query_max_length, 100);
    }

    #[test]
    fn overrides_are_applied() {
        let config = ValidatorConfig::from_lookup(lookup_from(&[
            ("SMS_CONTENT_MAX_LENGTH", "160"),
            ("MESSAGE_PAGE_MAX_LIMIT", " 50 "),
        ]))
        .unwrap();

        assert_eq!(config.content_max_length, 160);
        assert_eq!(config.page_max_limit, 50);
        assert_eq!(config.query_max_length, 100);
    }

    #[test]
    fn rejects_non_numeric_and_zero_values() {
        let err = ValidatorConfig::from_lookup(lookup_from(&[("MESSAGE_QUERY_MAX_LENGTH", "lots")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                name: "MESSAGE_QUERY_MAX_LENGTH",
                value: "lots".to_string()
            }
        );

        let err = ValidatorConfig::from_lookup(lookup_from(&[("MESSAGE_PAGE_MAX_LIMIT", "0")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "MESSAGE_PAGE_MAX_LIMIT", .. }));
    }
}
