use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::constants::{
    DEFAULT_COUNTRY, DEFAULT_NEWS_ENDPOINT, DEFAULT_NEWS_LIMIT, INITIAL_COUNTRY, MAX_NEWS_LIMIT,
};
use crate::data::country_table;
use crate::error::ConfigError;
use crate::types::CountryCode;

/// What the news panel shows when the news service fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FallbackPolicy {
    /// Show the built-in illustrative items
    #[default]
    ShowFallback,
    /// Show an empty panel flagged as unavailable
    ShowUnavailable,
}

/// Settings the page passes when it creates the dashboard. Every field is
/// optional on the JavaScript side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardConfig {
    pub news_endpoint: String,
    pub news_limit: u32,
    pub initial_country: CountryCode,
    pub default_country: CountryCode,
    pub fallback_policy: FallbackPolicy,
    pub log_level: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            news_endpoint: DEFAULT_NEWS_ENDPOINT.to_string(),
            news_limit: DEFAULT_NEWS_LIMIT,
            initial_country: INITIAL_COUNTRY,
            default_country: DEFAULT_COUNTRY,
            fallback_policy: FallbackPolicy::default(),
            log_level: "info".to_string(),
        }
    }
}

impl DashboardConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.news_endpoint.trim().is_empty() {
            return Err(ConfigError::EmptyEndpoint);
        }
        if self.news_limit == 0 || self.news_limit > MAX_NEWS_LIMIT {
            return Err(ConfigError::NewsLimit {
                got: self.news_limit,
                max: MAX_NEWS_LIMIT,
            });
        }
        for code in [self.initial_country, self.default_country] {
            if country_table::find(code).is_none() {
                return Err(ConfigError::UnknownCountry(code));
            }
        }
        self.level()?;
        Ok(())
    }

    pub fn level(&self) -> Result<Level, ConfigError> {
        self.log_level
            .parse::<Level>()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_object_yields_defaults() {
        let config: DashboardConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn camel_case_fields_are_read() {
        let config: DashboardConfig = serde_json::from_str(
            r#"{"newsEndpoint":"https://news.example.org/fn","newsLimit":5,
                "initialCountry":"de","fallbackPolicy":"showUnavailable","logLevel":"debug"}"#,
        )
        .unwrap();
        assert_eq!(config.news_endpoint, "https://news.example.org/fn");
        assert_eq!(config.news_limit, 5);
        assert_eq!(config.initial_country.as_str(), "DE");
        assert_eq!(config.default_country, DEFAULT_COUNTRY);
        assert_eq!(config.fallback_policy, FallbackPolicy::ShowUnavailable);
        assert_eq!(config.level().unwrap(), Level::DEBUG);
    }

    #[test]
    fn rejects_out_of_range_limit() {
        let config = DashboardConfig {
            news_limit: 0,
            ..DashboardConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NewsLimit { got: 0, max: MAX_NEWS_LIMIT })
        );
    }

    #[test]
    fn rejects_country_outside_tables() {
        let config = DashboardConfig {
            default_country: CountryCode::from_static("ZZ"),
            ..DashboardConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::UnknownCountry(_))));
    }

    #[test]
    fn rejects_unknown_log_level() {
        let config = DashboardConfig {
            log_level: "chatty".into(),
            ..DashboardConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::LogLevel(_))));
    }

    #[test]
    fn rejects_malformed_country_while_decoding() {
        let result: Result<DashboardConfig, _> =
            serde_json::from_str(r#"{"initialCountry":"Russia"}"#);
        assert!(result.is_err());
    }
}
