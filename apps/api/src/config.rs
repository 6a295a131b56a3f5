use std::time::Duration;

use anyhow::{Context, Result};

use crate::llm_client::DEFAULT_BASE_URL;

/// Application configuration loaded from environment variables.
/// Every setting has a default; malformed numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Absent means narratives fall back to the degraded-service text.
    pub gemini_api_key: Option<String>,
    pub gemini_base_url: String,
    pub fit_analysis_delay: Duration,
    pub narrative_timeout: Duration,
    pub random_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            gemini_api_key: None,
            gemini_base_url: DEFAULT_BASE_URL.to_string(),
            fit_analysis_delay: Duration::from_millis(5000),
            narrative_timeout: Duration::from_secs(30),
            random_seed: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            port: match var("PORT") {
                Some(v) => v
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                None => defaults.port,
            },
            rust_log: var("RUST_LOG").unwrap_or(defaults.rust_log),
            gemini_api_key: var("GEMINI_API_KEY"),
            gemini_base_url: var("GEMINI_BASE_URL").unwrap_or(defaults.gemini_base_url),
            fit_analysis_delay: match var("FIT_ANALYSIS_DELAY_MS") {
                Some(v) => Duration::from_millis(
                    v.parse::<u64>()
                        .context("FIT_ANALYSIS_DELAY_MS must be a whole number of milliseconds")?,
                ),
                None => defaults.fit_analysis_delay,
            },
            narrative_timeout: match var("NARRATIVE_TIMEOUT_SECS") {
                Some(v) => Duration::from_secs(
                    v.parse::<u64>()
                        .context("NARRATIVE_TIMEOUT_SECS must be a whole number of seconds")?,
                ),
                None => defaults.narrative_timeout,
            },
            random_seed: var("RANDOM_SEED")
                .map(|v| v.parse::<u64>())
                .transpose()
                .context("RANDOM_SEED must be an unsigned 64-bit integer")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert!(config.gemini_api_key.is_none());
        assert_eq!(config.gemini_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.fit_analysis_delay, Duration::from_secs(5));
        assert_eq!(config.narrative_timeout, Duration::from_secs(30));
        assert!(config.random_seed.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "3000"),
            ("GEMINI_API_KEY", "abc"),
            ("FIT_ANALYSIS_DELAY_MS", "250"),
            ("NARRATIVE_TIMEOUT_SECS", "4"),
            ("RANDOM_SEED", "7"),
        ])
        .unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.gemini_api_key.as_deref(), Some("abc"));
        assert_eq!(config.fit_analysis_delay, Duration::from_millis(250));
        assert_eq!(config.narrative_timeout, Duration::from_secs(4));
        assert_eq!(config.random_seed, Some(7));
    }

    #[test]
    fn test_blank_api_key_is_absent() {
        let config = config_from(&[("GEMINI_API_KEY", "  ")]).unwrap();
        assert!(config.gemini_api_key.is_none());
    }

    #[test]
    fn test_invalid_numbers_fail() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
        assert!(config_from(&[("RANDOM_SEED", "-1")]).is_err());
        assert!(config_from(&[("FIT_ANALYSIS_DELAY_MS", "soon")]).is_err());
    }
}
