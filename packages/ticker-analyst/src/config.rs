//! Configuration loaded from environment variables.
//!
//! | Variable | Required | Default |
//! |---|---|---|
//! | `ANTHROPIC_API_KEY` | yes | |
//! | `ANTHROPIC_MODEL` | no | `claude-3-sonnet-20240229` |
//! | `ANTHROPIC_MAX_TOKENS` | no | `1000` |
//! | `ANTHROPIC_BASE_URL` | no | Anthropic public API |
//!
//! `.env` loading is left to the binary.

use std::env;

use crate::error::{AnalysisError, Result};
use crate::security::AICredentials;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: AICredentials,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("ANTHROPIC_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AnalysisError::Config("ANTHROPIC_API_KEY must be set".into()))?;

        let mut credentials = AICredentials::new(api_key);

        if let Some(model) = lookup("ANTHROPIC_MODEL").filter(|m| !m.trim().is_empty()) {
            credentials = credentials.with_model(model.trim());
        }

        if let Some(raw) = lookup("ANTHROPIC_MAX_TOKENS") {
            let max_tokens = raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| {
                    AnalysisError::Config(format!(
                        "ANTHROPIC_MAX_TOKENS must be a positive integer, got {raw:?}"
                    ))
                })?;
            credentials = credentials.with_max_tokens(max_tokens);
        }

        if let Some(base_url) = lookup("ANTHROPIC_BASE_URL").filter(|u| !u.trim().is_empty()) {
            credentials = credentials.with_base_url(base_url.trim());
        }

        Ok(Self { credentials })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_requires_api_key() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, AnalysisError::Config(_)));

        let err = Config::from_lookup(lookup_from(&[("ANTHROPIC_API_KEY", " ")])).unwrap_err();
        assert!(matches!(err, AnalysisError::Config(_)));
    }

    #[test]
    fn test_defaults_when_only_key_set() {
        let config = Config::from_lookup(lookup_from(&[("ANTHROPIC_API_KEY", "sk-ant-x")])).unwrap();

        assert_eq!(config.credentials.api_key.expose(), "sk-ant-x");
        assert_eq!(config.credentials.model, "claude-3-sonnet-20240229");
        assert_eq!(config.credentials.max_tokens, 1000);
        assert_eq!(config.credentials.base_url, None);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("ANTHROPIC_API_KEY", "sk-ant-x"),
            ("ANTHROPIC_MODEL", "claude-3-haiku-20240307"),
            ("ANTHROPIC_MAX_TOKENS", "400"),
            ("ANTHROPIC_BASE_URL", "http://localhost:8080/v1"),
        ]))
        .unwrap();

        assert_eq!(config.credentials.model, "claude-3-haiku-20240307");
        assert_eq!(config.credentials.max_tokens, 400);
        assert_eq!(
            config.credentials.base_url.as_deref(),
            Some("http://localhost:8080/v1")
        );
    }

    #[test]
    fn test_rejects_bad_max_tokens() {
        for bad in ["zero", "0", "-5"] {
            let err = Config::from_lookup(lookup_from(&[
                ("ANTHROPIC_API_KEY", "sk-ant-x"),
                ("ANTHROPIC_MAX_TOKENS", bad),
            ]))
            .unwrap_err();
            assert!(matches!(err, AnalysisError::Config(_)), "accepted {bad}");
        }
    }

    #[test]
    fn test_debug_does_not_leak_key() {
        let config = Config::from_lookup(lookup_from(&[("ANTHROPIC_API_KEY", "sk-ant-hidden")])).unwrap();
        assert!(!format!("{:?}", config).contains("sk-ant-hidden"));
    }
}
