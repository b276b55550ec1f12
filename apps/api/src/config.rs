use std::str::FromStr;

use anyhow::{Context, Result};

const DEFAULT_RESOURCE_ID: &str = "swc-generativeai-prod-001";
const DEFAULT_DEPLOYMENT_ID: &str = "shared-paygo-gpt41nano-0414";

/// Application configuration loaded from environment variables.
/// Every variable has a default; only malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    pub gai: GaiSettings,
}

/// Settings consumed by the availability probe and the real backend client.
#[derive(Debug, Clone)]
pub struct GaiSettings {
    /// Base URL of the chat-completions gateway. `None` means no backend is configured.
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub resource_id: String,
    pub deployment_id: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout_secs: u64,
    /// Wrap the real client in the call-metadata decorator.
    pub observe: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&lookup, "PORT", 8000)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            gai: GaiSettings {
                endpoint: non_blank(lookup("GAI_ENDPOINT"))
                    .map(|e| e.trim_end_matches('/').to_string()),
                api_key: non_blank(lookup("GAI_API_KEY")),
                resource_id: non_blank(lookup("LINKEDIN_GAI_RESOURCE_ID"))
                    .unwrap_or_else(|| DEFAULT_RESOURCE_ID.to_string()),
                deployment_id: non_blank(lookup("LINKEDIN_GAI_DEPLOYMENT_ID"))
                    .unwrap_or_else(|| DEFAULT_DEPLOYMENT_ID.to_string()),
                max_tokens: parse_or(&lookup, "GAI_MAX_TOKENS", 15000)?,
                temperature: parse_or(&lookup, "GAI_TEMPERATURE", 0.5)?,
                timeout_secs: parse_or(&lookup, "GAI_TIMEOUT_SECS", 120)?,
                observe: parse_or(&lookup, "GAI_OBSERVE", true)?,
            },
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    match non_blank(lookup(key)) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        None => Ok(default),
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
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.port, 8000);
        assert_eq!(config.host, "0.0.0.0");
        assert!(config.gai.endpoint.is_none());
        assert_eq!(config.gai.resource_id, DEFAULT_RESOURCE_ID);
        assert_eq!(config.gai.deployment_id, DEFAULT_DEPLOYMENT_ID);
        assert_eq!(config.gai.max_tokens, 15000);
        assert!((config.gai.temperature - 0.5).abs() < f32::EPSILON);
        assert!(config.gai.observe);
    }

    #[test]
    fn test_overrides_are_parsed() {
        let config = Config::from_lookup(lookup_from(&[
            ("GAI_ENDPOINT", "https://gai.internal/v1/"),
            ("GAI_MAX_TOKENS", "2000"),
            ("GAI_TEMPERATURE", "0.7"),
            ("GAI_OBSERVE", "false"),
            ("PORT", "9001"),
        ]))
        .unwrap();
        assert_eq!(config.gai.endpoint.as_deref(), Some("https://gai.internal/v1"));
        assert_eq!(config.gai.max_tokens, 2000);
        assert!(!config.gai.observe);
        assert_eq!(config.port, 9001);
    }

    #[test]
    fn test_blank_endpoint_counts_as_unset() {
        let config = Config::from_lookup(lookup_from(&[("GAI_ENDPOINT", "   ")])).unwrap();
        assert!(config.gai.endpoint.is_none());
    }

    #[test]
    fn test_invalid_number_names_the_variable() {
        let err = Config::from_lookup(lookup_from(&[("GAI_MAX_TOKENS", "lots")])).unwrap_err();
        assert!(err.to_string().contains("GAI_MAX_TOKENS"));
    }
}
