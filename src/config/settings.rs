use anyhow::Result;
use log::debug;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

use crate::config::defaults::{self, DefaultConfig};
use crate::error::HowtoError;

/// The AI backend and the wire protocol it speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vendor {
    OpenAi,
    Ollama,
}

impl Vendor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Vendor::OpenAi => "openai",
            Vendor::Ollama => "ollama",
        }
    }

    pub fn default_url(&self) -> &'static str {
        match self {
            Vendor::OpenAi => defaults::OPENAI_URL,
            Vendor::Ollama => defaults::OLLAMA_URL,
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Vendor {
    type Err = HowtoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "openai" => Ok(Vendor::OpenAi),
            "ollama" => Ok(Vendor::Ollama),
            other => Err(HowtoError::UnknownVendor(other.to_string())),
        }
    }
}

/// AI configuration, resolved once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub vendor: Vendor,
    pub url: Url,
    pub token: String,
    pub model: String,
    pub prompt: String,
    pub temperature: f64,
    pub timeout: Duration,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves the configuration from an arbitrary key lookup.
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let vendor: Vendor = get(defaults::ENV_VENDOR)
            .unwrap_or_else(|| defaults::DEFAULT_VENDOR.to_string())
            .parse()?;

        let raw_url = get(defaults::ENV_URL).unwrap_or_else(|| vendor.default_url().to_string());
        let url = Url::parse(&raw_url).map_err(|source| HowtoError::InvalidUrl {
            url: raw_url.clone(),
            source,
        })?;

        let temperature = get(defaults::ENV_TEMPERATURE)
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|t| t.is_finite())
            .unwrap_or(defaults::DEFAULT_TEMPERATURE);

        let timeout = get(defaults::ENV_TIMEOUT)
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults::DEFAULT_TIMEOUT);

        let config = Self {
            vendor,
            url,
            token: get(defaults::ENV_TOKEN).unwrap_or_default(),
            model: get(defaults::ENV_MODEL).unwrap_or_else(|| defaults::DEFAULT_MODEL.to_string()),
            prompt: get(defaults::ENV_PROMPT).unwrap_or_else(DefaultConfig::host_prompt),
            temperature,
            timeout,
        };

        debug!(
            "Loaded config: vendor={}, url={}, model={}, timeout={}s",
            config.vendor,
            config.url,
            config.model,
            config.timeout.as_secs()
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let env: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let config = load(&[]).unwrap();
        assert_eq!(config.vendor, Vendor::OpenAi);
        assert_eq!(config.url.as_str(), defaults::OPENAI_URL);
        assert_eq!(config.token, "");
        assert_eq!(config.model, defaults::DEFAULT_MODEL);
        assert_eq!(config.prompt, DefaultConfig::host_prompt());
        assert_eq!(config.temperature, 0.0);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn default_prompt_names_the_platform() {
        let config = load(&[]).unwrap();
        assert!(config.prompt.contains(std::env::consts::OS));
        assert!(config.prompt.contains("first line MUST be the suggested command"));
    }

    #[test]
    fn custom_values_override_defaults() {
        let config = load(&[
            ("HOWTO_AI_VENDOR", "ollama"),
            ("HOWTO_AI_URL", "http://localhost:12345"),
            ("HOWTO_AI_TOKEN", "test_token"),
            ("HOWTO_AI_MODEL", "test_model"),
            ("HOWTO_AI_PROMPT", "test_prompt"),
            ("HOWTO_AI_TEMPERATURE", "0.5"),
            ("HOWTO_AI_TIMEOUT", "60"),
        ])
        .unwrap();

        assert_eq!(config.vendor, Vendor::Ollama);
        assert_eq!(config.url.as_str(), "http://localhost:12345/");
        assert_eq!(config.token, "test_token");
        assert_eq!(config.model, "test_model");
        assert_eq!(config.prompt, "test_prompt");
        assert_eq!(config.temperature, 0.5);
        assert_eq!(config.timeout, Duration::from_secs(60));
    }

    #[test]
    fn ollama_gets_its_own_endpoint() {
        let config = load(&[("HOWTO_AI_VENDOR", "ollama")]).unwrap();
        assert_eq!(config.url.as_str(), defaults::OLLAMA_URL);
    }

    #[test]
    fn unparsable_numbers_fall_back_to_defaults() {
        let config = load(&[
            ("HOWTO_AI_TEMPERATURE", "invalid"),
            ("HOWTO_AI_TIMEOUT", "soon"),
        ])
        .unwrap();
        assert_eq!(config.temperature, defaults::DEFAULT_TEMPERATURE);
        assert_eq!(config.timeout, defaults::DEFAULT_TIMEOUT);
    }

    #[test]
    fn non_finite_temperature_falls_back() {
        for raw in ["NaN", "inf", "-inf"] {
            let config = load(&[("HOWTO_AI_TEMPERATURE", raw)]).unwrap();
            assert_eq!(config.temperature, defaults::DEFAULT_TEMPERATURE, "{raw}");
        }
    }

    #[test]
    fn zero_timeout_is_kept() {
        let config = load(&[("HOWTO_AI_TIMEOUT", "0")]).unwrap();
        assert_eq!(config.timeout, Duration::ZERO);
    }

    #[test]
    fn empty_values_count_as_unset() {
        let config = load(&[("HOWTO_AI_VENDOR", ""), ("HOWTO_AI_MODEL", "")]).unwrap();
        assert_eq!(config.vendor, Vendor::OpenAi);
        assert_eq!(config.model, defaults::DEFAULT_MODEL);
    }

    #[test]
    fn unknown_vendor_fails() {
        let err = load(&[("HOWTO_AI_VENDOR", "unknown")]).unwrap_err();
        assert_eq!(err.to_string(), "unknown AI vendor: unknown");
        assert!(matches!(
            err.downcast_ref::<HowtoError>(),
            Some(HowtoError::UnknownVendor(name)) if name == "unknown"
        ));
    }

    #[test]
    fn unknown_vendor_fails_even_with_explicit_url() {
        let err = load(&[
            ("HOWTO_AI_VENDOR", "claude"),
            ("HOWTO_AI_URL", "http://localhost:1234"),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("unknown AI vendor: claude"));
    }

    #[test]
    fn invalid_url_fails() {
        let err = load(&[("HOWTO_AI_URL", "not a url")]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<HowtoError>(),
            Some(HowtoError::InvalidUrl { .. })
        ));
    }
}
