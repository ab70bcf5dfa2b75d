use crate::error::{Error, Result};
use crate::services::prompt_client::{
    PromptOptions, ResponseMode, DEFAULT_MODEL, DEFAULT_TEMPERATURE, OPENAI_ENDPOINT,
};
use log::warn;
use std::env;

pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub openai_url: String,
    pub openai_key: String,
    pub openai_model: String,
    pub openai_temperature: f64,
    pub response_mode: ResponseMode,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let openai_key = lookup("OPENAI_KEY").unwrap_or_else(|| {
            warn!("OPENAI_KEY is not set, requests will carry an empty bearer token");
            String::new()
        });

        let openai_temperature = parse_or(&lookup, "OPENAI_TEMPERATURE", DEFAULT_TEMPERATURE)?;
        if !openai_temperature.is_finite() {
            return Err(Error::Config(format!(
                "OPENAI_TEMPERATURE must be a finite number, got `{}`",
                openai_temperature
            )));
        }

        Ok(Self {
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            server_port: parse_or(&lookup, "SERVER_PORT", 8080)?,
            openai_url: lookup("OPENAI_URL").unwrap_or_else(|| OPENAI_ENDPOINT.to_string()),
            openai_key,
            openai_model: lookup("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            openai_temperature,
            response_mode: lookup("PROMPT_RESPONSE_MODE")
                .map(|value| value.parse::<ResponseMode>())
                .transpose()?
                .unwrap_or_default(),
        })
    }

    pub fn prompt_options(&self) -> PromptOptions {
        PromptOptions {
            model: self.openai_model.clone(),
            temperature: self.openai_temperature,
            endpoint: self.openai_url.clone(),
            response_mode: self.response_mode,
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| Error::Config(format!("{} must be a valid value, got `{}`", key, value))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_match_fixed_literals() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.openai_key, "");
        assert_eq!(config.prompt_options(), PromptOptions::default());
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("SERVER_HOST", "0.0.0.0"),
            ("SERVER_PORT", "9000"),
            ("OPENAI_KEY", "sk-test"),
            ("OPENAI_URL", "http://localhost:8000/v1/chat/completions"),
            ("OPENAI_MODEL", "gpt-4o-mini"),
            ("OPENAI_TEMPERATURE", "0.1"),
            ("PROMPT_RESPONSE_MODE", "pass-through"),
        ])
        .unwrap();

        assert_eq!(config.bind_address(), "0.0.0.0:9000");
        assert_eq!(config.openai_key, "sk-test");

        let options = config.prompt_options();
        assert_eq!(options.endpoint, "http://localhost:8000/v1/chat/completions");
        assert_eq!(options.model, "gpt-4o-mini");
        assert_eq!(options.temperature, 0.1);
        assert_eq!(options.response_mode, ResponseMode::PassThrough);
    }

    #[test]
    fn bad_temperature_is_a_config_error() {
        let err = config_from(&[("OPENAI_TEMPERATURE", "warm")])
            .err()
            .unwrap();

        assert!(matches!(err, Error::Config(msg) if msg.contains("OPENAI_TEMPERATURE")));
    }

    #[test]
    fn non_finite_temperature_is_a_config_error() {
        for value in ["NaN", "inf", "-inf"] {
            let err = config_from(&[("OPENAI_TEMPERATURE", value)])
                .err()
                .unwrap();

            assert!(matches!(err, Error::Config(msg) if msg.contains("finite number")));
        }
    }

    #[test]
    fn bad_response_mode_is_a_config_error() {
        assert!(matches!(
            config_from(&[("PROMPT_RESPONSE_MODE", "echo")]),
            Err(Error::Config(_))
        ));
    }
}
