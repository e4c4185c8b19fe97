// src/config.rs
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5001;
pub const DEFAULT_SYSTEM_PROMPT: &str =
    "당신은 친절하고 유용한 AI 어시스턴트입니다. 한국어로 자연스럽게 답변해주세요.";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 2048;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("GROQ_API_KEY is not set")]
    MissingApiKey,

    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Fixed parameters sent with every completion request.
#[derive(Debug, Clone)]
pub struct CompletionSettings {
    pub model: String,
    pub system_prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub host: String,
    pub port: u16,
    /// Directory searched for the chat page.
    pub static_dir: PathBuf,
    /// None keeps the HTTP client's default (no timeout).
    pub upstream_timeout: Option<Duration>,
    pub completion: CompletionSettings,
}

impl Config {
    /// Read configuration from the process environment.
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_key = get("GROQ_API_KEY").ok_or(ConfigError::MissingApiKey)?;

        let port = match get("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };

        let upstream_timeout = match get("CHAT_UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "CHAT_UPSTREAM_TIMEOUT_SECS",
                        value: raw,
                    });
                }
            },
            None => None,
        };

        let defaults = CompletionSettings::default();

        Ok(Self {
            api_key,
            base_url: get("GROQ_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            static_dir: get("CHAT_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            upstream_timeout,
            completion: CompletionSettings {
                model: get("GROQ_MODEL").unwrap_or(defaults.model),
                system_prompt: get("CHAT_SYSTEM_PROMPT").unwrap_or(defaults.system_prompt),
                ..defaults
            },
        })
    }
}
