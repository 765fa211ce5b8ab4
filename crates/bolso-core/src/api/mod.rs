//! HTTP client for the SmartBudget backend.

mod client;

pub use client::ApiClient;

use std::time::Duration;

use anyhow::{Context, Result};

/// Default base URL for a locally running backend.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "SMARTBUDGET_API_URL";

/// Configuration for the API client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ApiConfig {
    /// Config with an explicit base URL and timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url, timeout }
    }

    /// Resolves the base URL and builds a config.
    ///
    /// Resolution order:
    /// 1. `SMARTBUDGET_API_URL` env var (if set and non-empty)
    /// 2. `config_base_url` (if Some and non-empty)
    /// 3. Default: `http://127.0.0.1:8000`
    pub fn resolve(config_base_url: Option<&str>, timeout_secs: u64) -> Result<Self> {
        let env_url = std::env::var(BASE_URL_ENV).ok();
        let base_url = resolve_base_url(env_url.as_deref(), config_base_url);

        url::Url::parse(base_url).with_context(|| format!("invalid base URL '{base_url}'"))?;

        Ok(Self::new(base_url, Duration::from_secs(timeout_secs)))
    }
}

fn resolve_base_url<'a>(env_value: Option<&'a str>, config_value: Option<&'a str>) -> &'a str {
    match env_value {
        Some(url) if !url.trim().is_empty() => url,
        _ => match config_value {
            Some(url) if !url.trim().is_empty() => url,
            _ => DEFAULT_BASE_URL,
        },
    }
}
