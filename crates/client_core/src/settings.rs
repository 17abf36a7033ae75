use std::{fs, path::Path, time::Duration};

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;
use url::Url;

use crate::DEFAULT_PAGE_SIZE;

pub const DEFAULT_ENDPOINT: &str = "https://dummyjson.com/products";
pub const DEFAULT_SETTINGS_FILE: &str = "catalog.toml";
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid catalog endpoint '{endpoint}': {source}")]
    InvalidEndpoint {
        endpoint: String,
        source: url::ParseError,
    },
    #[error("unsupported catalog endpoint scheme '{scheme}' (expected http or https)")]
    UnsupportedScheme { scheme: String },
    #[error("failed to parse settings file '{path}': {source}")]
    InvalidFile {
        path: String,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub endpoint: String,
    pub request_timeout: Duration,
    pub page_size: usize,
    pub search_debounce: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            page_size: DEFAULT_PAGE_SIZE,
            search_debounce: DEFAULT_SEARCH_DEBOUNCE,
        }
    }
}

impl ClientSettings {
    pub fn endpoint_url(&self) -> Result<Url, SettingsError> {
        parse_endpoint(&self.endpoint)
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    endpoint: Option<String>,
    request_timeout_secs: Option<u64>,
    page_size: Option<usize>,
    search_debounce_ms: Option<u64>,
}

/// Defaults, then the TOML file at `path`, then `env`. A missing file is not
/// an error; a file that does not parse is.
pub fn load_settings_from(
    path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ClientSettings, SettingsError> {
    let mut settings = ClientSettings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        let file_cfg: FileSettings =
            toml::from_str(&raw).map_err(|source| SettingsError::InvalidFile {
                path: path.display().to_string(),
                source,
            })?;
        if let Some(v) = file_cfg.endpoint {
            settings.endpoint = v;
        }
        if let Some(v) = file_cfg.request_timeout_secs {
            settings.request_timeout = Duration::from_secs(v);
        }
        if let Some(v) = file_cfg.page_size {
            settings.page_size = v;
        }
        if let Some(v) = file_cfg.search_debounce_ms {
            settings.search_debounce = Duration::from_millis(v);
        }
    }

    if let Some(v) = env("CATALOG_ENDPOINT") {
        settings.endpoint = v;
    }
    if let Some(v) = env("APP__ENDPOINT") {
        settings.endpoint = v;
    }

    if let Some(v) = parse_env_number(&env, "APP__REQUEST_TIMEOUT_SECS") {
        settings.request_timeout = Duration::from_secs(v);
    }
    if let Some(v) = parse_env_number(&env, "APP__PAGE_SIZE") {
        settings.page_size = v as usize;
    }
    if let Some(v) = parse_env_number(&env, "APP__SEARCH_DEBOUNCE_MS") {
        settings.search_debounce = Duration::from_millis(v);
    }

    if settings.request_timeout.is_zero() {
        warn!(
            default_secs = DEFAULT_REQUEST_TIMEOUT.as_secs(),
            "request timeout of 0 would fail every fetch; falling back to default"
        );
        settings.request_timeout = DEFAULT_REQUEST_TIMEOUT;
    }
    if settings.page_size == 0 {
        warn!(
            default = DEFAULT_PAGE_SIZE,
            "page size of 0 is not usable; falling back to default"
        );
        settings.page_size = DEFAULT_PAGE_SIZE;
    }

    settings.endpoint = settings.endpoint.trim().to_string();
    parse_endpoint(&settings.endpoint)?;

    Ok(settings)
}

fn parse_env_number(env: &impl Fn(&str) -> Option<String>, name: &str) -> Option<u64> {
    let raw = env(name)?;
    match raw.trim().parse::<u64>() {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            warn!(variable = name, value = %raw, "ignoring unparsable setting: {err}");
            None
        }
    }
}

fn parse_endpoint(endpoint: &str) -> Result<Url, SettingsError> {
    let url = Url::parse(endpoint.trim()).map_err(|source| SettingsError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        source,
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(SettingsError::UnsupportedScheme {
            scheme: other.to_string(),
        }),
    }
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
