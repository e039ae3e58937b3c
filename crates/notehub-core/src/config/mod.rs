//! Client configuration.
//!
//! The notes service base URL, bearer token and list field name come from the
//! process environment. Binaries load a `.env` file before calling
//! [`ClientConfig::from_env`].

use std::fmt;
use std::time::Duration;

use crate::error::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://notehub-public.goit.study/api";
pub const DEFAULT_LIST_FIELD: &str = "results";

/// Quiet period before a search edit becomes part of the list query key.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

pub const ENV_BASE_URL: &str = "NOTEHUB_API_URL";
pub const ENV_TOKEN: &str = "NOTEHUB_TOKEN";
pub const ENV_LIST_FIELD: &str = "NOTEHUB_LIST_FIELD";

/// Connection settings for the notes service.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL without a trailing slash
    pub base_url: String,
    /// Bearer credential attached to every request
    pub token: String,
    /// Name of the array field holding notes in list responses
    pub list_field: String,
}

impl ClientConfig {
    pub fn new(base_url: impl AsRef<str>, token: impl Into<String>) -> Result<Self> {
        let base_url = normalize_base_url(base_url.as_ref())?;
        let token = normalize_text_option(Some(token.into())).ok_or_else(|| {
            Error::InvalidConfiguration("notes API token must not be empty".to_string())
        })?;
        Ok(Self {
            base_url,
            token,
            list_field: DEFAULT_LIST_FIELD.to_string(),
        })
    }

    /// Override the list response field name (`results` or `notes`).
    #[must_use]
    pub fn with_list_field(mut self, field: impl Into<String>) -> Self {
        if let Some(field) = normalize_text_option(Some(field.into())) {
            self.list_field = field;
        }
        self
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let base_url = normalize_text_option(lookup(ENV_BASE_URL))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let token = normalize_text_option(lookup(ENV_TOKEN))
            .ok_or_else(|| Error::InvalidConfiguration(format!("{ENV_TOKEN} is not set")))?;
        let config = Self::new(base_url, token)?;
        Ok(match normalize_text_option(lookup(ENV_LIST_FIELD)) {
            Some(field) => config.with_list_field(field),
            None => config,
        })
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("token", &"[REDACTED]")
            .field("list_field", &self.list_field)
            .finish()
    }
}

/// Trim `value`, treating missing and blank text alike.
fn normalize_text_option(value: Option<String>) -> Option<String> {
    let value = value?;
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let base = raw.trim().trim_end_matches('/').to_string();
    if base.is_empty() {
        return Err(Error::InvalidConfiguration(
            "notes API base URL must not be empty".to_string(),
        ));
    }
    if !(base.starts_with("http://") || base.starts_with("https://")) {
        return Err(Error::InvalidConfiguration(
            "notes API base URL must include http:// or https://".to_string(),
        ));
    }
    Ok(base)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn from_lookup_applies_defaults() {
        let config = ClientConfig::from_lookup(lookup_from(&[(ENV_TOKEN, "secret")])).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.token, "secret");
        assert_eq!(config.list_field, "results");
    }

    #[test]
    fn from_lookup_requires_token() {
        let error = ClientConfig::from_lookup(lookup_from(&[(ENV_TOKEN, "   ")])).unwrap_err();
        assert!(matches!(error, Error::InvalidConfiguration(_)));
    }

    #[test]
    fn from_lookup_reads_overrides() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            (ENV_BASE_URL, "http://localhost:8080/api/"),
            (ENV_TOKEN, "secret"),
            (ENV_LIST_FIELD, "notes"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:8080/api");
        assert_eq!(config.list_field, "notes");
    }

    #[test]
    fn new_rejects_invalid_base_url() {
        assert!(ClientConfig::new("", "secret").is_err());
        assert!(ClientConfig::new("notehub.example.com", "secret").is_err());
        assert!(ClientConfig::new("ftp://notehub.example.com", "secret").is_err());
    }

    #[test]
    fn blank_overrides_fall_back_to_defaults() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            (ENV_BASE_URL, "   "),
            (ENV_TOKEN, " secret "),
            (ENV_LIST_FIELD, ""),
        ]))
        .unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.token, "secret");
        assert_eq!(config.list_field, DEFAULT_LIST_FIELD);
    }

    #[test]
    fn debug_redacts_token() {
        let config = ClientConfig::new("https://api.example.com", "secret-token").unwrap();
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
