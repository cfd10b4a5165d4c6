//! Base URL configuration.
//!
//! `ApiConfig` is built once and handed to `ApiClient`; nothing reads the
//! environment behind the client's back.

use std::env;

use crate::error::ApiError;

/// Environment variable holding the API base URL.
pub const BASE_URL_ENV: &str = "PUBLIC_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Use `base_url` exactly as given. No slash is added or removed.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Build configuration from `PUBLIC_API_URL`.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Blank values count
    /// as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ApiError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(BASE_URL_ENV)
            .filter(|value| !value.trim().is_empty())
            .ok_or(ApiError::MissingConfig(BASE_URL_ENV))?;
        Ok(Self::new(base_url))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full request URL for `path`: plain concatenation.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_is_plain_concatenation() {
        let config = ApiConfig::new("http://localhost:8000");
        assert_eq!(config.url_for("/notes/"), "http://localhost:8000/notes/");
    }

    #[test]
    fn slashes_are_not_normalized() {
        assert_eq!(
            ApiConfig::new("http://api/").url_for("/users"),
            "http://api//users"
        );
        assert_eq!(
            ApiConfig::new("http://api").url_for("users"),
            "http://apiusers"
        );
    }

    #[test]
    fn lookup_reads_base_url() {
        let config = ApiConfig::from_lookup(|key| {
            (key == BASE_URL_ENV).then(|| "https://example.test/api".to_string())
        })
        .unwrap();
        assert_eq!(config.base_url(), "https://example.test/api");
    }

    #[test]
    fn missing_base_url_is_an_error() {
        let err = ApiConfig::from_lookup(|_| None).unwrap_err();
        assert!(matches!(err, ApiError::MissingConfig(BASE_URL_ENV)));
    }

    #[test]
    fn base_url_is_not_validated() {
        let config = ApiConfig::from_lookup(|_| Some("not a url".to_string())).unwrap();
        assert_eq!(config.url_for("/x"), "not a url/x");
    }

    #[test]
    fn from_env_reads_and_requires_variable() {
        // Only this test touches PUBLIC_API_URL.
        env::set_var(BASE_URL_ENV, "http://env.test");
        let config = ApiConfig::from_env().unwrap();
        assert_eq!(config.base_url(), "http://env.test");

        env::remove_var(BASE_URL_ENV);
        let err = ApiConfig::from_env().unwrap_err();
        assert!(matches!(err, ApiError::MissingConfig(BASE_URL_ENV)));
    }

    #[test]
    fn blank_base_url_is_an_error() {
        let err = ApiConfig::from_lookup(|_| Some("   ".to_string())).unwrap_err();
        assert!(matches!(err, ApiError::MissingConfig(_)));
    }
}
