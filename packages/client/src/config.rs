use std::time::Duration;

use url::Url;

/// The production API the dashboard talks to unless overridden at build time.
pub const DEFAULT_API_URL: &str = "https://scanforchange.onrender.com";

/// Path of the "who am I" endpoint, relative to the API base.
pub const DEFAULT_PROFILE_PATH: &str = "/api/auth/profile";

/// Header the backend reads the credential from.
pub const TOKEN_HEADER: &str = "x-auth-token";

/// Browsers have no process environment, so the override is baked in when the bundle is built.
const API_URL_OVERRIDE: Option<&str> = option_env!("SCANFORCHANGE_API_URL");

/// Errors produced while building an [`ApiConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The base url could not be parsed.
    #[error("invalid api base url `{url}`: {source}")]
    InvalidBaseUrl {
        /// The rejected input.
        url: String,
        /// Why it was rejected.
        source: url::ParseError,
    },

    /// The profile path could not be joined onto the base url.
    #[error("invalid profile path `{path}`: {source}")]
    InvalidPath {
        /// The rejected path.
        path: String,
        /// Why it was rejected.
        source: url::ParseError,
    },
}

/// Where and how the profile is fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Scheme, host and port of the backend.
    pub base_url: Url,

    /// Path of the profile endpoint.
    pub profile_path: String,

    /// Name of the header carrying the credential.
    pub token_header: String,

    /// Upper bound for a single request. `None` waits forever.
    ///
    /// Only honored on native targets.
    pub timeout: Option<Duration>,
}

impl ApiConfig {
    /// Create a config pointing at `base_url` with the default path and header.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let parsed = Url::parse(base_url).map_err(|source| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })?;

        Ok(Self {
            base_url: parsed,
            profile_path: DEFAULT_PROFILE_PATH.to_string(),
            token_header: TOKEN_HEADER.to_string(),
            timeout: None,
        })
    }

    /// Bound every request by `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use a different profile path.
    pub fn with_profile_path(mut self, path: impl Into<String>) -> Self {
        self.profile_path = path.into();
        self
    }

    /// The absolute url of the profile endpoint.
    pub fn profile_url(&self) -> Result<Url, ConfigError> {
        self.base_url
            .join(&self.profile_path)
            .map_err(|source| ConfigError::InvalidPath {
                path: self.profile_path.clone(),
                source,
            })
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        if let Some(url) = API_URL_OVERRIDE {
            match Self::new(url) {
                Ok(config) => return config,
                Err(err) => tracing::warn!("ignoring SCANFORCHANGE_API_URL: {err}"),
            }
        }

        Self {
            base_url: Url::parse(DEFAULT_API_URL).expect("default api url is valid"),
            profile_path: DEFAULT_PROFILE_PATH.to_string(),
            token_header: TOKEN_HEADER.to_string(),
            timeout: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_profile_path_onto_base() {
        let config = ApiConfig::new("https://scanforchange.onrender.com").unwrap();
        assert_eq!(
            config.profile_url().unwrap().as_str(),
            "https://scanforchange.onrender.com/api/auth/profile"
        );
        assert_eq!(config.token_header, "x-auth-token");
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn absolute_path_replaces_base_path() {
        let config = ApiConfig::new("http://127.0.0.1:4000/v2/").unwrap();
        assert_eq!(
            config.profile_url().unwrap().as_str(),
            "http://127.0.0.1:4000/api/auth/profile"
        );
    }

    #[test]
    fn rejects_relative_base() {
        let err = ApiConfig::new("scanforchange").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn timeout_builder() {
        let config = ApiConfig::new("http://localhost:8080")
            .unwrap()
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }
}
