use reqwest::StatusCode;
use url::Url;

use crate::{
    config::{ApiConfig, ConfigError},
    credential::Credential,
    error::FailureKind,
    profile::{ProfileEnvelope, UserProfile},
};

/// Everything that can go wrong fetching the profile.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The endpoint url could not be built.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The request failed before a response arrived, or the body could not be read.
    #[error("profile request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("profile request returned {0}")]
    Status(StatusCode),

    /// The body was not valid profile json.
    #[error("malformed profile response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The body had no `data` object.
    #[error("profile response has no data")]
    MissingData,
}

impl FetchError {
    /// Collapse into the cloneable kind carried by the view state.
    pub fn kind(&self) -> FailureKind {
        match self {
            FetchError::Config(_) | FetchError::Transport(_) => FailureKind::Transport,
            FetchError::Status(status) => FailureKind::Status(status.as_u16()),
            FetchError::Decode(_) => FailureKind::Decode,
            FetchError::MissingData => FailureKind::MissingData,
        }
    }
}

/// Fetches the signed-in user's profile.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ProfileClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ProfileClient {
    /// Create a client for `config`.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// The config this client was built with.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Issue one `GET` to the profile endpoint with the credential in the auth header.
    ///
    /// There is no retry. A 2xx body must carry a `data` object; anything else is an error.
    pub async fn fetch_profile(&self, credential: &Credential) -> Result<UserProfile, FetchError> {
        let url = self.config.profile_url()?;
        tracing::debug!("fetching profile from {url}");

        let response = self
            .request(url, credential)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.bytes().await.map_err(FetchError::Transport)?;
        let envelope: ProfileEnvelope = serde_json::from_slice(&body)?;
        envelope.data.ok_or(FetchError::MissingData)
    }

    fn request(&self, url: Url, credential: &Credential) -> reqwest::RequestBuilder {
        let request = self
            .http
            .get(url)
            .header(self.config.token_header.as_str(), credential.as_str());

        #[cfg(not(target_arch = "wasm32"))]
        let request = match self.config.timeout {
            Some(timeout) => request.timeout(timeout),
            None => request,
        };

        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(
            FetchError::Status(StatusCode::UNAUTHORIZED).kind(),
            FailureKind::Status(401)
        );
        assert_eq!(FetchError::MissingData.kind(), FailureKind::MissingData);

        let decode = serde_json::from_str::<ProfileEnvelope>("not json").unwrap_err();
        assert_eq!(FetchError::from(decode).kind(), FailureKind::Decode);
    }
}
