use crate::{
    api::ProfileClient,
    credential::CredentialStore,
    error::DashboardError,
    profile::UserProfile,
};

/// What the stats area shows.
///
/// A mount starts in `Loading` and moves to exactly one of `Error` or `Ready`. It never goes back
/// to `Loading` without a fresh mount.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    /// The profile request has not settled yet.
    #[default]
    Loading,

    /// The profile could not be shown.
    Error(DashboardError),

    /// The profile arrived.
    Ready(UserProfile),
}

impl ViewState {
    /// Whether the loading indicator should be visible.
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    /// The profile, once it has arrived.
    pub fn profile(&self) -> Option<&UserProfile> {
        match self {
            ViewState::Ready(profile) => Some(profile),
            _ => None,
        }
    }

    /// The failure, if loading failed.
    pub fn error(&self) -> Option<&DashboardError> {
        match self {
            ViewState::Error(err) => Some(err),
            _ => None,
        }
    }
}

impl From<Result<UserProfile, DashboardError>> for ViewState {
    fn from(result: Result<UserProfile, DashboardError>) -> Self {
        match result {
            Ok(profile) => ViewState::Ready(profile),
            Err(err) => ViewState::Error(err),
        }
    }
}

/// Run the mount-time lifecycle: read the credential once, fetch the profile if there is one.
///
/// Always settles on `Error` or `Ready`. When the store is empty no request is made.
pub async fn load_view_state(store: &dyn CredentialStore, client: &ProfileClient) -> ViewState {
    let Some(credential) = store.load() else {
        tracing::warn!("no credential in store, skipping profile fetch");
        return ViewState::Error(DashboardError::MissingCredential);
    };

    match client.fetch_profile(&credential).await {
        Ok(profile) => {
            tracing::debug!(?profile, "loaded user profile");
            ViewState::Ready(profile)
        }
        Err(err) => {
            tracing::error!("failed to fetch user data: {err}");
            ViewState::Error(DashboardError::FetchFailure(err.kind()))
        }
    }
}
