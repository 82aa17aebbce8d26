/// Why the dashboard could not show the profile.
///
/// The Display text is what the user sees. Both variants are terminal for a mount: nothing
/// retries and nothing redirects.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DashboardError {
    /// No credential was found in the store. The network was never touched.
    #[error("User not logged in")]
    MissingCredential,

    /// The profile request failed. Every cause renders the same message; the kind is kept for
    /// callers that want to react differently, e.g. logging out on 401.
    #[error("Failed to fetch user data.")]
    FetchFailure(FailureKind),
}

impl DashboardError {
    /// The underlying failure, if the request was attempted.
    pub fn failure(&self) -> Option<&FailureKind> {
        match self {
            DashboardError::MissingCredential => None,
            DashboardError::FetchFailure(kind) => Some(kind),
        }
    }
}

/// The cause of a failed profile request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// The request never produced a response.
    Transport,

    /// The server answered with a non-2xx status.
    Status(u16),

    /// The body was not the expected json shape.
    Decode,

    /// The body parsed but had no `data` object.
    MissingData,
}

impl FailureKind {
    /// The backend rejected the credential.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, FailureKind::Status(401 | 403))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_fixed() {
        assert_eq!(
            DashboardError::MissingCredential.to_string(),
            "User not logged in"
        );

        for kind in [
            FailureKind::Transport,
            FailureKind::Status(401),
            FailureKind::Status(404),
            FailureKind::Status(500),
            FailureKind::Decode,
            FailureKind::MissingData,
        ] {
            assert_eq!(
                DashboardError::FetchFailure(kind).to_string(),
                "Failed to fetch user data."
            );
        }
    }

    #[test]
    fn unauthorized_is_distinguishable() {
        assert!(FailureKind::Status(401).is_unauthorized());
        assert!(FailureKind::Status(403).is_unauthorized());
        assert!(!FailureKind::Status(500).is_unauthorized());
        assert!(!FailureKind::Transport.is_unauthorized());
        assert_eq!(DashboardError::MissingCredential.failure(), None);
    }
}
