#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

mod api;
mod config;
mod credential;
mod error;
mod profile;
mod view_state;

pub use api::{FetchError, ProfileClient};
pub use config::{ApiConfig, ConfigError, DEFAULT_API_URL, DEFAULT_PROFILE_PATH, TOKEN_HEADER};
#[cfg(target_arch = "wasm32")]
pub use credential::BrowserStore;
#[cfg(not(target_arch = "wasm32"))]
pub use credential::FileStore;
pub use credential::{Credential, CredentialStore, MemoryStore, TOKEN_KEY};
pub use error::{DashboardError, FailureKind};
pub use profile::{ProfileEnvelope, Rank, UserProfile};
pub use view_state::{load_view_state, ViewState};

/// The store the running platform persists its credential in.
///
/// Browsers keep the token in `localStorage`, native builds in a file under the user's config
/// directory.
#[cfg(target_arch = "wasm32")]
pub fn platform_store() -> BrowserStore {
    BrowserStore::default()
}

/// The store the running platform persists its credential in.
#[cfg(not(target_arch = "wasm32"))]
pub fn platform_store() -> FileStore {
    FileStore::in_config_dir()
}
