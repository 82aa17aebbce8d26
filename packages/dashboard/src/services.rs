use std::rc::Rc;

use dioxus::prelude::navigator;
use scanforchange_client::{platform_store, ApiConfig, CredentialStore, ProfileClient};

use crate::Route;

/// The infrastructure the dashboard talks to, provided once at the root.
#[derive(Clone)]
pub struct Services {
    pub store: Rc<dyn CredentialStore>,
    pub client: ProfileClient,
}

impl Services {
    pub fn new(store: impl CredentialStore + 'static, config: ApiConfig) -> Self {
        Self {
            store: Rc::new(store),
            client: ProfileClient::new(config),
        }
    }

    /// `localStorage` in the browser, a token file under the config directory on desktop.
    pub fn for_platform() -> Self {
        Self::new(platform_store(), ApiConfig::default())
    }
}

/// Forget the credential and return where to go next.
///
/// There is no server-side session to invalidate.
pub fn sign_out(store: &dyn CredentialStore) -> Route {
    store.clear();
    tracing::info!("signed out");
    Route::Login {}
}

/// Sign out and move the router to the login page.
///
/// Must run inside a component under `Router::<Route>`, as the header's logout button does.
pub fn logout(services: &Services) {
    navigator().push(sign_out(&*services.store));
}
