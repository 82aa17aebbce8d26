use std::{cell::RefCell, fmt, rc::Rc};

/// Key the login page stores the token under.
pub const TOKEN_KEY: &str = "token";

/// The opaque bearer token identifying the signed-in user.
///
/// Never empty. The value is kept out of `Debug` output so it doesn't end up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a raw token. An empty token means "not logged in" and yields `None`.
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        match token.is_empty() {
            true => None,
            false => Some(Self(token)),
        }
    }

    /// The raw token, as sent to the backend.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// Persistent key-value storage holding the credential.
///
/// The dashboard only ever reads the credential once per mount and clears it on logout. `store`
/// exists for the login flow and for tests.
pub trait CredentialStore {
    /// Read the credential, if one is present and non-empty.
    fn load(&self) -> Option<Credential>;

    /// Persist `credential`, replacing any previous one.
    fn store(&self, credential: &Credential);

    /// Remove the credential. Clearing an empty store is a no-op.
    fn clear(&self);
}

/// A store that lives as long as the process. Clones share the same slot.
#[derive(Clone, Default)]
pub struct MemoryStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryStore {
    /// A store already holding `token`. The token is kept verbatim, even when empty.
    pub fn with_token(token: impl Into<String>) -> Self {
        let store = Self::default();
        *store.slot.borrow_mut() = Some(token.into());
        store
    }

    /// The raw stored value, bypassing the empty-token check.
    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl CredentialStore for MemoryStore {
    fn load(&self) -> Option<Credential> {
        self.slot.borrow().clone().and_then(Credential::new)
    }

    fn store(&self, credential: &Credential) {
        *self.slot.borrow_mut() = Some(credential.as_str().to_string());
    }

    fn clear(&self) {
        self.slot.borrow_mut().take();
    }
}

/// The browser's `localStorage`.
///
/// Values are stored raw rather than JSON encoded, matching what the login page writes.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug)]
pub struct BrowserStore {
    key: &'static str,
}

#[cfg(target_arch = "wasm32")]
impl Default for BrowserStore {
    fn default() -> Self {
        Self { key: TOKEN_KEY }
    }
}

#[cfg(target_arch = "wasm32")]
impl CredentialStore for BrowserStore {
    fn load(&self) -> Option<Credential> {
        use gloo_storage::{LocalStorage, Storage};

        match LocalStorage::raw().get_item(self.key) {
            Ok(value) => value.and_then(Credential::new),
            Err(err) => {
                tracing::warn!("localStorage is unavailable: {err:?}");
                None
            }
        }
    }

    fn store(&self, credential: &Credential) {
        use gloo_storage::{LocalStorage, Storage};

        if let Err(err) = LocalStorage::raw().set_item(self.key, credential.as_str()) {
            tracing::error!("failed to persist credential: {err:?}");
        }
    }

    fn clear(&self) {
        use gloo_storage::{LocalStorage, Storage};

        LocalStorage::delete(self.key);
    }
}

/// A token file on disk, used by native builds.
///
/// The file holds the bare token. Trailing whitespace is ignored so a hand-written file with a
/// final newline still works.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug)]
pub struct FileStore {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    /// A store backed by the file at `path`. Nothing is touched until the store is used.
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/scanforchange/token`, falling back to the temp dir on platforms without one.
    pub fn in_config_dir() -> Self {
        let base = dirs::config_dir().unwrap_or_else(|| {
            tracing::warn!("no config directory, keeping the credential in the temp dir");
            std::env::temp_dir()
        });

        Self::new(base.join("scanforchange").join(TOKEN_KEY))
    }

    /// Where the token lives.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl CredentialStore for FileStore {
    fn load(&self) -> Option<Credential> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Credential::new(contents.trim_end()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => {
                tracing::warn!("failed to read {}: {err}", self.path.display());
                None
            }
        }
    }

    fn store(&self, credential: &Credential) {
        if let Some(parent) = self.path.parent() {
            if let Err(err) = std::fs::create_dir_all(parent) {
                tracing::error!("failed to create {}: {err}", parent.display());
                return;
            }
        }

        if let Err(err) = std::fs::write(&self.path, credential.as_str()) {
            tracing::error!("failed to persist credential: {err}");
        }
    }

    fn clear(&self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => tracing::error!("failed to remove {}: {err}", self.path.display()),
        }
    }
}
