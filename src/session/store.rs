//! Persistent credential storage.
//!
//! A single `localStorage` slot holds the raw bearer token. Storage
//! failures (disabled API, security errors) degrade to "no credential"
//! with a diagnostic log instead of surfacing to callers; a request is
//! always better sent unauthenticated than not sent at all.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;

/// `localStorage` key holding the raw bearer token.
pub const STORAGE_KEY: &str = "auth_token";

/// Single-slot store for the opaque bearer credential.
///
/// Last write wins; there is no locking because all access is
/// synchronous and single-threaded within one client instance.
pub trait CredentialStore {
    /// Read the stored credential, if any.
    fn get(&self) -> Option<String>;

    /// Replace the stored credential.
    fn set(&self, token: &str);

    /// Remove the stored credential.
    fn clear(&self);
}

/// Store backed by browser `localStorage`.
///
/// In non-browser builds every operation is a deterministic no-op and
/// `get` returns `None`, matching the server render pass where client
/// storage does not exist.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl BrowserStore {
    #[cfg(feature = "hydrate")]
    fn storage() -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match window.local_storage() {
            Ok(Some(storage)) => Some(storage),
            Ok(None) => None,
            Err(_) => {
                log::warn!("localStorage unavailable; treating credential as absent");
                None
            }
        }
    }
}

impl CredentialStore for BrowserStore {
    fn get(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = Self::storage()?;
            match storage.get_item(STORAGE_KEY) {
                Ok(value) => value,
                Err(_) => {
                    log::warn!("credential read failed; treating credential as absent");
                    None
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn set(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = Self::storage() {
                if storage.set_item(STORAGE_KEY, token).is_err() {
                    log::warn!("credential write failed");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = Self::storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}

/// In-memory store for tests and host-side evaluation.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RefCell<Option<String>>,
}

impl MemoryStore {
    /// Create a store pre-loaded with a token.
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self {
            slot: RefCell::new(Some(token.to_owned())),
        }
    }
}

impl CredentialStore for MemoryStore {
    fn get(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn set(&self, token: &str) {
        *self.slot.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.slot.borrow_mut() = None;
    }
}
