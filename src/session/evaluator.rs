//! Session verdict evaluation.
//!
//! Combines the credential store and token decoder into the single
//! classification every route guard consumes. The verdict is never
//! cached: storage can be mutated out-of-band (another tab logging
//! out), so each navigation re-reads the slot from scratch.

#[cfg(test)]
#[path = "evaluator_test.rs"]
mod evaluator_test;

use super::store::CredentialStore;
use super::token;

/// Identity decoded from an active credential.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionUser {
    /// Opaque subject identifier.
    pub id: String,
    /// Display name.
    pub username: String,
}

/// Classification of the current session.
///
/// `Invalid` and `Expired` are treated the same as `Absent` by every
/// policy; they stay distinct variants so diagnostics can tell a
/// missing token from a corrupted or stale one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionVerdict {
    /// No credential in the store.
    Absent,
    /// A credential was stored but failed structural decoding.
    Invalid,
    /// The credential decoded but its expiry has passed.
    Expired,
    /// The credential is present, well-formed, and fresh.
    Active(SessionUser),
}

impl SessionVerdict {
    /// Whether the verdict represents a live session.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }
}

/// Evaluate the session against the wall clock.
pub fn evaluate(store: &dyn CredentialStore) -> SessionVerdict {
    evaluate_at(store, now_epoch_seconds())
}

/// Evaluate the session at an explicit instant.
///
/// A credential that fails decoding or is past expiry is evicted from
/// the store before the verdict is returned, so a repeat call in the
/// same tick reports `Absent` instead of re-deriving the failure from
/// a known-dead token. Eviction is the only side effect.
pub fn evaluate_at(store: &dyn CredentialStore, now: u64) -> SessionVerdict {
    let Some(credential) = store.get() else {
        return SessionVerdict::Absent;
    };

    let claims = match token::decode(&credential) {
        Ok(claims) => claims,
        Err(err) => {
            log::warn!("evicting undecodable credential: {err}");
            store.clear();
            return SessionVerdict::Invalid;
        }
    };

    if claims.eat <= now {
        log::warn!("evicting expired credential (eat={})", claims.eat);
        store.clear();
        return SessionVerdict::Expired;
    }

    SessionVerdict::Active(SessionUser {
        id: claims.id,
        username: claims.username,
    })
}

/// Current wall-clock time in seconds since the Unix epoch.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn now_epoch_seconds() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        (js_sys::Date::now() / 1000.0) as u64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_secs())
    }
}
