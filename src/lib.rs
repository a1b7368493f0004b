//! # client-auth
//!
//! Client-side session guard layer for the web application frontend.
//! Decides, on every navigation and every outbound request, whether the
//! current user holds a valid, non-expired credential, and enforces
//! route-level and request-level access policy from that verdict.
//!
//! This crate owns the credential storage slot, structural token
//! decoding, session evaluation, request authentication headers, and
//! the route guard policies. Routing tables, page rendering, and
//! credential issuance live with external collaborators that consume
//! the decisions made here.

pub mod context;
pub mod guard;
pub mod net;
pub mod session;

/// Install browser logging and panic reporting hooks.
///
/// Safe to call more than once. No-op outside hydrate builds, where the
/// host environment is expected to configure its own `log` backend.
pub fn init_diagnostics() {
    #[cfg(feature = "hydrate")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);
    }
}
