//! Execution context for guard and storage decisions.
//!
//! The previous frontend distinguished the server and client render
//! passes through ambient globals checked deep inside each middleware.
//! Here the context is an explicit parameter to every guard, making the
//! deferred branch a first-class input instead of a hidden global read.

/// Where a navigation is being evaluated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderContext {
    /// Running in the browser; storage and navigation are available.
    Client,
    /// Running during a server render pass; storage does not exist, so
    /// a negative session verdict would be a false one.
    Server,
}

impl RenderContext {
    /// Detect the current execution context.
    #[must_use]
    pub fn current() -> Self {
        #[cfg(feature = "hydrate")]
        {
            if web_sys::window().is_some() {
                Self::Client
            } else {
                Self::Server
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::Server
        }
    }

    /// Whether this is the browser pass.
    #[must_use]
    pub fn is_client(self) -> bool {
        matches!(self, Self::Client)
    }
}
