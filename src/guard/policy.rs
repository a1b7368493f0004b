//! Guard decision functions and their composition.
//!
//! ORDERING
//! ========
//! Redirect-capable guards run in registration order and the first
//! `RedirectTo` wins; the rest are skipped for that navigation. Layout
//! selection always runs regardless of redirect outcome, because it
//! affects whichever page ends up rendered, redirect target included.

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;

use crate::context::RenderContext;
use crate::session::SessionVerdict;

/// Login page path; redirect target for unauthenticated navigation.
pub const LOGIN_PATH: &str = "/login";

/// Authenticated landing page; redirect target away from guest pages.
pub const HOME_PATH: &str = "/";

/// First-run introduction page.
pub const INTRO_PATH: &str = "/intro";

/// Destinations reserved for signed-out visitors.
const GUEST_PATHS: [&str; 1] = [LOGIN_PATH];

/// Layouts the rendering layer can be asked to apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// Full application chrome for signed-in users.
    Default,
    /// Reduced chrome for anonymous visitors.
    NotAuthenticated,
}

impl Layout {
    /// Layout matching a session verdict.
    #[must_use]
    pub fn for_verdict(verdict: &SessionVerdict) -> Self {
        if verdict.is_active() {
            Self::Default
        } else {
            Self::NotAuthenticated
        }
    }
}

/// Decision a guard emits for one navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Navigation continues to its destination.
    Proceed,
    /// Navigation is replaced by a redirect to the given path.
    RedirectTo(&'static str),
    /// The rendering layer should apply the given layout.
    SetLayout(Layout),
    /// No decision could be made in this context (server render pass);
    /// the client pass re-evaluates from scratch.
    Deferred,
}

/// Redirect-capable policies a route can register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoutePolicy {
    /// Only signed-in users may visit; everyone else goes to login.
    RequireAuth,
    /// Signed-in users are bounced from guest pages to the home page.
    GuestOnly,
    /// Entry routes send visitors without a session to the intro page.
    FirstRun,
}

/// Redirect to the login page unless the session is active.
///
/// Never redirects during a server render pass: storage does not exist
/// there, so a negative verdict would be a false one and would break
/// the server render of a legitimately signed-in user.
#[must_use]
pub fn require_auth(ctx: RenderContext, verdict: &SessionVerdict) -> GuardOutcome {
    if ctx == RenderContext::Server {
        return GuardOutcome::Deferred;
    }
    match verdict {
        SessionVerdict::Active(_) => GuardOutcome::Proceed,
        SessionVerdict::Absent | SessionVerdict::Invalid | SessionVerdict::Expired => {
            GuardOutcome::RedirectTo(LOGIN_PATH)
        }
    }
}

/// Bounce an active session away from guest-only destinations.
#[must_use]
pub fn guest_only(to: &str, verdict: &SessionVerdict) -> GuardOutcome {
    if verdict.is_active() && GUEST_PATHS.contains(&to) {
        GuardOutcome::RedirectTo(HOME_PATH)
    } else {
        GuardOutcome::Proceed
    }
}

/// Send visitors without a session to the intro page.
///
/// Registered only on entry routes, unlike `require_auth` which
/// protects everything behind the login wall; the two differ in both
/// target and reach.
#[must_use]
pub fn first_run(ctx: RenderContext, verdict: &SessionVerdict) -> GuardOutcome {
    if ctx == RenderContext::Server {
        return GuardOutcome::Deferred;
    }
    if verdict.is_active() {
        GuardOutcome::Proceed
    } else {
        GuardOutcome::RedirectTo(INTRO_PATH)
    }
}

/// Pick the page layout for a verdict. Never blocks navigation.
#[must_use]
pub fn select_layout(verdict: &SessionVerdict) -> GuardOutcome {
    GuardOutcome::SetLayout(Layout::for_verdict(verdict))
}

/// Combined decision for one navigation: control flow plus layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationDecision {
    /// `Proceed`, the winning `RedirectTo`, or `Deferred`.
    pub control: GuardOutcome,
    /// Layout for whichever page ends up rendered.
    pub layout: Layout,
}

/// Run a route's registered policies for one navigation.
///
/// A guard decision is single-shot per navigation event; there are no
/// retries, and a new navigation re-evaluates from scratch with a fresh
/// verdict.
#[must_use]
pub fn run_route_guards(
    policies: &[RoutePolicy],
    ctx: RenderContext,
    to: &str,
    verdict: &SessionVerdict,
) -> NavigationDecision {
    let mut control = GuardOutcome::Proceed;
    for policy in policies {
        let outcome = match policy {
            RoutePolicy::RequireAuth => require_auth(ctx, verdict),
            RoutePolicy::GuestOnly => guest_only(to, verdict),
            RoutePolicy::FirstRun => first_run(ctx, verdict),
        };
        match outcome {
            GuardOutcome::RedirectTo(_) => {
                control = outcome;
                break;
            }
            GuardOutcome::Deferred => control = GuardOutcome::Deferred,
            GuardOutcome::Proceed | GuardOutcome::SetLayout(_) => {}
        }
    }
    NavigationDecision {
        control,
        layout: Layout::for_verdict(verdict),
    }
}
