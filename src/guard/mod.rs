//! Route guard policies.
//!
//! Each policy is a pure function of the render context, the destination
//! path, and the session verdict. Which policies a route registers is
//! the router's concern; this module only implements the decision each
//! policy makes and the ordering rule that composes them.

pub mod policy;

pub use policy::{GuardOutcome, Layout, NavigationDecision, RoutePolicy, run_route_guards};
