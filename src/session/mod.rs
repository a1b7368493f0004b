//! Session credential lifecycle: storage, decoding, and evaluation.
//!
//! DESIGN
//! ======
//! Split by concern so each piece stays small and testable on its own:
//! `store` owns the persistent token slot, `token` performs structural
//! claim decoding, and `evaluator` combines the two into the session
//! verdict every route guard consumes.

pub mod evaluator;
pub mod store;
pub mod token;

pub use evaluator::{SessionUser, SessionVerdict};
pub use store::CredentialStore;
