//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `notify`, `guard`) so individual
//! components can depend on small focused models. Transitions are pure and
//! unit-tested; the async orchestration that drives them lives in `actions`
//! with the network calls gated to the browser build.

pub mod actions;
pub mod guard;
pub mod notify;
pub mod session;
