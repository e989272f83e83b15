//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `notices`) so components depend on
//! small focused models. Writers for the session live in `crate::session`.

pub mod notices;
pub mod session;
