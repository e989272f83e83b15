//! Backend access for the session subsystem.
//!
//! `types` holds the wire shapes; `api` the `SessionApi` seam and its HTTP
//! implementation.

pub mod api;
pub mod types;
