//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the session through `session::use_session` and never write
//! to the store directly; every mutation goes through the controller.

pub mod module_shell;
pub mod notice_tray;
pub mod route_guard;
