//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (timers, navigation)
//! and pure decision logic (guard, module context) from page and component
//! code to improve reuse and testability.

pub mod auth;
pub mod interval;
pub mod module_context;
pub mod navigation;
