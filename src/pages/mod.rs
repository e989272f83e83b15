//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates session changes to
//! `session::SessionController`.

pub mod login;
pub mod module_home;
pub mod select_module;
