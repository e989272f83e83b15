//! Session lifecycle: store, validator, controller and the provider that wires
//! them into the component tree.
//!
//! ARCHITECTURE
//! ============
//! `SessionValidator` → `SessionStore` ← `SessionController`. The store is the
//! only place authentication is decided; the route guard and shell read it
//! through [`SessionContext`].

pub mod context;
pub mod controller;
pub mod store;
pub mod validator;

#[cfg(test)]
pub(crate) mod testing;

pub use context::{SessionContext, SessionProvider, use_session};
pub use controller::SessionController;
pub use store::SessionStore;
pub use validator::{SessionDeps, SessionValidator};
