//! Authentication decision for the current browser session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the route guard and shell chrome, written by the session validator
//! and controller (see `crate::session`). The identity is present exactly when
//! the status is `Authenticated`; the constructors are the only way to build a
//! `Session`, so no caller can produce a half-authenticated value.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

/// Where the authentication decision currently stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// Not yet resolved (boot or explicit refresh in flight).
    #[default]
    Pending,
    Authenticated,
    Unauthenticated,
}

/// Session status plus the identity that backs it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    status: SessionStatus,
    user: Option<User>,
}

impl Session {
    pub fn pending() -> Self {
        Self { status: SessionStatus::Pending, user: None }
    }

    pub fn authenticated(user: User) -> Self {
        Self { status: SessionStatus::Authenticated, user: Some(user) }
    }

    pub fn unauthenticated() -> Self {
        Self { status: SessionStatus::Unauthenticated, user: None }
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.status == SessionStatus::Pending
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Authenticated
    }
}
