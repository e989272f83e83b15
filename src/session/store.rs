//! The single authoritative session record.
//!
//! Readers get a `ReadSignal<Session>` (reactive) or a snapshot (untracked).
//! Writers are crate-private and reachable only from the validator and the
//! controller.

use leptos::prelude::*;

use crate::net::types::User;
use crate::state::session::{Session, SessionStatus};

#[derive(Clone, Copy, Debug)]
pub struct SessionStore {
    session: RwSignal<Session>,
}

impl SessionStore {
    /// A fresh store in the `Pending` state.
    pub fn new() -> Self {
        Self { session: RwSignal::new(Session::pending()) }
    }

    pub fn session(&self) -> ReadSignal<Session> {
        self.session.read_only()
    }

    pub fn snapshot(&self) -> Session {
        self.session.get_untracked()
    }

    pub fn status(&self) -> SessionStatus {
        self.session.with_untracked(Session::status)
    }

    pub(crate) fn mark_pending(&self) {
        self.replace(Session::pending());
    }

    pub(crate) fn authenticate(&self, user: User) {
        self.replace(Session::authenticated(user));
    }

    pub(crate) fn clear(&self) {
        self.replace(Session::unauthenticated());
    }

    fn replace(&self, next: Session) {
        let from = self.status();
        if from != next.status() {
            leptos::logging::log!("session: {from:?} -> {:?}", next.status());
        }
        self.session.set(next);
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
