//! Route-guard decision logic.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected area goes through `components::route_guard::RequireSession`,
//! which feeds session status changes into one [`RouteGuard`] per mount. The
//! guard never redirects while the session is pending and redirects at most
//! once per mount.
//!
//! A session that drops to `Unauthenticated` while content is shown was ended
//! by logout or expiry; both writers already navigate to the login entry
//! point, so the guard only hides content in that case.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::state::notices::Notices;
use crate::state::session::{Session, SessionStatus};
use crate::util::navigation::Navigator;

const PLEASE_LOG_IN: &str = "Please log in to continue.";

/// What the protected area is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuardPhase {
    /// Waiting for the session decision; shows a loading indicator.
    #[default]
    Checking,
    Allowed,
    /// Redirect issued (or owned by another writer); renders nothing.
    Redirecting,
}

/// Side effect requested by a status observation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuardAction {
    #[default]
    None,
    RedirectToLogin,
}

/// Per-mount guard state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteGuard {
    phase: GuardPhase,
}

impl RouteGuard {
    pub fn phase(&self) -> GuardPhase {
        self.phase
    }

    /// Feed the latest session status; returns the side effect to perform.
    pub fn observe(&mut self, status: SessionStatus) -> GuardAction {
        match (self.phase, status) {
            (GuardPhase::Redirecting, _) => GuardAction::None,
            (_, SessionStatus::Pending) => {
                self.phase = GuardPhase::Checking;
                GuardAction::None
            }
            (_, SessionStatus::Authenticated) => {
                self.phase = GuardPhase::Allowed;
                GuardAction::None
            }
            (GuardPhase::Checking, SessionStatus::Unauthenticated) => {
                self.phase = GuardPhase::Redirecting;
                GuardAction::RedirectToLogin
            }
            (GuardPhase::Allowed, SessionStatus::Unauthenticated) => {
                self.phase = GuardPhase::Redirecting;
                GuardAction::None
            }
        }
    }
}

/// Drive `guard` from `session`, redirecting unauthenticated visitors to
/// `login_path` with a replace navigation.
pub fn install_guard_redirect(
    session: ReadSignal<Session>,
    guard: RwSignal<RouteGuard>,
    navigator: Navigator,
    notices: Notices,
    login_path: String,
) {
    Effect::new(move || {
        let status = session.with(Session::status);
        apply_guard_status(status, guard, &navigator, notices, &login_path);
    });
}

/// One guard step: feed `status` to `guard` and perform the redirect it asks
/// for. Returns the action taken.
pub(crate) fn apply_guard_status(
    status: SessionStatus,
    guard: RwSignal<RouteGuard>,
    navigator: &Navigator,
    notices: Notices,
    login_path: &str,
) -> GuardAction {
    let action = guard.try_update(|g| g.observe(status)).unwrap_or_default();
    if action == GuardAction::RedirectToLogin {
        leptos::logging::log!("route guard: no session, redirecting to {login_path}");
        notices.info(PLEASE_LOG_IN);
        navigator.replace(login_path);
    }
    action
}
