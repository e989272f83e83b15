//! Session validation: the boot-time identity check and the periodic
//! re-verification of an authenticated session.
//!
//! SYSTEM CONTEXT
//! ==============
//! `boot` runs once per application load from the session provider. While the
//! store reports `Authenticated`, exactly one interval is armed; every tick
//! calls `verify_session`. A failed tick expires the session: timer cancelled,
//! store cleared, notice shown, replace-navigation to the login entry point.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here returns an error. Every remote failure, network or
//! unauthorized, folds into `Unauthenticated`. Failures are not retried before
//! the next scheduled tick.
//!
//! CONCURRENCY
//! ===========
//! Remote calls suspend; logout, login or teardown may run meanwhile. Each
//! such event bumps an epoch and results that settle under a stale epoch are
//! dropped, so a late identity response cannot resurrect a closed session.

#[cfg(test)]
#[path = "validator_test.rs"]
mod validator_test;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use futures::future::LocalBoxFuture;

use super::store::SessionStore;
use crate::config::SessionConfig;
use crate::net::api::{ApiError, SessionApi};
use crate::state::notices::Notices;
use crate::state::session::SessionStatus;
use crate::util::interval::{IntervalHandle, Scheduler, Tick};
use crate::util::navigation::Navigator;

pub(crate) const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please log in again.";

/// Collaborators shared by the validator and the controller.
pub struct SessionDeps {
    pub api: Rc<dyn SessionApi>,
    pub store: SessionStore,
    pub scheduler: Rc<dyn Scheduler>,
    pub navigator: Navigator,
    pub notices: Notices,
    pub config: SessionConfig,
}

struct ValidatorInner {
    deps: SessionDeps,
    booted: Cell<bool>,
    epoch: Cell<u64>,
    timer: RefCell<Option<IntervalHandle>>,
}

/// Cheap-to-clone handle; all clones share one timer and one epoch.
#[derive(Clone)]
pub struct SessionValidator {
    inner: Rc<ValidatorInner>,
}

impl SessionValidator {
    pub fn new(deps: SessionDeps) -> Self {
        Self {
            inner: Rc::new(ValidatorInner {
                deps,
                booted: Cell::new(false),
                epoch: Cell::new(0),
                timer: RefCell::new(None),
            }),
        }
    }

    pub(crate) fn deps(&self) -> &SessionDeps {
        &self.inner.deps
    }

    pub fn store(&self) -> SessionStore {
        self.inner.deps.store
    }

    /// Resolve the initial `Pending` state. Only the first call per
    /// validator does any work.
    pub async fn boot(&self) {
        if self.inner.booted.replace(true) {
            return;
        }
        let epoch = self.current_epoch();
        self.resolve_identity(epoch).await;
    }

    /// Whether an interval is currently armed.
    pub fn is_armed(&self) -> bool {
        self.inner.timer.borrow().is_some()
    }

    /// Run one verification round. Called by the interval.
    pub async fn verify_once(&self) {
        if self.store().status() != SessionStatus::Authenticated {
            return;
        }
        let epoch = self.current_epoch();
        let result = self.inner.deps.api.verify_session().await;
        if let Err(err) = result {
            if self.is_current(epoch) {
                self.expire(&err);
            }
        }
    }

    /// Cancel the timer and drop in-flight results. Used on teardown.
    pub fn shutdown(&self) {
        self.advance_epoch();
        self.disarm();
    }

    /// Call the identity endpoint and settle the store, unless `epoch` went
    /// stale while waiting.
    pub(crate) async fn resolve_identity(&self, epoch: u64) {
        let result = self.inner.deps.api.current_user().await;
        if !self.is_current(epoch) {
            leptos::logging::log!("session: discarding stale identity result");
            return;
        }
        match result {
            Ok(user) => {
                self.store().authenticate(user);
                self.arm();
            }
            Err(err) => {
                log_identity_failure(&err);
                self.disarm();
                self.store().clear();
            }
        }
    }

    /// Start a new epoch; results from earlier epochs are ignored.
    pub(crate) fn advance_epoch(&self) -> u64 {
        let next = self.inner.epoch.get().wrapping_add(1);
        self.inner.epoch.set(next);
        next
    }

    pub(crate) fn current_epoch(&self) -> u64 {
        self.inner.epoch.get()
    }

    pub(crate) fn is_current(&self, epoch: u64) -> bool {
        self.inner.epoch.get() == epoch
    }

    /// Arm the verification interval, replacing any previous one.
    pub(crate) fn arm(&self) {
        self.disarm();
        let handle = self.inner.deps.scheduler.every(self.inner.deps.config.check_interval, self.tick());
        *self.inner.timer.borrow_mut() = Some(handle);
    }

    pub(crate) fn disarm(&self) {
        let previous = self.inner.timer.borrow_mut().take();
        if let Some(handle) = previous {
            handle.cancel();
        }
    }

    fn tick(&self) -> Tick {
        let weak: Weak<ValidatorInner> = Rc::downgrade(&self.inner);
        Rc::new(move || -> LocalBoxFuture<'static, ()> {
            let weak = weak.clone();
            Box::pin(async move {
                if let Some(inner) = weak.upgrade() {
                    SessionValidator { inner }.verify_once().await;
                }
            })
        })
    }

    fn expire(&self, err: &ApiError) {
        leptos::logging::warn!("session: verification failed, expiring session: {err}");
        let deps = &self.inner.deps;
        self.advance_epoch();
        self.disarm();
        deps.store.clear();
        deps.notices.error(SESSION_EXPIRED_MESSAGE);
        deps.navigator.replace(&deps.config.login_path);
    }
}

// Network loss and a rejected cookie both end the session; only the log line
// tells them apart.
fn log_identity_failure(err: &ApiError) {
    match err {
        ApiError::Unauthorized => leptos::logging::log!("session: no valid session"),
        other => leptos::logging::warn!("session: identity check failed: {other}"),
    }
}
