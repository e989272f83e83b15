//! Test doubles for driving the session subsystem without a browser.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use futures::channel::oneshot;
use futures::future::LocalBoxFuture;

use super::{SessionController, SessionDeps, SessionStore, SessionValidator};
use crate::config::SessionConfig;
use crate::net::api::{ApiError, SessionApi};
use crate::net::types::User;
use crate::state::notices::Notices;
use crate::util::interval::{IntervalHandle, Scheduler, Tick};
use crate::util::navigation::Navigator;

pub fn user(id: &str) -> User {
    User {
        id: id.to_owned(),
        name: format!("User {id}"),
        email: format!("{id}@petdesk.test"),
        role: Some("ADMIN".to_owned()),
        company_id: Some("c-1".to_owned()),
        clinic_id: None,
        panel_id: None,
        panel_type: None,
        panels: Vec::new(),
    }
}

/// Scripted [`SessionApi`]. Each operation pops its next queued result and
/// falls back to a fixed default once the queue is empty.
#[derive(Default)]
pub struct StubApi {
    current_user: RefCell<VecDeque<Result<User, ApiError>>>,
    gated_user: RefCell<Option<oneshot::Receiver<Result<User, ApiError>>>>,
    gated_logout: RefCell<Option<oneshot::Receiver<Result<(), ApiError>>>>,
    gated_select_panel: RefCell<Option<oneshot::Receiver<Result<User, ApiError>>>>,
    verify: RefCell<VecDeque<Result<(), ApiError>>>,
    login: RefCell<VecDeque<Result<User, ApiError>>>,
    logout: RefCell<VecDeque<Result<(), ApiError>>>,
    select_panel: RefCell<VecDeque<Result<User, ApiError>>>,
    calls: RefCell<Vec<&'static str>>,
}

impl StubApi {
    pub fn push_current_user(&self, result: Result<User, ApiError>) {
        self.current_user.borrow_mut().push_back(result);
    }

    /// Make the next identity call wait until the returned sender fires.
    pub fn gate_current_user(&self) -> oneshot::Sender<Result<User, ApiError>> {
        let (tx, rx) = oneshot::channel();
        *self.gated_user.borrow_mut() = Some(rx);
        tx
    }

    /// Make the next remote logout wait until the returned sender fires.
    pub fn gate_logout(&self) -> oneshot::Sender<Result<(), ApiError>> {
        let (tx, rx) = oneshot::channel();
        *self.gated_logout.borrow_mut() = Some(rx);
        tx
    }

    /// Make the next panel selection wait until the returned sender fires.
    pub fn gate_select_panel(&self) -> oneshot::Sender<Result<User, ApiError>> {
        let (tx, rx) = oneshot::channel();
        *self.gated_select_panel.borrow_mut() = Some(rx);
        tx
    }

    pub fn push_verify(&self, result: Result<(), ApiError>) {
        self.verify.borrow_mut().push_back(result);
    }

    pub fn push_login(&self, result: Result<User, ApiError>) {
        self.login.borrow_mut().push_back(result);
    }

    pub fn push_logout(&self, result: Result<(), ApiError>) {
        self.logout.borrow_mut().push_back(result);
    }

    pub fn push_select_panel(&self, result: Result<User, ApiError>) {
        self.select_panel.borrow_mut().push_back(result);
    }

    pub fn count(&self, op: &str) -> usize {
        self.calls.borrow().iter().filter(|c| **c == op).count()
    }

    fn record(&self, op: &'static str) {
        self.calls.borrow_mut().push(op);
    }
}

impl SessionApi for StubApi {
    fn current_user(&self) -> LocalBoxFuture<'_, Result<User, ApiError>> {
        self.record("current_user");
        if let Some(rx) = self.gated_user.borrow_mut().take() {
            return Box::pin(released(rx));
        }
        let next = self.current_user.borrow_mut().pop_front().unwrap_or(Err(ApiError::Unauthorized));
        Box::pin(async move { next })
    }

    fn verify_session(&self) -> LocalBoxFuture<'_, Result<(), ApiError>> {
        self.record("verify_session");
        let next = self.verify.borrow_mut().pop_front().unwrap_or(Ok(()));
        Box::pin(async move { next })
    }

    fn login<'a>(&'a self, _identifier: &'a str, _secret: &'a str) -> LocalBoxFuture<'a, Result<User, ApiError>> {
        self.record("login");
        let next = self
            .login
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::InvalidCredentials("Invalid email or password".to_owned())));
        Box::pin(async move { next })
    }

    fn logout(&self) -> LocalBoxFuture<'_, Result<(), ApiError>> {
        self.record("logout");
        if let Some(rx) = self.gated_logout.borrow_mut().take() {
            return Box::pin(released(rx));
        }
        let next = self.logout.borrow_mut().pop_front().unwrap_or(Ok(()));
        Box::pin(async move { next })
    }

    fn select_panel<'a>(&'a self, _panel_id: &'a str, _panel_type: &'a str) -> LocalBoxFuture<'a, Result<User, ApiError>> {
        self.record("select_panel");
        if let Some(rx) = self.gated_select_panel.borrow_mut().take() {
            return Box::pin(released(rx));
        }
        let next = self.select_panel.borrow_mut().pop_front().unwrap_or(Err(ApiError::Unauthorized));
        Box::pin(async move { next })
    }
}

async fn released<T>(rx: oneshot::Receiver<Result<T, ApiError>>) -> Result<T, ApiError> {
    rx.await.unwrap_or_else(|_| Err(ApiError::Network("gate dropped".to_owned())))
}

struct Slot {
    period: Duration,
    tick: Tick,
    active: Rc<Cell<bool>>,
}

/// Scheduler whose intervals only fire when the test says so.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    slots: Rc<RefCell<Vec<Slot>>>,
}

impl ManualScheduler {
    pub fn active_count(&self) -> usize {
        self.slots.borrow().iter().filter(|s| s.active.get()).count()
    }

    pub fn armed_total(&self) -> usize {
        self.slots.borrow().len()
    }

    pub fn active_periods(&self) -> Vec<Duration> {
        self.slots.borrow().iter().filter(|s| s.active.get()).map(|s| s.period).collect()
    }

    /// Fire every active interval once, running each tick to completion.
    pub fn fire(&self) {
        let ticks: Vec<Tick> = self
            .slots
            .borrow()
            .iter()
            .filter(|s| s.active.get())
            .map(|s| Rc::clone(&s.tick))
            .collect();
        for tick in ticks {
            futures::executor::block_on(tick());
        }
    }
}

impl Scheduler for ManualScheduler {
    fn every(&self, period: Duration, tick: Tick) -> IntervalHandle {
        let active = Rc::new(Cell::new(true));
        self.slots.borrow_mut().push(Slot { period, tick, active: Rc::clone(&active) });
        IntervalHandle::new(move || active.set(false))
    }
}

/// Everything a session test needs, wired together.
pub struct Harness {
    pub api: Rc<StubApi>,
    pub scheduler: ManualScheduler,
    pub navigations: Rc<RefCell<Vec<(String, bool)>>>,
    pub notices: Notices,
    pub store: SessionStore,
    pub validator: SessionValidator,
    pub controller: SessionController,
}

impl Harness {
    pub fn new() -> Self {
        let api = Rc::new(StubApi::default());
        let scheduler = ManualScheduler::default();
        let navigations = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&navigations);
        let navigator = Navigator::new(move |path, opts| log.borrow_mut().push((path.to_owned(), opts.replace)));
        let notices = Notices::new();
        let store = SessionStore::new();
        let validator = SessionValidator::new(SessionDeps {
            api: Rc::clone(&api) as Rc<dyn SessionApi>,
            store,
            scheduler: Rc::new(scheduler.clone()),
            navigator,
            notices,
            config: SessionConfig::default(),
        });
        let controller = SessionController::new(validator.clone());
        Self { api, scheduler, navigations, notices, store, validator, controller }
    }

    /// Boot with a successful identity call for `id`.
    pub fn booted_as(id: &str) -> Self {
        let h = Self::new();
        h.api.push_current_user(Ok(user(id)));
        futures::executor::block_on(h.validator.boot());
        h
    }

    pub fn navigations(&self) -> Vec<(String, bool)> {
        self.navigations.borrow().clone()
    }

    pub fn notice_messages(&self) -> Vec<String> {
        self.notices.snapshot().items.into_iter().map(|n| n.message).collect()
    }

    /// Assert the `user iff Authenticated` invariant on the current store.
    pub fn assert_invariant(&self) {
        let session = self.store.snapshot();
        assert_eq!(session.user().is_some(), session.is_authenticated(), "{session:?}");
    }
}
