use super::*;
use std::cell::RefCell;
use std::rc::Rc;

fn run(statuses: &[SessionStatus]) -> (RouteGuard, Vec<GuardAction>) {
    let mut guard = RouteGuard::default();
    let actions = statuses.iter().map(|s| guard.observe(*s)).collect();
    (guard, actions)
}

#[test]
fn starts_checking() {
    assert_eq!(RouteGuard::default().phase(), GuardPhase::Checking);
}

#[test]
fn pending_keeps_checking_without_redirect() {
    let (guard, actions) = run(&[SessionStatus::Pending, SessionStatus::Pending]);
    assert_eq!(guard.phase(), GuardPhase::Checking);
    assert!(actions.iter().all(|a| *a == GuardAction::None));
}

#[test]
fn authenticated_allows_content() {
    let (guard, actions) = run(&[SessionStatus::Pending, SessionStatus::Authenticated]);
    assert_eq!(guard.phase(), GuardPhase::Allowed);
    assert_eq!(actions, [GuardAction::None, GuardAction::None]);
}

#[test]
fn unauthenticated_after_pending_redirects_once() {
    let (guard, actions) = run(&[
        SessionStatus::Pending,
        SessionStatus::Unauthenticated,
        SessionStatus::Unauthenticated,
        SessionStatus::Pending,
        SessionStatus::Unauthenticated,
    ]);
    assert_eq!(guard.phase(), GuardPhase::Redirecting);
    let redirects = actions.iter().filter(|a| **a == GuardAction::RedirectToLogin).count();
    assert_eq!(redirects, 1);
}

#[test]
fn redirecting_is_terminal_even_if_session_recovers() {
    let (guard, _) = run(&[SessionStatus::Unauthenticated, SessionStatus::Authenticated]);
    assert_eq!(guard.phase(), GuardPhase::Redirecting);
}

#[test]
fn logout_from_allowed_hides_content_without_second_redirect() {
    let (guard, actions) = run(&[SessionStatus::Authenticated, SessionStatus::Unauthenticated]);
    assert_eq!(guard.phase(), GuardPhase::Redirecting);
    assert_eq!(actions, [GuardAction::None, GuardAction::None]);
}

#[test]
fn failed_refresh_redirects() {
    let (guard, actions) = run(&[
        SessionStatus::Authenticated,
        SessionStatus::Pending,
        SessionStatus::Unauthenticated,
    ]);
    assert_eq!(guard.phase(), GuardPhase::Redirecting);
    assert_eq!(actions[2], GuardAction::RedirectToLogin);
}

#[test]
fn refresh_returns_to_checking_then_allowed() {
    let mut guard = RouteGuard::default();
    guard.observe(SessionStatus::Authenticated);
    guard.observe(SessionStatus::Pending);
    assert_eq!(guard.phase(), GuardPhase::Checking);
    guard.observe(SessionStatus::Authenticated);
    assert_eq!(guard.phase(), GuardPhase::Allowed);
}

// =============================================================
// Redirect step
// =============================================================

fn recording_navigator() -> (Navigator, Rc<RefCell<Vec<(String, bool)>>>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let navigator = Navigator::new(move |path, opts| sink.borrow_mut().push((path.to_owned(), opts.replace)));
    (navigator, log)
}

#[test]
fn guard_step_replaces_to_login_once_with_notice() {
    let (navigator, log) = recording_navigator();
    let notices = Notices::new();
    let guard = RwSignal::new(RouteGuard::default());

    for status in [SessionStatus::Pending, SessionStatus::Unauthenticated, SessionStatus::Unauthenticated] {
        apply_guard_status(status, guard, &navigator, notices, "/login");
    }

    assert_eq!(*log.borrow(), [("/login".to_owned(), true)]);
    let messages: Vec<String> = notices.snapshot().items.into_iter().map(|n| n.message).collect();
    assert_eq!(messages, [PLEASE_LOG_IN]);
    assert_eq!(guard.get_untracked().phase(), GuardPhase::Redirecting);
}

#[test]
fn guard_step_leaves_navigation_to_logout() {
    let (navigator, log) = recording_navigator();
    let notices = Notices::new();
    let guard = RwSignal::new(RouteGuard::default());

    apply_guard_status(SessionStatus::Authenticated, guard, &navigator, notices, "/login");
    let action = apply_guard_status(SessionStatus::Unauthenticated, guard, &navigator, notices, "/login");

    assert_eq!(action, GuardAction::None);
    assert!(log.borrow().is_empty());
    assert!(notices.snapshot().items.is_empty());
}

#[test]
fn guard_step_stays_quiet_while_pending() {
    let (navigator, log) = recording_navigator();
    let notices = Notices::new();
    let guard = RwSignal::new(RouteGuard::default());

    let action = apply_guard_status(SessionStatus::Pending, guard, &navigator, notices, "/login");

    assert_eq!(action, GuardAction::None);
    assert!(log.borrow().is_empty());
    assert_eq!(guard.get_untracked().phase(), GuardPhase::Checking);
}
