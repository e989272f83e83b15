//! Gate for every protected area.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps the authenticated layout. While the session is pending it renders a
//! loading indicator, so protected markup never reaches the DOM (or the SSR
//! output) before the decision. Decision logic lives in `util::auth`.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::session::use_session;
use crate::util::auth::{GuardPhase, RouteGuard, install_guard_redirect};
use crate::util::navigation::Navigator;

/// Render `children` only once the session is known to be authenticated.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let ctx = use_session();
    let guard = RwSignal::new(RouteGuard::default());
    install_guard_redirect(ctx.session, guard, Navigator::from_router(), ctx.notices, ctx.login_path());

    let phase = Memo::new(move |_| guard.with(RouteGuard::phase));

    move || match phase.get() {
        GuardPhase::Checking => view! {
            <div class="session-check" role="status">
                <div class="session-check__spinner" aria-hidden="true"></div>
                <p class="session-check__label">"Checking session..."</p>
            </div>
        }
        .into_any(),
        GuardPhase::Allowed => children().into_any(),
        GuardPhase::Redirecting => ().into_any(),
    }
}
