//! Session provider component and the context it installs.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionProvider` sits inside `<Router>` (it needs `use_navigate`) and above
//! every route. It owns the store for the lifetime of the app, starts the boot
//! check in the browser and cancels the verification interval on teardown.
//!
//! Server renders never run session actions and never boot: the session stays
//! `Pending`, so guarded routes render their loading state on the server and
//! hydrate without a flash of protected content.

use std::rc::Rc;

use leptos::prelude::*;

use super::{SessionController, SessionDeps, SessionStore, SessionValidator};
use crate::config::SessionConfig;
use crate::net::api::HttpSessionApi;
use crate::state::notices::Notices;
use crate::state::session::Session;
use crate::util::interval::BrowserScheduler;
use crate::util::navigation::Navigator;

/// Everything components need to read or act on the session.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub session: ReadSignal<Session>,
    pub notices: Notices,
    config: StoredValue<SessionConfig>,
    controller: Option<StoredValue<SessionController, LocalStorage>>,
}

impl SessionContext {
    /// Controller handle; `None` during server rendering.
    pub fn controller(&self) -> Option<SessionController> {
        self.controller.and_then(|c| c.try_get_value())
    }

    pub fn login_path(&self) -> String {
        self.config.with_value(|c| c.login_path.clone())
    }

    pub fn home_path(&self) -> String {
        self.config.with_value(|c| c.home_path.clone())
    }
}

/// Fetch the session context installed by [`SessionProvider`].
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

/// Construct the session subsystem and expose it to `children`.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let config = SessionConfig::from_build_env();
    let store = SessionStore::new();
    let notices = Notices::new();

    let validator = SessionValidator::new(SessionDeps {
        api: Rc::new(HttpSessionApi::new(config.api_base_url.clone())),
        store,
        scheduler: Rc::new(BrowserScheduler),
        navigator: Navigator::from_router(),
        notices,
        config: config.clone(),
    });
    let controller = keep_local(SessionController::new(validator.clone()));

    provide_context(SessionContext {
        session: store.session(),
        notices,
        config: StoredValue::new(config),
        controller,
    });

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move { validator.boot().await });
    #[cfg(not(feature = "hydrate"))]
    drop(validator);

    if let Some(controller) = controller {
        on_cleanup(move || {
            if let Some(c) = controller.try_get_value() {
                c.validator().shutdown();
            }
        });
    }

    children()
}

// Browser-only handles stay out of the server's arena.
fn keep_local<T: 'static>(value: T) -> Option<StoredValue<T, LocalStorage>> {
    #[cfg(feature = "ssr")]
    {
        drop(value);
        None
    }
    #[cfg(not(feature = "ssr"))]
    {
        Some(StoredValue::new_local(value))
    }
}
