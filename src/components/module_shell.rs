//! Authenticated layout: sidebar plus the routed page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered inside `RequireSession`, so a user is always present while it is
//! mounted. The sidebar title and colour follow the module resolved from the
//! current path; this is cosmetic and has no bearing on access.

#[cfg(test)]
#[path = "module_shell_test.rs"]
mod module_shell_test;

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_location;

use crate::session::use_session;
use crate::util::module_context::{module_route, resolve};

const BRAND: &str = "PetDesk";

/// Claim the logout slot; `false` while a logout is already running.
pub(crate) fn begin_logout(logging_out: RwSignal<bool>) -> bool {
    if logging_out.get_untracked() {
        return false;
    }
    logging_out.set(true);
    true
}

#[component]
pub fn ModuleShell() -> impl IntoView {
    let ctx = use_session();
    let location = use_location();
    let module = Memo::new(move |_| location.pathname.with(|path| resolve(path)));
    let home = ctx.home_path();

    let user_name = move || ctx.session.with(|s| s.user().map(|u| u.name.clone()).unwrap_or_default());
    let title = move || {
        let current = module.get();
        if current.is_in_module() { current.display_name } else { BRAND }
    };

    let logging_out = RwSignal::new(false);
    let on_logout = move |_| {
        let Some(controller) = ctx.controller() else {
            return;
        };
        if !begin_logout(logging_out) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            controller.logout().await;
            logging_out.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        drop(controller);
    };

    view! {
        <div class="module-shell">
            <aside class="module-shell__sidebar">
                <h2 class=move || format!("module-shell__title {}", module.get().display_color)>{title}</h2>
                <nav class="module-shell__nav">
                    <Show when=move || module.get().is_in_module()>
                        <a class="module-shell__link" href=move || module_route(&module.get(), "dashboard")>
                            "Dashboard"
                        </a>
                    </Show>
                    <a class="module-shell__link" href=home>
                        "Switch module"
                    </a>
                </nav>
                <div class="module-shell__footer">
                    <span class="module-shell__user">{user_name}</span>
                    <button
                        class="btn module-shell__logout"
                        on:click=on_logout
                        disabled=move || logging_out.get()
                        title="Logout"
                    >
                        "Logout"
                    </button>
                </div>
            </aside>
            <main class="module-shell__content">
                <Outlet/>
            </main>
        </div>
    }
}
