//! Landing page for a module (`/{module}/dashboard`).

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::session::use_session;
use crate::util::module_context::resolve;

#[component]
pub fn ModuleHomePage() -> impl IntoView {
    let ctx = use_session();
    let location = use_location();
    let module = Memo::new(move |_| location.pathname.with(|path| resolve(path)));

    let greeting = move || {
        ctx.session
            .with(|s| s.user().map(|u| format!("Hello, {}", u.name)))
            .unwrap_or_default()
    };

    view! {
        <section class="module-home">
            <h1 class=move || module.get().display_color>{move || module.get().display_name}</h1>
            <p class="module-home__greeting">{greeting}</p>
            <p class="module-home__hint">
                {move || module.get().module.map(|m| m.description()).unwrap_or_default()}
            </p>
        </section>
    }
}
