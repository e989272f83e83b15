//! Module selection: pick which business panel to work in.
//!
//! SYSTEM CONTEXT
//! ==============
//! Home route after login. Each card maps to one module; selecting an
//! available card switches the backend panel through the controller and then
//! opens that module's dashboard. Only one selection runs at a time.

#[cfg(test)]
#[path = "select_module_test.rs"]
mod select_module_test;

use leptos::prelude::*;

use crate::session::use_session;
use crate::util::module_context::{Module, ModuleCard, module_cards};
#[cfg(feature = "hydrate")]
use crate::util::navigation::Navigator;

const NO_ACCESS: &str = "You do not have access to this module.";

/// Panel id and type to send for `card`, or the message to show instead.
pub(crate) fn panel_request(card: &ModuleCard) -> Result<(String, &'static str), &'static str> {
    card.panel_id
        .clone()
        .map(|id| (id, card.module.panel_type()))
        .ok_or(NO_ACCESS)
}

fn card_class(card: &ModuleCard, selecting: Option<Module>) -> String {
    let mut class = String::from("module-card");
    if !card.is_available() {
        class.push_str(" module-card--disabled");
    }
    if card.is_active {
        class.push_str(" module-card--active");
    }
    if selecting == Some(card.module) {
        class.push_str(" module-card--selecting");
    }
    class
}

#[component]
pub fn SelectModulePage() -> impl IntoView {
    let ctx = use_session();
    #[cfg(feature = "hydrate")]
    let navigator = StoredValue::new_local(Navigator::from_router());
    let selecting = RwSignal::new(None::<Module>);

    let cards = move || ctx.session.with(|s| s.user().map(module_cards).unwrap_or_default());

    let on_select = move |card: ModuleCard| {
        let (panel_id, panel_type) = match panel_request(&card) {
            Ok(request) => request,
            Err(message) => {
                ctx.notices.error(message);
                return;
            }
        };
        if selecting.get_untracked().is_some() {
            return;
        }
        let Some(controller) = ctx.controller() else {
            return;
        };
        selecting.set(Some(card.module));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if controller.select_panel(&panel_id, panel_type).await.is_ok() {
                navigator.get_value().push(&card.module.dashboard_path());
            }
            selecting.set(None);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (controller, panel_id, panel_type);
    };

    view! {
        <div class="select-module-page">
            <header class="select-module-page__header">
                <h1>"Welcome to PetDesk"</h1>
                <p>"Choose the module you want to open"</p>
            </header>
            <div class="select-module-page__cards">
                {move || {
                    cards()
                        .into_iter()
                        .map(|card| {
                            let class = card_class(&card, selecting.get());
                            let module = card.module;
                            let disabled = !card.is_available();
                            view! {
                                <button
                                    class=class
                                    disabled=disabled
                                    on:click=move |_| on_select(card.clone())
                                >
                                    <h2 class=module.display_color()>{module.display_name()}</h2>
                                    <p>{module.description()}</p>
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
