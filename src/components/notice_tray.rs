//! Toast stack for session notices.

use leptos::prelude::*;

use crate::session::use_session;
use crate::state::notices::{Notice, Notices};

#[cfg(feature = "hydrate")]
const AUTO_DISMISS_MS: u32 = 4_000;

#[component]
pub fn NoticeTray() -> impl IntoView {
    let notices = use_session().notices;
    let items = move || notices.signal().with(|s| s.items.clone());

    view! {
        <div class="notice-tray" aria-live="polite">
            <For
                each=items
                key=|notice| notice.id
                children=move |notice| view! { <NoticeItem notice=notice notices=notices/> }
            />
        </div>
    }
}

#[component]
fn NoticeItem(notice: Notice, notices: Notices) -> impl IntoView {
    let id = notice.id;

    // Dismissing an id that is already gone is a no-op.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(AUTO_DISMISS_MS).await;
        notices.dismiss(id);
    });

    view! {
        <div class=format!("notice {}", notice.level.css_modifier()) role="alert">
            <span class="notice__message">{notice.message}</span>
            <button class="notice__close" title="Dismiss" on:click=move |_| notices.dismiss(id)>
                "×"
            </button>
        </div>
    }
}
