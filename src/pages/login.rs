//! Login page: email + password form backed by the session controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public route. On success the controller navigates to the module selection
//! page itself; this page only shows validation and rejection messages.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::session::use_session;

const MISSING_FIELDS: &str = "Enter your email and password.";
const INVALID_EMAIL: &str = "Enter a valid email address.";

/// Trim and check the form fields before calling the backend.
///
/// Passwords are passed through untrimmed; only emptiness is checked.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    let well_formed = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty() && !domain.contains('@'));
    if !well_formed {
        return Err(INVALID_EMAIL);
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_session();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(fields) => fields,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        let Some(controller) = ctx.controller() else {
            return;
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = controller.login(&email_value, &password_value).await {
                info.set(e.user_message());
            }
            password.set(String::new());
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (controller, email_value, password_value);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"PetDesk"</h1>
                <p class="login-card__subtitle">"Sign in to manage your pet shop, clinic and grooming"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        autocomplete="username"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
