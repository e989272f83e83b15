//! User-initiated session changes: login, logout, refresh, panel selection.
//!
//! ERROR HANDLING
//! ==============
//! `login` and `select_panel` hand their failure back to the caller so forms
//! can show it inline; the store is left untouched on failure. `logout` never
//! fails: the remote call is best-effort and the local session always ends.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use super::store::SessionStore;
use super::validator::SessionValidator;
use crate::net::api::ApiError;
use crate::net::types::User;

#[derive(Clone)]
pub struct SessionController {
    validator: SessionValidator,
}

impl SessionController {
    pub fn new(validator: SessionValidator) -> Self {
        Self { validator }
    }

    pub fn validator(&self) -> &SessionValidator {
        &self.validator
    }

    pub fn store(&self) -> SessionStore {
        self.validator.store()
    }

    /// Log in with `identifier`/`secret`.
    ///
    /// On success the session becomes `Authenticated`, the verification
    /// interval is (re)armed and the app replace-navigates to the home path.
    ///
    /// # Errors
    ///
    /// Returns the API failure (typically `InvalidCredentials`) unchanged.
    pub async fn login(&self, identifier: &str, secret: &str) -> Result<User, ApiError> {
        let deps = self.validator.deps();
        match deps.api.login(identifier, secret).await {
            Ok(user) => {
                self.validator.advance_epoch();
                deps.store.authenticate(user.clone());
                self.validator.arm();
                deps.notices.success(format!("Welcome, {}!", user.name));
                deps.navigator.replace(&deps.config.home_path);
                Ok(user)
            }
            Err(err) => {
                leptos::logging::warn!("session: login rejected: {err}");
                deps.notices.error(err.user_message());
                Err(err)
            }
        }
    }

    /// End the session locally no matter what the backend says.
    ///
    /// The timer stops and in-flight results go stale before the remote call,
    /// so no check can expire the session while the backend answers.
    pub async fn logout(&self) {
        let deps = self.validator.deps();
        self.validator.advance_epoch();
        self.validator.disarm();
        if let Err(err) = deps.api.logout().await {
            leptos::logging::warn!("session: remote logout failed, ending local session anyway: {err}");
        }
        deps.store.clear();
        deps.notices.success("You have been logged out.");
        deps.navigator.push(&deps.config.login_path);
    }

    /// Re-run the identity check on demand.
    pub async fn refresh(&self) {
        let epoch = self.validator.advance_epoch();
        self.validator.deps().store.mark_pending();
        self.validator.resolve_identity(epoch).await;
    }

    /// Switch the user's active panel.
    ///
    /// # Errors
    ///
    /// Returns the API failure; the stored user is kept as it was.
    pub async fn select_panel(&self, panel_id: &str, panel_type: &str) -> Result<User, ApiError> {
        let deps = self.validator.deps();
        let epoch = self.validator.current_epoch();
        match deps.api.select_panel(panel_id, panel_type).await {
            Ok(user) => {
                if self.validator.is_current(epoch) {
                    deps.store.authenticate(user.clone());
                    deps.notices.success("Module selected.");
                }
                Ok(user)
            }
            Err(err) => {
                leptos::logging::warn!("session: panel selection failed: {err}");
                deps.notices.error(err.user_message());
                Err(err)
            }
        }
    }
}
