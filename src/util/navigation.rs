//! Navigation capability handed to the session subsystem.
//!
//! Wraps the router's `navigate` closure so session code can be exercised
//! without a mounted router.

use std::rc::Rc;

use leptos_router::NavigateOptions;

#[derive(Clone)]
pub struct Navigator {
    navigate: Rc<dyn Fn(&str, NavigateOptions)>,
}

impl Navigator {
    pub fn new(navigate: impl Fn(&str, NavigateOptions) + 'static) -> Self {
        Self { navigate: Rc::new(navigate) }
    }

    /// Navigator bound to the surrounding `<Router>`.
    ///
    /// Must be called inside a router context.
    pub fn from_router() -> Self {
        Self::new(leptos_router::hooks::use_navigate())
    }

    /// Navigate, keeping the current entry in history.
    pub fn push(&self, path: &str) {
        (self.navigate)(path, NavigateOptions::default());
    }

    /// Navigate, replacing the current history entry.
    pub fn replace(&self, path: &str) {
        (self.navigate)(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
    }
}

impl std::fmt::Debug for Navigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Navigator")
    }
}
