//! Client session configuration.
//!
//! Values are baked in at build time (`PETDESK_API_URL`,
//! `PETDESK_SESSION_CHECK_SECS`) since the WASM bundle has no process
//! environment. Missing or malformed values fall back to defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use crate::util::interval::MAX_PERIOD;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_CHECK_INTERVAL_SECS: u64 = 10 * 60;
pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/select-module";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Base URL of the authentication backend, without trailing slash.
    pub api_base_url: String,
    /// How often an authenticated session is re-verified.
    pub check_interval: Duration,
    /// Login entry point; target of every unauthenticated redirect.
    pub login_path: String,
    /// Module-selection entry point; target of the post-login redirect.
    pub home_path: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            check_interval: Duration::from_secs(DEFAULT_CHECK_INTERVAL_SECS),
            login_path: LOGIN_PATH.to_owned(),
            home_path: HOME_PATH.to_owned(),
        }
    }
}

impl SessionConfig {
    /// Build from the values captured at compile time.
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("PETDESK_API_URL"), option_env!("PETDESK_SESSION_CHECK_SECS"))
    }

    /// Build from raw optional values.
    ///
    /// - `api_url`: blank means default; trailing `/` is trimmed
    /// - `check_secs`: positive integer seconds; zero or garbage means default,
    ///   values past the browser timer limit are capped to it
    pub fn from_values(api_url: Option<&str>, check_secs: Option<&str>) -> Self {
        let api_base_url = api_url
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        let secs = check_secs
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(DEFAULT_CHECK_INTERVAL_SECS);
        let check_interval = Duration::from_secs(secs).min(MAX_PERIOD);

        Self { api_base_url, check_interval, ..Self::default() }
    }
}
