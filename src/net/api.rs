//! REST API helpers for the authentication backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, always sending the
//! HttpOnly session cookie (`credentials: include`).
//! Server-side (SSR) and native builds: stubs returning
//! [`ApiError::Unavailable`] since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. HTTP 401/403 map to
//! `Unauthorized`; a rejected login maps to `InvalidCredentials` carrying the
//! server's message so the login form can show it inline.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use futures::future::LocalBoxFuture;

use super::types::User;
#[cfg(feature = "hydrate")]
use super::types::{LoginRequest, SelectPanelRequest, UserEnvelope};

#[cfg(feature = "hydrate")]
const REQUEST_TIMEOUT_MS: u32 = 10_000;

#[cfg(any(test, feature = "hydrate"))]
const DEFAULT_LOGIN_FAILURE: &str = "Invalid email or password";
#[cfg(any(test, feature = "hydrate"))]
const DEFAULT_SERVER_FAILURE: &str = "Server error";

/// Failures surfaced by the authentication API.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("not authenticated")]
    Unauthorized,
    #[error("{0}")]
    InvalidCredentials(String),
    #[error("connection error: {0}")]
    Network(String),
    #[error("server error {status}: {message}")]
    Server { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Human-readable text for notices and inline form errors.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidCredentials(message) | Self::Server { message, .. } => message.clone(),
            Self::Unauthorized => "Your session is not valid. Please log in.".to_owned(),
            Self::Network(_) | Self::Unavailable => "Could not reach the server.".to_owned(),
            Self::Decode(_) => "Unexpected response from the server.".to_owned(),
        }
    }
}

/// The remote operations the session subsystem depends on.
///
/// Futures are `!Send`: everything runs on the browser's single event loop.
pub trait SessionApi {
    /// Resolve the identity behind the current session cookie.
    fn current_user(&self) -> LocalBoxFuture<'_, Result<User, ApiError>>;

    /// Confirm the session cookie is still valid.
    fn verify_session(&self) -> LocalBoxFuture<'_, Result<(), ApiError>>;

    /// Exchange credentials for a session.
    fn login<'a>(&'a self, identifier: &'a str, secret: &'a str) -> LocalBoxFuture<'a, Result<User, ApiError>>;

    /// End the session server-side.
    fn logout(&self) -> LocalBoxFuture<'_, Result<(), ApiError>>;

    /// Switch the active panel; returns the updated user.
    fn select_panel<'a>(&'a self, panel_id: &'a str, panel_type: &'a str) -> LocalBoxFuture<'a, Result<User, ApiError>>;
}

/// [`SessionApi`] backed by the HTTP helpers in this module.
#[derive(Clone, Debug)]
pub struct HttpSessionApi {
    base_url: String,
}

impl HttpSessionApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }
}

impl SessionApi for HttpSessionApi {
    fn current_user(&self) -> LocalBoxFuture<'_, Result<User, ApiError>> {
        Box::pin(fetch_current_user(&self.base_url))
    }

    fn verify_session(&self) -> LocalBoxFuture<'_, Result<(), ApiError>> {
        Box::pin(verify_session(&self.base_url))
    }

    fn login<'a>(&'a self, identifier: &'a str, secret: &'a str) -> LocalBoxFuture<'a, Result<User, ApiError>> {
        Box::pin(login(&self.base_url, identifier, secret))
    }

    fn logout(&self) -> LocalBoxFuture<'_, Result<(), ApiError>> {
        Box::pin(logout(&self.base_url))
    }

    fn select_panel<'a>(&'a self, panel_id: &'a str, panel_type: &'a str) -> LocalBoxFuture<'a, Result<User, ApiError>> {
        Box::pin(select_panel(&self.base_url, panel_id, panel_type))
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

/// Pull `message` out of a JSON error body.
#[cfg(any(test, feature = "hydrate"))]
fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(serde_json::Value::as_str)
        .filter(|m| !m.trim().is_empty())
        .map(str::to_owned)
}

#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16, body: &str) -> ApiError {
    match status {
        401 | 403 => ApiError::Unauthorized,
        _ => ApiError::Server {
            status,
            message: server_message(body).unwrap_or_else(|| DEFAULT_SERVER_FAILURE.to_owned()),
        },
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn login_error(status: u16, body: &str) -> ApiError {
    match status {
        400 | 401 | 403 => {
            ApiError::InvalidCredentials(server_message(body).unwrap_or_else(|| DEFAULT_LOGIN_FAILURE.to_owned()))
        }
        _ => status_error(status, body),
    }
}

#[cfg(feature = "hydrate")]
async fn send(request: Result<gloo_net::http::Request, gloo_net::Error>) -> Result<gloo_net::http::Response, ApiError> {
    use futures::future::Either;

    let request = request.map_err(|e| ApiError::Network(e.to_string()))?;
    let sending = Box::pin(request.send());
    let timeout = Box::pin(gloo_timers::future::TimeoutFuture::new(REQUEST_TIMEOUT_MS));
    match futures::future::select(sending, timeout).await {
        Either::Left((result, _)) => result.map_err(|e| ApiError::Network(e.to_string())),
        Either::Right(((), _)) => Err(ApiError::Network("request timed out".to_owned())),
    }
}

#[cfg(feature = "hydrate")]
fn get(base_url: &str, path: &str) -> Result<gloo_net::http::Request, gloo_net::Error> {
    gloo_net::http::Request::get(&endpoint(base_url, path))
        .credentials(web_sys::RequestCredentials::Include)
        .build()
}

#[cfg(feature = "hydrate")]
fn post(base_url: &str, path: &str) -> gloo_net::http::RequestBuilder {
    gloo_net::http::Request::post(&endpoint(base_url, path)).credentials(web_sys::RequestCredentials::Include)
}

#[cfg(feature = "hydrate")]
async fn body_text(resp: &gloo_net::http::Response) -> String {
    resp.text().await.unwrap_or_default()
}

/// Fetch the currently authenticated user from `/auth/me`.
///
/// # Errors
///
/// `Unauthorized` when no valid session cookie is present.
pub async fn fetch_current_user(base_url: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send(get(base_url, "/auth/me")).await?;
        if !resp.ok() {
            return Err(status_error(resp.status(), &body_text(&resp).await));
        }
        resp.json::<User>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = base_url;
        Err(ApiError::Unavailable)
    }
}

/// Check the session cookie against `/auth/verify`.
///
/// # Errors
///
/// `Unauthorized` when the session expired.
pub async fn verify_session(base_url: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send(get(base_url, "/auth/verify")).await?;
        if !resp.ok() {
            return Err(status_error(resp.status(), &body_text(&resp).await));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = base_url;
        Err(ApiError::Unavailable)
    }
}

/// Log in via `POST /auth/login`. The session itself travels in a cookie.
///
/// # Errors
///
/// `InvalidCredentials` when the backend rejects the email/password pair.
pub async fn login(base_url: &str, email: &str, password: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send(post(base_url, "/auth/login").json(&LoginRequest { email, password })).await?;
        if !resp.ok() {
            return Err(login_error(resp.status(), &body_text(&resp).await));
        }
        let body: UserEnvelope = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base_url, email, password);
        Err(ApiError::Unavailable)
    }
}

/// Log out the current user by calling `POST /auth/logout`.
///
/// # Errors
///
/// Any transport or status failure; callers treat logout as best-effort.
pub async fn logout(base_url: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send(post(base_url, "/auth/logout").build()).await?;
        if !resp.ok() {
            return Err(status_error(resp.status(), &body_text(&resp).await));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = base_url;
        Err(ApiError::Unavailable)
    }
}

/// Select the active panel via `POST /auth/select-panel`.
///
/// # Errors
///
/// Returns the mapped status error when the backend refuses the panel.
pub async fn select_panel(base_url: &str, panel_id: &str, panel_type: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send(post(base_url, "/auth/select-panel").json(&SelectPanelRequest { panel_id, panel_type })).await?;
        if !resp.ok() {
            return Err(status_error(resp.status(), &body_text(&resp).await));
        }
        let body: UserEnvelope = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base_url, panel_id, panel_type);
        Err(ApiError::Unavailable)
    }
}
