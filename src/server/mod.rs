//! Server side of the app: SSR rendering, static assets and health checks.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only built with the `ssr` feature. The server never holds session state;
//! the browser talks to the authentication backend directly with its cookie.

pub mod config;
pub mod routes;

/// Start-up failures of the server binary.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("leptos configuration: {0}")]
    Config(String),
    #[error("bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("serve: {0}")]
    Serve(#[from] std::io::Error),
}
