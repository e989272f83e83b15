//! Server process configuration loaded from the environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_PORT: u16 = 3000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// TCP port the HTTP listener binds on all interfaces.
    pub port: u16,
}

impl ServerConfig {
    /// Load `.env` (if present) and read the process environment.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self { port: parse_or(lookup("PORT").as_deref(), DEFAULT_PORT) }
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn parse_or<T>(raw: Option<&str>, default: T) -> T
where
    T: std::str::FromStr,
{
    raw.and_then(|v| v.trim().parse::<T>().ok()).unwrap_or(default)
}
