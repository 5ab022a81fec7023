mod ai;
mod auth;
mod discussions;
mod plants;

pub use auth::Profile;
pub use discussions::{Discussion, Reply};
pub use plants::{Diagnosis, Plant};

use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::Config;

/// Connection to the plant-care backend, carrying the base URL and the
/// current access token explicitly.
pub struct Session {
    base_url: String,
    token: Option<String>,
    http: reqwest::Client,
}

impl Session {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            token,
            http: reqwest::Client::new(),
        }
    }

    /// Build a session from config. An explicit token wins over the
    /// `LEAFCARE_TOKEN` environment variable, which wins over the config file.
    pub fn from_config(config: &Config, token: Option<String>) -> Self {
        let token = token
            .or_else(|| std::env::var("LEAFCARE_TOKEN").ok())
            .or_else(|| config.auth.token.clone());
        Self::new(config.api.base_url.clone(), token)
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn bearer(&self) -> Result<&str, ApiError> {
        self.token.as_deref().ok_or(ApiError::NoToken)
    }
}

/// Errors from backend calls.
#[derive(Debug)]
pub enum ApiError {
    /// The operation requires an access token but the session has none.
    NoToken,
    /// The backend answered with a non-success status.
    Http { status: u16, message: String },
    /// Network-level or response-decoding failure.
    Transport(reqwest::Error),
}

impl ApiError {
    /// Build an HTTP error from a status and raw response body, pulling the
    /// backend's `detail`/`message` field out when the body is JSON.
    fn http(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|json| {
                ["detail", "message"].iter().find_map(|key| {
                    json.get(key).and_then(Value::as_str).map(str::to_string)
                })
            })
            .unwrap_or_else(|| format!("HTTP {status}"));
        ApiError::Http { status, message }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NoToken => {
                write!(f, "not logged in (no access token available)")
            }
            ApiError::Http { status, message } => {
                write!(f, "{message} (status {status})")
            }
            ApiError::Transport(e) => write!(f, "request failed: {e}"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Transport(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(e)
    }
}

/// Decode a JSON response body, mapping error statuses first.
async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::http(status.as_u16(), &body));
    }
    Ok(resp.json().await?)
}

/// Check the status of a response whose body we discard.
async fn expect_ok(resp: reqwest::Response) -> Result<(), ApiError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::http(status.as_u16(), &body));
    }
    Ok(())
}

/// Wall-clock local time as an ISO-8601 string, the format the backend
/// stores for `created_at`/`checked_at` fields.
fn local_timestamp() -> String {
    chrono::Local::now()
        .format("%Y-%m-%dT%H:%M:%S%.3f")
        .to_string()
}
