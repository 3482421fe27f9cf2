//! HTTP client for the monitor backend: login and stats fetch.

use std::fs;
use std::path::Path;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::types::StatsSnapshot;

/// Shown on the login form when the backend rejects credentials without a message.
const LOGIN_REJECTED_FALLBACK: &str = "Login failed. Check your username and password.";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The backend no longer accepts the bearer token (HTTP 401).
    #[error("unauthorized")]
    Unauthorized,
    /// The backend answered the login with a non-success status.
    #[error("{0}")]
    Rejected(String),
    /// Connection, timeout, or body decode failure.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct ErrorBody {
    error: Option<String>,
}

/// Issues the two request types the backend speaks: `POST /api/login` and
/// `GET /api/stats` with a bearer token. Cloning shares the underlying
/// connection pool, so spawned fetch tasks reuse it.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    login_url: Url,
    stats_url: Url,
}

impl ApiClient {
    /// `base` is the backend origin, e.g. `http://HOST:PORT`. An extra root CA
    /// may be trusted for self-signed HTTPS backends.
    pub fn new(base: &Url, tls_ca: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(path) = tls_ca {
            let pem = fs::read(path)?;
            builder = builder.add_root_certificate(reqwest::Certificate::from_pem(&pem)?);
        }
        Ok(Self {
            http: builder.build()?,
            login_url: base.join("/api/login")?,
            stats_url: base.join("/api/stats")?,
        })
    }

    /// Exchange credentials for a bearer token. A non-success response maps to
    /// `Rejected` carrying the server's `error` string when it sent one.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, ApiError> {
        let resp = self
            .http
            .post(self.login_url.clone())
            .json(&LoginRequest { username, password })
            .send()
            .await?;
        if resp.status().is_success() {
            let body: LoginResponse = resp.json().await?;
            Ok(body.token)
        } else {
            let msg = resp
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|b| b.error)
                .unwrap_or_else(|| LOGIN_REJECTED_FALLBACK.to_string());
            Err(ApiError::Rejected(msg))
        }
    }

    /// One poll tick. 401 is surfaced as `Unauthorized` so the caller can
    /// drop the session; every other failure is transport-class and the
    /// caller just waits for the next tick.
    pub async fn fetch_stats(&self, token: &str) -> Result<StatsSnapshot, ApiError> {
        let resp = self
            .http
            .get(self.stats_url.clone())
            .bearer_auth(token)
            .send()
            .await?;
        if resp.status() == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }
        Ok(resp.error_for_status()?.json::<StatsSnapshot>().await?)
    }
}
