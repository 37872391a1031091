//! HTTP client for the users API, used by the `client` binary.

use models::User;
use reqwest::header::AUTHORIZATION;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8090";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server responded {status}: {body}")]
    Status { status: u16, body: String },
    #[error("parse error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A decoded response together with the pretty-printed JSON it came from.
#[derive(Debug)]
pub struct Fetched<T> {
    pub pretty: String,
    pub value: T,
}

#[derive(Clone, Debug)]
pub struct UsersClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl UsersClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let api_key = api_key.filter(|k| !k.is_empty());
        Self { http: reqwest::Client::new(), base_url, api_key }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn list_users(&self) -> Result<Fetched<Vec<User>>, ClientError> {
        self.get_json(&format!("{}/api/v1/users", self.base_url)).await
    }

    pub async fn get_user(&self, id: i64) -> Result<Fetched<User>, ClientError> {
        self.get_json(&format!("{}/api/v1/users/{id}", self.base_url)).await
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<Fetched<T>, ClientError> {
        let mut req = self.http.get(url);
        if let Some(key) = &self.api_key {
            req = req.header(AUTHORIZATION, key);
        }
        let resp = req.send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        debug!(%url, status = status.as_u16(), "response received");
        if !status.is_success() {
            return Err(ClientError::Status { status: status.as_u16(), body });
        }
        let raw: serde_json::Value = serde_json::from_str(&body)?;
        let pretty = serde_json::to_string_pretty(&raw)?;
        let value = serde_json::from_value(raw)?;
        Ok(Fetched { pretty, value })
    }
}
