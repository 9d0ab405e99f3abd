use std::env;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::SubmitError;
use crate::flow::{SubmitAck, Submitter};

/// Environment variable that overrides the API base outright.
pub const API_BASE_VAR: &str = "AANMELD_API_BASE";
/// Environment variable holding the deployment flavour (`production` or not).
pub const ENV_VAR: &str = "AANMELD_ENV";

const PRODUCTION_BASE: &str = "/api";
const DEVELOPMENT_BASE: &str = "http://localhost:8521/api";

/// Where submissions go. Deployment concern, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBase(String);

impl ApiBase {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self(base.trim_end_matches('/').to_string())
    }

    /// `AANMELD_API_BASE` wins; otherwise `AANMELD_ENV=production` selects the
    /// relative reverse-proxied path and anything else the local endpoint.
    pub fn from_env() -> Self {
        if let Ok(base) = env::var(API_BASE_VAR)
            && !base.trim().is_empty()
        {
            return Self::new(base);
        }
        let flavour = env::var(ENV_VAR).unwrap_or_default();
        if flavour == "production" {
            Self::new(PRODUCTION_BASE)
        } else {
            Self::new(DEVELOPMENT_BASE)
        }
    }

    pub fn join(&self, path: &str) -> String {
        format!("{}{}", self.0, path)
    }
}

/// reqwest-backed submission collaborator: one `POST`, JSON in, JSON out.
pub struct HttpSubmitter {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSubmitter {
    pub fn new(base: &ApiBase, submit_path: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: base.join(submit_path),
        }
    }
}

#[async_trait]
impl Submitter for HttpSubmitter {
    async fn submit(&self, payload: Value) -> Result<SubmitAck, SubmitError> {
        debug!(endpoint = %self.endpoint, "posting submission");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(|err| {
                warn!(endpoint = %self.endpoint, error = %err, "transport failure");
                if err.is_connect() || err.is_timeout() || err.is_request() {
                    SubmitError::Unreachable
                } else {
                    SubmitError::Unknown
                }
            })?;

        let status = response.status();
        let body: Value = response.json().await.unwrap_or(Value::Null);

        if !status.is_success() {
            return Err(SubmitError::server(status.as_u16(), failure_message(&body)));
        }
        if let Some(false) = body.get("success").and_then(Value::as_bool) {
            let message = failure_message(&body)
                .unwrap_or_else(|| "Er is een onbekende fout opgetreden.".to_string());
            return Err(SubmitError::Rejected(message));
        }

        Ok(SubmitAck {
            message: body
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string),
        })
    }
}

/// Digs a human-readable message out of an error body: a string `detail`, a
/// `detail` object carrying `message`, or a top-level `message`.
fn failure_message(body: &Value) -> Option<String> {
    match body.get("detail") {
        Some(Value::String(detail)) => Some(detail.clone()),
        Some(Value::Object(detail)) => detail
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => body
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string),
    }
}
