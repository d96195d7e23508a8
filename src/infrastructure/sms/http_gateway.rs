//! HTTP SMS gateway client.

use async_trait::async_trait;
use serde_json::json;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

use super::sender::SmsSender;
use crate::error::AppError;

/// Sends messages through a JSON-over-HTTP SMS gateway.
///
/// POSTs `{"to": ..., "message": ...}` with a bearer token and retries
/// transient failures with jittered exponential backoff before giving up.
pub struct HttpSmsGateway {
    client: reqwest::Client,
    gateway_url: String,
    api_token: String,
}

impl HttpSmsGateway {
    /// Creates a gateway client for the given endpoint and token.
    pub fn new(gateway_url: String, api_token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            gateway_url,
            api_token,
        }
    }

    async fn post_once(&self, recipient: &str, message: &str) -> Result<(), AppError> {
        self.client
            .post(&self.gateway_url)
            .bearer_auth(&self.api_token)
            .json(&json!({ "to": recipient, "message": message }))
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map(|_| ())
            .map_err(|e| {
                AppError::internal(
                    "SMS gateway request failed",
                    json!({ "reason": e.to_string() }),
                )
            })
    }
}

#[async_trait]
impl SmsSender for HttpSmsGateway {
    async fn send(&self, recipient: &str, message: &str) -> Result<(), AppError> {
        let strategy = ExponentialBackoff::from_millis(200).map(jitter).take(3);

        Retry::spawn(strategy, || self.post_once(recipient, message)).await
    }

    fn is_enabled(&self) -> bool {
        true
    }
}
