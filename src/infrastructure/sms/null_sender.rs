//! No-op SMS sender for deployments without a gateway.

use async_trait::async_trait;
use tracing::debug;

use super::sender::SmsSender;
use crate::error::AppError;

/// An SMS sender that logs instead of delivering.
///
/// Used when no gateway is configured. All sends succeed immediately so the
/// notification flow can be exercised end to end without a provider account.
pub struct NullSmsSender;

impl NullSmsSender {
    /// Creates a new NullSmsSender instance.
    pub fn new() -> Self {
        debug!("Using NullSmsSender (SMS delivery disabled)");
        Self
    }
}

impl Default for NullSmsSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SmsSender for NullSmsSender {
    async fn send(&self, recipient: &str, message: &str) -> Result<(), AppError> {
        debug!(recipient, message, "SMS delivery skipped");
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        false
    }
}
