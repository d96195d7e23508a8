//! SMS sender trait.

use async_trait::async_trait;

use crate::error::AppError;

/// Trait for delivering the daily notification text to one recipient.
///
/// Implementations must be thread-safe. Delivery failures are reported to the
/// caller, which decides whether to continue with the remaining recipients;
/// a failed send never takes the calendar itself down.
///
/// # Implementations
///
/// - [`crate::infrastructure::sms::HttpSmsGateway`] - HTTP gateway with retry
/// - [`crate::infrastructure::sms::NullSmsSender`] - Logging no-op for
///   deployments without a gateway
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SmsSender: Send + Sync {
    /// Sends `message` to `recipient` (gateway-specific address format).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the gateway rejects the message
    /// after retries.
    async fn send(&self, recipient: &str, message: &str) -> Result<(), AppError>;

    /// Whether this sender actually delivers messages.
    ///
    /// Used by the health endpoint to report SMS as configured or disabled.
    fn is_enabled(&self) -> bool;
}
