//! SMS delivery abstractions.
//!
//! The daily notification goes out through an [`SmsSender`], selected at
//! startup: an HTTP gateway when one is configured, a logging no-op
//! otherwise.

pub mod http_gateway;
pub mod null_sender;
pub mod sender;

pub use http_gateway::HttpSmsGateway;
pub use null_sender::NullSmsSender;
pub use sender::SmsSender;

#[cfg(test)]
pub use sender::MockSmsSender;
