//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! (or the admin CLI) starts.
//!
//! ## Required Variables
//!
//! None. Every setting has a default suitable for local development.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `SUBMISSIONS_PATH` - Submission store file (default: `data/submissions.json`)
//! - `SCHEDULE_PATH` - Schedule store file (default: `data/schedule.json`)
//! - `CALENDAR_DAYS` - Calendar length in days (default: 24, max: 31)
//! - `TARGET_MONTH` - 0-indexed month the calendar runs in (default: 11, December)
//! - `SMS_GATEWAY_URL` - SMS gateway endpoint (enables SMS delivery if set)
//! - `SMS_API_TOKEN` - Bearer token for the SMS gateway
//! - `SMS_RECIPIENTS` - Comma-separated recipient numbers

use anyhow::Result;
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Flat JSON file holding all submissions.
    pub submissions_path: String,
    /// Flat JSON file holding the generated schedule.
    pub schedule_path: String,
    /// Number of calendar days the generator fills and the gate falls back to.
    pub calendar_days: u32,
    /// 0-indexed month (11 = December) in which days unlock one by one.
    /// The gate compares month and day-of-month only; there is no year.
    pub target_month: u32,
    /// SMS gateway endpoint. Delivery is disabled when unset.
    pub sms_gateway_url: Option<String>,
    /// Bearer token for the SMS gateway. Required when the gateway is set.
    pub sms_api_token: Option<String>,
    /// Recipient numbers for the daily notification.
    pub sms_recipients: Vec<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let submissions_path =
            env::var("SUBMISSIONS_PATH").unwrap_or_else(|_| "data/submissions.json".to_string());
        let schedule_path =
            env::var("SCHEDULE_PATH").unwrap_or_else(|_| "data/schedule.json".to_string());

        let calendar_days = env::var("CALENDAR_DAYS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(24);

        let target_month = env::var("TARGET_MONTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(11);

        let sms_gateway_url = env::var("SMS_GATEWAY_URL").ok().filter(|v| !v.is_empty());
        let sms_api_token = env::var("SMS_API_TOKEN").ok().filter(|v| !v.is_empty());
        let sms_recipients = env::var("SMS_RECIPIENTS")
            .map(|v| Self::parse_recipients(&v))
            .unwrap_or_default();

        Self {
            listen_addr,
            log_level,
            log_format,
            submissions_path,
            schedule_path,
            calendar_days,
            target_month,
            sms_gateway_url,
            sms_api_token,
            sms_recipients,
        }
    }

    /// Splits a comma-separated recipient list, dropping empty entries.
    fn parse_recipients(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    /// - `calendar_days` is 0 or exceeds 31
    /// - `target_month` exceeds 11
    /// - SMS is partially configured
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        // The gate compares against a day-of-month, so the calendar cannot
        // outgrow the longest month.
        if self.calendar_days == 0 || self.calendar_days > 31 {
            anyhow::bail!(
                "CALENDAR_DAYS must be between 1 and 31, got {}",
                self.calendar_days
            );
        }

        if self.target_month > 11 {
            anyhow::bail!(
                "TARGET_MONTH is 0-indexed (11 = December), got {}",
                self.target_month
            );
        }

        if self.submissions_path.is_empty() || self.schedule_path.is_empty() {
            anyhow::bail!("SUBMISSIONS_PATH and SCHEDULE_PATH must not be empty");
        }

        if let Some(ref url) = self.sms_gateway_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                anyhow::bail!("SMS_GATEWAY_URL must start with 'http://' or 'https://'");
            }
            if self.sms_api_token.is_none() {
                anyhow::bail!("SMS_API_TOKEN must be set when SMS_GATEWAY_URL is configured");
            }
            if self.sms_recipients.is_empty() {
                anyhow::bail!("SMS_RECIPIENTS must be set when SMS_GATEWAY_URL is configured");
            }
        }

        Ok(())
    }

    /// Returns whether SMS delivery is enabled.
    pub fn is_sms_enabled(&self) -> bool {
        self.sms_gateway_url.is_some()
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Submissions store: {}", self.submissions_path);
        tracing::info!("  Schedule store: {}", self.schedule_path);
        tracing::info!(
            "  Calendar: {} days, month index {}",
            self.calendar_days,
            self.target_month
        );

        if let Some(ref url) = self.sms_gateway_url {
            tracing::info!(
                "  SMS: {} ({} recipients)",
                url,
                self.sms_recipients.len()
            );
        } else {
            tracing::info!("  SMS: disabled");
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn base_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            submissions_path: "data/submissions.json".to_string(),
            schedule_path: "data/schedule.json".to_string(),
            calendar_days: 24,
            target_month: 11,
            sms_gateway_url: None,
            sms_api_token: None,
            sms_recipients: Vec::new(),
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = base_config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:3000".to_string();

        config.calendar_days = 0;
        assert!(config.validate().is_err());

        config.calendar_days = 32;
        assert!(config.validate().is_err());

        config.calendar_days = 24;

        config.target_month = 12;
        assert!(config.validate().is_err());

        config.target_month = 11;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sms_validation_requires_token_and_recipients() {
        let mut config = base_config();
        config.sms_gateway_url = Some("https://sms.example.com/send".to_string());

        assert!(config.validate().is_err());

        config.sms_api_token = Some("secret".to_string());
        assert!(config.validate().is_err());

        config.sms_recipients = vec!["+491700000001".to_string()];
        assert!(config.validate().is_ok());

        config.sms_gateway_url = Some("ftp://sms.example.com".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_recipients() {
        assert_eq!(
            Config::parse_recipients("+491700000001, +491700000002,,  "),
            vec!["+491700000001".to_string(), "+491700000002".to_string()]
        );
        assert!(Config::parse_recipients("").is_empty());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("CALENDAR_DAYS");
            env::remove_var("TARGET_MONTH");
            env::remove_var("SMS_GATEWAY_URL");
        }

        let config = Config::from_env();

        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.calendar_days, 24);
        assert_eq!(config.target_month, 11);
        assert!(!config.is_sms_enabled());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("CALENDAR_DAYS", "12");
            env::set_var("TARGET_MONTH", "10");
            env::set_var("SMS_RECIPIENTS", "+491700000001,+491700000002");
        }

        let config = Config::from_env();

        assert_eq!(config.calendar_days, 12);
        assert_eq!(config.target_month, 10);
        assert_eq!(config.sms_recipients.len(), 2);

        // Cleanup
        unsafe {
            env::remove_var("CALENDAR_DAYS");
            env::remove_var("TARGET_MONTH");
            env::remove_var("SMS_RECIPIENTS");
        }
    }
}
