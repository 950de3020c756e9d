//! Contact form submission
//!
//! There is no real transport: a submission validates its fields, waits a
//! fixed delay, and reports success with a receipt. The one-shot delay is
//! not cancellable and has no retry loop. Unlike the page this replaces,
//! failure is explicit: validation problems and a disabled outbox both
//! surface as retryable, user-visible errors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

use crate::config::ContactConfig;

/// A message entered into the contact form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Confirmation returned by a successful (simulated) submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactReceipt {
    pub confirmation: String,
    pub accepted_at: DateTime<Utc>,
}

/// Why a submission was rejected. Every variant is retryable from the
/// sender's point of view: fix the field and resubmit, or try again later.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
    #[error("email address does not look valid: {0}")]
    InvalidEmail(String),
    #[error("message is too long ({len} chars, limit {limit})")]
    MessageTooLong { len: usize, limit: usize },
    #[error("message delivery is currently unavailable, please try again later")]
    Unavailable,
}

impl ContactError {
    /// Whether resubmitting the same message later could succeed without
    /// editing it first.
    pub fn is_transient(&self) -> bool {
        matches!(self, ContactError::Unavailable)
    }
}

/// Validate a message against the configured limits. Pure; no delay.
pub fn validate(msg: &ContactMessage, config: &ContactConfig) -> Result<(), ContactError> {
    if msg.name.trim().is_empty() {
        return Err(ContactError::EmptyField("name"));
    }
    if msg.email.trim().is_empty() {
        return Err(ContactError::EmptyField("email"));
    }
    if !looks_like_email(&msg.email) {
        return Err(ContactError::InvalidEmail(msg.email.clone()));
    }
    if msg.message.trim().is_empty() {
        return Err(ContactError::EmptyField("message"));
    }
    if msg.message.chars().count() > config.max_message_len {
        return Err(ContactError::MessageTooLong {
            len: msg.message.chars().count(),
            limit: config.max_message_len,
        });
    }
    Ok(())
}

/// Submit a message: validate, await the fixed delay, return a receipt.
pub async fn submit(
    msg: &ContactMessage,
    config: &ContactConfig,
) -> Result<ContactReceipt, ContactError> {
    validate(msg, config)?;

    if !config.outbox_enabled {
        return Err(ContactError::Unavailable);
    }

    tokio::time::sleep(Duration::from_millis(config.simulated_delay_ms)).await;

    info!("contact submission accepted from {}", msg.email);

    Ok(ContactReceipt {
        confirmation: "Message sent! Thank you for reaching out. I'll get back to you soon."
            .to_string(),
        accepted_at: Utc::now(),
    })
}

/// Minimal shape check: `local@domain` with a dot somewhere in the domain.
/// The address is never used as a transport target, so nothing stricter is
/// warranted.
fn looks_like_email(s: &str) -> bool {
    let s = s.trim();
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            message: "Hello, I'd like to discuss a project.".to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_plausible_message() {
        assert_eq!(validate(&message(), &ContactConfig::default()), Ok(()));
    }

    #[test]
    fn test_validate_rejects_empty_fields() {
        let config = ContactConfig::default();

        let mut msg = message();
        msg.name = "   ".to_string();
        assert_eq!(validate(&msg, &config), Err(ContactError::EmptyField("name")));

        let mut msg = message();
        msg.message = String::new();
        assert_eq!(validate(&msg, &config), Err(ContactError::EmptyField("message")));
    }

    #[test]
    fn test_validate_rejects_bad_email() {
        let config = ContactConfig::default();
        for bad in ["no-at-sign", "@example.com", "user@nodot", "user@.com"] {
            let mut msg = message();
            msg.email = bad.to_string();
            assert!(
                matches!(validate(&msg, &config), Err(ContactError::InvalidEmail(_)) | Err(ContactError::EmptyField(_))),
                "accepted {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_validate_rejects_oversized_message() {
        let config = ContactConfig {
            max_message_len: 10,
            ..ContactConfig::default()
        };
        let mut msg = message();
        msg.message = "x".repeat(11);
        assert_eq!(
            validate(&msg, &config),
            Err(ContactError::MessageTooLong { len: 11, limit: 10 })
        );
    }

    #[tokio::test]
    async fn test_submit_returns_receipt_after_delay() {
        let config = ContactConfig {
            simulated_delay_ms: 5,
            ..ContactConfig::default()
        };
        let receipt = submit(&message(), &config).await.unwrap();
        assert!(receipt.confirmation.contains("Message sent"));
    }

    #[tokio::test]
    async fn test_submit_fails_when_outbox_disabled() {
        let config = ContactConfig {
            outbox_enabled: false,
            simulated_delay_ms: 5,
            ..ContactConfig::default()
        };
        let err = submit(&message(), &config).await.unwrap_err();
        assert_eq!(err, ContactError::Unavailable);
        assert!(err.is_transient());
    }

    #[tokio::test]
    async fn test_submit_validation_errors_are_not_transient() {
        let config = ContactConfig {
            simulated_delay_ms: 5,
            ..ContactConfig::default()
        };
        let mut msg = message();
        msg.email = "broken".to_string();
        let err = submit(&msg, &config).await.unwrap_err();
        assert!(!err.is_transient());
    }
}
