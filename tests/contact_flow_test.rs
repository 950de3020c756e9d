//! Contact submission flows and CV asset resolution.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use my_portfolio::config::{Config, ContactConfig};
use my_portfolio::contact::{self, ContactError, ContactMessage};
use my_portfolio::profile;
use my_portfolio::server::{http, ServerState};

fn message() -> ContactMessage {
    ContactMessage {
        name: "Recruiter".to_string(),
        email: "recruiter@example.com".to_string(),
        message: "We have an infrastructure role that might interest you.".to_string(),
    }
}

fn fast_config() -> ContactConfig {
    ContactConfig {
        simulated_delay_ms: 20,
        ..ContactConfig::default()
    }
}

#[tokio::test]
async fn test_submission_waits_then_confirms() -> anyhow::Result<()> {
    let config = fast_config();
    let before = Instant::now();
    let receipt = contact::submit(&message(), &config).await?;
    assert!(before.elapsed().as_millis() >= 20, "delay must elapse");
    assert!(receipt.confirmation.contains("Message sent"));
    Ok(())
}

#[tokio::test]
async fn test_invalid_submission_fails_fast() {
    let config = fast_config();
    let mut msg = message();
    msg.email = "not-an-address".to_string();

    let before = Instant::now();
    let err = contact::submit(&msg, &config).await.unwrap_err();
    // validation fails before the simulated delay, not after
    assert!(before.elapsed().as_millis() < 20);
    assert!(matches!(err, ContactError::InvalidEmail(_)));
    assert!(!err.is_transient());
}

#[tokio::test]
async fn test_disabled_outbox_is_retryable() {
    let config = ContactConfig {
        outbox_enabled: false,
        ..fast_config()
    };
    let err = contact::submit(&message(), &config).await.unwrap_err();
    assert_eq!(err, ContactError::Unavailable);
    assert!(err.is_transient());
}

#[tokio::test]
async fn test_cv_asset_resolves_and_reads() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let cv = dir.path().join("cv.pdf");
    tokio::fs::write(&cv, b"%PDF-1.4 stub").await?;

    let mut config = Config::default();
    config.assets.cv_path = Some(cv.clone());
    let state = ServerState {
        config: Arc::new(config),
        profile: Arc::new(profile::builtin().clone()),
    };

    assert_eq!(http::cv_location(&state), cv);
    let bytes = tokio::fs::read(http::cv_location(&state)).await?;
    assert!(bytes.starts_with(b"%PDF"));
    Ok(())
}

#[test]
fn test_unconfigured_cv_falls_back_to_profile_file() {
    let state = ServerState {
        config: Arc::new(Config::default()),
        profile: Arc::new(profile::builtin().clone()),
    };
    assert_eq!(
        http::cv_location(&state),
        PathBuf::from("CV_Milos_Avramovic_Eng.pdf")
    );
}
