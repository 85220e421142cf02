use std::time::Duration;

use anyhow::{Context, Result};

use crate::filter::{LocationMatch, DEFAULT_LOCATION};

/// Portal configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct PortalConfig {
    pub api_url: String,
    /// Session token sent as a bearer credential.
    pub session_token: String,
    /// Initial value of the location filter.
    pub location: String,
    pub location_match: LocationMatch,
    pub request_timeout: Duration,
    pub rust_log: String,
}

impl PortalConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let require_label = std::env::var("PORTAL_REQUIRE_LOCATION_LABEL")
            .unwrap_or_else(|_| "false".to_string())
            .parse::<bool>()
            .context("PORTAL_REQUIRE_LOCATION_LABEL must be true or false")?;

        let request_timeout_secs = std::env::var("PORTAL_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "90".to_string())
            .parse::<u64>()
            .context("PORTAL_REQUEST_TIMEOUT_SECS must be a whole number of seconds")?;

        Ok(PortalConfig {
            api_url: std::env::var("PORTAL_API_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            session_token: require_env("PORTAL_SESSION_TOKEN")?,
            location: std::env::var("PORTAL_LOCATION")
                .unwrap_or_else(|_| DEFAULT_LOCATION.to_string()),
            location_match: if require_label {
                LocationMatch::RequireLabel
            } else {
                LocationMatch::LabeledOnly
            },
            request_timeout: Duration::from_secs(request_timeout_secs),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
