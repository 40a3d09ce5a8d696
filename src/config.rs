use anyhow::{Context, Result};
use std::env;
use url::Url;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Dev,
    Staging,
    Prod,
}

impl Environment {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "prod" | "production" => Self::Prod,
            "staging" => Self::Staging,
            _ => Self::Dev,
        }
    }

    pub fn is_dev(&self) -> bool {
        matches!(self, Self::Dev)
    }

    pub fn is_prod(&self) -> bool {
        matches!(self, Self::Prod)
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub env: Environment,

    // List endpoint
    pub api_base_url: Url,
    pub event_id: Uuid,
    pub request_timeout_seconds: u64,

    // Address bar
    pub start_url: Url,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let env = Environment::from_str(&env::var("ENV").unwrap_or_else(|_| "dev".to_string()));

        // List endpoint
        let api_base_url = env::var("API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:3333".to_string())
            .parse::<Url>()
            .context("API_BASE_URL must be a valid URL")?;
        let event_id = env::var("EVENT_ID")
            .unwrap_or_else(|_| "9e9bd979-9d10-4915-b339-3786b1634f33".to_string())
            .parse::<Uuid>()
            .context("EVENT_ID must be a UUID")?;
        let request_timeout_seconds =
            parse_timeout_seconds(env::var("REQUEST_TIMEOUT_SECONDS").ok().as_deref())?;

        // Address bar
        let start_url = env::var("START_URL")
            .unwrap_or_else(|_| "http://localhost:5173/".to_string())
            .parse::<Url>()
            .context("START_URL must be a valid URL")?;

        Ok(Settings {
            env,
            api_base_url,
            event_id,
            request_timeout_seconds,
            start_url,
        })
    }

    /// Attendee list endpoint for the configured event.
    pub fn attendees_url(&self) -> Result<Url> {
        let base = self.api_base_url.as_str().trim_end_matches('/');
        format!("{}/events/{}/attendees", base, self.event_id)
            .parse::<Url>()
            .context("Failed to build attendees endpoint URL")
    }
}

/// Request timeout in whole seconds, 30 when unset. Zero is rejected.
fn parse_timeout_seconds(value: Option<&str>) -> Result<u64> {
    let Some(value) = value else {
        return Ok(30);
    };

    let seconds = value
        .trim()
        .parse::<u64>()
        .context("REQUEST_TIMEOUT_SECONDS must be a whole number of seconds")?;
    if seconds == 0 {
        anyhow::bail!("REQUEST_TIMEOUT_SECONDS must be greater than zero");
    }

    Ok(seconds)
}
