use invite_types::{InvitationHistoryFilter, InviteError, InviteResult};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::warn;

/// Environment variable holding the initial filter name
pub const DEFAULT_FILTER_ENV: &str = "INVITE_HISTORY_DEFAULT_FILTER";

/// Environment variable selecting newest-first ordering
pub const NEWEST_FIRST_ENV: &str = "INVITE_HISTORY_NEWEST_FIRST";

/// Configuration for the invitation history list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Filter active when the list is first shown
    pub default_filter: InvitationHistoryFilter,
    /// Order records by creation time, newest first
    pub newest_first: bool,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            default_filter: InvitationHistoryFilter::All,
            newest_first: true,
        }
    }
}

impl HistoryConfig {
    /// Parse configuration from JSON, filling in missing fields with defaults
    pub fn from_json(json: &str) -> InviteResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read configuration from the environment
    pub fn from_env() -> InviteResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> InviteResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(DEFAULT_FILTER_ENV) {
            config.default_filter = value.parse::<InvitationHistoryFilter>().map_err(|e| {
                warn!("Rejecting {}={}: {}", DEFAULT_FILTER_ENV, value, e);
                e
            })?;
        }

        if let Some(value) = lookup(NEWEST_FIRST_ENV) {
            config.newest_first = parse_bool(&value).ok_or_else(|| {
                warn!("Rejecting {}={}", NEWEST_FIRST_ENV, value);
                InviteError::Config(format!("{} must be true or false, got {}", NEWEST_FIRST_ENV, value))
            })?;
        }

        Ok(config)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}
