//! Service configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// What an upload does when the icon was stored but buddies could not be
/// notified.
///
/// The blob is never rolled back and the notification is never retried;
/// either way the failure is logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotifyFailurePolicy {
    /// Fail the upload with `BartError::Notify`.
    #[default]
    Propagate,
    /// Log and still return the success reply.
    LogAndContinue,
}

/// Unrecognized notify-failure policy name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown notify failure policy '{0}' (expected 'propagate' or 'log-and-continue')")]
pub struct ParsePolicyError(pub String);

impl FromStr for NotifyFailurePolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "propagate" => Ok(NotifyFailurePolicy::Propagate),
            "log-and-continue" | "log_and_continue" => Ok(NotifyFailurePolicy::LogAndContinue),
            _ => Err(ParsePolicyError(s.to_string())),
        }
    }
}

impl fmt::Display for NotifyFailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotifyFailurePolicy::Propagate => f.write_str("propagate"),
            NotifyFailurePolicy::LogAndContinue => f.write_str("log-and-continue"),
        }
    }
}

/// BART service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BartConfig {
    /// Handling of store-succeeded / notify-failed uploads.
    pub notify_failure_policy: NotifyFailurePolicy,
}

impl BartConfig {
    #[must_use]
    pub fn with_notify_failure_policy(mut self, policy: NotifyFailurePolicy) -> Self {
        self.notify_failure_policy = policy;
        self
    }
}
