//! Dispatch run types

use serde::{Deserialize, Serialize};

/// The two notification kinds a run can cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// "Your session starts soon" reminder
    SessionReminder,
    /// Next-day agenda digest
    DailyDigest,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::SessionReminder => "session_reminder",
            NotificationKind::DailyDigest => "daily_digest",
        }
    }
}

/// Invocation body. Absent or unparsable bodies deserialize to the default,
/// which selects the scheduled production path.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TriggerRequest {
    #[serde(default, rename = "isTest")]
    pub is_test: bool,
    #[serde(default, rename = "testEmail")]
    pub test_email: Option<String>,
    #[serde(default, rename = "eventId")]
    pub event_id: Option<String>,
}

/// Aggregate outcome of one dispatch run: exactly one outcome per
/// recipient, never persisted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DispatchSummary {
    pub sent: usize,
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl DispatchSummary {
    /// Zero-sent result for runs that found nothing to do.
    pub fn empty(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Default::default()
        }
    }

    /// Fold one recipient outcome into the aggregate.
    pub fn record(&mut self, outcome: std::result::Result<(), String>) {
        self.total += 1;
        match outcome {
            Ok(()) => self.sent += 1,
            Err(e) => self.errors.push(e),
        }
    }
}
