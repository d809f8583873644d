//! Schedule row types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-event notification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub event_id: String,
    pub event_name: String,
    /// Session-start reminders enabled for this event
    pub reminders_enabled: bool,
    /// Daily agenda digest enabled for this event
    pub digest_enabled: bool,
    /// Minutes before a session start at which the reminder goes out
    pub lead_minutes: i64,
    pub sender_name: String,
    pub sender_email: String,
    /// Event-specific template overrides; the built-in defaults apply when
    /// these are absent
    pub reminder_template_html: Option<String>,
    pub digest_template_html: Option<String>,
}

impl NotificationSettings {
    /// RFC 5322 style sender ("Events Team <events@example.com>")
    pub fn sender(&self) -> String {
        format!("{} <{}>", self.sender_name, self.sender_email)
    }
}

/// One schedule row: a session an attendee is registered for, joined to
/// attendee and booth info.
#[derive(Debug, Clone)]
pub struct ScheduleRow {
    pub event_id: String,
    pub attendee_id: String,
    pub attendee_name: String,
    pub attendee_email: String,
    pub session_id: String,
    pub session_name: String,
    pub description: String,
    pub location: String,
    pub speaker: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    /// Booth name for meetings held at a sponsor booth
    pub booth_name: Option<String>,
}

/// Sponsor classification attached to a booth record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SponsorTier {
    Platinum,
    Gold,
    Silver,
}

impl SponsorTier {
    pub fn to_db_string(&self) -> &'static str {
        match self {
            SponsorTier::Platinum => "platinum",
            SponsorTier::Gold => "gold",
            SponsorTier::Silver => "silver",
        }
    }

    pub fn from_db_string(s: &str) -> Option<Self> {
        match s {
            "platinum" => Some(SponsorTier::Platinum),
            "gold" => Some(SponsorTier::Gold),
            "silver" => Some(SponsorTier::Silver),
            _ => None,
        }
    }
}

/// A booth row flagged as a sponsor.
#[derive(Debug, Clone, Serialize)]
pub struct SponsorRow {
    pub name: String,
    pub tier: SponsorTier,
    pub logo_url: String,
    pub website_url: String,
}

/// Sponsors of one event partitioned by tier, recomputed per dispatch run.
#[derive(Debug, Clone, Default)]
pub struct SponsorTiers {
    /// The headline sponsor slot; the first platinum row wins
    pub platinum: Option<SponsorRow>,
    pub gold: Vec<SponsorRow>,
    pub silver: Vec<SponsorRow>,
}

impl SponsorTiers {
    pub fn partition(rows: Vec<SponsorRow>) -> Self {
        let mut tiers = SponsorTiers::default();
        for row in rows {
            match row.tier {
                SponsorTier::Platinum => {
                    if tiers.platinum.is_none() {
                        tiers.platinum = Some(row);
                    }
                }
                SponsorTier::Gold => tiers.gold.push(row),
                SponsorTier::Silver => tiers.silver.push(row),
            }
        }
        tiers
    }
}
