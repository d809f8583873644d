//! Per-recipient rendering context
//!
//! Groups schedule rows by attendee and turns a group into the variable
//! bag the email templates consume.

use crate::calendar::{format_duration, google_calendar_link};
use crate::dispatch::NotificationKind;
use crate::schedule::types::{NotificationSettings, ScheduleRow, SponsorRow, SponsorTiers};
use crate::template::{Value, VariableBag};
use std::collections::{BTreeMap, HashMap};

/// Schedule rows for one recipient within one dispatch run.
#[derive(Debug, Clone)]
pub struct RecipientGroup {
    pub attendee_name: String,
    pub attendee_email: String,
    pub rows: Vec<ScheduleRow>,
}

/// Group rows by attendee email, ordered deterministically. Rows keep the
/// query order (session start time) within each group.
pub fn group_by_recipient(rows: Vec<ScheduleRow>) -> Vec<RecipientGroup> {
    let mut groups: BTreeMap<String, RecipientGroup> = BTreeMap::new();
    for row in rows {
        groups
            .entry(row.attendee_email.clone())
            .or_insert_with(|| RecipientGroup {
                attendee_name: row.attendee_name.clone(),
                attendee_email: row.attendee_email.clone(),
                rows: Vec::new(),
            })
            .rows
            .push(row);
    }
    groups.into_values().collect()
}

/// Build the variable bag for one recipient.
pub fn build_bag(
    kind: NotificationKind,
    group: &RecipientGroup,
    settings: &NotificationSettings,
    sponsors: &SponsorTiers,
    portal_url: &str,
) -> VariableBag {
    let mut bag = VariableBag::new();

    bag.insert(
        "ATTENDEE_NAME".to_string(),
        group.attendee_name.as_str().into(),
    );
    bag.insert(
        "EVENT_NAME".to_string(),
        settings.event_name.as_str().into(),
    );
    bag.insert("PORTAL_URL".to_string(), portal_url.into());

    match kind {
        NotificationKind::SessionReminder => {
            bag.insert("LEAD_MINUTES".to_string(), settings.lead_minutes.into());
        }
        NotificationKind::DailyDigest => {
            // All digest rows fall on the same day; take it from the first.
            let date = group
                .rows
                .first()
                .map(|r| r.starts_at.format("%A, %B %e").to_string())
                .unwrap_or_default();
            bag.insert("DIGEST_DATE".to_string(), date.into());
        }
    }

    let sessions: Vec<HashMap<String, Value>> =
        group.rows.iter().map(session_entity).collect();
    bag.insert("SESSIONS".to_string(), Value::List(sessions));

    bag.insert(
        "PLATINUM_SPONSOR".to_string(),
        sponsors
            .platinum
            .as_ref()
            .map(sponsor_entity)
            .map(Value::Entity)
            .unwrap_or(Value::Null),
    );
    bag.insert("HAS_GOLD".to_string(), (!sponsors.gold.is_empty()).into());
    bag.insert(
        "GOLD_SPONSORS".to_string(),
        Value::List(sponsors.gold.iter().map(sponsor_entity).collect()),
    );
    bag.insert(
        "HAS_SILVER".to_string(),
        (!sponsors.silver.is_empty()).into(),
    );
    bag.insert(
        "SILVER_SPONSORS".to_string(),
        Value::List(sponsors.silver.iter().map(sponsor_entity).collect()),
    );

    bag
}

fn session_entity(row: &ScheduleRow) -> HashMap<String, Value> {
    let mut entity = HashMap::new();
    entity.insert("name".to_string(), row.session_name.as_str().into());
    entity.insert(
        "date".to_string(),
        row.starts_at.format("%A, %B %e").to_string().into(),
    );
    entity.insert(
        "start_time".to_string(),
        row.starts_at.format("%H:%M").to_string().into(),
    );
    entity.insert(
        "end_time".to_string(),
        row.ends_at.format("%H:%M").to_string().into(),
    );
    entity.insert(
        "duration".to_string(),
        format_duration(row.starts_at, row.ends_at).into(),
    );
    entity.insert("location".to_string(), row.location.as_str().into());
    entity.insert("speaker".to_string(), row.speaker.as_str().into());
    entity.insert("description".to_string(), row.description.as_str().into());
    entity.insert("booth".to_string(), row.booth_name.clone().into());
    entity.insert(
        "calendar_link".to_string(),
        google_calendar_link(
            &row.session_name,
            row.starts_at,
            row.ends_at,
            &row.location,
            &row.description,
        )
        .into(),
    );
    entity
}

fn sponsor_entity(sponsor: &SponsorRow) -> HashMap<String, Value> {
    let mut entity = HashMap::new();
    entity.insert("name".to_string(), sponsor.name.as_str().into());
    entity.insert("logo_url".to_string(), sponsor.logo_url.as_str().into());
    entity.insert(
        "website_url".to_string(),
        sponsor.website_url.as_str().into(),
    );
    entity
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::types::{SponsorRow, SponsorTier};
    use chrono::{DateTime, Duration, Utc};

    fn ts(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    fn row(email: &str, starts_at: DateTime<Utc>) -> ScheduleRow {
        ScheduleRow {
            event_id: "ev".to_string(),
            attendee_id: email.to_string(),
            attendee_name: "Ada".to_string(),
            attendee_email: email.to_string(),
            session_id: "sess".to_string(),
            session_name: "Keynote".to_string(),
            description: "Opening talk".to_string(),
            location: "Hall A".to_string(),
            speaker: "Grace".to_string(),
            starts_at,
            ends_at: starts_at + Duration::minutes(90),
            booth_name: None,
        }
    }

    fn settings() -> NotificationSettings {
        NotificationSettings {
            event_id: "ev".to_string(),
            event_name: "Test Expo".to_string(),
            reminders_enabled: true,
            digest_enabled: true,
            lead_minutes: 30,
            sender_name: "Events Team".to_string(),
            sender_email: "events@test.example".to_string(),
            reminder_template_html: None,
            digest_template_html: None,
        }
    }

    #[test]
    fn test_grouping_is_per_recipient_and_ordered() {
        let start = ts("2025-06-01T14:00:00Z");
        let rows = vec![
            row("zoe@test.example", start),
            row("ada@test.example", start),
            row("zoe@test.example", start + Duration::hours(1)),
        ];

        let groups = group_by_recipient(rows);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].attendee_email, "ada@test.example");
        assert_eq!(groups[1].attendee_email, "zoe@test.example");
        assert_eq!(groups[1].rows.len(), 2);
    }

    #[test]
    fn test_reminder_bag_contents() {
        let group = RecipientGroup {
            attendee_name: "Ada".to_string(),
            attendee_email: "ada@test.example".to_string(),
            rows: vec![row("ada@test.example", ts("2025-06-01T14:00:00Z"))],
        };

        let bag = build_bag(
            NotificationKind::SessionReminder,
            &group,
            &settings(),
            &SponsorTiers::default(),
            "https://portal.test",
        );

        assert_eq!(bag.get("ATTENDEE_NAME"), Some(&Value::Str("Ada".to_string())));
        assert_eq!(bag.get("LEAD_MINUTES"), Some(&Value::Int(30)));
        assert_eq!(bag.get("PLATINUM_SPONSOR"), Some(&Value::Null));
        assert_eq!(bag.get("HAS_GOLD"), Some(&Value::Bool(false)));

        match bag.get("SESSIONS") {
            Some(Value::List(sessions)) => {
                assert_eq!(sessions.len(), 1);
                let session = &sessions[0];
                assert_eq!(session.get("start_time"), Some(&Value::Str("14:00".to_string())));
                assert_eq!(session.get("duration"), Some(&Value::Str("1h 30min".to_string())));
                match session.get("calendar_link") {
                    Some(Value::Str(link)) => {
                        assert!(link.contains("dates=20250601T140000Z/20250601T153000Z"))
                    }
                    other => panic!("expected calendar link, got {:?}", other),
                }
            }
            other => panic!("expected session list, got {:?}", other),
        }
    }

    #[test]
    fn test_digest_bag_has_date() {
        let group = RecipientGroup {
            attendee_name: "Ada".to_string(),
            attendee_email: "ada@test.example".to_string(),
            rows: vec![row("ada@test.example", ts("2025-06-02T09:00:00Z"))],
        };

        let bag = build_bag(
            NotificationKind::DailyDigest,
            &group,
            &settings(),
            &SponsorTiers::default(),
            "https://portal.test",
        );

        match bag.get("DIGEST_DATE") {
            Some(Value::Str(date)) => assert!(date.contains("June")),
            other => panic!("expected digest date, got {:?}", other),
        }
        assert!(bag.get("LEAD_MINUTES").is_none());
    }

    #[test]
    fn test_sponsor_keys_always_present() {
        let sponsors = SponsorTiers {
            platinum: Some(SponsorRow {
                name: "Acme".to_string(),
                tier: SponsorTier::Platinum,
                logo_url: "https://cdn.test/acme.png".to_string(),
                website_url: "https://acme.test".to_string(),
            }),
            gold: vec![],
            silver: vec![],
        };
        let group = RecipientGroup {
            attendee_name: "Ada".to_string(),
            attendee_email: "ada@test.example".to_string(),
            rows: vec![],
        };

        let bag = build_bag(
            NotificationKind::SessionReminder,
            &group,
            &settings(),
            &sponsors,
            "https://portal.test",
        );

        match bag.get("PLATINUM_SPONSOR") {
            Some(Value::Entity(fields)) => {
                assert_eq!(fields.get("name"), Some(&Value::Str("Acme".to_string())));
            }
            other => panic!("expected platinum entity, got {:?}", other),
        }
        // Empty tiers still get their keys so templates never leave
        // literal markers behind.
        assert_eq!(bag.get("GOLD_SPONSORS"), Some(&Value::List(vec![])));
        assert_eq!(bag.get("HAS_SILVER"), Some(&Value::Bool(false)));
    }
}
