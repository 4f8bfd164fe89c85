//! Domain types shared across the workspace.
//!
//! Field names on the wire match the document store the original frontend
//! already consumes (`isPublished`, `type`, `remindTime`), so the JSON
//! shapes here are drop-in compatible with it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// =============================================================================
// Enums
// =============================================================================

/// Recurrence frequency for a reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Recurrence {
    Weekly,
    Monthly,
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recurrence::Weekly => write!(f, "WEEKLY"),
            Recurrence::Monthly => write!(f, "MONTHLY"),
        }
    }
}

impl std::str::FromStr for Recurrence {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WEEKLY" => Ok(Recurrence::Weekly),
            "MONTHLY" => Ok(Recurrence::Monthly),
            _ => Err(format!("Unknown recurrence: {}", s)),
        }
    }
}

/// Reminder lifecycle states. This core only ever writes `Pending`;
/// delivery-side consumers move records to `Sent` or `Dismissed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderStatus {
    Pending,
    Sent,
    Dismissed,
}

impl fmt::Display for ReminderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReminderStatus::Pending => write!(f, "pending"),
            ReminderStatus::Sent => write!(f, "sent"),
            ReminderStatus::Dismissed => write!(f, "dismissed"),
        }
    }
}

impl std::str::FromStr for ReminderStatus {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ReminderStatus::Pending),
            "sent" => Ok(ReminderStatus::Sent),
            "dismissed" => Ok(ReminderStatus::Dismissed),
            _ => Err(format!("Unknown reminder status: {}", s)),
        }
    }
}

// =============================================================================
// Domain structs
// =============================================================================

/// A rental listing record. Read-only from the assistant core's
/// perspective; owned by the listing store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub address: String,
    pub price: i64,
    /// Room category (套房, 雅房, 整層住家, ...).
    #[serde(rename = "type")]
    pub room_type: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    /// Only published listings are candidates for search results.
    pub is_published: bool,
}

/// A scheduled user notification record, created exactly once per
/// successful reminder dispatch. No update or delete path exists here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: Uuid,
    /// Acting user, from the request context. May be absent: the record
    /// is still written (known weak point, kept as documented behavior).
    pub user_id: Option<String>,
    pub title: String,
    /// Caller-supplied textual point in time (e.g. `20240501T0900`).
    pub remind_time: String,
    pub recurrence: Option<Recurrence>,
    pub status: ReminderStatus,
    pub created_at: DateTime<Utc>,
}

impl Reminder {
    /// Create a new pending reminder stamped with the given creation time.
    pub fn new(
        user_id: Option<String>,
        title: String,
        remind_time: String,
        recurrence: Option<Recurrence>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            title,
            remind_time,
            recurrence,
            status: ReminderStatus::Pending,
            created_at,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn make_listing() -> Listing {
        Listing {
            id: "L1".to_string(),
            title: "斗六套房A".to_string(),
            address: "雲林縣斗六市大學路".to_string(),
            price: 2800,
            room_type: "套房".to_string(),
            amenities: vec!["Wi-Fi".to_string(), "冷氣".to_string()],
            is_published: true,
        }
    }

    // ---- Recurrence ----

    #[test]
    fn test_recurrence_display() {
        assert_eq!(Recurrence::Weekly.to_string(), "WEEKLY");
        assert_eq!(Recurrence::Monthly.to_string(), "MONTHLY");
    }

    #[test]
    fn test_recurrence_from_str() {
        assert_eq!("WEEKLY".parse::<Recurrence>().unwrap(), Recurrence::Weekly);
        assert_eq!("MONTHLY".parse::<Recurrence>().unwrap(), Recurrence::Monthly);
        assert!("DAILY".parse::<Recurrence>().is_err());
        assert!("weekly".parse::<Recurrence>().is_err());
        assert!("".parse::<Recurrence>().is_err());
    }

    #[test]
    fn test_recurrence_serde_json_format() {
        assert_eq!(serde_json::to_string(&Recurrence::Weekly).unwrap(), "\"WEEKLY\"");
        assert_eq!(serde_json::to_string(&Recurrence::Monthly).unwrap(), "\"MONTHLY\"");
    }

    #[test]
    fn test_recurrence_serde_round_trip() {
        for variant in [Recurrence::Weekly, Recurrence::Monthly] {
            let json = serde_json::to_string(&variant).unwrap();
            let rt: Recurrence = serde_json::from_str(&json).unwrap();
            assert_eq!(variant, rt);
        }
    }

    // ---- ReminderStatus ----

    #[test]
    fn test_reminder_status_display_from_str_round_trip() {
        for variant in [
            ReminderStatus::Pending,
            ReminderStatus::Sent,
            ReminderStatus::Dismissed,
        ] {
            let s = variant.to_string();
            let parsed: ReminderStatus = s.parse().unwrap();
            assert_eq!(variant, parsed);
        }
    }

    #[test]
    fn test_reminder_status_serde_json_format() {
        assert_eq!(
            serde_json::to_string(&ReminderStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(
            serde_json::to_string(&ReminderStatus::Dismissed).unwrap(),
            "\"dismissed\""
        );
    }

    #[test]
    fn test_reminder_status_from_str_error_message() {
        let err = "bogus".parse::<ReminderStatus>().unwrap_err();
        assert_eq!(err, "Unknown reminder status: bogus");
    }

    // ---- Listing ----

    #[test]
    fn test_listing_serde_round_trip() {
        let listing = make_listing();
        let json = serde_json::to_string(&listing).unwrap();
        let rt: Listing = serde_json::from_str(&json).unwrap();
        assert_eq!(listing, rt);
    }

    #[test]
    fn test_listing_serde_field_names() {
        // The wire format must match the existing document store.
        let json = serde_json::to_value(make_listing()).unwrap();
        assert!(json.get("isPublished").is_some());
        assert!(json.get("type").is_some());
        assert!(json.get("is_published").is_none());
        assert!(json.get("room_type").is_none());
        assert_eq!(json["type"], "套房");
    }

    #[test]
    fn test_listing_deserialize_missing_optional_fields() {
        // address/title/amenities default when the document omits them.
        let json = r#"{"id":"L9","price":5000,"type":"雅房","isPublished":false}"#;
        let listing: Listing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.title, "");
        assert_eq!(listing.address, "");
        assert!(listing.amenities.is_empty());
        assert!(!listing.is_published);
    }

    // ---- Reminder ----

    #[test]
    fn test_reminder_new_is_pending() {
        let now = Utc::now();
        let reminder = Reminder::new(
            Some("user-1".to_string()),
            "繳納水電費".to_string(),
            "20240501T0900".to_string(),
            Some(Recurrence::Monthly),
            now,
        );
        assert_eq!(reminder.status, ReminderStatus::Pending);
        assert_eq!(reminder.created_at, now);
        assert_eq!(reminder.user_id.as_deref(), Some("user-1"));
    }

    #[test]
    fn test_reminder_accepts_absent_user() {
        let reminder = Reminder::new(
            None,
            "看房".to_string(),
            "20240502T1400".to_string(),
            None,
            Utc::now(),
        );
        assert!(reminder.user_id.is_none());
        assert!(reminder.recurrence.is_none());
    }

    #[test]
    fn test_reminder_serde_round_trip() {
        let reminder = Reminder::new(
            Some("user-2".to_string()),
            "繳房租".to_string(),
            "20240601T0900".to_string(),
            Some(Recurrence::Weekly),
            Utc::now(),
        );
        let json = serde_json::to_string(&reminder).unwrap();
        let rt: Reminder = serde_json::from_str(&json).unwrap();
        assert_eq!(reminder, rt);
    }

    #[test]
    fn test_reminder_serde_field_names() {
        let json = serde_json::to_value(Reminder::new(
            None,
            "t".to_string(),
            "20240601T0900".to_string(),
            None,
            Utc::now(),
        ))
        .unwrap();
        assert!(json.get("remindTime").is_some());
        assert!(json.get("userId").is_some());
        assert!(json.get("createdAt").is_some());
        assert_eq!(json["status"], "pending");
    }
}
