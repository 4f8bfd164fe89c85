//! Intent and response-envelope types.
//!
//! The envelope JSON (`type` / `text` / `data` / `path` / `label`) is the
//! exact shape the frontend chat widget consumes.

use roost_core::types::{Listing, Recurrence};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Intent
// =============================================================================

/// The classified purpose of a user message.
///
/// Exactly one variant is produced per classification. Adding a variant
/// forces every `match` in the dispatcher to be revisited at compile time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Find listings matching extracted criteria.
    Search(SearchQuery),
    /// Guide the user to an in-app page.
    Navigate(NavigationTarget),
    /// Create a one-off or recurring reminder.
    CreateReminder(ReminderDraft),
    /// Free conversation with no side effects.
    Chat { reply: String },
}

impl Intent {
    /// The discriminant of this intent, for logging.
    pub fn kind(&self) -> IntentKind {
        match self {
            Intent::Search(_) => IntentKind::Search,
            Intent::Navigate(_) => IntentKind::Navigate,
            Intent::CreateReminder(_) => IntentKind::CreateReminder,
            Intent::Chat { .. } => IntentKind::Chat,
        }
    }
}

/// Intent discriminants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentKind {
    Search,
    Navigate,
    CreateReminder,
    Chat,
}

impl fmt::Display for IntentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntentKind::Search => write!(f, "search"),
            IntentKind::Navigate => write!(f, "navigate"),
            IntentKind::CreateReminder => write!(f, "create_reminder"),
            IntentKind::Chat => write!(f, "chat"),
        }
    }
}

/// Search criteria extracted from the utterance. An absent field imposes
/// no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub location: Option<String>,
    pub max_price: Option<i64>,
    pub room_type: Option<String>,
    pub amenities: Vec<String>,
}

/// A navigation destination chosen by the classifier. Validated against
/// the static path table at dispatch time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTarget {
    pub path: String,
    pub label: String,
    pub reply: String,
}

/// Reminder fields extracted from the utterance. The acting user is
/// supplied by the request context, not the classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderDraft {
    pub title: String,
    pub remind_time: String,
    pub recurrence: Option<Recurrence>,
    pub reply: String,
}

// =============================================================================
// Response envelope
// =============================================================================

/// Envelope discriminants, serialized as the `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeKind {
    Recommendation,
    Text,
    Navigate,
    Chat,
}

impl fmt::Display for EnvelopeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvelopeKind::Recommendation => write!(f, "recommendation"),
            EnvelopeKind::Text => write!(f, "text"),
            EnvelopeKind::Navigate => write!(f, "navigate"),
            EnvelopeKind::Chat => write!(f, "chat"),
        }
    }
}

/// The uniform JSON shape returned to the calling client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(rename = "type")]
    pub kind: EnvelopeKind,
    /// Human-readable message, always present.
    pub text: String,
    /// Matched listings for recommendation envelopes (capped upstream).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Listing>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl ResponseEnvelope {
    pub fn recommendation(text: impl Into<String>, data: Vec<Listing>) -> Self {
        Self {
            kind: EnvelopeKind::Recommendation,
            text: text.into(),
            data: Some(data),
            path: None,
            label: None,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: EnvelopeKind::Text,
            text: text.into(),
            data: None,
            path: None,
            label: None,
        }
    }

    pub fn navigate(
        path: impl Into<String>,
        label: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            kind: EnvelopeKind::Navigate,
            text: text.into(),
            data: None,
            path: Some(path.into()),
            label: Some(label.into()),
        }
    }

    pub fn chat(text: impl Into<String>) -> Self {
        Self {
            kind: EnvelopeKind::Chat,
            text: text.into(),
            data: None,
            path: None,
            label: None,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
