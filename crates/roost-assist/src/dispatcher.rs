//! Intent dispatch.
//!
//! Pure routing by intent kind. The `match` below is the exhaustiveness
//! invariant: a new intent variant without a handler is a compile error,
//! never a silent no-op.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use roost_core::store::{ListingStore, ReminderSink};
use roost_core::types::Reminder;

use crate::error::DispatchError;
use crate::filter::{matches, ListingFilter};
use crate::messages;
use crate::paths;
use crate::types::{Intent, NavigationTarget, ReminderDraft, ResponseEnvelope, SearchQuery};

/// Routes a classified intent to its handler and produces the response
/// envelope. Stateless: every dispatch is a single-shot transaction.
pub struct Dispatcher {
    listings: Arc<dyn ListingStore>,
    reminders: Arc<dyn ReminderSink>,
    max_recommendations: usize,
}

impl Dispatcher {
    pub fn new(
        listings: Arc<dyn ListingStore>,
        reminders: Arc<dyn ReminderSink>,
        max_recommendations: usize,
    ) -> Self {
        Self {
            listings,
            reminders,
            max_recommendations,
        }
    }

    /// Dispatch one intent. `user_id` comes from the request context and
    /// `now` is the request-time clock used to stamp created records.
    pub async fn dispatch(
        &self,
        intent: Intent,
        user_id: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<ResponseEnvelope, DispatchError> {
        match intent {
            Intent::Search(query) => self.handle_search(query).await,
            Intent::Navigate(target) => Ok(self.handle_navigate(target)),
            Intent::CreateReminder(draft) => Ok(self.handle_reminder(draft, user_id, now).await),
            Intent::Chat { reply } => Ok(ResponseEnvelope::chat(reply)),
        }
    }

    /// Fetch published listings and apply the filter in memory. Store
    /// failures propagate: there is no conversational fallback for a
    /// catalog that cannot be read.
    async fn handle_search(&self, query: SearchQuery) -> Result<ResponseEnvelope, DispatchError> {
        let filter = ListingFilter::from(&query);
        let listings = self.listings.list_published().await?;

        let matched: Vec<_> = listings
            .into_iter()
            .filter(|listing| matches(listing, &filter))
            .take(self.max_recommendations)
            .collect();

        info!(matched = matched.len(), "Listing search dispatched");

        if matched.is_empty() {
            Ok(ResponseEnvelope::text(messages::NO_RESULTS))
        } else {
            Ok(ResponseEnvelope::recommendation(
                messages::RECOMMENDATION_LEAD_IN,
                matched,
            ))
        }
    }

    /// Validate the classifier-chosen destination against the static path
    /// table and echo the canonical entry. An unknown destination degrades
    /// to a chat reply instead of forwarding unvetted output.
    fn handle_navigate(&self, target: NavigationTarget) -> ResponseEnvelope {
        match paths::resolve(&target.path, &target.label) {
            Some(entry) => {
                info!(path = entry.path, label = entry.label, "Navigation dispatched");
                ResponseEnvelope::navigate(entry.path, entry.label, target.reply)
            }
            None => {
                warn!(
                    path = %target.path,
                    label = %target.label,
                    "Classifier chose a destination outside the path table"
                );
                ResponseEnvelope::chat(messages::NAVIGATE_UNKNOWN)
            }
        }
    }

    /// Persist the reminder. Sink failure degrades to a conversational
    /// apology; the chat flow never turns into a server error here.
    async fn handle_reminder(
        &self,
        draft: ReminderDraft,
        user_id: Option<&str>,
        now: DateTime<Utc>,
    ) -> ResponseEnvelope {
        let reminder = Reminder::new(
            user_id.map(String::from),
            draft.title,
            draft.remind_time,
            draft.recurrence,
            now,
        );

        match self.reminders.save(&reminder).await {
            Ok(()) => {
                info!(reminder_id = %reminder.id, "Reminder created");
                ResponseEnvelope::chat(draft.reply)
            }
            Err(e) => {
                warn!(error = %e, "Reminder write failed");
                ResponseEnvelope::chat(messages::REMINDER_FAILED)
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
