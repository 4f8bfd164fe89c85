//! Assistant facade: classify, then dispatch.
//!
//! Owns the classification-failure policy: unparsable or unreachable
//! classifier output is absorbed here into the canned fallback reply, so
//! the only failure that escapes to the HTTP layer is a listing store
//! that cannot be read.

use std::sync::Arc;

use chrono::{DateTime, Local};
use tracing::{debug, warn};

use crate::classifier::IntentClassifier;
use crate::dispatcher::Dispatcher;
use crate::error::AssistError;
use crate::messages;
use crate::types::ResponseEnvelope;

/// Maximum message length in characters.
pub const MAX_MESSAGE_LENGTH: usize = 2000;

/// Central entry point for one conversational turn.
pub struct Assistant {
    classifier: Arc<dyn IntentClassifier>,
    dispatcher: Dispatcher,
}

impl Assistant {
    pub fn new(classifier: Arc<dyn IntentClassifier>, dispatcher: Dispatcher) -> Self {
        Self {
            classifier,
            dispatcher,
        }
    }

    /// Handle one inbound message.
    ///
    /// Classification must complete (or fail) before dispatch begins;
    /// there is no state shared across calls.
    pub async fn handle_message(
        &self,
        message: &str,
        user_id: Option<&str>,
        now: DateTime<Local>,
    ) -> Result<ResponseEnvelope, AssistError> {
        if message.trim().is_empty() {
            return Err(AssistError::EmptyMessage);
        }
        if message.chars().count() > MAX_MESSAGE_LENGTH {
            return Err(AssistError::MessageTooLong(MAX_MESSAGE_LENGTH));
        }

        let intent = match self.classifier.classify(message, now).await {
            Ok(intent) => intent,
            Err(e) => {
                // Fail closed: the conversation continues with an apology.
                warn!(error = %e, "Classification failed, falling back to chat");
                return Ok(ResponseEnvelope::chat(messages::CLASSIFY_FALLBACK));
            }
        };

        debug!(kind = %intent.kind(), "Message classified");

        let envelope = self
            .dispatcher
            .dispatch(intent, user_id, now.with_timezone(&chrono::Utc))
            .await?;

        Ok(envelope)
    }
}

// =============================================================================
// Tests
// =============================================================================
