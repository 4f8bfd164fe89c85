//! Conversational assistant core for the Roost rental marketplace.
//!
//! Turns a free-text user message into a structured intent (search,
//! navigate, create-reminder, or chat), dispatches the intent to its
//! handler, and produces the uniform response envelope returned to the
//! client. The classification backend and both collaborators (listing
//! store, reminder sink) are reached through narrow trait interfaces.

pub mod assistant;
pub mod classifier;
pub mod dispatcher;
pub mod error;
pub mod filter;
pub mod gemini;
pub mod messages;
pub mod paths;
pub mod types;

pub use assistant::{Assistant, MAX_MESSAGE_LENGTH};
pub use classifier::{build_prompt, parse_classification, IntentClassifier};
pub use dispatcher::Dispatcher;
pub use error::{AssistError, ClassifyError, DispatchError};
pub use filter::{matches, ListingFilter};
pub use gemini::GeminiClassifier;
pub use paths::{entry_for_path, path_for_label, resolve, NavEntry, NAV_TABLE};
pub use types::{
    EnvelopeKind, Intent, IntentKind, NavigationTarget, ReminderDraft, ResponseEnvelope,
    SearchQuery,
};
