//! Collaborator contracts consumed by the assistant core.
//!
//! The listing store and reminder sink are pre-existing capabilities; the
//! core only defines the narrow interfaces it requires. Implementations
//! live in `roost-store` (SQLite) and in test doubles.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Listing, Reminder};

/// Read access to the listing catalog.
///
/// No server-side filtering is required of the store: the core fetches the
/// full published set and filters in memory, keeping the predicate a pure
/// function so a future pushdown implementation is a drop-in replacement.
#[async_trait]
pub trait ListingStore: Send + Sync {
    /// Return all published listings in the store's natural order.
    async fn list_published(&self) -> Result<Vec<Listing>>;
}

/// Write access for reminder records.
#[async_trait]
pub trait ReminderSink: Send + Sync {
    /// Persist one reminder record.
    async fn save(&self, reminder: &Reminder) -> Result<()>;
}
