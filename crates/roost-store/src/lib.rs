//! SQLite persistence for Roost.
//!
//! Provides a WAL-mode database with migrations and repository
//! implementations of the `ListingStore` and `ReminderSink` contracts.

pub mod db;
pub mod listings;
pub mod migrations;
pub mod reminders;

pub use db::Database;
pub use listings::ListingRepository;
pub use reminders::ReminderRepository;
