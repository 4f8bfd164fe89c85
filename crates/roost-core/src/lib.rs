pub mod config;
pub mod error;
pub mod store;
pub mod types;

pub use config::RoostConfig;
pub use error::{Result, RoostError};
pub use store::{ListingStore, ReminderSink};
pub use types::*;
