//! Roost API crate - axum HTTP server and route handlers.
//!
//! Exposes the conversational assistant endpoint and a health check.
//! Everything else the marketplace backend serves (listing CRUD,
//! appointments, contracts, favorites, accounts) lives outside this
//! service.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::{create_router, start_server};
pub use state::AppState;
