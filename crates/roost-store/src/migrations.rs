//! Database schema migrations.
//!
//! Applies the initial schema including the listings, reminders, and
//! schema_migrations tables.

use rusqlite::Connection;
use tracing::info;

use roost_core::error::RoostError;

/// Run all pending database migrations.
///
/// Currently implements the initial schema (version 1). Future migrations
/// can be added by checking the current version and applying incremental
/// changes.
pub fn run_migrations(conn: &Connection) -> Result<(), RoostError> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version     INTEGER PRIMARY KEY NOT NULL,
            name        TEXT NOT NULL,
            applied_at  INTEGER NOT NULL DEFAULT (strftime('%s', 'now'))
        );",
    )
    .map_err(|e| RoostError::Storage(format!("Failed to create migrations table: {}", e)))?;

    let current_version: i64 = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_migrations",
            [],
            |row| row.get(0),
        )
        .map_err(|e| RoostError::Storage(format!("Failed to query migration version: {}", e)))?;

    if current_version < 1 {
        apply_v1(conn)?;
        info!("Applied migration v1: initial_schema");
    }

    Ok(())
}

/// Version 1: Initial schema.
fn apply_v1(conn: &Connection) -> Result<(), RoostError> {
    conn.execute_batch(
        "
        -- Rental listings. Amenities are a JSON array of tag strings.
        CREATE TABLE IF NOT EXISTS listings (
            id              TEXT PRIMARY KEY NOT NULL,
            title           TEXT NOT NULL DEFAULT '',
            address         TEXT NOT NULL DEFAULT '',
            price           INTEGER NOT NULL,
            room_type       TEXT NOT NULL DEFAULT '',
            amenities       TEXT NOT NULL DEFAULT '[]',
            is_published    INTEGER NOT NULL DEFAULT 0,
            created_at      INTEGER NOT NULL DEFAULT (strftime('%s', 'now'))
        );

        CREATE INDEX IF NOT EXISTS idx_listings_published
            ON listings (is_published, created_at ASC);

        -- User reminders created by the assistant.
        CREATE TABLE IF NOT EXISTS reminders (
            id              TEXT PRIMARY KEY NOT NULL,
            user_id         TEXT,
            title           TEXT NOT NULL,
            remind_time     TEXT NOT NULL,
            recurrence      TEXT
                            CHECK (recurrence IS NULL OR recurrence IN ('WEEKLY', 'MONTHLY')),
            status          TEXT NOT NULL DEFAULT 'pending'
                            CHECK (status IN ('pending', 'sent', 'dismissed')),
            created_at      INTEGER NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_reminders_user
            ON reminders (user_id, created_at DESC);

        INSERT INTO schema_migrations (version, name) VALUES (1, 'initial_schema');
        ",
    )
    .map_err(|e| RoostError::Storage(format!("Migration v1 failed: {}", e)))?;

    Ok(())
}
