//! Reminder repository backed by SQLite.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use uuid::Uuid;

use roost_core::error::RoostError;
use roost_core::store::ReminderSink;
use roost_core::types::{Recurrence, Reminder, ReminderStatus};

use crate::db::Database;

/// Repository for reminder records.
pub struct ReminderRepository {
    db: Arc<Database>,
}

impl ReminderRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Persist a reminder record.
    pub fn insert(&self, reminder: &Reminder) -> Result<(), RoostError> {
        self.db.with_conn(|conn| {
            conn.execute(
                "INSERT INTO reminders (id, user_id, title, remind_time, recurrence, status, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                rusqlite::params![
                    reminder.id.to_string(),
                    reminder.user_id,
                    reminder.title,
                    reminder.remind_time,
                    reminder.recurrence.map(|r| r.to_string()),
                    reminder.status.to_string(),
                    reminder.created_at.timestamp(),
                ],
            )
            .map_err(|e| RoostError::Storage(format!("Failed to save reminder: {}", e)))?;
            Ok(())
        })
    }

    /// Find a reminder by ID.
    pub fn find_by_id(&self, id: Uuid) -> Result<Option<Reminder>, RoostError> {
        self.db.with_conn(|conn| {
            let mut stmt = conn
                .prepare(
                    "SELECT id, user_id, title, remind_time, recurrence, status, created_at
                     FROM reminders WHERE id = ?1",
                )
                .map_err(|e| RoostError::Storage(e.to_string()))?;

            let mut rows = stmt
                .query(rusqlite::params![id.to_string()])
                .map_err(|e| RoostError::Storage(e.to_string()))?;

            match rows.next().map_err(|e| RoostError::Storage(e.to_string()))? {
                Some(row) => {
                    let id_str: String =
                        row.get(0).map_err(|e| RoostError::Storage(e.to_string()))?;
                    let recurrence: Option<String> =
                        row.get(4).map_err(|e| RoostError::Storage(e.to_string()))?;
                    let status: String =
                        row.get(5).map_err(|e| RoostError::Storage(e.to_string()))?;
                    let created_at: i64 =
                        row.get(6).map_err(|e| RoostError::Storage(e.to_string()))?;

                    Ok(Some(Reminder {
                        id: Uuid::parse_str(&id_str)
                            .map_err(|e| RoostError::Storage(format!("Bad reminder id: {}", e)))?,
                        user_id: row.get(1).map_err(|e| RoostError::Storage(e.to_string()))?,
                        title: row.get(2).map_err(|e| RoostError::Storage(e.to_string()))?,
                        remind_time: row
                            .get(3)
                            .map_err(|e| RoostError::Storage(e.to_string()))?,
                        recurrence: recurrence
                            .map(|r| r.parse::<Recurrence>().map_err(RoostError::Storage))
                            .transpose()?,
                        status: status
                            .parse::<ReminderStatus>()
                            .map_err(RoostError::Storage)?,
                        created_at: Utc
                            .timestamp_opt(created_at, 0)
                            .single()
                            .unwrap_or_default(),
                    }))
                }
                None => Ok(None),
            }
        })
    }

    /// Count all stored reminders.
    pub fn count(&self) -> Result<u64, RoostError> {
        self.db.with_conn(|conn| {
            let count: i64 = conn
                .query_row("SELECT COUNT(*) FROM reminders", [], |row| row.get(0))
                .map_err(|e| RoostError::Storage(e.to_string()))?;
            Ok(count as u64)
        })
    }
}

#[async_trait]
impl ReminderSink for ReminderRepository {
    async fn save(&self, reminder: &Reminder) -> Result<(), RoostError> {
        self.insert(reminder)
    }
}
