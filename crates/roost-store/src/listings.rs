//! Listing repository backed by SQLite.

use std::sync::Arc;

use async_trait::async_trait;
use rusqlite::Row;

use roost_core::error::RoostError;
use roost_core::store::ListingStore;
use roost_core::types::Listing;

use crate::db::Database;

/// Repository for rental listings.
pub struct ListingRepository {
    db: Arc<Database>,
}

impl ListingRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Store a new listing.
    pub fn insert(&self, listing: &Listing) -> Result<(), RoostError> {
        let amenities = serde_json::to_string(&listing.amenities)?;
        self.db.with_conn(|conn| {
            conn.execute(
                "INSERT INTO listings (id, title, address, price, room_type, amenities, is_published)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                rusqlite::params![
                    listing.id,
                    listing.title,
                    listing.address,
                    listing.price,
                    listing.room_type,
                    amenities,
                    listing.is_published as i32,
                ],
            )
            .map_err(|e| RoostError::Storage(format!("Failed to save listing: {}", e)))?;
            Ok(())
        })
    }

    /// Find a listing by ID.
    pub fn find_by_id(&self, id: &str) -> Result<Option<Listing>, RoostError> {
        self.db.with_conn(|conn| {
            let mut stmt = conn
                .prepare(
                    "SELECT id, title, address, price, room_type, amenities, is_published
                     FROM listings WHERE id = ?1",
                )
                .map_err(|e| RoostError::Storage(e.to_string()))?;

            let mut rows = stmt
                .query(rusqlite::params![id])
                .map_err(|e| RoostError::Storage(e.to_string()))?;

            match rows.next().map_err(|e| RoostError::Storage(e.to_string()))? {
                Some(row) => Ok(Some(row_to_listing(row)?)),
                None => Ok(None),
            }
        })
    }

    /// Return all published listings in insertion order.
    pub fn published(&self) -> Result<Vec<Listing>, RoostError> {
        self.db.with_conn(|conn| {
            let mut stmt = conn
                .prepare(
                    "SELECT id, title, address, price, room_type, amenities, is_published
                     FROM listings
                     WHERE is_published = 1
                     ORDER BY created_at ASC, rowid ASC",
                )
                .map_err(|e| RoostError::Storage(e.to_string()))?;

            let rows = stmt
                .query_map([], |row| Ok(row_to_listing(row)))
                .map_err(|e| RoostError::Storage(e.to_string()))?;

            let mut listings = Vec::new();
            for row in rows {
                let listing = row.map_err(|e| RoostError::Storage(e.to_string()))??;
                listings.push(listing);
            }
            Ok(listings)
        })
    }
}

#[async_trait]
impl ListingStore for ListingRepository {
    async fn list_published(&self) -> Result<Vec<Listing>, RoostError> {
        self.published()
    }
}

fn row_to_listing(row: &Row<'_>) -> Result<Listing, RoostError> {
    let amenities_json: String = row
        .get(5)
        .map_err(|e| RoostError::Storage(e.to_string()))?;
    let amenities: Vec<String> = serde_json::from_str(&amenities_json)?;
    let is_published: i64 = row
        .get(6)
        .map_err(|e| RoostError::Storage(e.to_string()))?;

    Ok(Listing {
        id: row.get(0).map_err(|e| RoostError::Storage(e.to_string()))?,
        title: row.get(1).map_err(|e| RoostError::Storage(e.to_string()))?,
        address: row.get(2).map_err(|e| RoostError::Storage(e.to_string()))?,
        price: row.get(3).map_err(|e| RoostError::Storage(e.to_string()))?,
        room_type: row.get(4).map_err(|e| RoostError::Storage(e.to_string()))?,
        amenities,
        is_published: is_published != 0,
    })
}
