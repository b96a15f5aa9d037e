//! Guide Book Store.
//!
//! Persists one encoded [`GuideBookState`] per owner in SQLite. The blob is
//! the state's byte-buffer form, so the stored bytes are the same ones sent
//! over the network.

use std::time::{SystemTime, UNIX_EPOCH};

use log::debug;
use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

use super::guide_book_state::GuideBookState;
use crate::buffer::{DataInput, FinalSerializable};
use crate::types::errors::StoreError;
use crate::types::page::BookCatalog;

/// Trait defining guide book persistence operations.
pub trait GuideBookStoreTrait {
    fn save(&self, owner: &str, state: &GuideBookState<'_>) -> Result<(), StoreError>;
    fn load<'c>(
        &self,
        owner: &str,
        catalog: &'c dyn BookCatalog,
        max_bookmarks: usize,
    ) -> Result<Option<GuideBookState<'c>>, StoreError>;
    /// Returns whether a row was removed.
    fn delete(&self, owner: &str) -> Result<bool, StoreError>;
    /// Owners with saved state, most recently saved first.
    fn list_owners(&self) -> Result<Vec<String>, StoreError>;
}

/// Store backed by a SQLite connection.
pub struct GuideBookStore<'a> {
    conn: &'a Connection,
}

impl<'a> GuideBookStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }
}

impl GuideBookStoreTrait for GuideBookStore<'_> {
    /// Inserts or replaces the owner's state.
    fn save(&self, owner: &str, state: &GuideBookState<'_>) -> Result<(), StoreError> {
        let data = state.to_bytes()?;
        self.conn.execute(
            "INSERT INTO guide_book_states (id, owner, data, updated_at) VALUES (?1, ?2, ?3, ?4) \
             ON CONFLICT(owner) DO UPDATE SET data = excluded.data, updated_at = excluded.updated_at",
            params![Uuid::new_v4().to_string(), owner, data, Self::now()],
        )?;
        debug!("Saved guide book state for {} ({} bytes)", owner, data.len());
        Ok(())
    }

    fn load<'c>(
        &self,
        owner: &str,
        catalog: &'c dyn BookCatalog,
        max_bookmarks: usize,
    ) -> Result<Option<GuideBookState<'c>>, StoreError> {
        let data: Option<Vec<u8>> = self
            .conn
            .query_row(
                "SELECT data FROM guide_book_states WHERE owner = ?1",
                params![owner],
                |row| row.get(0),
            )
            .optional()?;

        match data {
            Some(bytes) => {
                let mut input = DataInput::new(&bytes);
                Ok(Some(GuideBookState::from_bytes(&mut input, catalog, max_bookmarks)?))
            }
            None => Ok(None),
        }
    }

    fn delete(&self, owner: &str) -> Result<bool, StoreError> {
        let affected = self
            .conn
            .execute("DELETE FROM guide_book_states WHERE owner = ?1", params![owner])?;
        Ok(affected > 0)
    }

    fn list_owners(&self) -> Result<Vec<String>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT owner FROM guide_book_states ORDER BY updated_at DESC, owner")?;
        let rows = stmt.query_map([], |row| row.get(0))?;

        let mut owners = Vec::new();
        for row in rows {
            owners.push(row?);
        }
        Ok(owners)
    }
}
