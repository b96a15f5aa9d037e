//! SQLite connection wrapper that migrates on open.

use std::fs;
use std::path::Path;

use log::debug;
use rusqlite::Connection;

use super::migrations;
use crate::platform;

/// Owns the `rusqlite::Connection` used by the guide book store.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens (or creates) the database file at `path` and brings its schema
    /// up to date.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, rusqlite::Error> {
        debug!("Opening database at {:?}", path.as_ref());
        Self::migrated(Connection::open(path)?)
    }

    /// In-memory database, discarded on drop.
    pub fn open_in_memory() -> Result<Self, rusqlite::Error> {
        Self::migrated(Connection::open_in_memory()?)
    }

    /// Opens `file_name` inside the platform data directory, creating the
    /// directory if needed.
    pub fn open_in_data_dir(file_name: &str) -> Result<Self, rusqlite::Error> {
        let dir = platform::get_data_dir();
        if let Err(e) = fs::create_dir_all(&dir) {
            // Connection::open reports the real failure below
            debug!("Could not create data directory {:?}: {}", dir, e);
        }
        Self::open(dir.join(file_name))
    }

    fn migrated(conn: Connection) -> Result<Self, rusqlite::Error> {
        migrations::run_all(&conn)?;
        Ok(Self { conn })
    }

    pub fn schema_version(&self) -> i32 {
        migrations::get_schema_version(&self.conn)
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}
