//! Connection manager for the club's store file.
//!
//! The store is a single SQLite file with a fixed, well-known name. This is
//! the only module that talks to the SQLite connection primitive: it
//! validates the supplied name before opening, refuses to open a store that
//! does not exist, and hands the open connection to the repositories by
//! reference. Creation of a fresh store is explicit via [`Db::create`];
//! [`Db::open`] never creates anything.

use crate::libs::data_storage::DataStorage;
use crate::libs::error::{GymError, Result};
use crate::msg_debug;
use rusqlite::Connection;
use std::path::PathBuf;

pub const DB_FILE_NAME: &str = "XYZGym.sqlite";

#[derive(Debug)]
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the store under its fixed name. Fails fast when the file is absent.
    pub fn open() -> Result<Db> {
        Self::open_named(DB_FILE_NAME)
    }

    /// Validates a user-supplied store name and opens it.
    ///
    /// The name must be non-empty, match the expected fixed name exactly and
    /// refer to an existing file. Each violation maps to its own error so the
    /// interactive prompt can explain what was wrong and re-prompt.
    pub fn open_named(name: &str) -> Result<Db> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GymError::StoreNameEmpty);
        }
        if name != DB_FILE_NAME {
            return Err(GymError::StoreNameMismatch(name.to_string()));
        }

        let path = Self::store_path()?;
        if !path.exists() {
            return Err(GymError::StoreMissing(name.to_string()));
        }

        let conn = Connection::open(&path).map_err(|e| GymError::Connection(e.to_string()))?;
        msg_debug!(format!("Opened store at {}", path.display()));

        Ok(Db { conn })
    }

    /// Creates the store file and applies the full schema.
    ///
    /// Used by the `init` command and by tests; opening an existing store
    /// never goes through here.
    pub fn create() -> Result<Db> {
        let path = Self::store_path()?;
        let conn = Connection::open(&path).map_err(|e| GymError::Connection(e.to_string()))?;
        super::schema::ensure_schema(&conn)?;

        Ok(Db { conn })
    }

    /// Platform-specific location of the store file.
    pub fn store_path() -> Result<PathBuf> {
        DataStorage::new()
            .get_path(DB_FILE_NAME)
            .map_err(|e| GymError::Connection(e.to_string()))
    }

    /// Releases the handle. Safe to call at most once per successful open.
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| GymError::Query(e))
    }
}
