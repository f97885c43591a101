//! Gym facility lookups.

use super::db::Db;
use crate::libs::error::Result;
use rusqlite::{params, Connection, OptionalExtension};

const GYM_EXISTS: &str = "SELECT 1 FROM GymFacility WHERE gymID = ?1";

pub struct Gyms<'a> {
    conn: &'a Connection,
}

impl<'a> Gyms<'a> {
    pub fn new(db: &'a Db) -> Self {
        Gyms { conn: &db.conn }
    }

    pub fn exists(&self, id: i64) -> Result<bool> {
        let found = self.conn.query_row(GYM_EXISTS, params![id], |_| Ok(())).optional()?;
        Ok(found.is_some())
    }
}
