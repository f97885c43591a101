//! Instructor lookups.
//!
//! Instructors are provisioned with the store; the application only needs
//! existence checks before a class references one, plus the listing used by
//! the instructor reports.

use super::db::Db;
use crate::libs::error::Result;
use rusqlite::{params, Connection, OptionalExtension};
use serde::Serialize;

const INSTRUCTOR_EXISTS: &str = "SELECT 1 FROM Instructor WHERE instructorID = ?1";
const SELECT_ALL_INSTRUCTORS: &str = "SELECT instructorID, name, phone FROM Instructor";

#[derive(Debug, Clone, Serialize)]
pub struct Instructor {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
}

pub struct Instructors<'a> {
    conn: &'a Connection,
}

impl<'a> Instructors<'a> {
    pub fn new(db: &'a Db) -> Self {
        Instructors { conn: &db.conn }
    }

    pub fn exists(&self, id: i64) -> Result<bool> {
        let found = self.conn.query_row(INSTRUCTOR_EXISTS, params![id], |_| Ok(())).optional()?;
        Ok(found.is_some())
    }

    pub fn get_all(&self) -> Result<Vec<Instructor>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_INSTRUCTORS)?;
        let rows = stmt.query_map([], |row| {
            Ok(Instructor {
                id: row.get(0)?,
                name: row.get(1)?,
                phone: row.get(2)?,
            })
        })?;

        let mut instructors = Vec::new();
        for instructor in rows {
            instructors.push(instructor?);
        }
        Ok(instructors)
    }
}
