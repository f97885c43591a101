//! Membership plan lookups.
//!
//! Plans are provisioned with the store. The existence predicate gates
//! payment creation; the ID listing feeds the error message shown when a
//! member form references an unknown plan.

use super::db::Db;
use crate::libs::error::Result;
use rusqlite::{params, Connection, OptionalExtension};

const PLAN_EXISTS: &str = "SELECT 1 FROM MembershipPlan WHERE planID = ?1";
const SELECT_PLAN_IDS: &str = "SELECT planID FROM MembershipPlan";

pub struct Plans<'a> {
    conn: &'a Connection,
}

impl<'a> Plans<'a> {
    pub fn new(db: &'a Db) -> Self {
        Plans { conn: &db.conn }
    }

    pub fn exists(&self, id: i64) -> Result<bool> {
        let found = self.conn.query_row(PLAN_EXISTS, params![id], |_| Ok(())).optional()?;
        Ok(found.is_some())
    }

    pub fn all_ids(&self) -> Result<Vec<i64>> {
        let mut stmt = self.conn.prepare(SELECT_PLAN_IDS)?;
        let rows = stmt.query_map([], |row| row.get(0))?;

        let mut ids = Vec::new();
        for id in rows {
            ids.push(id?);
        }
        Ok(ids)
    }
}
