//! Equipment repository.

use super::db::Db;
use crate::libs::error::Result;
use rusqlite::{params, Connection, OptionalExtension};
use serde::Serialize;

const INSERT_EQUIPMENT: &str = "INSERT INTO Equipment (name, type, quantity, gymID) VALUES (?1, ?2, ?3, ?4)";
const UPDATE_EQUIPMENT: &str = "UPDATE Equipment SET name = ?1, type = ?2, quantity = ?3, gymID = ?4 WHERE equipmentID = ?5";
const DELETE_EQUIPMENT: &str = "DELETE FROM Equipment WHERE equipmentID = ?1";
const EQUIPMENT_EXISTS: &str = "SELECT 1 FROM Equipment WHERE equipmentID = ?1";
const SELECT_EQUIPMENT: &str = "SELECT equipmentID, name, type, quantity, gymID FROM Equipment WHERE equipmentID = ?1";
const SELECT_ALL_EQUIPMENT: &str = "SELECT equipmentID, name, type, quantity, gymID FROM Equipment";
const SELECT_BY_TYPE: &str = "SELECT equipmentID, name, type, quantity, gymID FROM Equipment WHERE LOWER(type) = LOWER(?1)";

/// An equipment row as stored.
#[derive(Debug, Clone, Serialize)]
pub struct Equipment {
    pub id: i64,
    pub name: String,
    pub kind: String,
    pub quantity: i64,
    pub gym_id: i64,
}

/// Field set for creating or fully replacing an equipment record.
#[derive(Debug, Clone)]
pub struct NewEquipment {
    pub name: String,
    pub kind: String,
    pub quantity: i64,
    pub gym_id: i64,
}

pub struct EquipmentStore<'a> {
    conn: &'a Connection,
}

impl<'a> EquipmentStore<'a> {
    pub fn new(db: &'a Db) -> Self {
        EquipmentStore { conn: &db.conn }
    }

    pub fn exists(&self, id: i64) -> Result<bool> {
        let found = self.conn.query_row(EQUIPMENT_EXISTS, params![id], |_| Ok(())).optional()?;
        Ok(found.is_some())
    }

    /// Inserts an equipment record and returns the assigned surrogate key.
    pub fn create(&self, equipment: &NewEquipment) -> Result<i64> {
        self.conn.execute(
            INSERT_EQUIPMENT,
            params![equipment.name, equipment.kind, equipment.quantity, equipment.gym_id],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<Equipment>> {
        let equipment = self
            .conn
            .query_row(SELECT_EQUIPMENT, params![id], |row| Self::map_equipment(row))
            .optional()?;
        Ok(equipment)
    }

    pub fn get_all(&self) -> Result<Vec<Equipment>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_EQUIPMENT)?;
        let rows = stmt.query_map([], |row| Self::map_equipment(row))?;

        let mut items = Vec::new();
        for item in rows {
            items.push(item?);
        }
        Ok(items)
    }

    /// All equipment of one type; the comparison ignores case.
    pub fn get_by_kind(&self, kind: &str) -> Result<Vec<Equipment>> {
        let mut stmt = self.conn.prepare(SELECT_BY_TYPE)?;
        let rows = stmt.query_map(params![kind], |row| Self::map_equipment(row))?;

        let mut items = Vec::new();
        for item in rows {
            items.push(item?);
        }
        Ok(items)
    }

    /// Full-replace update. Returns `false` when no row carried the ID.
    pub fn update(&self, id: i64, equipment: &NewEquipment) -> Result<bool> {
        let affected = self.conn.execute(
            UPDATE_EQUIPMENT,
            params![equipment.name, equipment.kind, equipment.quantity, equipment.gym_id, id],
        )?;
        Ok(affected > 0)
    }

    pub fn delete(&self, id: i64) -> Result<bool> {
        let affected = self.conn.execute(DELETE_EQUIPMENT, params![id])?;
        Ok(affected > 0)
    }

    fn map_equipment(row: &rusqlite::Row<'_>) -> rusqlite::Result<Equipment> {
        Ok(Equipment {
            id: row.get(0)?,
            name: row.get(1)?,
            kind: row.get(2)?,
            quantity: row.get(3)?,
            gym_id: row.get(4)?,
        })
    }
}
