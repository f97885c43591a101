//! Class repository and attendance queries.
//!
//! Besides plain CRUD this module carries the one stateful rule of the data
//! model: a class with registered members may only be deleted after those
//! members were moved to another existing class. `has_members` and
//! `move_members` are the two halves of that guard; the command layer checks
//! the target class exists before moving and only deletes once the move
//! reported a positive row count.

use super::db::Db;
use crate::libs::error::Result;
use rusqlite::{params, Connection, OptionalExtension};
use serde::Serialize;

const INSERT_CLASS: &str = "INSERT INTO Class (className, classType, duration, classCapacity, instructorID, gymID)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const UPDATE_CLASS: &str = "UPDATE Class
    SET className = ?1, classType = ?2, duration = ?3, classCapacity = ?4, instructorID = ?5, gymID = ?6
    WHERE classID = ?7";
const DELETE_CLASS: &str = "DELETE FROM Class WHERE classID = ?1";
const CLASS_EXISTS: &str = "SELECT 1 FROM Class WHERE classID = ?1";
const SELECT_CLASS: &str = "SELECT classID, className, classType, duration, classCapacity, instructorID, gymID
    FROM Class WHERE classID = ?1";
const SELECT_ALL_CLASSES: &str = "SELECT classID, className, classType, duration, classCapacity, instructorID, gymID
    FROM Class";
const SELECT_BY_INSTRUCTOR: &str = "SELECT classID, className, classType, duration, classCapacity, instructorID, gymID
    FROM Class WHERE instructorID = ?1";
const SELECT_WITH_ATTENDANCE: &str = "SELECT c.classID, c.className, c.classType, c.duration, c.classCapacity,
        COUNT(a.memberID) AS num_attendees
    FROM Class c
    LEFT JOIN Attends a ON c.classID = a.classID
    GROUP BY c.classID";
const SELECT_CLASS_MEMBERS: &str = "SELECT m.memberID, m.name, m.email, m.age
    FROM Member m
    INNER JOIN Attends a ON m.memberID = a.memberID
    WHERE a.classID = ?1";
const COUNT_ATTENDEES: &str = "SELECT COUNT(*) FROM Attends WHERE classID = ?1";
const MOVE_MEMBERS: &str = "UPDATE Attends SET classID = ?1 WHERE classID = ?2";

/// A class row as stored.
#[derive(Debug, Clone, Serialize)]
pub struct Class {
    pub id: i64,
    pub name: String,
    pub kind: String,
    pub duration: i64,
    pub capacity: i64,
    pub instructor_id: i64,
    pub gym_id: i64,
}

/// Field set for creating or fully replacing a class.
#[derive(Debug, Clone)]
pub struct NewClass {
    pub name: String,
    pub kind: String,
    pub duration: i64,
    pub capacity: i64,
    pub instructor_id: i64,
    pub gym_id: i64,
}

/// A class with its current number of registered members.
#[derive(Debug, Clone, Serialize)]
pub struct ClassAttendance {
    pub id: i64,
    pub name: String,
    pub kind: String,
    pub duration: i64,
    pub capacity: i64,
    pub attendees: i64,
}

/// A member registered to a class.
#[derive(Debug, Clone, Serialize)]
pub struct ClassMember {
    pub member_id: i64,
    pub name: String,
    pub email: String,
    pub age: i64,
}

pub struct Classes<'a> {
    conn: &'a Connection,
}

impl<'a> Classes<'a> {
    pub fn new(db: &'a Db) -> Self {
        Classes { conn: &db.conn }
    }

    pub fn exists(&self, id: i64) -> Result<bool> {
        let found = self.conn.query_row(CLASS_EXISTS, params![id], |_| Ok(())).optional()?;
        Ok(found.is_some())
    }

    /// Inserts a class and returns the assigned surrogate key.
    pub fn create(&self, class: &NewClass) -> Result<i64> {
        self.conn.execute(
            INSERT_CLASS,
            params![class.name, class.kind, class.duration, class.capacity, class.instructor_id, class.gym_id],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<Class>> {
        let class = self
            .conn
            .query_row(SELECT_CLASS, params![id], |row| Self::map_class(row))
            .optional()?;
        Ok(class)
    }

    pub fn get_all(&self) -> Result<Vec<Class>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_CLASSES)?;
        let rows = stmt.query_map([], |row| Self::map_class(row))?;

        let mut classes = Vec::new();
        for class in rows {
            classes.push(class?);
        }
        Ok(classes)
    }

    pub fn get_by_instructor(&self, instructor_id: i64) -> Result<Vec<Class>> {
        let mut stmt = self.conn.prepare(SELECT_BY_INSTRUCTOR)?;
        let rows = stmt.query_map(params![instructor_id], |row| Self::map_class(row))?;

        let mut classes = Vec::new();
        for class in rows {
            classes.push(class?);
        }
        Ok(classes)
    }

    /// All classes with their attendee counts, empty classes included.
    pub fn with_attendance(&self) -> Result<Vec<ClassAttendance>> {
        let mut stmt = self.conn.prepare(SELECT_WITH_ATTENDANCE)?;
        let rows = stmt.query_map([], |row| {
            Ok(ClassAttendance {
                id: row.get(0)?,
                name: row.get(1)?,
                kind: row.get(2)?,
                duration: row.get(3)?,
                capacity: row.get(4)?,
                attendees: row.get(5)?,
            })
        })?;

        let mut classes = Vec::new();
        for class in rows {
            classes.push(class?);
        }
        Ok(classes)
    }

    /// All members registered to the given class.
    pub fn members_in_class(&self, id: i64) -> Result<Vec<ClassMember>> {
        let mut stmt = self.conn.prepare(SELECT_CLASS_MEMBERS)?;
        let rows = stmt.query_map(params![id], |row| {
            Ok(ClassMember {
                member_id: row.get(0)?,
                name: row.get(1)?,
                email: row.get(2)?,
                age: row.get(3)?,
            })
        })?;

        let mut members = Vec::new();
        for member in rows {
            members.push(member?);
        }
        Ok(members)
    }

    pub fn has_members(&self, id: i64) -> Result<bool> {
        let count: i64 = self.conn.query_row(COUNT_ATTENDEES, params![id], |row| row.get(0))?;
        Ok(count > 0)
    }

    /// Reassigns every attendee of `old_id` to `new_id`.
    ///
    /// Returns the number of moved rows; the caller must verify the target
    /// class exists and treat a zero count as a failed migration.
    pub fn move_members(&self, old_id: i64, new_id: i64) -> Result<usize> {
        let moved = self.conn.execute(MOVE_MEMBERS, params![new_id, old_id])?;
        Ok(moved)
    }

    /// Full-replace update. Returns `false` when no row carried the ID.
    pub fn update(&self, id: i64, class: &NewClass) -> Result<bool> {
        let affected = self.conn.execute(
            UPDATE_CLASS,
            params![class.name, class.kind, class.duration, class.capacity, class.instructor_id, class.gym_id, id],
        )?;
        Ok(affected > 0)
    }

    pub fn delete(&self, id: i64) -> Result<bool> {
        let affected = self.conn.execute(DELETE_CLASS, params![id])?;
        Ok(affected > 0)
    }

    fn map_class(row: &rusqlite::Row<'_>) -> rusqlite::Result<Class> {
        Ok(Class {
            id: row.get(0)?,
            name: row.get(1)?,
            kind: row.get(2)?,
            duration: row.get(3)?,
            capacity: row.get(4)?,
            instructor_id: row.get(5)?,
            gym_id: row.get(6)?,
        })
    }
}
