//! Read-only aggregate report queries.
//!
//! Each query has a fixed shape and performs no mutation; the grouping, date
//! arithmetic and concatenation all run inside SQLite. Date cutoffs are
//! passed in by the caller so the membership-status partition can be pinned
//! in tests.

use super::db::Db;
use crate::libs::error::Result;
use chrono::NaiveDate;
use rusqlite::{params, Connection};
use serde::Serialize;

const AVERAGE_AGE_BY_STATUS: &str = "SELECT
        CASE WHEN membershipEndDate > ?1 THEN 'Active' ELSE 'Expired' END AS status,
        AVG(age),
        COUNT(*)
    FROM Member
    GROUP BY status
    ORDER BY status";
// Ties on class count fall to SQLite's natural row order, which is
// unspecified; the ranking below a tie is not deterministic.
const TOP_INSTRUCTORS: &str = "SELECT i.instructorID, i.name, COUNT(c.classID) AS class_count
    FROM Instructor i
    JOIN Class c ON i.instructorID = c.instructorID
    GROUP BY i.instructorID
    ORDER BY class_count DESC
    LIMIT ?1";
const ATTENDEES_BY_CLASS_TYPE: &str = "SELECT DISTINCT m.memberID, m.name, m.email, c.className, a.attendanceDate
    FROM Member m
    JOIN Attends a ON m.memberID = a.memberID
    JOIN Class c ON a.classID = c.classID
    WHERE LOWER(c.classType) LIKE LOWER(?1)";
const RECENT_ATTENDEES: &str = "SELECT m.memberID, m.name,
        GROUP_CONCAT(c.className, ', '),
        GROUP_CONCAT(c.classType, ', '),
        COUNT(a.classID)
    FROM Member m
    JOIN Attends a ON m.memberID = a.memberID
    JOIN Class c ON a.classID = c.classID
    WHERE a.attendanceDate >= ?1
    GROUP BY m.memberID";

/// Average member age within one membership-status partition.
#[derive(Debug, Clone, Serialize)]
pub struct AgeBracket {
    pub status: String,
    pub average_age: f64,
    pub members: i64,
}

/// An instructor ranked by the number of classes taught.
#[derive(Debug, Clone, Serialize)]
pub struct InstructorLoad {
    pub instructor_id: i64,
    pub name: String,
    pub classes: i64,
}

/// A member who attended a class of the requested type.
#[derive(Debug, Clone, Serialize)]
pub struct TypeAttendee {
    pub member_id: i64,
    pub name: String,
    pub email: String,
    pub class_name: String,
    pub attendance_date: String,
}

/// A member's visits within the recent window, with concatenated class details.
#[derive(Debug, Clone, Serialize)]
pub struct RecentAttendee {
    pub member_id: i64,
    pub name: String,
    pub class_names: String,
    pub class_types: String,
    pub visits: i64,
}

pub struct Reports<'a> {
    conn: &'a Connection,
}

impl<'a> Reports<'a> {
    pub fn new(db: &'a Db) -> Self {
        Reports { conn: &db.conn }
    }

    /// Average member age partitioned by membership status.
    ///
    /// A membership is active only while its end date lies strictly after
    /// the cutoff; an end date equal to the cutoff counts as expired.
    pub fn average_age_by_status(&self, today: NaiveDate) -> Result<Vec<AgeBracket>> {
        let mut stmt = self.conn.prepare(AVERAGE_AGE_BY_STATUS)?;
        let rows = stmt.query_map(params![today], |row| {
            Ok(AgeBracket {
                status: row.get(0)?,
                average_age: row.get(1)?,
                members: row.get(2)?,
            })
        })?;

        let mut brackets = Vec::new();
        for bracket in rows {
            brackets.push(bracket?);
        }
        Ok(brackets)
    }

    /// Instructors with the most classes, best first.
    pub fn top_instructors(&self, limit: i64) -> Result<Vec<InstructorLoad>> {
        let mut stmt = self.conn.prepare(TOP_INSTRUCTORS)?;
        let rows = stmt.query_map(params![limit], |row| {
            Ok(InstructorLoad {
                instructor_id: row.get(0)?,
                name: row.get(1)?,
                classes: row.get(2)?,
            })
        })?;

        let mut loads = Vec::new();
        for load in rows {
            loads.push(load?);
        }
        Ok(loads)
    }

    /// Members who attended a class whose type matches the given pattern,
    /// ignoring case.
    pub fn attendees_by_class_type(&self, kind: &str) -> Result<Vec<TypeAttendee>> {
        let pattern = format!("%{}%", kind.trim());
        let mut stmt = self.conn.prepare(ATTENDEES_BY_CLASS_TYPE)?;
        let rows = stmt.query_map(params![pattern], |row| {
            Ok(TypeAttendee {
                member_id: row.get(0)?,
                name: row.get(1)?,
                email: row.get(2)?,
                class_name: row.get(3)?,
                attendance_date: row.get(4)?,
            })
        })?;

        let mut attendees = Vec::new();
        for attendee in rows {
            attendees.push(attendee?);
        }
        Ok(attendees)
    }

    /// Members who attended on or after `since`, with the names and types of
    /// the classes they visited concatenated per member.
    pub fn recent_attendees(&self, since: NaiveDate) -> Result<Vec<RecentAttendee>> {
        let mut stmt = self.conn.prepare(RECENT_ATTENDEES)?;
        let rows = stmt.query_map(params![since], |row| {
            Ok(RecentAttendee {
                member_id: row.get(0)?,
                name: row.get(1)?,
                class_names: row.get(2)?,
                class_types: row.get(3)?,
                visits: row.get(4)?,
            })
        })?;

        let mut attendees = Vec::new();
        for attendee in rows {
            attendees.push(attendee?);
        }
        Ok(attendees)
    }
}
