//! Member repository.
//!
//! Covers the full member lifecycle: existence and email-uniqueness checks,
//! creation, the joined member/plan listing used by the members menu and
//! report task 1, full-replace updates and deletion. Existence is checked by
//! the caller before update/delete; the affected-row count is still returned
//! so a vanished target surfaces as `false` rather than a silent no-op.

use super::db::Db;
use crate::libs::error::{GymError, Result};
use rusqlite::{params, Connection, ErrorCode, OptionalExtension};
use serde::Serialize;

const INSERT_MEMBER: &str = "INSERT INTO Member (name, email, phone, address, age, membershipStartDate, membershipEndDate)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const UPDATE_MEMBER: &str = "UPDATE Member
    SET name = ?1, email = ?2, phone = ?3, address = ?4, age = ?5, membershipStartDate = ?6, membershipEndDate = ?7
    WHERE memberID = ?8";
const DELETE_MEMBER: &str = "DELETE FROM Member WHERE memberID = ?1";
const SELECT_MEMBER: &str = "SELECT memberID, name, email, phone, address, age, membershipStartDate, membershipEndDate
    FROM Member WHERE memberID = ?1";
const MEMBER_EXISTS: &str = "SELECT 1 FROM Member WHERE memberID = ?1";
const EMAIL_EXISTS: &str = "SELECT 1 FROM Member WHERE email = ?1";
const EMAIL_TAKEN_BY_OTHER: &str = "SELECT 1 FROM Member WHERE email = ?1 AND memberID <> ?2";
const SELECT_MEMBERS_WITH_PLAN: &str = "SELECT m.memberID, m.name, m.email, m.age, mp.planID
    FROM Member m
    JOIN Payment p ON m.memberID = p.memberID
    JOIN MembershipPlan mp ON p.planID = mp.planID";

/// A member row as stored.
#[derive(Debug, Clone, Serialize)]
pub struct Member {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub age: i64,
    pub start_date: String,
    pub end_date: String,
}

/// Field set for creating or fully replacing a member.
#[derive(Debug, Clone)]
pub struct NewMember {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub age: i64,
    pub start_date: String,
    pub end_date: String,
}

/// A member joined with the plan of their payment record.
#[derive(Debug, Clone, Serialize)]
pub struct MemberWithPlan {
    pub member_id: i64,
    pub name: String,
    pub email: String,
    pub age: i64,
    pub plan_id: i64,
}

pub struct Members<'a> {
    conn: &'a Connection,
}

impl<'a> Members<'a> {
    pub fn new(db: &'a Db) -> Self {
        Members { conn: &db.conn }
    }

    pub fn exists(&self, id: i64) -> Result<bool> {
        let found = self.conn.query_row(MEMBER_EXISTS, params![id], |_| Ok(())).optional()?;
        Ok(found.is_some())
    }

    pub fn email_exists(&self, email: &str) -> Result<bool> {
        let found = self.conn.query_row(EMAIL_EXISTS, params![email], |_| Ok(())).optional()?;
        Ok(found.is_some())
    }

    /// Uniqueness check for updates, ignoring the member being edited.
    pub fn email_taken_by_other(&self, email: &str, id: i64) -> Result<bool> {
        let found = self.conn.query_row(EMAIL_TAKEN_BY_OTHER, params![email, id], |_| Ok(())).optional()?;
        Ok(found.is_some())
    }

    /// Inserts a member and returns the assigned surrogate key.
    ///
    /// A unique-constraint rejection on the email column is mapped to
    /// [`GymError::DuplicateKey`] in case the caller's pre-check raced a
    /// concurrent insert.
    pub fn create(&self, member: &NewMember) -> Result<i64> {
        self.conn
            .execute(
                INSERT_MEMBER,
                params![
                    member.name,
                    member.email,
                    member.phone,
                    member.address,
                    member.age,
                    member.start_date,
                    member.end_date
                ],
            )
            .map_err(|e| match e {
                rusqlite::Error::SqliteFailure(err, _) if err.code == ErrorCode::ConstraintViolation => {
                    GymError::DuplicateKey(member.email.clone())
                }
                other => GymError::Query(other),
            })?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<Member>> {
        let member = self
            .conn
            .query_row(SELECT_MEMBER, params![id], |row| {
                Ok(Member {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    email: row.get(2)?,
                    phone: row.get(3)?,
                    address: row.get(4)?,
                    age: row.get(5)?,
                    start_date: row.get(6)?,
                    end_date: row.get(7)?,
                })
            })
            .optional()?;
        Ok(member)
    }

    /// All members with the plan of their payment record, for the display menu.
    pub fn get_all_with_plan(&self) -> Result<Vec<MemberWithPlan>> {
        let mut stmt = self.conn.prepare(SELECT_MEMBERS_WITH_PLAN)?;
        let rows = stmt.query_map([], |row| {
            Ok(MemberWithPlan {
                member_id: row.get(0)?,
                name: row.get(1)?,
                email: row.get(2)?,
                age: row.get(3)?,
                plan_id: row.get(4)?,
            })
        })?;

        let mut members = Vec::new();
        for member in rows {
            members.push(member?);
        }
        Ok(members)
    }

    /// Full-replace update. Returns `false` when no row carried the ID.
    pub fn update(&self, id: i64, member: &NewMember) -> Result<bool> {
        let affected = self.conn.execute(
            UPDATE_MEMBER,
            params![
                member.name,
                member.email,
                member.phone,
                member.address,
                member.age,
                member.start_date,
                member.end_date,
                id
            ],
        )?;
        Ok(affected > 0)
    }

    pub fn delete(&self, id: i64) -> Result<bool> {
        let affected = self.conn.execute(DELETE_MEMBER, params![id])?;
        Ok(affected > 0)
    }
}
