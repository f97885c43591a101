//! Embedded schema for the club's store.
//!
//! Table and column names follow the store file's established layout, so a
//! store created here is interchangeable with one provisioned externally.
//! Applied only by `Db::create`; opening an existing store assumes the
//! schema is already in place.

use crate::libs::error::Result;
use rusqlite::Connection;

const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS Instructor (
        instructorID INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        phone TEXT
    )",
    "CREATE TABLE IF NOT EXISTS GymFacility (
        gymID INTEGER PRIMARY KEY,
        address TEXT,
        phone TEXT
    )",
    "CREATE TABLE IF NOT EXISTS MembershipPlan (
        planID INTEGER PRIMARY KEY,
        planType TEXT,
        cost REAL
    )",
    "CREATE TABLE IF NOT EXISTS Member (
        memberID INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE,
        phone TEXT,
        address TEXT,
        age INTEGER NOT NULL,
        membershipStartDate DATE NOT NULL,
        membershipEndDate DATE NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS Class (
        classID INTEGER PRIMARY KEY,
        className TEXT NOT NULL,
        classType TEXT NOT NULL,
        duration INTEGER NOT NULL,
        classCapacity INTEGER NOT NULL,
        instructorID INTEGER NOT NULL,
        gymID INTEGER NOT NULL,
        FOREIGN KEY (instructorID) REFERENCES Instructor(instructorID),
        FOREIGN KEY (gymID) REFERENCES GymFacility(gymID)
    )",
    "CREATE TABLE IF NOT EXISTS Equipment (
        equipmentID INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        type TEXT NOT NULL,
        quantity INTEGER NOT NULL,
        gymID INTEGER NOT NULL,
        FOREIGN KEY (gymID) REFERENCES GymFacility(gymID)
    )",
    "CREATE TABLE IF NOT EXISTS Payment (
        paymentID INTEGER PRIMARY KEY,
        memberID INTEGER NOT NULL,
        planID INTEGER NOT NULL,
        amountPaid REAL NOT NULL,
        paymentDate DATE NOT NULL,
        FOREIGN KEY (memberID) REFERENCES Member(memberID),
        FOREIGN KEY (planID) REFERENCES MembershipPlan(planID)
    )",
    "CREATE TABLE IF NOT EXISTS Attends (
        memberID INTEGER NOT NULL,
        classID INTEGER NOT NULL,
        attendanceDate DATE NOT NULL,
        PRIMARY KEY (memberID, classID),
        FOREIGN KEY (memberID) REFERENCES Member(memberID),
        FOREIGN KEY (classID) REFERENCES Class(classID)
    )",
];

/// Creates every entity table that does not exist yet.
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    for statement in SCHEMA {
        conn.execute(statement, [])?;
    }
    Ok(())
}
