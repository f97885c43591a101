//! Database layer for the gymdesk application.
//!
//! Provides the data persistence layer built on SQLite, with one repository
//! module per entity of the club's data model. Repositories borrow the single
//! connection opened at program start and expose existence checks, creation,
//! reads, full-replace updates and deletion; every mutation commits before the
//! call returns.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use gymdesk::db::{db::Db, members::Members};
//!
//! # fn run() -> Result<(), gymdesk::libs::error::GymError> {
//! let db = Db::open()?;
//! let members = Members::new(&db);
//! for row in members.get_all_with_plan()? {
//!     println!("{}: {}", row.member_id, row.name);
//! }
//! # Ok(())
//! # }
//! ```

/// Core connection manager for the fixed-name store file.
pub mod db;

/// Embedded schema definition for all entity tables.
pub mod schema;

/// Member repository and email-uniqueness predicate.
pub mod members;

/// Class repository, attendance queries and the member-migration guard.
pub mod classes;

/// Equipment repository.
pub mod equipment;

/// Instructor lookups.
pub mod instructors;

/// Gym facility lookups.
pub mod gyms;

/// Membership plan lookups.
pub mod plans;

/// Payment repository.
pub mod payments;

/// Read-only aggregate report queries.
pub mod reports;
