//! # Gymdesk - XYZ Gym Management System
//!
//! A command-line utility for managing the XYZ fitness club: members,
//! classes, equipment, membership plans, payments and attendance.
//!
//! ## Features
//!
//! - **Member Management**: Create, update and remove members together with their plan payments
//! - **Class Management**: Maintain the class schedule, attendance lists and member lookups
//! - **Equipment Management**: Track equipment stocked at each gym facility
//! - **Report Tasks**: Ten numbered read-only reports (averages, top instructors, recent attendance)
//! - **Data Export**: Export entity tables to CSV and JSON
//! - **Interactive Menus**: Guided terminal forms for every management action
//!
//! ## Usage
//!
//! ```rust,no_run
//! use gymdesk::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
