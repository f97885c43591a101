//! Core library modules for the gymdesk application.
//!
//! Serves as the main entry point for the shared application components,
//! sitting between the command handlers and the database layer.
//!
//! ## Features
//!
//! - **Error Taxonomy**: Typed errors for connection, validation and query failures
//! - **Validation Rules**: Pure input checks evaluated before any mutation
//! - **User Interface**: Console rendering, messaging, data export
//! - **Data Storage**: Platform-specific location of the store file

pub mod data_storage;
pub mod error;
pub mod export;
pub mod messages;
pub mod validation;
pub mod view;
