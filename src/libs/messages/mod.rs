//! Centralized user-facing message system.
//!
//! All terminal wording lives in [`types::Message`] and its `Display`
//! implementation; the macros in [`macros`] route messages to the console
//! or the tracing subscriber.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
