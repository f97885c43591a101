//! Error taxonomy for the data-access and validation layer.
//!
//! Every failure that can leave the database or validation code is one of
//! these variants, so callers can distinguish a bad input (re-prompt) from a
//! missing row (abort the operation) from a store-level failure (log and
//! abort). Validation errors are raised before any repository call and never
//! reach the store; query errors are converted at the statement boundary and
//! never crash the process after a successful connect.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GymError {
    /// No store name was entered at the connection prompt.
    #[error("No store name entered. Please provide a valid store name.")]
    StoreNameEmpty,

    /// The entered store name does not match the expected fixed name.
    #[error("The store '{0}' is not valid. Please try again.")]
    StoreNameMismatch(String),

    /// The store file does not exist on disk.
    #[error("The store '{0}' does not exist. Please check the store file.")]
    StoreMissing(String),

    /// The store file exists but could not be opened.
    #[error("Store connection unsuccessful: {0}")]
    Connection(String),

    /// A required input field was left empty.
    #[error("The {field} field cannot be empty")]
    EmptyField { field: &'static str },

    /// An input field failed to parse as the expected kind of value.
    #[error("Only {expected} allowed in the {field} field")]
    InvalidFormat { field: &'static str, expected: &'static str },

    /// A parsed value violates a range or ordering constraint.
    #[error("{0}")]
    ConstraintViolation(String),

    /// A value is not a member of a fixed literal set.
    #[error("'{value}' is not one of: {expected}")]
    InvalidEnum { value: String, expected: &'static str },

    /// A unique column already holds the given value.
    #[error("The email '{0}' is already associated with an existing member")]
    DuplicateKey(String),

    /// A referenced row does not exist.
    #[error("No {entity} found with ID {id}")]
    NotFound { entity: &'static str, id: i64 },

    /// The store rejected a statement. The connection remains usable.
    #[error("Store error: {0}")]
    Query(#[from] rusqlite::Error),
}

pub type Result<T, E = GymError> = std::result::Result<T, E>;
