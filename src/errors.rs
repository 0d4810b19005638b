//! Unified application error type.
//! Every fallible function in the crate (db, sheet, core logic, cli, export)
//! returns AppError so the CLI can report failures in one place.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / encoders
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid month format: {0} (expected YYYY-MM)")]
    InvalidMonth(String),

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Invalid role: {0} (expected 'member' or 'supervisor')")]
    InvalidRole(String),

    #[error("Missing required value: {0}")]
    MissingField(String),

    // ---------------------------
    // Lookup errors
    // ---------------------------
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("Entry type not found: {0}")]
    EntryTypeNotFound(String),

    // ---------------------------
    // Business rules
    // ---------------------------
    #[error("Entry type '{0}' is inactive and cannot be used for new entries")]
    InactiveEntryType(String),

    #[error("Entry type '{0}' is referenced by existing entries; deactivate it instead")]
    EntryTypeInUse(String),

    #[error("Case reference '{case}' is already registered for {month}")]
    DuplicateCase { case: String, month: String },

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Import / export errors
    // ---------------------------
    #[error("Import error: {0}")]
    Import(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
