//! Plumber aggregate and related types.

mod aggregate;
mod commands;
mod events;
mod value_objects;

pub use aggregate::Plumber;
pub use commands::{CreatePlumber, PlumberCommand, UpdatePlumber};
pub use events::{
    MISSING_RATE_REASON, PlumberCreatedData, PlumberEvent, PlumberIsAvailableData,
    PlumberIsUnavailableData, PlumberUpdatedData, RateChangedData,
};
pub use value_objects::{HourlyRate, RateCard};

use thiserror::Error;

/// Errors that can occur during plumber command handling.
#[derive(Debug, Error)]
pub enum PlumberError {
    /// A mandatory field was left empty or absent.
    #[error("Required field missing: {field}")]
    RequiredField { field: &'static str },

    /// Create was issued against an already-created plumber.
    #[error("Plumber already exists")]
    AlreadyExists,

    /// A dispatcher supplied a command type name the domain does not know.
    #[error("Unknown command: {kind}")]
    UnknownCommand { kind: String },

    /// A dispatcher supplied a payload that does not match the command.
    #[error("Invalid command payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}
