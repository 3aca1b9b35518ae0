//! Domain layer for the plumber scheduling system.
//!
//! This crate provides the core domain abstractions including:
//! - Aggregate trait for event-sourced entities
//! - DomainEvent trait for domain events
//! - Plumber aggregate with command handling and event hydration
//!
//! The aggregate is a pure, synchronous value-holder: commands are validated
//! against the current in-memory state and converted into events, and state
//! is rebuilt only by replaying those events. Persisting events and
//! serializing access to an aggregate instance are caller concerns.

pub mod aggregate;
pub mod plumber;

pub use aggregate::{Aggregate, DomainEvent};
pub use plumber::{
    CreatePlumber, HourlyRate, MISSING_RATE_REASON, Plumber, PlumberCommand, PlumberCreatedData,
    PlumberError, PlumberEvent, PlumberIsAvailableData, PlumberIsUnavailableData,
    PlumberUpdatedData, RateCard, RateChangedData, UpdatePlumber,
};
