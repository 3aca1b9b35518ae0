//! Plumber domain events.

use chrono::{DateTime, Utc};
use common::AggregateId;
use serde::{Deserialize, Serialize};

use crate::aggregate::DomainEvent;

use super::HourlyRate;

/// Reason recorded when a plumber is taken off the schedule for lack of a
/// billable rate.
pub const MISSING_RATE_REASON: &str = "Missing rate.";

/// Events that can occur on a plumber aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PlumberEvent {
    /// Plumber was taken on.
    PlumberCreated(PlumberCreatedData),

    /// Plumber became available for scheduling.
    PlumberIsAvailable(PlumberIsAvailableData),

    /// Plumber's profile was updated.
    PlumberUpdated(PlumberUpdatedData),

    /// Plumber's billing rates changed.
    RateChanged(RateChangedData),

    /// Plumber was taken off the schedule.
    PlumberIsUnavailable(PlumberIsUnavailableData),
}

impl DomainEvent for PlumberEvent {
    fn event_type(&self) -> &'static str {
        match self {
            PlumberEvent::PlumberCreated(_) => "PlumberCreated",
            PlumberEvent::PlumberIsAvailable(_) => "PlumberIsAvailable",
            PlumberEvent::PlumberUpdated(_) => "PlumberUpdated",
            PlumberEvent::RateChanged(_) => "RateChanged",
            PlumberEvent::PlumberIsUnavailable(_) => "PlumberIsUnavailable",
        }
    }
}

/// Data for PlumberCreated event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlumberCreatedData {
    /// The plumber's identifier.
    pub plumber_id: AggregateId,

    /// First name at the time of creation.
    pub first_name: String,

    /// Last name at the time of creation.
    pub last_name: String,

    /// When the plumber was taken on.
    pub occurred_at: DateTime<Utc>,
}

/// Data for PlumberIsAvailable event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlumberIsAvailableData {
    /// The plumber's identifier.
    pub plumber_id: AggregateId,

    /// Regular hourly rate in effect.
    pub regular_rate: HourlyRate,

    /// Overtime hourly rate in effect.
    pub overtime_rate: HourlyRate,

    /// When the plumber became schedulable.
    pub occurred_at: DateTime<Utc>,
}

/// Data for PlumberUpdated event.
///
/// Carries the command's full proposed values whether or not anything
/// actually changed; separate events record rate consequences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlumberUpdatedData {
    /// The plumber's identifier.
    pub plumber_id: AggregateId,

    /// Proposed first name.
    pub first_name: String,

    /// Proposed last name.
    pub last_name: String,

    /// Proposed regular hourly rate, if supplied.
    pub regular_rate: Option<HourlyRate>,

    /// Proposed overtime hourly rate, if supplied.
    pub overtime_rate: Option<HourlyRate>,

    /// When the update was recorded.
    pub occurred_at: DateTime<Utc>,
}

/// Data for RateChanged event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateChangedData {
    /// The plumber's identifier.
    pub plumber_id: AggregateId,

    /// New regular hourly rate.
    pub regular_rate: HourlyRate,

    /// New overtime hourly rate.
    pub overtime_rate: HourlyRate,

    /// When the rates changed.
    pub occurred_at: DateTime<Utc>,
}

/// Data for PlumberIsUnavailable event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlumberIsUnavailableData {
    /// The plumber's identifier.
    pub plumber_id: AggregateId,

    /// Why the plumber was taken off the schedule.
    pub reason: String,

    /// When the plumber stopped being schedulable.
    pub occurred_at: DateTime<Utc>,
}

// Convenience constructors for events
impl PlumberEvent {
    /// Creates a PlumberCreated event.
    pub fn created(
        plumber_id: AggregateId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        PlumberEvent::PlumberCreated(PlumberCreatedData {
            plumber_id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            occurred_at: Utc::now(),
        })
    }

    /// Creates a PlumberIsAvailable event.
    pub fn available(
        plumber_id: AggregateId,
        regular_rate: HourlyRate,
        overtime_rate: HourlyRate,
    ) -> Self {
        PlumberEvent::PlumberIsAvailable(PlumberIsAvailableData {
            plumber_id,
            regular_rate,
            overtime_rate,
            occurred_at: Utc::now(),
        })
    }

    /// Creates a PlumberUpdated event.
    pub fn updated(
        plumber_id: AggregateId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        regular_rate: Option<HourlyRate>,
        overtime_rate: Option<HourlyRate>,
    ) -> Self {
        PlumberEvent::PlumberUpdated(PlumberUpdatedData {
            plumber_id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            regular_rate,
            overtime_rate,
            occurred_at: Utc::now(),
        })
    }

    /// Creates a RateChanged event.
    pub fn rate_changed(
        plumber_id: AggregateId,
        regular_rate: HourlyRate,
        overtime_rate: HourlyRate,
    ) -> Self {
        PlumberEvent::RateChanged(RateChangedData {
            plumber_id,
            regular_rate,
            overtime_rate,
            occurred_at: Utc::now(),
        })
    }

    /// Creates a PlumberIsUnavailable event.
    pub fn unavailable(plumber_id: AggregateId, reason: impl Into<String>) -> Self {
        PlumberEvent::PlumberIsUnavailable(PlumberIsUnavailableData {
            plumber_id,
            reason: reason.into(),
            occurred_at: Utc::now(),
        })
    }

    /// Returns the identifier of the plumber this event belongs to.
    pub fn plumber_id(&self) -> &AggregateId {
        match self {
            PlumberEvent::PlumberCreated(data) => &data.plumber_id,
            PlumberEvent::PlumberIsAvailable(data) => &data.plumber_id,
            PlumberEvent::PlumberUpdated(data) => &data.plumber_id,
            PlumberEvent::RateChanged(data) => &data.plumber_id,
            PlumberEvent::PlumberIsUnavailable(data) => &data.plumber_id,
        }
    }
}
