//! Plumber aggregate implementation.

use common::{AggregateId, Version};
use serde::{Deserialize, Serialize};

use crate::aggregate::Aggregate;

use super::{
    CreatePlumber, MISSING_RATE_REASON, PlumberCommand, PlumberError, PlumberEvent, RateCard,
    UpdatePlumber,
};

/// Plumber aggregate root.
///
/// Tracks only identity and billing rates. Names travel on commands and
/// events but are never kept in state: no rule reads the current name, only
/// whether a command proposes new values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plumber {
    /// Unique plumber identifier, unset until a creation event is applied.
    id: Option<AggregateId>,

    /// Replay position, advancing by one per applied event.
    #[serde(default)]
    version: Version,

    /// Billing rates currently on record.
    rates: RateCard,
}

impl Aggregate for Plumber {
    type Event = PlumberEvent;
    type Error = PlumberError;

    fn aggregate_type() -> &'static str {
        "Plumber"
    }

    fn id(&self) -> Option<&AggregateId> {
        self.id.as_ref()
    }

    fn version(&self) -> Version {
        self.version
    }

    fn apply(&mut self, event: Self::Event) {
        match event {
            PlumberEvent::PlumberCreated(data) => {
                self.id = Some(data.plumber_id);
            }
            PlumberEvent::PlumberIsAvailable(data) => {
                self.rates = RateCard::both(data.regular_rate, data.overtime_rate);
            }
            PlumberEvent::RateChanged(data) => {
                self.rates = RateCard::both(data.regular_rate, data.overtime_rate);
            }
            PlumberEvent::PlumberUpdated(_) | PlumberEvent::PlumberIsUnavailable(_) => {
                // No state effect: names are not tracked, and unavailability
                // is derived from the rates on record.
            }
        }

        self.version = self.version.next();
    }
}

// Query methods
impl Plumber {
    /// Returns the billing rates currently on record.
    pub fn rates(&self) -> RateCard {
        self.rates
    }

    /// Returns true if the plumber can be scheduled: both rates on record
    /// and strictly positive.
    pub fn is_available_for_scheduling(&self) -> bool {
        self.rates.schedulable().is_some()
    }
}

// Command handling (returns events, never mutates state)
impl Plumber {
    /// Validates a command against the current state and returns the events
    /// it gives rise to, in emission order.
    ///
    /// The aggregate itself is left untouched; callers apply the returned
    /// events if they want the in-memory instance to reflect them.
    pub fn execute(&self, command: &PlumberCommand) -> Result<Vec<PlumberEvent>, PlumberError> {
        let events = match command {
            PlumberCommand::Create(cmd) => self.create(cmd)?,
            PlumberCommand::Update(cmd) => self.update(cmd)?,
        };

        tracing::debug!(
            kind = command.kind(),
            plumber_id = %command.plumber_id(),
            events = events.len(),
            "command handled"
        );

        Ok(events)
    }

    fn create(&self, cmd: &CreatePlumber) -> Result<Vec<PlumberEvent>, PlumberError> {
        if self.id.is_some() {
            return Err(PlumberError::AlreadyExists);
        }
        require(&cmd.first_name, "first_name")?;
        require(&cmd.last_name, "last_name")?;

        let mut events = vec![PlumberEvent::created(
            cmd.plumber_id.clone(),
            cmd.first_name.clone(),
            cmd.last_name.clone(),
        )];

        // A schedulable rate card makes the new plumber available right
        // away. Anything less leaves the plumber implicitly unavailable; no
        // unavailability event is recorded on creation.
        if let Some((regular, overtime)) = cmd.rates().schedulable() {
            events.push(PlumberEvent::available(
                cmd.plumber_id.clone(),
                regular,
                overtime,
            ));
        }

        Ok(events)
    }

    // Deliberately not guarded against an unborn aggregate: the caller is
    // trusted to only update plumbers it has already loaded.
    fn update(&self, cmd: &UpdatePlumber) -> Result<Vec<PlumberEvent>, PlumberError> {
        require(&cmd.first_name, "first_name")?;
        require(&cmd.last_name, "last_name")?;

        let mut events = vec![PlumberEvent::updated(
            cmd.plumber_id.clone(),
            cmd.first_name.clone(),
            cmd.last_name.clone(),
            cmd.regular_rate,
            cmd.overtime_rate,
        )];

        let proposed = cmd.rates();
        if proposed.is_unpaid() {
            // Two explicit zeros take the plumber off the schedule; an
            // unbillable card is not recorded as a rate change. A card with
            // a single zero still falls through to the branch below.
            events.push(PlumberEvent::unavailable(
                cmd.plumber_id.clone(),
                MISSING_RATE_REASON,
            ));
        } else if proposed != self.rates {
            // Exact comparison against the rates on record; a change is only
            // recordable when the command supplies both rates.
            if let Some((regular, overtime)) = proposed.complete() {
                events.push(PlumberEvent::rate_changed(
                    cmd.plumber_id.clone(),
                    regular,
                    overtime,
                ));
            }
        }

        Ok(events)
    }
}

fn require(value: &str, field: &'static str) -> Result<(), PlumberError> {
    if value.is_empty() {
        Err(PlumberError::RequiredField { field })
    } else {
        Ok(())
    }
}
