//! Plumber commands.

use common::AggregateId;
use serde::{Deserialize, Serialize};

use super::{HourlyRate, PlumberError, RateCard};

/// Command to take on a new plumber.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlumber {
    /// The plumber's identifier, assigned by the staffing system.
    pub plumber_id: AggregateId,

    /// First name, required.
    pub first_name: String,

    /// Last name, required.
    pub last_name: String,

    /// Regular hourly rate, if already negotiated.
    pub regular_rate: Option<HourlyRate>,

    /// Overtime hourly rate, if already negotiated.
    pub overtime_rate: Option<HourlyRate>,
}

impl CreatePlumber {
    /// Creates a new CreatePlumber command.
    pub fn new(
        plumber_id: impl Into<AggregateId>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        regular_rate: Option<HourlyRate>,
        overtime_rate: Option<HourlyRate>,
    ) -> Self {
        Self {
            plumber_id: plumber_id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            regular_rate,
            overtime_rate,
        }
    }

    /// Returns the proposed rates as a rate card.
    pub fn rates(&self) -> RateCard {
        RateCard::new(self.regular_rate, self.overtime_rate)
    }
}

/// Command to update a plumber's profile and rates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePlumber {
    /// The plumber's identifier.
    pub plumber_id: AggregateId,

    /// Proposed first name, required.
    pub first_name: String,

    /// Proposed last name, required.
    pub last_name: String,

    /// Proposed regular hourly rate.
    pub regular_rate: Option<HourlyRate>,

    /// Proposed overtime hourly rate.
    pub overtime_rate: Option<HourlyRate>,
}

impl UpdatePlumber {
    /// Creates a new UpdatePlumber command.
    pub fn new(
        plumber_id: impl Into<AggregateId>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        regular_rate: Option<HourlyRate>,
        overtime_rate: Option<HourlyRate>,
    ) -> Self {
        Self {
            plumber_id: plumber_id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            regular_rate,
            overtime_rate,
        }
    }

    /// Returns the proposed rates as a rate card.
    pub fn rates(&self) -> RateCard {
        RateCard::new(self.regular_rate, self.overtime_rate)
    }
}

/// Commands that can be executed against a plumber aggregate.
///
/// The closed union makes command handling an exhaustive match; commands
/// arriving from outside the process by type name go through
/// [`PlumberCommand::decode`], which is where an unrecognized kind is
/// rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PlumberCommand {
    /// Take on a new plumber.
    #[serde(rename = "CreatePlumber")]
    Create(CreatePlumber),

    /// Update an existing plumber's profile and rates.
    #[serde(rename = "UpdatePlumber")]
    Update(UpdatePlumber),
}

impl PlumberCommand {
    /// Returns the command type name.
    pub fn kind(&self) -> &'static str {
        match self {
            PlumberCommand::Create(_) => "CreatePlumber",
            PlumberCommand::Update(_) => "UpdatePlumber",
        }
    }

    /// Returns the identifier of the plumber this command targets.
    pub fn plumber_id(&self) -> &AggregateId {
        match self {
            PlumberCommand::Create(cmd) => &cmd.plumber_id,
            PlumberCommand::Update(cmd) => &cmd.plumber_id,
        }
    }

    /// Decodes a command from an externally supplied type name and JSON
    /// payload, as received from a dispatcher.
    pub fn decode(kind: &str, payload: serde_json::Value) -> Result<Self, PlumberError> {
        match kind {
            "CreatePlumber" => Ok(PlumberCommand::Create(serde_json::from_value(payload)?)),
            "UpdatePlumber" => Ok(PlumberCommand::Update(serde_json::from_value(payload)?)),
            other => Err(PlumberError::UnknownCommand {
                kind: other.to_string(),
            }),
        }
    }
}

impl From<CreatePlumber> for PlumberCommand {
    fn from(cmd: CreatePlumber) -> Self {
        PlumberCommand::Create(cmd)
    }
}

impl From<UpdatePlumber> for PlumberCommand {
    fn from(cmd: UpdatePlumber) -> Self {
        PlumberCommand::Update(cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_command() {
        let cmd = CreatePlumber::new(
            "134564",
            "Mike",
            "Edmunds",
            Some(HourlyRate::from_dollars(80)),
            Some(HourlyRate::from_dollars(100)),
        );
        assert_eq!(cmd.plumber_id.as_str(), "134564");
        assert_eq!(
            cmd.rates(),
            RateCard::both(HourlyRate::from_dollars(80), HourlyRate::from_dollars(100))
        );

        let cmd: PlumberCommand = cmd.into();
        assert_eq!(cmd.kind(), "CreatePlumber");
        assert_eq!(cmd.plumber_id().as_str(), "134564");
    }

    #[test]
    fn test_update_command() {
        let cmd: PlumberCommand =
            UpdatePlumber::new("134564", "Joe", "Edmunds", None, None).into();
        assert_eq!(cmd.kind(), "UpdatePlumber");
        assert_eq!(cmd.plumber_id().as_str(), "134564");
    }

    #[test]
    fn test_decode_known_kind() {
        let payload = serde_json::json!({
            "plumber_id": "134564",
            "first_name": "Mike",
            "last_name": "Edmunds",
            "regular_rate": { "cents": 8000 },
            "overtime_rate": { "cents": 10000 },
        });

        let cmd = PlumberCommand::decode("CreatePlumber", payload).unwrap();
        match cmd {
            PlumberCommand::Create(cmd) => {
                assert_eq!(cmd.first_name, "Mike");
                assert_eq!(cmd.regular_rate, Some(HourlyRate::from_cents(8000)));
            }
            PlumberCommand::Update(_) => panic!("Expected CreatePlumber command"),
        }
    }

    #[test]
    fn test_decode_unknown_kind() {
        let result = PlumberCommand::decode("RetirePlumber", serde_json::json!({}));
        assert!(matches!(
            result,
            Err(PlumberError::UnknownCommand { kind }) if kind == "RetirePlumber"
        ));
    }

    #[test]
    fn test_decode_malformed_payload() {
        let result = PlumberCommand::decode("UpdatePlumber", serde_json::json!({ "nope": true }));
        assert!(matches!(result, Err(PlumberError::InvalidPayload(_))));
    }

    #[test]
    fn test_command_serialization_roundtrip() {
        let cmd: PlumberCommand = UpdatePlumber::new(
            "134564",
            "Mike",
            "Edmundson",
            Some(HourlyRate::from_dollars(85)),
            Some(HourlyRate::from_dollars(100)),
        )
        .into();

        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("UpdatePlumber"));

        let deserialized: PlumberCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.kind(), "UpdatePlumber");
        if let PlumberCommand::Update(cmd) = deserialized {
            assert_eq!(cmd.last_name, "Edmundson");
            assert_eq!(cmd.regular_rate, Some(HourlyRate::from_dollars(85)));
        } else {
            panic!("Expected UpdatePlumber command");
        }
    }
}
