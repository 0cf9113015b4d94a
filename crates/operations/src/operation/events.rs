//! Operation domain events.

use chrono::{DateTime, Utc};
use common::SemanticVersion;
use domain::{AggregateMember, EventPayload};
use serde::{Deserialize, Serialize};

use super::Period;

/// Facts published by the Operation aggregate.
///
/// Every variant is permanently bound to the `Operation` aggregate at major
/// version 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum OperationEvent {
    /// The operation was planned.
    Planned(OperationPlannedData),

    /// Execution of the operation started.
    PerformingStarted(OperationPerformingStartedData),

    /// Execution was suspended.
    Paused,

    /// Execution continued after a pause.
    Resumed,

    /// The operation finished.
    Completed(OperationCompletedData),

    /// The operation was rolled back from execution to planning.
    RollbackToPlanning,

    /// The completed operation was reopened for execution.
    RollbackToPerforming,

    /// The operation was renamed during planning.
    NameChanged(OperationNameChangedData),

    /// The operation description was revised during planning.
    DescriptionChanged(OperationDescriptionChangedData),

    /// The planned period was revised during planning.
    PlannedPeriodChanged(OperationPlannedPeriodChangedData),
}

impl AggregateMember for OperationEvent {
    fn aggregate_name(&self) -> &'static str {
        "Operation"
    }

    fn aggregate_version(&self) -> SemanticVersion {
        SemanticVersion::from_major(1)
    }
}

impl EventPayload for OperationEvent {
    fn event_type(&self) -> &'static str {
        match self {
            OperationEvent::Planned(_) => "OperationPlanned",
            OperationEvent::PerformingStarted(_) => "OperationPerformingStarted",
            OperationEvent::Paused => "OperationPaused",
            OperationEvent::Resumed => "OperationResumed",
            OperationEvent::Completed(_) => "OperationCompleted",
            OperationEvent::RollbackToPlanning => "OperationRollbackToPlanning",
            OperationEvent::RollbackToPerforming => "OperationRollbackToPerforming",
            OperationEvent::NameChanged(_) => "OperationNameChanged",
            OperationEvent::DescriptionChanged(_) => "OperationDescriptionChanged",
            OperationEvent::PlannedPeriodChanged(_) => "OperationPlannedPeriodChanged",
        }
    }
}

/// Data for the Planned event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationPlannedData {
    /// Name of the planned operation.
    pub name: String,

    /// Description of the planned operation.
    pub description: Option<String>,

    /// Planned execution period.
    pub planned_period: Period,
}

/// Data for the PerformingStarted event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationPerformingStartedData {
    /// When execution started.
    pub started_at: DateTime<Utc>,
}

/// Data for the Completed event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationCompletedData {
    /// When the operation finished.
    pub completed_at: DateTime<Utc>,
}

/// Data for the NameChanged event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationNameChangedData {
    /// The new operation name.
    pub new_name: String,
}

/// Data for the DescriptionChanged event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationDescriptionChangedData {
    /// The new operation description.
    pub new_description: String,
}

/// Data for the PlannedPeriodChanged event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationPlannedPeriodChangedData {
    /// The new planned period.
    pub new_planned_period: Period,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 17, 10, 0, 0).unwrap()
    }

    #[test]
    fn event_types_use_the_full_historical_names() {
        let planned = OperationEvent::Planned(OperationPlannedData {
            name: "Warehouse move".to_string(),
            description: None,
            planned_period: Period::starting_at(instant()),
        });
        assert_eq!(planned.event_type(), "OperationPlanned");

        assert_eq!(OperationEvent::Paused.event_type(), "OperationPaused");
        assert_eq!(OperationEvent::Resumed.event_type(), "OperationResumed");
        assert_eq!(
            OperationEvent::RollbackToPlanning.event_type(),
            "OperationRollbackToPlanning"
        );
        assert_eq!(
            OperationEvent::RollbackToPerforming.event_type(),
            "OperationRollbackToPerforming"
        );
        assert_eq!(
            OperationEvent::Completed(OperationCompletedData {
                completed_at: instant(),
            })
            .event_type(),
            "OperationCompleted"
        );
    }

    #[test]
    fn every_variant_declares_the_operation_aggregate_at_major_one() {
        let event = OperationEvent::Paused;
        assert_eq!(event.aggregate_name(), "Operation");
        assert_eq!(event.aggregate_version(), SemanticVersion::from_major(1));
    }

    #[test]
    fn serialization_roundtrip() {
        let event = OperationEvent::NameChanged(OperationNameChangedData {
            new_name: "Inventory audit".to_string(),
        });

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("NameChanged"));

        let deserialized: OperationEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
