//! Operation aggregate implementation.

use common::{Clock, Error, SemanticVersion};
use domain::{
    AggregateMember, AggregateRoot, DomainEvent, Entity, Memoizable, UncommittedEvents,
};

use super::errors;
use super::events::{
    OperationCompletedData, OperationDescriptionChangedData, OperationEvent,
    OperationNameChangedData, OperationPerformingStartedData, OperationPlannedData,
    OperationPlannedPeriodChangedData,
};
use super::{OperationId, OperationSnapshot, OperationStatus, Period};

/// Operation aggregate root.
///
/// Represents a unit of work with a planned period and a lifecycle from
/// planning through execution to completion. Every state change is published
/// as a domain event and applied through the publish protocol.
#[derive(Debug)]
pub struct Operation {
    /// Unique operation identifier.
    id: OperationId,

    /// Operation name.
    name: String,

    /// Operation description.
    description: Option<String>,

    /// Current lifecycle status.
    status: OperationStatus,

    /// Planned execution period.
    planned_period: Period,

    /// Actual execution period, set once execution starts.
    actual_period: Option<Period>,

    /// Domain events published but not yet durably committed.
    domain_events: UncommittedEvents<OperationId, OperationEvent>,
}

impl Entity for Operation {
    type Id = OperationId;

    fn id(&self) -> &OperationId {
        &self.id
    }
}

impl AggregateMember for Operation {
    fn aggregate_name(&self) -> &'static str {
        "Operation"
    }

    fn aggregate_version(&self) -> SemanticVersion {
        SemanticVersion::from_major(1)
    }
}

impl AggregateRoot for Operation {
    type Payload = OperationEvent;

    fn domain_events(&self) -> &UncommittedEvents<OperationId, OperationEvent> {
        &self.domain_events
    }

    fn domain_events_mut(&mut self) -> &mut UncommittedEvents<OperationId, OperationEvent> {
        &mut self.domain_events
    }

    fn apply(&mut self, event: &DomainEvent<OperationId, OperationEvent>) {
        match event.payload() {
            OperationEvent::Planned(data) => self.apply_planned(data),
            OperationEvent::PerformingStarted(data) => self.apply_performing_started(data),
            OperationEvent::Paused => self.status = OperationStatus::Paused,
            OperationEvent::Resumed => self.status = OperationStatus::Performing,
            OperationEvent::Completed(data) => self.apply_completed(data),
            OperationEvent::RollbackToPlanning => self.apply_rollback_to_planning(),
            OperationEvent::RollbackToPerforming => self.apply_rollback_to_performing(),
            OperationEvent::NameChanged(data) => self.name = data.new_name.clone(),
            OperationEvent::DescriptionChanged(data) => {
                self.description = Some(data.new_description.clone());
            }
            OperationEvent::PlannedPeriodChanged(data) => {
                self.planned_period = data.new_planned_period;
            }
        }
    }
}

// Query methods
impl Operation {
    /// Returns the operation identifier.
    pub fn id(&self) -> OperationId {
        self.id
    }

    /// Returns the operation name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the operation description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the current status.
    pub fn status(&self) -> OperationStatus {
        self.status
    }

    /// Returns the planned execution period.
    pub fn planned_period(&self) -> Period {
        self.planned_period
    }

    /// Returns the actual execution period, if execution has started.
    pub fn actual_period(&self) -> Option<Period> {
        self.actual_period
    }
}

// Command methods
impl Operation {
    /// Plans a new operation.
    ///
    /// The operation starts in the `Planning` status with one
    /// `OperationPlanned` event queued.
    pub fn plan(
        name: impl Into<String>,
        description: Option<String>,
        planned_period: Period,
        clock: &dyn Clock,
    ) -> Result<Self, Error> {
        let name = name.into();

        let mut operation = Self {
            id: OperationId::new(),
            name: name.clone(),
            description: description.clone(),
            status: OperationStatus::Planning,
            planned_period,
            actual_period: None,
            domain_events: UncommittedEvents::new(),
        };

        let planned = OperationEvent::Planned(OperationPlannedData {
            name,
            description,
            planned_period,
        });
        operation.publish_domain_event(DomainEvent::record(operation.id, planned, clock))?;

        Ok(operation)
    }

    /// Starts executing the operation.
    ///
    /// The actual period opens at the clock's current instant.
    pub fn perform(&mut self, clock: &dyn Clock) -> Result<(), Error> {
        let started = OperationEvent::PerformingStarted(OperationPerformingStartedData {
            started_at: clock.now(),
        });

        self.publish_domain_event(DomainEvent::record(self.id, started, clock))
    }

    /// Suspends execution of the operation.
    pub fn pause(&mut self, clock: &dyn Clock) -> Result<(), Error> {
        if !self.status.can_pause() {
            return Err(errors::cannot_pause_if_the_status_is_not_performing());
        }

        self.publish_domain_event(DomainEvent::record(self.id, OperationEvent::Paused, clock))
    }

    /// Continues execution after a pause.
    pub fn resume(&mut self, clock: &dyn Clock) -> Result<(), Error> {
        if !self.status.can_resume() {
            return Err(errors::cannot_resume_if_the_status_is_not_paused());
        }

        self.publish_domain_event(DomainEvent::record(self.id, OperationEvent::Resumed, clock))
    }

    /// Rolls the operation back to its previous status.
    ///
    /// A performing operation returns to planning and loses its actual
    /// period; a completed operation returns to performing with its actual
    /// period reopened.
    pub fn rollback(&mut self, clock: &dyn Clock) -> Result<(), Error> {
        match self.status {
            OperationStatus::Performing => self.publish_domain_event(DomainEvent::record(
                self.id,
                OperationEvent::RollbackToPlanning,
                clock,
            )),
            OperationStatus::Completed => self.publish_domain_event(DomainEvent::record(
                self.id,
                OperationEvent::RollbackToPerforming,
                clock,
            )),
            _ => Err(errors::cannot_rollback_if_the_status_is_not_performing_or_completed()),
        }
    }

    /// Completes the operation, closing the actual period at the clock's
    /// current instant.
    pub fn complete(&mut self, clock: &dyn Clock) -> Result<(), Error> {
        if !self.status.can_complete() {
            return Err(errors::cannot_complete_if_the_status_is_not_performing());
        }

        let completed = OperationEvent::Completed(OperationCompletedData {
            completed_at: clock.now(),
        });

        self.publish_domain_event(DomainEvent::record(self.id, completed, clock))
    }

    /// Renames the operation. Only allowed during planning.
    pub fn change_name(
        &mut self,
        new_name: impl Into<String>,
        clock: &dyn Clock,
    ) -> Result<(), Error> {
        if !self.status.can_revise() {
            return Err(errors::cannot_change_a_name_if_the_status_is_not_planning());
        }

        let renamed = OperationEvent::NameChanged(OperationNameChangedData {
            new_name: new_name.into(),
        });

        self.publish_domain_event(DomainEvent::record(self.id, renamed, clock))
    }

    /// Revises the operation description. Only allowed during planning.
    pub fn change_description(
        &mut self,
        new_description: impl Into<String>,
        clock: &dyn Clock,
    ) -> Result<(), Error> {
        if !self.status.can_revise() {
            return Err(errors::cannot_change_a_description_if_the_status_is_not_planning());
        }

        let revised = OperationEvent::DescriptionChanged(OperationDescriptionChangedData {
            new_description: new_description.into(),
        });

        self.publish_domain_event(DomainEvent::record(self.id, revised, clock))
    }

    /// Revises the planned period. Only allowed during planning.
    pub fn change_planned_period(
        &mut self,
        new_period: Period,
        clock: &dyn Clock,
    ) -> Result<(), Error> {
        if !self.status.can_revise() {
            return Err(
                errors::cannot_change_a_planned_period_if_the_status_is_not_planning()
                    .append_message(&format!("The current status is '{}'.", self.status)),
            );
        }

        let revised = OperationEvent::PlannedPeriodChanged(OperationPlannedPeriodChangedData {
            new_planned_period: new_period,
        });

        self.publish_domain_event(DomainEvent::record(self.id, revised, clock))
    }
}

// Apply event helpers
impl Operation {
    fn apply_planned(&mut self, data: &OperationPlannedData) {
        self.name = data.name.clone();
        self.description = data.description.clone();
        self.status = OperationStatus::Planning;
        self.planned_period = data.planned_period;
    }

    fn apply_performing_started(&mut self, data: &OperationPerformingStartedData) {
        self.status = OperationStatus::Performing;
        self.actual_period = Some(Period::starting_at(data.started_at));
    }

    fn apply_completed(&mut self, data: &OperationCompletedData) {
        self.status = OperationStatus::Completed;

        let start = self.actual_period.and_then(|period| period.start());
        self.actual_period = Some(Period::from_recorded(start, Some(data.completed_at)));
    }

    fn apply_rollback_to_planning(&mut self) {
        self.status = OperationStatus::Planning;
        self.actual_period = None;
    }

    fn apply_rollback_to_performing(&mut self) {
        self.status = OperationStatus::Performing;

        let start = self.actual_period.and_then(|period| period.start());
        self.actual_period = Some(Period::from_recorded(start, None));
    }
}

impl Memoizable for Operation {
    type Memento = OperationSnapshot;

    fn memoize(&self) -> OperationSnapshot {
        OperationSnapshot {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            status: self.status,
            planned_period: self.planned_period,
            actual_period: self.actual_period,
        }
    }

    fn restore(memento: OperationSnapshot) -> Self {
        Self {
            id: memento.id,
            name: memento.name,
            description: memento.description,
            status: memento.status,
            planned_period: memento.planned_period,
            actual_period: memento.actual_period,
            domain_events: UncommittedEvents::new(),
        }
    }
}
