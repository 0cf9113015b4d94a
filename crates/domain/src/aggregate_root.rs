//! Aggregate roots and their uncommitted-event queues.

use std::collections::VecDeque;
use std::collections::vec_deque::Drain;

use common::Error;

use crate::domain_event::{DomainEvent, EventPayload};
use crate::entity::Entity;
use crate::errors;
use crate::member::AggregateMember;

/// An insertion-ordered queue of domain events awaiting a durable commit.
///
/// The queue is unbounded, not deduplicated and single-owner; a persistence
/// collaborator drains it after a successful commit. Events can only be
/// enqueued through the publish protocol.
#[derive(Debug)]
pub struct UncommittedEvents<Id, P> {
    events: VecDeque<DomainEvent<Id, P>>,
}

impl<Id, P> UncommittedEvents<Id, P> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            events: VecDeque::new(),
        }
    }

    /// Returns the number of queued events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true when no events are queued.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterates the queued events in publication order.
    pub fn iter(&self) -> impl Iterator<Item = &DomainEvent<Id, P>> {
        self.events.iter()
    }

    /// Removes and yields every queued event in publication order.
    ///
    /// Called by the persistence collaborator after the events have been
    /// durably committed.
    pub fn drain(&mut self) -> Drain<'_, DomainEvent<Id, P>> {
        self.events.drain(..)
    }

    pub(crate) fn push(&mut self, event: DomainEvent<Id, P>) {
        self.events.push_back(event);
    }
}

impl<Id, P> Default for UncommittedEvents<Id, P> {
    fn default() -> Self {
        Self::new()
    }
}

/// Base contract for aggregate roots.
///
/// A root owns the queue of domain events it has published but not yet
/// committed, and is mutated exclusively by applying those events. The
/// provided [`publish_domain_event`](AggregateRoot::publish_domain_event)
/// drives the fixed validate → apply → enqueue sequence.
///
/// Access to one root instance is single-threaded; callers serialize
/// concurrent mutations, typically through optimistic concurrency at the
/// persistence layer.
pub trait AggregateRoot: Entity + AggregateMember {
    /// The payload type of this aggregate's domain events.
    type Payload: EventPayload;

    /// Read-only view of the uncommitted domain events, in publication order.
    fn domain_events(&self) -> &UncommittedEvents<Self::Id, Self::Payload>;

    /// Mutable access to the uncommitted queue, used by the publish protocol
    /// and drained by the persistence collaborator after a commit.
    fn domain_events_mut(&mut self) -> &mut UncommittedEvents<Self::Id, Self::Payload>;

    /// Applies a published domain event to the aggregate state.
    ///
    /// Implementations match over their payload variants. An unrecognized
    /// variant is a silent no-op, not an error, so additive schema evolution
    /// stays safe.
    fn apply(&mut self, event: &DomainEvent<Self::Id, Self::Payload>);

    /// Publishes a domain event and applies it to the aggregate.
    ///
    /// The event must belong to this aggregate, declare a compatible
    /// aggregate version (equal major) and originate from this instance.
    /// The checks run in that order; a failure leaves both the state and the
    /// queue untouched. The event is applied before it is enqueued.
    fn publish_domain_event(
        &mut self,
        event: DomainEvent<Self::Id, Self::Payload>,
    ) -> Result<(), Error> {
        if event.aggregate_name() != self.aggregate_name() {
            return Err(errors::domain_event_has_different_aggregate());
        }

        if !event
            .aggregate_version()
            .is_compatible_with(&self.aggregate_version())
        {
            return Err(
                errors::domain_event_has_incompatible_aggregate_version().append_message(
                    &format!(
                        "The aggregate root requires major version {}.",
                        self.aggregate_version().major()
                    ),
                ),
            );
        }

        if event.aggregate_root_id() != self.id() {
            return Err(errors::domain_event_from_another_aggregate_instance());
        }

        tracing::debug!(event_type = event.event_type(), "publishing domain event");

        self.apply(&event);
        self.domain_events_mut().push(event);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{SemanticVersion, SystemClock};
    use serde::{Deserialize, Serialize};

    /// A minimal aggregate used to exercise the publish protocol.
    struct Meter {
        id: u32,
        reading: i32,
        domain_events: UncommittedEvents<u32, MeterEvent>,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    enum MeterEvent {
        AdjustedTo { value: i32 },
        // Declares a foreign aggregate name.
        ForeignFact,
        // Declares an incompatible aggregate version.
        LegacyFact,
    }

    impl AggregateMember for MeterEvent {
        fn aggregate_name(&self) -> &'static str {
            match self {
                MeterEvent::ForeignFact => "Turbine",
                _ => "Meter",
            }
        }

        fn aggregate_version(&self) -> SemanticVersion {
            match self {
                MeterEvent::LegacyFact => SemanticVersion::from_major(2),
                _ => SemanticVersion::from_major(1),
            }
        }
    }

    impl EventPayload for MeterEvent {
        fn event_type(&self) -> &'static str {
            match self {
                MeterEvent::AdjustedTo { .. } => "MeterAdjustedTo",
                MeterEvent::ForeignFact => "ForeignFact",
                MeterEvent::LegacyFact => "LegacyFact",
            }
        }
    }

    impl Entity for Meter {
        type Id = u32;

        fn id(&self) -> &u32 {
            &self.id
        }
    }

    impl AggregateMember for Meter {
        fn aggregate_name(&self) -> &'static str {
            "Meter"
        }

        fn aggregate_version(&self) -> SemanticVersion {
            SemanticVersion::from_major(1)
        }
    }

    impl AggregateRoot for Meter {
        type Payload = MeterEvent;

        fn domain_events(&self) -> &UncommittedEvents<u32, MeterEvent> {
            &self.domain_events
        }

        fn domain_events_mut(&mut self) -> &mut UncommittedEvents<u32, MeterEvent> {
            &mut self.domain_events
        }

        fn apply(&mut self, event: &DomainEvent<u32, MeterEvent>) {
            match event.payload() {
                MeterEvent::AdjustedTo { value } => self.reading = *value,
                _ => {}
            }
        }
    }

    fn meter(id: u32) -> Meter {
        Meter {
            id,
            reading: 0,
            domain_events: UncommittedEvents::new(),
        }
    }

    fn adjusted_to(root_id: u32, value: i32) -> DomainEvent<u32, MeterEvent> {
        DomainEvent::record(root_id, MeterEvent::AdjustedTo { value }, &SystemClock)
    }

    #[test]
    fn published_events_are_queued_fifo_and_applied_in_order() {
        let mut meter = meter(1);

        let first = adjusted_to(1, 2);
        let second = adjusted_to(1, 3);
        let expected_ids = [first.id(), second.id()];

        meter.publish_domain_event(first).unwrap();
        meter.publish_domain_event(second).unwrap();

        let queued: Vec<_> = meter.domain_events().iter().map(|e| e.id()).collect();
        assert_eq!(queued, expected_ids);
        assert_eq!(meter.reading, 3);
    }

    #[test]
    fn rejects_event_from_another_instance_without_mutation() {
        let mut meter = meter(1);

        let err = meter.publish_domain_event(adjusted_to(2, 42)).unwrap_err();

        assert_eq!(*err.code(), "DOMAIN-AGG-ROOT-003");
        assert!(meter.domain_events().is_empty());
        assert_eq!(meter.reading, 0);
    }

    #[test]
    fn rejects_event_with_incompatible_aggregate_version() {
        let mut meter = meter(1);
        let event = DomainEvent::record(1, MeterEvent::LegacyFact, &SystemClock);

        let err = meter.publish_domain_event(event).unwrap_err();

        assert_eq!(*err.code(), "DOMAIN-AGG-ROOT-002");
        assert!(err.message().contains("major version 1"));
        assert!(meter.domain_events().is_empty());
    }

    #[test]
    fn rejects_event_from_a_different_aggregate() {
        let mut meter = meter(1);
        let event = DomainEvent::record(1, MeterEvent::ForeignFact, &SystemClock);

        let err = meter.publish_domain_event(event).unwrap_err();

        assert_eq!(*err.code(), "DOMAIN-AGG-ROOT-001");
        assert!(meter.domain_events().is_empty());
    }

    #[test]
    fn aggregate_name_check_takes_precedence() {
        // Wrong name AND wrong instance: the name check fires first.
        let mut meter = meter(1);
        let event = DomainEvent::record(9, MeterEvent::ForeignFact, &SystemClock);

        let err = meter.publish_domain_event(event).unwrap_err();
        assert_eq!(*err.code(), "DOMAIN-AGG-ROOT-001");
    }

    #[test]
    fn version_check_takes_precedence_over_instance_check() {
        let mut meter = meter(1);
        let event = DomainEvent::record(9, MeterEvent::LegacyFact, &SystemClock);

        let err = meter.publish_domain_event(event).unwrap_err();
        assert_eq!(*err.code(), "DOMAIN-AGG-ROOT-002");
    }

    #[test]
    fn drain_empties_the_queue_in_order() {
        let mut meter = meter(1);
        meter.publish_domain_event(adjusted_to(1, 2)).unwrap();
        meter.publish_domain_event(adjusted_to(1, 3)).unwrap();

        let drained: Vec<_> = meter.domain_events_mut().drain().collect();
        assert_eq!(drained.len(), 2);
        assert!(meter.domain_events().is_empty());
    }
}
