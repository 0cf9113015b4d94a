//! Domain events: immutable facts published by an aggregate root.

use chrono::{DateTime, Utc};
use common::{Clock, Event, EventId, SemanticVersion};
use serde::{Deserialize, Serialize};

use crate::member::AggregateMember;

/// Concrete fact data carried by a domain event.
///
/// Payloads name their event type for registry dispatch and declare the
/// aggregate contract they were written against. Every concrete payload type
/// is permanently associated with one aggregate name/version pair.
pub trait EventPayload: AggregateMember + Clone + std::fmt::Debug + Send + Sync {
    /// Returns the event type name, e.g. `"OperationPlanned"`.
    fn event_type(&self) -> &'static str;
}

/// An immutable fact about a state change, tagged with the aggregate
/// instance it originated from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainEvent<Id, P> {
    #[serde(flatten)]
    event: Event,
    aggregate_root_id: Id,
    payload: P,
}

impl<Id, P: EventPayload> DomainEvent<Id, P> {
    /// Records a new domain event at the clock's current instant.
    pub fn record(aggregate_root_id: Id, payload: P, clock: &dyn Clock) -> Self {
        Self {
            event: Event::record(clock),
            aggregate_root_id,
            payload,
        }
    }

    /// Returns the event identifier.
    pub fn id(&self) -> EventId {
        self.event.id()
    }

    /// Returns the instant the event was recorded.
    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.event.recorded_at()
    }

    /// Returns the identifier of the aggregate root that published the event.
    pub fn aggregate_root_id(&self) -> &Id {
        &self.aggregate_root_id
    }

    /// Returns the fact data.
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Returns the payload's event type name.
    pub fn event_type(&self) -> &'static str {
        self.payload.event_type()
    }
}

impl<Id, P: EventPayload> AggregateMember for DomainEvent<Id, P> {
    fn aggregate_name(&self) -> &'static str {
        self.payload.aggregate_name()
    }

    fn aggregate_version(&self) -> SemanticVersion {
        self.payload.aggregate_version()
    }
}
