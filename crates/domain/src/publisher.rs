//! Publisher-driven dispatch of domain events to handlers and appliers.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use common::Error;
use futures_util::future::join_all;

use crate::aggregate::Aggregate;
use crate::aggregate_root::AggregateRoot;
use crate::domain_event::DomainEvent;
use crate::errors;

/// Reacts to a domain event with a side effect, e.g. notifying another
/// bounded context. Handlers never mutate aggregate state.
#[async_trait]
pub trait DomainEventHandler<Id, P>: Send + Sync {
    /// Handles the event.
    async fn handle(&self, event: &DomainEvent<Id, P>) -> Result<(), Error>;
}

/// Mutates aggregate state in response to a domain event.
pub trait DomainEventApplier<R: AggregateRoot>: Send + Sync {
    /// Applies the event to the root.
    fn apply(&self, root: &mut R, event: &DomainEvent<R::Id, R::Payload>);
}

/// Dispatches domain events to registered handlers and appliers, then
/// records them on the wrapper aggregate.
///
/// Registration is explicit and keyed by the payload's `event_type()`: zero
/// or more handlers and at most one applier per event type, fixed at
/// composition time. This replaces runtime type scanning with a table the
/// composition root builds once.
pub struct DomainEventPublisher<R: AggregateRoot> {
    handlers: HashMap<&'static str, Vec<Arc<dyn DomainEventHandler<R::Id, R::Payload>>>>,
    appliers: HashMap<&'static str, Arc<dyn DomainEventApplier<R>>>,
}

impl<R: AggregateRoot> DomainEventPublisher<R> {
    /// Creates a publisher with empty registries.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
            appliers: HashMap::new(),
        }
    }

    /// Registers a handler for the given event type.
    ///
    /// Handlers accumulate: every registered handler runs on publish.
    pub fn register_handler(
        &mut self,
        event_type: &'static str,
        handler: Arc<dyn DomainEventHandler<R::Id, R::Payload>>,
    ) {
        self.handlers.entry(event_type).or_default().push(handler);
    }

    /// Registers the applier for the given event type, replacing any
    /// previous registration. Each event type has at most one applier.
    pub fn register_applier(
        &mut self,
        event_type: &'static str,
        applier: Arc<dyn DomainEventApplier<R>>,
    ) {
        self.appliers.insert(event_type, applier);
    }

    /// Returns the number of handlers registered for an event type.
    pub fn handler_count(&self, event_type: &str) -> usize {
        self.handlers.get(event_type).map_or(0, Vec::len)
    }

    /// Publishes a domain event for the given aggregate.
    ///
    /// The event must originate from the wrapped root. Every handler
    /// registered for the event type runs concurrently and all of them are
    /// awaited; if any fails, the publish fails and neither the applier nor
    /// the enqueue runs. On success the registered applier (if any) mutates
    /// the root, then the event is appended to the aggregate's uncommitted
    /// queue.
    #[tracing::instrument(skip_all, fields(event_type = event.event_type()))]
    pub async fn publish(
        &self,
        aggregate: &mut Aggregate<R>,
        event: DomainEvent<R::Id, R::Payload>,
    ) -> Result<(), Error> {
        if aggregate.root().id() != event.aggregate_root_id() {
            return Err(errors::published_event_from_another_aggregate_instance());
        }

        if let Some(handlers) = self.handlers.get(event.event_type()) {
            let outcomes = join_all(handlers.iter().map(|handler| handler.handle(&event))).await;
            for outcome in outcomes {
                outcome?;
            }
        }

        if let Some(applier) = self.appliers.get(event.event_type()) {
            applier.apply(aggregate.root_mut(), &event);
        }

        aggregate.uncommitted_events_mut().push(event);
        metrics::counter!("domain_events_published").increment(1);

        Ok(())
    }
}

impl<R: AggregateRoot> Default for DomainEventPublisher<R> {
    fn default() -> Self {
        Self::new()
    }
}
