//! Aggregate wrapper used by the publisher dispatch path.

use common::SemanticVersion;

use crate::aggregate_root::{AggregateRoot, UncommittedEvents};

/// Name and version identifying an aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateDescriptor {
    /// The aggregate name.
    pub name: &'static str,

    /// The aggregate version.
    pub version: SemanticVersion,
}

/// A root paired with its descriptor and a separately tracked queue of
/// uncommitted events.
///
/// The publisher records published events on this wrapper's queue; the
/// root's own internal queue is not involved on that path.
pub struct Aggregate<R: AggregateRoot> {
    descriptor: AggregateDescriptor,
    root: R,
    uncommitted_events: UncommittedEvents<R::Id, R::Payload>,
}

impl<R: AggregateRoot> Aggregate<R> {
    /// Wraps a root under the given descriptor.
    pub fn new(descriptor: AggregateDescriptor, root: R) -> Self {
        Self {
            descriptor,
            root,
            uncommitted_events: UncommittedEvents::new(),
        }
    }

    /// Wraps a root, deriving the descriptor from the root's own declared
    /// name and version.
    pub fn for_root(root: R) -> Self {
        let descriptor = AggregateDescriptor {
            name: root.aggregate_name(),
            version: root.aggregate_version(),
        };

        Self::new(descriptor, root)
    }

    /// Returns the aggregate descriptor.
    pub fn descriptor(&self) -> &AggregateDescriptor {
        &self.descriptor
    }

    /// Returns the aggregate root.
    pub fn root(&self) -> &R {
        &self.root
    }

    /// Returns mutable access to the aggregate root.
    pub fn root_mut(&mut self) -> &mut R {
        &mut self.root
    }

    /// Read-only view of the uncommitted events recorded via the publisher.
    pub fn uncommitted_events(&self) -> &UncommittedEvents<R::Id, R::Payload> {
        &self.uncommitted_events
    }

    /// Mutable access to the uncommitted queue, drained by the persistence
    /// collaborator after a commit.
    pub fn uncommitted_events_mut(&mut self) -> &mut UncommittedEvents<R::Id, R::Payload> {
        &mut self.uncommitted_events
    }
}
