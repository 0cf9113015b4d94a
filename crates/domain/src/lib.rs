//! Aggregate framework for the domain layer.
//!
//! This crate provides the building blocks for modeling aggregates:
//! - identity-based entities and the aggregate-member contract
//! - domain events and the validate → apply → enqueue publish protocol
//! - publisher-driven dispatch to handlers and appliers
//! - snapshot-based memoization

pub mod aggregate;
pub mod aggregate_root;
pub mod domain_event;
pub mod entity;
pub mod errors;
pub mod member;
pub mod memo;
pub mod publisher;

pub use aggregate::{Aggregate, AggregateDescriptor};
pub use aggregate_root::{AggregateRoot, UncommittedEvents};
pub use domain_event::{DomainEvent, EventPayload};
pub use entity::{Entity, identity_eq, identity_hash};
pub use member::AggregateMember;
pub use memo::Memoizable;
pub use publisher::{DomainEventApplier, DomainEventHandler, DomainEventPublisher};
