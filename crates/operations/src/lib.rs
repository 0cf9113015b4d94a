//! Example bounded context: the Operation lifecycle.
//!
//! Demonstrates the consumer contract of the aggregate framework: an
//! aggregate root publishing domain events through the
//! validate → apply → enqueue protocol, value objects carrying the aggregate
//! contract, and snapshot-based restoration.

pub mod operation;

pub use operation::{
    Operation, OperationEvent, OperationId, OperationSnapshot, OperationStatus, Period,
};
