//! The Operation aggregate and related types.

mod aggregate;
pub mod errors;
mod events;
mod snapshot;
mod status;
mod value_objects;

pub use aggregate::Operation;
pub use events::{
    OperationCompletedData, OperationDescriptionChangedData, OperationEvent,
    OperationNameChangedData, OperationPerformingStartedData, OperationPlannedData,
    OperationPlannedPeriodChangedData,
};
pub use snapshot::OperationSnapshot;
pub use status::OperationStatus;
pub use value_objects::{OperationId, Period};
