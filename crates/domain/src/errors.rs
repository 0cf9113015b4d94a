//! Error catalogs for the aggregate framework.

use common::{Error, ErrorCode};

// Raised by the aggregate-root publish protocol.

/// The aggregate root and the domain event belong to different aggregates.
pub fn domain_event_has_different_aggregate() -> Error {
    Error::new(
        ErrorCode::from_static("DOMAIN-AGG-ROOT-001"),
        "Cannot publish the domain event. The aggregate root and the domain \
         event belong to different aggregates.",
    )
}

/// The aggregate versions of the root and the event are incompatible.
pub fn domain_event_has_incompatible_aggregate_version() -> Error {
    Error::new(
        ErrorCode::from_static("DOMAIN-AGG-ROOT-002"),
        "Cannot publish the domain event. The aggregate versions of the \
         aggregate root and the domain event are not compatible.",
    )
}

/// The domain event originates from another instance of the aggregate.
pub fn domain_event_from_another_aggregate_instance() -> Error {
    Error::new(
        ErrorCode::from_static("DOMAIN-AGG-ROOT-003"),
        "Cannot publish the domain event. The domain event belongs to \
         another instance of the aggregate.",
    )
}

// Raised by the domain-event publisher.

/// The published event originates from another aggregate instance.
pub fn published_event_from_another_aggregate_instance() -> Error {
    Error::new(
        ErrorCode::from_static("COMMON-DOMAIN-EVENT-PUB-001"),
        "Cannot publish the domain event. The domain event belongs to \
         another instance of the aggregate.",
    )
}
