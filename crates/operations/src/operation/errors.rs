//! Error catalog for the Operation bounded context.

use common::{Error, ErrorCode};

// Period value object.

/// A period needs at least one of its bounds.
pub fn cannot_create_an_empty_period() -> Error {
    Error::new(
        ErrorCode::from_static("OPER-PERIOD-001"),
        "A period cannot be missing both its start and end dates.",
    )
}

/// The period bounds are in the wrong order.
pub fn cannot_create_with_start_more_than_end() -> Error {
    Error::new(
        ErrorCode::from_static("OPER-PERIOD-002"),
        "The start of a period cannot be greater than or equal to its end.",
    )
}

// Status transitions.

/// Pausing requires the 'Performing' status.
pub fn cannot_pause_if_the_status_is_not_performing() -> Error {
    Error::new(
        ErrorCode::from_static("OPER-ROOT-STATUS-001"),
        "An operation can only be paused while its status is 'Performing'.",
    )
}

/// Resuming requires the 'Paused' status.
pub fn cannot_resume_if_the_status_is_not_paused() -> Error {
    Error::new(
        ErrorCode::from_static("OPER-ROOT-STATUS-002"),
        "An operation can only be resumed from the 'Paused' status.",
    )
}

/// Rolling back requires the 'Performing' or 'Completed' status.
pub fn cannot_rollback_if_the_status_is_not_performing_or_completed() -> Error {
    Error::new(
        ErrorCode::from_static("OPER-ROOT-STATUS-003"),
        "An operation can only be rolled back from the 'Performing' and \
         'Completed' statuses.",
    )
}

/// Completing requires the 'Performing' status.
pub fn cannot_complete_if_the_status_is_not_performing() -> Error {
    Error::new(
        ErrorCode::from_static("OPER-ROOT-STATUS-004"),
        "An operation can only be completed from the 'Performing' status.",
    )
}

// Planning-only revisions.

/// Renaming requires the 'Planning' status.
pub fn cannot_change_a_name_if_the_status_is_not_planning() -> Error {
    Error::new(
        ErrorCode::from_static("OPER-ROOT-001"),
        "The name can only be changed while the operation is in the \
         'Planning' status.",
    )
}

/// Revising the description requires the 'Planning' status.
pub fn cannot_change_a_description_if_the_status_is_not_planning() -> Error {
    Error::new(
        ErrorCode::from_static("OPER-ROOT-002"),
        "The description can only be changed while the operation is in the \
         'Planning' status.",
    )
}

/// Revising the planned period requires the 'Planning' status.
pub fn cannot_change_a_planned_period_if_the_status_is_not_planning() -> Error {
    Error::new(
        ErrorCode::from_static("OPER-ROOT-PERIOD-001"),
        "The planned period can only be changed while the operation is in \
         the 'Planning' status.",
    )
}
