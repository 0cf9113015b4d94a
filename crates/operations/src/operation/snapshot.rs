//! Snapshot of an operation's state.

use serde::{Deserialize, Serialize};

use super::{OperationId, OperationStatus, Period};

/// A flattened, persistence-friendly snapshot of an operation.
///
/// Mirrors every snapshot-relevant field of the aggregate; the uncommitted
/// event queue is deliberately not part of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationSnapshot {
    /// Operation identifier.
    pub id: OperationId,

    /// Operation name.
    pub name: String,

    /// Operation description.
    pub description: Option<String>,

    /// Operation status.
    pub status: OperationStatus,

    /// Planned execution period.
    pub planned_period: Period,

    /// Actual execution period, if execution has started.
    pub actual_period: Option<Period>,
}
