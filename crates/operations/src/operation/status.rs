//! Operation status state machine.

use serde::{Deserialize, Serialize};

/// The status of an operation in its lifecycle.
///
/// State transitions:
/// ```text
/// Planning ──► Performing ──► Completed
///                  ⇅               │
///               Paused             │
/// Performing ──► Planning   (rollback)
/// Completed ──► Performing  (rollback)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OperationStatus {
    /// The operation is being planned; name, description and the planned
    /// period can still be revised.
    #[default]
    Planning,

    /// The operation is being carried out.
    Performing,

    /// Execution is temporarily suspended.
    Paused,

    /// The operation has finished.
    Completed,
}

impl OperationStatus {
    /// Returns true if the operation can be paused in this status.
    pub fn can_pause(&self) -> bool {
        matches!(self, OperationStatus::Performing)
    }

    /// Returns true if the operation can be resumed in this status.
    pub fn can_resume(&self) -> bool {
        matches!(self, OperationStatus::Paused)
    }

    /// Returns true if the operation can be completed in this status.
    pub fn can_complete(&self) -> bool {
        matches!(self, OperationStatus::Performing)
    }

    /// Returns true if the operation can be rolled back to its previous
    /// status.
    pub fn can_rollback(&self) -> bool {
        matches!(
            self,
            OperationStatus::Performing | OperationStatus::Completed
        )
    }

    /// Returns true if the plan (name, description, planned period) can
    /// still be revised in this status.
    pub fn can_revise(&self) -> bool {
        matches!(self, OperationStatus::Planning)
    }

    /// Returns the status name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationStatus::Planning => "Planning",
            OperationStatus::Performing => "Performing",
            OperationStatus::Paused => "Paused",
            OperationStatus::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
