//! Value objects for the Operation domain.

use chrono::{DateTime, Utc};
use common::{Error, SemanticVersion};
use domain::AggregateMember;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors;

/// Unique identifier for an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperationId(Uuid);

impl OperationId {
    /// Creates a new random operation ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an operation ID from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for OperationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for OperationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for OperationId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<OperationId> for Uuid {
    fn from(id: OperationId) -> Self {
        id.0
    }
}

/// A time span bounded by an optional start and an optional end.
///
/// At least one bound must be present, and when both are, the start must
/// precede the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
}

impl Period {
    /// Creates a period from its bounds.
    pub fn new(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Result<Self, Error> {
        if start.is_none() && end.is_none() {
            return Err(errors::cannot_create_an_empty_period());
        }

        if let (Some(start), Some(end)) = (start, end) {
            if start >= end {
                return Err(errors::cannot_create_with_start_more_than_end());
            }
        }

        Ok(Self { start, end })
    }

    /// A period that has begun and is still open.
    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    // Events are recorded facts; replaying them does not re-validate.
    pub(crate) fn from_recorded(
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Self {
        Self { start, end }
    }

    /// Returns the start of the period.
    pub fn start(&self) -> Option<DateTime<Utc>> {
        self.start
    }

    /// Returns the end of the period.
    pub fn end(&self) -> Option<DateTime<Utc>> {
        self.end
    }

    /// Returns true when the two periods overlap.
    ///
    /// Boundaries are half-open: periods that merely touch do not overlap.
    /// A missing bound never satisfies a comparison, so an open period
    /// reports no overlap.
    pub fn overlaps(&self, other: &Period) -> bool {
        let starts_before_other_ends = match (self.start, other.end) {
            (Some(start), Some(other_end)) => start < other_end,
            _ => false,
        };

        let ends_after_other_starts = match (self.end, other.start) {
            (Some(end), Some(other_start)) => end > other_start,
            _ => false,
        };

        starts_before_other_ends && ends_after_other_starts
    }
}

impl AggregateMember for Period {
    fn aggregate_name(&self) -> &'static str {
        "Operation"
    }

    fn aggregate_version(&self) -> SemanticVersion {
        SemanticVersion::from_major(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn day(offset: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap() + Duration::days(offset)
    }

    #[test]
    fn operation_ids_are_unique() {
        assert_ne!(OperationId::new(), OperationId::new());
    }

    #[test]
    fn operation_id_from_uuid_preserves_value() {
        let uuid = Uuid::new_v4();
        assert_eq!(OperationId::from_uuid(uuid).as_uuid(), uuid);
    }

    #[test]
    fn rejects_a_period_without_bounds() {
        let err = Period::new(None, None).unwrap_err();
        assert_eq!(*err.code(), "OPER-PERIOD-001");
    }

    #[test]
    fn rejects_start_at_or_after_end() {
        let err = Period::new(Some(day(1)), Some(day(0))).unwrap_err();
        assert_eq!(*err.code(), "OPER-PERIOD-002");

        let err = Period::new(Some(day(1)), Some(day(1))).unwrap_err();
        assert_eq!(*err.code(), "OPER-PERIOD-002");
    }

    #[test]
    fn accepts_half_bounded_periods() {
        assert!(Period::new(Some(day(0)), None).is_ok());
        assert!(Period::new(None, Some(day(3))).is_ok());
    }

    #[test]
    fn overlapping_periods_are_detected() {
        let left = Period::new(Some(day(0)), Some(day(7))).unwrap();
        let right = Period::new(Some(day(3)), Some(day(12))).unwrap();

        assert!(left.overlaps(&right));
        assert!(right.overlaps(&left));
    }

    #[test]
    fn touching_periods_do_not_overlap() {
        let left = Period::new(Some(day(0)), Some(day(7))).unwrap();
        let right = Period::new(Some(day(7)), Some(day(12))).unwrap();

        assert!(!left.overlaps(&right));
        assert!(!right.overlaps(&left));
    }

    #[test]
    fn open_periods_report_no_overlap() {
        let open = Period::starting_at(day(1));
        let closed = Period::new(Some(day(0)), Some(day(7))).unwrap();

        assert!(!open.overlaps(&closed));
        assert!(!closed.overlaps(&open));
    }

    #[test]
    fn period_declares_the_operation_aggregate() {
        let period = Period::starting_at(day(0));
        assert_eq!(period.aggregate_name(), "Operation");
        assert_eq!(period.aggregate_version(), SemanticVersion::from_major(1));
    }

    #[test]
    fn serialization_roundtrip() {
        let period = Period::new(Some(day(0)), Some(day(7))).unwrap();
        let json = serde_json::to_string(&period).unwrap();
        let deserialized: Period = serde_json::from_str(&json).unwrap();
        assert_eq!(period, deserialized);
    }
}
