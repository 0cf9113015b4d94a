//! Semantic versioning for aggregates and their events.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::errors;

static POSTFIX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9\-.]*$").expect("postfix pattern is valid"));

/// A four-part semantic version with an optional postfix.
///
/// The major component is the compatibility boundary: two versions are
/// compatible exactly when their majors are equal. Minor, patch and build
/// carry no compatibility meaning here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SemanticVersion {
    major: u32,
    minor: u32,
    patch: u32,
    build: u32,
    postfix: Option<String>,
}

impl SemanticVersion {
    /// Creates a version from its four numeric components.
    pub fn new(major: u32, minor: u32, patch: u32, build: u32) -> Self {
        Self {
            major,
            minor,
            patch,
            build,
            postfix: None,
        }
    }

    /// Shorthand for a version with only the major component set.
    pub fn from_major(major: u32) -> Self {
        Self::new(major, 0, 0, 0)
    }

    /// Returns a copy of this version with the given postfix.
    ///
    /// Fails when the postfix contains characters outside `[A-Za-z0-9.-]`.
    pub fn with_postfix(mut self, postfix: impl Into<String>) -> Result<Self, Error> {
        let postfix = postfix.into();
        if !POSTFIX_PATTERN.is_match(&postfix) {
            return Err(errors::incorrect_postfix_format());
        }

        self.postfix = Some(postfix);
        Ok(self)
    }

    /// Major component, raised on backwards-incompatible changes.
    pub fn major(&self) -> u32 {
        self.major
    }

    /// Minor component, raised on backwards-compatible changes.
    pub fn minor(&self) -> u32 {
        self.minor
    }

    /// Patch component, raised on bug fixes.
    pub fn patch(&self) -> u32 {
        self.patch
    }

    /// Build component, raised on every development build.
    pub fn build(&self) -> u32 {
        self.build
    }

    /// Postfix, e.g. a pre-release marker.
    pub fn postfix(&self) -> Option<&str> {
        self.postfix.as_deref()
    }

    /// Returns true when the two versions share the same major component.
    pub fn is_compatible_with(&self, other: &SemanticVersion) -> bool {
        self.major == other.major
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}.{}", self.major, self.minor, self.patch, self.build)?;

        match self.postfix.as_deref() {
            Some(postfix) if !postfix.is_empty() => write!(f, "-{postfix}"),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_major_is_compatible() {
        let v1_0 = SemanticVersion::from_major(1);
        let v1_99 = SemanticVersion::new(1, 99, 0, 0);
        assert!(v1_0.is_compatible_with(&v1_99));
        assert!(v1_99.is_compatible_with(&v1_0));
    }

    #[test]
    fn different_major_is_incompatible() {
        let v1 = SemanticVersion::new(1, 4, 2, 7);
        let v2 = SemanticVersion::new(2, 4, 2, 7);
        assert!(!v1.is_compatible_with(&v2));
    }

    #[test]
    fn accepts_ascii_postfix() {
        let version = SemanticVersion::from_major(1).with_postfix("rc-1.2").unwrap();
        assert_eq!(version.postfix(), Some("rc-1.2"));
    }

    #[test]
    fn rejects_non_ascii_postfix() {
        let err = SemanticVersion::from_major(1).with_postfix("тест").unwrap_err();
        assert_eq!(*err.code(), "COMMON-VERSION-001");

        let err = SemanticVersion::from_major(1).with_postfix("beta!").unwrap_err();
        assert_eq!(*err.code(), "COMMON-VERSION-001");
    }

    #[test]
    fn display_joins_components_with_dots() {
        assert_eq!(SemanticVersion::new(1, 2, 3, 4).to_string(), "1.2.3.4");
        assert_eq!(
            SemanticVersion::new(1, 2, 3, 4)
                .with_postfix("beta")
                .unwrap()
                .to_string(),
            "1.2.3.4-beta"
        );
    }

    #[test]
    fn display_skips_empty_postfix() {
        let version = SemanticVersion::from_major(1).with_postfix("").unwrap();
        assert_eq!(version.to_string(), "1.0.0.0");
    }

    #[test]
    fn equality_is_structural_over_all_fields() {
        let left = SemanticVersion::new(1, 2, 3, 4).with_postfix("rc").unwrap();
        let right = SemanticVersion::new(1, 2, 3, 4).with_postfix("rc").unwrap();
        assert_eq!(left, right);

        assert_ne!(
            SemanticVersion::new(1, 2, 3, 4),
            SemanticVersion::new(1, 2, 3, 5)
        );
        assert_ne!(
            SemanticVersion::from_major(1),
            SemanticVersion::from_major(1).with_postfix("rc").unwrap()
        );
    }

    #[test]
    fn serialization_roundtrip() {
        let version = SemanticVersion::new(2, 1, 0, 14).with_postfix("rc-2").unwrap();
        let json = serde_json::to_string(&version).unwrap();
        let deserialized: SemanticVersion = serde_json::from_str(&json).unwrap();
        assert_eq!(version, deserialized);
    }
}
