//! Structured error values with stable machine-readable codes.

use std::fmt;
use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::errors;

static ERROR_CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]+(-[A-Z]+)*-\d{3}$").expect("error-code pattern is valid"));

/// A stable, machine-readable error code such as `DOMAIN-AGG-ROOT-001`.
///
/// A code consists of one or more uppercase segments followed by a
/// three-digit number, all separated by dashes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ErrorCode(String);

impl ErrorCode {
    /// Validates and wraps an error-code string.
    pub fn new(code: impl Into<String>) -> Result<Self, Error> {
        let code = code.into();
        if !ERROR_CODE_PATTERN.is_match(&code) {
            return Err(errors::input_string_does_not_match_the_pattern()
                .append_message(&format!("Got: '{code}'.")));
        }

        Ok(Self(code))
    }

    /// Wraps a catalog literal.
    ///
    /// # Panics
    ///
    /// Panics when the literal violates the error-code format. Catalog codes
    /// are fixed at compile time and pinned by the catalog tests.
    pub fn from_static(code: &'static str) -> Self {
        assert!(
            ERROR_CODE_PATTERN.is_match(code),
            "malformed catalog error code: {code}"
        );

        Self(code.to_string())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<str> for ErrorCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ErrorCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl AsRef<str> for ErrorCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A structured error carrying a stable code, a human-readable message and an
/// optional underlying cause.
///
/// `Error` is an immutable value: the `append_*`/`with_source` combinators
/// consume the receiver and return a new value, so catalog errors handed out
/// to multiple call sites can never be mutated in place.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{code}: {message}")]
pub struct Error {
    code: ErrorCode,
    message: String,
    #[source]
    source: Option<Arc<dyn std::error::Error + Send + Sync + 'static>>,
}

impl Error {
    /// Creates an error from a code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Returns the error code.
    pub fn code(&self) -> &ErrorCode {
        &self.code
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns a new error with `message` appended after a space.
    #[must_use]
    pub fn append_message(mut self, message: impl AsRef<str>) -> Self {
        self.message.push(' ');
        self.message.push_str(message.as_ref());
        self
    }

    /// Returns a new error with `prefix` prepended before a space.
    #[must_use]
    pub fn append_message_prefix(mut self, prefix: impl AsRef<str>) -> Self {
        self.message.insert(0, ' ');
        self.message.insert_str(0, prefix.as_ref());
        self
    }

    /// Returns a new error with the given underlying cause attached.
    #[must_use]
    pub fn with_source(
        mut self,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        self.source = Some(Arc::new(source));
        self
    }
}
