//! Error catalog for the common building blocks.

use crate::error::{Error, ErrorCode};

/// The error-code string does not match the required format.
pub fn input_string_does_not_match_the_pattern() -> Error {
    Error::new(
        ErrorCode::from_static("COMMON-ERR-CODE-001"),
        "The error code string does not match the required pattern.",
    )
}

/// The version postfix contains characters outside the allowed set.
pub fn incorrect_postfix_format() -> Error {
    Error::new(
        ErrorCode::from_static("COMMON-VERSION-001"),
        "Incorrect version postfix format. A postfix may only contain \
         Latin letters, digits and the characters '-' and '.'.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_codes_are_stable() {
        assert_eq!(
            *input_string_does_not_match_the_pattern().code(),
            "COMMON-ERR-CODE-001"
        );
        assert_eq!(*incorrect_postfix_format().code(), "COMMON-VERSION-001");
    }
}
