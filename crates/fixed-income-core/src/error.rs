//! Error types for instrument construction.
//!
//! Two kinds of failure are distinguished: structurally wrong input
//! ([`ErrorKind::InvalidArgument`]) and structurally valid input whose
//! magnitude is out of bounds ([`ErrorKind::OutOfRange`]).

use std::borrow::Cow;

use thiserror::Error;

/// A specialized Result type for bond operations.
pub type BondResult<T> = Result<T, BondError>;

/// Coarse classification of a [`BondError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input has the wrong shape: a blank string, a missing field, or an
    /// impossible date ordering.
    InvalidArgument,
    /// Input is well-formed but numerically out of bounds.
    OutOfRange,
}

/// Errors raised while constructing a bond.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BondError {
    /// Structurally invalid argument.
    #[error("{message}")]
    InvalidArgument {
        /// Offending parameter, if the rule concerns a single field.
        param: Option<&'static str>,
        /// Reason for rejection.
        message: &'static str,
    },

    /// Numeric argument outside its permitted range.
    #[error("{message}")]
    OutOfRange {
        /// Offending parameter.
        param: &'static str,
        /// Reason for rejection.
        message: &'static str,
    },

    /// Required builder field was never set.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The missing field name.
        field: &'static str,
    },
}

impl BondError {
    /// Creates an invalid argument error tied to a parameter.
    #[must_use]
    pub fn invalid_argument(param: &'static str, message: &'static str) -> Self {
        Self::InvalidArgument {
            param: Some(param),
            message,
        }
    }

    /// Creates an invalid argument error spanning more than one parameter.
    #[must_use]
    pub fn invalid_arguments(message: &'static str) -> Self {
        Self::InvalidArgument {
            param: None,
            message,
        }
    }

    /// Creates an out of range error.
    #[must_use]
    pub fn out_of_range(param: &'static str, message: &'static str) -> Self {
        Self::OutOfRange { param, message }
    }

    /// Creates a missing field error.
    #[must_use]
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// Returns the classification of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. } | Self::MissingField { .. } => ErrorKind::InvalidArgument,
            Self::OutOfRange { .. } => ErrorKind::OutOfRange,
        }
    }

    /// Returns the name of the offending parameter, if any.
    #[must_use]
    pub fn param(&self) -> Option<&'static str> {
        match self {
            Self::InvalidArgument { param, .. } => *param,
            Self::OutOfRange { param, .. } => Some(*param),
            Self::MissingField { field } => Some(*field),
        }
    }

    /// Returns the human-readable reason.
    #[must_use]
    pub fn message(&self) -> Cow<'static, str> {
        match self {
            Self::InvalidArgument { message, .. } | Self::OutOfRange { message, .. } => {
                Cow::Borrowed(*message)
            }
            Self::MissingField { .. } => Cow::Owned(self.to_string()),
        }
    }

    /// Returns true for [`ErrorKind::InvalidArgument`] errors.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }

    /// Returns true for [`ErrorKind::OutOfRange`] errors.
    #[must_use]
    pub fn is_out_of_range(&self) -> bool {
        self.kind() == ErrorKind::OutOfRange
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_message() {
        let err = BondError::out_of_range("face_value", "Face value must be greater than zero.");
        assert_eq!(err.to_string(), "Face value must be greater than zero.");
        assert_eq!(err.message(), "Face value must be greater than zero.");
    }

    #[test]
    fn test_kinds() {
        assert_eq!(
            BondError::invalid_argument("isin", "bad").kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            BondError::out_of_range("coupon_rate", "bad").kind(),
            ErrorKind::OutOfRange
        );
        assert!(BondError::missing_field("issue_date").is_invalid_argument());
        assert!(!BondError::missing_field("issue_date").is_out_of_range());
    }

    #[test]
    fn test_param() {
        assert_eq!(BondError::invalid_arguments("bad").param(), None);
        assert_eq!(
            BondError::invalid_argument("currency", "bad").param(),
            Some("currency")
        );
        assert_eq!(
            BondError::missing_field("maturity_date").param(),
            Some("maturity_date")
        );
    }

    #[test]
    fn test_message_borrows_static_text() {
        let err = BondError::invalid_arguments("Issue date must be earlier than maturity date.");
        assert!(matches!(err.message(), Cow::Borrowed(_)));
        assert_eq!(err.message(), "Issue date must be earlier than maturity date.");

        let err = BondError::missing_field("face_value");
        assert!(matches!(err.message(), Cow::Owned(_)));
        assert_eq!(err.message(), "Missing required field: face_value");
    }

    #[test]
    fn test_missing_field_display() {
        let err = BondError::missing_field("coupon_rate");
        assert!(err.to_string().contains("coupon_rate"));
    }
}
