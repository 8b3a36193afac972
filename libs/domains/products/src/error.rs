//! Failure taxonomy shared by every layer.
//!
//! [`ErrorCode`] is the single classification of why an operation failed. It
//! travels inside [`Outcome`](crate::result::Outcome) from the REST client up to
//! the HTTP boundary, which is the only place it becomes a status code.

use serde::{Deserialize, Serialize};
use strum::Display;
use thiserror::Error;

/// Closed set of failure kinds.
///
/// Serialized as its integer discriminant (`"errorCode": 3`), never as a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum ErrorCode {
    /// No error; carried by every success
    #[default]
    None,
    /// Client input rejected before reaching upstream
    ValidationError,
    /// Upstream confirmed the resource does not exist
    NotFound,
    /// Upstream was reachable but answered with a non-success status
    ExternalApiError,
    Unauthorized,
    Forbidden,
    Conflict,
    /// Transport failure, malformed upstream body, or any uncaught fault
    Unexpected,
}

impl ErrorCode {
    /// Wire value of this code.
    pub const fn code(self) -> i32 {
        match self {
            ErrorCode::None => 0,
            ErrorCode::ValidationError => 1,
            ErrorCode::NotFound => 2,
            ErrorCode::ExternalApiError => 3,
            ErrorCode::Unauthorized => 4,
            ErrorCode::Forbidden => 5,
            ErrorCode::Conflict => 6,
            ErrorCode::Unexpected => 999,
        }
    }
}

/// Raised when decoding an envelope whose `errorCode` is outside the taxonomy.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown error code: {0}")]
pub struct UnknownErrorCode(pub i32);

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

impl TryFrom<i32> for ErrorCode {
    type Error = UnknownErrorCode;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ErrorCode::None),
            1 => Ok(ErrorCode::ValidationError),
            2 => Ok(ErrorCode::NotFound),
            3 => Ok(ErrorCode::ExternalApiError),
            4 => Ok(ErrorCode::Unauthorized),
            5 => Ok(ErrorCode::Forbidden),
            6 => Ok(ErrorCode::Conflict),
            999 => Ok(ErrorCode::Unexpected),
            other => Err(UnknownErrorCode(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ErrorCode; 8] = [
        ErrorCode::None,
        ErrorCode::ValidationError,
        ErrorCode::NotFound,
        ErrorCode::ExternalApiError,
        ErrorCode::Unauthorized,
        ErrorCode::Forbidden,
        ErrorCode::Conflict,
        ErrorCode::Unexpected,
    ];

    #[test]
    fn test_wire_values_are_stable() {
        assert_eq!(ErrorCode::None.code(), 0);
        assert_eq!(ErrorCode::ExternalApiError.code(), 3);
        assert_eq!(ErrorCode::Unexpected.code(), 999);
    }

    #[test]
    fn test_every_code_decodes_from_its_wire_value() {
        for code in ALL {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_unknown_wire_value_is_rejected() {
        assert_eq!(ErrorCode::try_from(7), Err(UnknownErrorCode(7)));
    }

    #[test]
    fn test_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&ErrorCode::NotFound).unwrap(), "2");
        let decoded: ErrorCode = serde_json::from_str("999").unwrap();
        assert_eq!(decoded, ErrorCode::Unexpected);
        assert!(serde_json::from_str::<ErrorCode>("42").is_err());
    }
}
