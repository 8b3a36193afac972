//! Uniform success/failure container passed between every layer.

use serde::{Deserialize, Serialize};

use crate::error::ErrorCode;

/// Outcome of a product operation.
///
/// Exactly one side is meaningful: a success carries the value (and, for
/// paginated listings, the number of records matching the filter), a failure
/// carries a message and its [`ErrorCode`]. Failures never carry
/// `ErrorCode::None`.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum Outcome<T> {
    Success {
        value: T,
        total_records: Option<usize>,
    },
    Failure {
        message: String,
        code: ErrorCode,
    },
}

/// Outcome of operations with nothing to return, such as delete.
pub type EmptyOutcome = Outcome<()>;

impl<T> Outcome<T> {
    pub fn success(value: T) -> Self {
        Outcome::Success {
            value,
            total_records: None,
        }
    }

    /// Success holding one page of a larger, filtered set.
    pub fn paginated(value: T, total_records: usize) -> Self {
        Outcome::Success {
            value,
            total_records: Some(total_records),
        }
    }

    pub fn failure(message: impl Into<String>, code: ErrorCode) -> Self {
        let code = match code {
            ErrorCode::None => ErrorCode::Unexpected,
            other => other,
        };
        Outcome::Failure {
            message: message.into(),
            code,
        }
    }

    /// Failure with the default `Unexpected` classification.
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::failure(message, ErrorCode::Unexpected)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Success { value, .. } => Some(value),
            Outcome::Failure { .. } => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Outcome::Success { value, .. } => Some(value),
            Outcome::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Outcome::Success { .. } => None,
            Outcome::Failure { message, .. } => Some(message),
        }
    }

    pub fn error_code(&self) -> ErrorCode {
        match self {
            Outcome::Success { .. } => ErrorCode::None,
            Outcome::Failure { code, .. } => *code,
        }
    }

    pub fn total_records(&self) -> Option<usize> {
        match self {
            Outcome::Success { total_records, .. } => *total_records,
            Outcome::Failure { .. } => None,
        }
    }

    /// Re-types a failure, e.g. to forward it from a layer with a different
    /// success type. Successes are transformed with `f`.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Success {
                value,
                total_records,
            } => Outcome::Success {
                value: f(value),
                total_records,
            },
            Outcome::Failure { message, code } => Outcome::Failure { message, code },
        }
    }
}

/// Wire form of an [`Outcome`].
///
/// ```json
/// { "isSuccess": true, "error": null, "value": [...], "errorCode": 0, "totalRecords": 3 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    pub is_success: bool,
    pub error: Option<String>,
    pub value: Option<T>,
    pub error_code: ErrorCode,
    pub total_records: Option<usize>,
}

impl<T> From<Outcome<T>> for Envelope<T> {
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Outcome::Success {
                value,
                total_records,
            } => Envelope {
                is_success: true,
                error: None,
                value: Some(value),
                error_code: ErrorCode::None,
                total_records,
            },
            Outcome::Failure { message, code } => Envelope {
                is_success: false,
                error: Some(message),
                value: None,
                error_code: code,
                total_records: None,
            },
        }
    }
}

/// A success whose `value` is `null` decodes to `T::default()`, which is how
/// `Outcome<()>` survives the trip.
impl<T: Default> From<Envelope<T>> for Outcome<T> {
    fn from(envelope: Envelope<T>) -> Self {
        if envelope.is_success {
            Outcome::Success {
                value: envelope.value.unwrap_or_default(),
                total_records: envelope.total_records,
            }
        } else {
            Outcome::failure(envelope.error.unwrap_or_default(), envelope.error_code)
        }
    }
}
