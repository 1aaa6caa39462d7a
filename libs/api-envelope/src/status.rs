//! HTTP status helpers shared by the envelope factories.

use crate::error::{EnvelopeError, EnvelopeResult};

pub const OK: u16 = 200;
pub const CREATED: u16 = 201;
pub const BAD_REQUEST: u16 = 400;
pub const UNAUTHORIZED: u16 = 401;
pub const FORBIDDEN: u16 = 403;
pub const NOT_FOUND: u16 = 404;
pub const INTERNAL_SERVER_ERROR: u16 = 500;

/// True for statuses a successful envelope may carry.
#[inline]
pub const fn is_success(status: u16) -> bool {
    matches!(status, 200..=399)
}

/// True for statuses a failed envelope may carry.
#[inline]
pub const fn is_error(status: u16) -> bool {
    matches!(status, 400..=599)
}

/// Check that `status` is a valid HTTP status for the given outcome.
pub(crate) fn check(success: bool, status: u16) -> EnvelopeResult<()> {
    if !(100..=599).contains(&status) {
        tracing::debug!(status, "rejecting status outside the HTTP range");
        return Err(EnvelopeError::StatusOutOfRange { status });
    }
    if success && !is_success(status) {
        tracing::debug!(status, "rejecting non-success status for a success envelope");
        return Err(EnvelopeError::NotASuccessStatus { status });
    }
    if !success && !is_error(status) {
        tracing::debug!(status, "rejecting non-error status for an error envelope");
        return Err(EnvelopeError::NotAnErrorStatus { status });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::informational(100)]
    #[case::zero(0)]
    #[case::too_large(600)]
    #[case::u16_max(u16::MAX)]
    fn rejects_out_of_range_or_informational(#[case] status: u16) {
        assert!(check(true, status).is_err());
        assert!(check(false, status).is_err());
    }

    #[test]
    fn out_of_range_is_reported_before_outcome_mismatch() {
        assert_eq!(
            check(true, 600),
            Err(EnvelopeError::StatusOutOfRange { status: 600 })
        );
        assert_eq!(
            check(false, 42),
            Err(EnvelopeError::StatusOutOfRange { status: 42 })
        );
    }

    #[test]
    fn success_range_boundaries() {
        assert!(check(true, 200).is_ok());
        assert!(check(true, 399).is_ok());
        assert_eq!(
            check(true, 199),
            Err(EnvelopeError::NotASuccessStatus { status: 199 })
        );
        assert_eq!(
            check(true, 400),
            Err(EnvelopeError::NotASuccessStatus { status: 400 })
        );
    }

    #[test]
    fn error_range_boundaries() {
        assert!(check(false, 400).is_ok());
        assert!(check(false, 599).is_ok());
        assert_eq!(
            check(false, 399),
            Err(EnvelopeError::NotAnErrorStatus { status: 399 })
        );
    }
}
