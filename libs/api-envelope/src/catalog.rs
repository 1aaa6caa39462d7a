//! Static error definitions pairing an HTTP status with a domain code.

use crate::response::ApiResponse;

/// A catalog entry such as `USER_NOT_FOUND`.
///
/// Declare entries as constants; an entry with a non-error status fails to
/// compile:
///
/// ```
/// use api_envelope::ErrDef;
///
/// const USER_NOT_FOUND: ErrDef = ErrDef::new(404, "USER_NOT_FOUND", "User not found");
///
/// let resp = USER_NOT_FOUND.to_response::<()>();
/// assert_eq!(resp.status(), 404);
/// assert_eq!(resp.code(), Some("USER_NOT_FOUND"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrDef {
    status: u16,
    code: &'static str,
    message: &'static str,
}

impl ErrDef {
    pub const fn new(status: u16, code: &'static str, message: &'static str) -> Self {
        assert!(
            matches!(status, 400..=599),
            "ErrDef status must be in 400..=599"
        );
        Self {
            status,
            code,
            message,
        }
    }

    pub const fn status(&self) -> u16 {
        self.status
    }

    pub const fn code(&self) -> &'static str {
        self.code
    }

    pub const fn message(&self) -> &'static str {
        self.message
    }

    /// Error envelope with the catalog message.
    #[inline]
    pub fn to_response<T>(&self) -> ApiResponse<T> {
        self.to_response_with(self.message)
    }

    /// Error envelope with an occurrence-specific message.
    #[inline]
    pub fn to_response_with<T>(&self, message: impl Into<String>) -> ApiResponse<T> {
        ApiResponse::assemble(false, self.status, Some(message.into()), None).with_code(self.code)
    }
}

/// Rendered for [`EnvelopeError`](crate::EnvelopeError)s that reach the HTTP boundary.
pub const INVALID_ARGUMENT: ErrDef = ErrDef::new(
    500,
    "ENVELOPE_INVALID_ARGUMENT",
    "Response could not be built",
);

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_NOT_FOUND: ErrDef = ErrDef::new(404, "TEST_NOT_FOUND", "Not found");

    #[test]
    fn err_def_to_response_works() {
        let resp = TEST_NOT_FOUND.to_response::<String>();
        assert!(!resp.is_success());
        assert_eq!(resp.status(), 404);
        assert_eq!(resp.message(), Some("Not found"));
        assert_eq!(resp.code(), Some("TEST_NOT_FOUND"));
        assert_eq!(resp.data(), None);
    }

    #[test]
    fn custom_message_keeps_code() {
        let resp = TEST_NOT_FOUND.to_response_with::<()>("Note 7 is gone");
        assert_eq!(resp.message(), Some("Note 7 is gone"));
        assert_eq!(resp.code(), Some("TEST_NOT_FOUND"));
    }

    #[test]
    #[should_panic(expected = "400..=599")]
    fn non_error_status_panics_outside_const_context() {
        let _ = ErrDef::new(200, "NOPE", "nope");
    }
}
