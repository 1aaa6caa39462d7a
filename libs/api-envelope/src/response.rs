use serde::{Deserialize, Serialize};

use crate::error::{EnvelopeError, EnvelopeResult};
use crate::status;
use crate::validation::ValidationError;

/// Message carried by every validation-error envelope. Clients match on it.
pub const VALIDATION_FAILED_MESSAGE: &str = "입력값이 올바르지 않습니다.";

/// Envelope whose payload is the list of failed input constraints.
pub type ValidationResponse = ApiResponse<Vec<ValidationError>>;

/// Uniform response envelope shared by every API outcome.
///
/// A successful envelope always carries a status in `200..=399`, a failed one
/// a status in `400..=599`. Fields are read-only once built; the `with_*`
/// methods only fill optional parts and never touch the outcome.
///
/// Unset `message`, `data` and `code` are omitted from the JSON output.
/// Omission only looks at the envelope's own `Option`: an `Option` payload
/// such as `ApiResponse::ok(None::<i32>)` is set, so it serializes as
/// `"data": null` and reads back with no payload.
#[cfg_attr(feature = "with-utoipa", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawResponse<T>")]
pub struct ApiResponse<T> {
    success: bool,
    status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Validated direct construction; fill the rest with the `with_*` methods.
    pub fn try_new(success: bool, status: u16) -> EnvelopeResult<Self> {
        status::check(success, status)?;
        Ok(Self::assemble(success, status, None, None))
    }

    // Callers guarantee `status` matches `success`.
    pub(crate) fn assemble(
        success: bool,
        status: u16,
        message: Option<String>,
        data: Option<T>,
    ) -> Self {
        debug_assert!(status::check(success, status).is_ok());
        Self {
            success,
            status,
            message,
            data,
            code: None,
        }
    }

    /// Successful envelope with a caller-chosen status.
    pub fn of(data: T, status: u16) -> EnvelopeResult<Self> {
        status::check(true, status)?;
        Ok(Self::assemble(true, status, None, Some(data)))
    }

    pub fn of_with_message(data: T, message: impl Into<String>, status: u16) -> EnvelopeResult<Self> {
        status::check(true, status)?;
        Ok(Self::assemble(true, status, Some(message.into()), Some(data)))
    }

    /// Failed envelope with a caller-chosen status and no payload.
    pub fn error(message: impl Into<String>, status: u16) -> EnvelopeResult<Self> {
        status::check(false, status)?;
        Ok(Self::failure(message, status))
    }

    fn failure(message: impl Into<String>, status: u16) -> Self {
        Self::assemble(false, status, Some(message.into()), None)
    }

    pub fn ok(data: T) -> Self {
        Self::assemble(true, status::OK, None, Some(data))
    }

    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self::assemble(true, status::OK, Some(message.into()), Some(data))
    }

    pub fn created(data: T) -> Self {
        Self::assemble(true, status::CREATED, None, Some(data))
    }

    pub fn created_with_message(data: T, message: impl Into<String>) -> Self {
        Self::assemble(true, status::CREATED, Some(message.into()), Some(data))
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::failure(message, status::BAD_REQUEST)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::failure(message, status::UNAUTHORIZED)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::failure(message, status::FORBIDDEN)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::failure(message, status::NOT_FOUND)
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::failure(message, status::INTERNAL_SERVER_ERROR)
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_data(mut self, data: T) -> Self {
        self.data = Some(data);
        self
    }

    /// Attach an application-defined code such as `USER_NOT_FOUND`.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Map the payload while preserving outcome, status, message and code.
    pub fn map_data<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            success: self.success,
            status: self.status,
            message: self.message,
            data: self.data.map(f),
            code: self.code,
        }
    }
}

impl ApiResponse<Vec<ValidationError>> {
    /// 400 envelope carrying the given validation errors.
    pub fn validation_error(errors: Vec<ValidationError>) -> Self {
        Self::assemble(
            false,
            status::BAD_REQUEST,
            Some(VALIDATION_FAILED_MESSAGE.to_owned()),
            Some(errors),
        )
    }

    /// 400 envelope for a single failed field.
    pub fn field_error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::validation_error(ValidationError::of(field, message))
    }

    /// 400 envelope for a single failed field, echoing the rejected value.
    pub fn field_error_with_value(
        field: impl Into<String>,
        message: impl Into<String>,
        value: impl Serialize,
    ) -> Self {
        Self::validation_error(ValidationError::of_with_value(field, message, value))
    }
}

#[derive(Deserialize)]
struct RawResponse<T> {
    success: bool,
    status: u16,
    message: Option<String>,
    data: Option<T>,
    code: Option<String>,
}

impl<T> TryFrom<RawResponse<T>> for ApiResponse<T> {
    type Error = EnvelopeError;

    fn try_from(raw: RawResponse<T>) -> Result<Self, Self::Error> {
        status::check(raw.success, raw.status)?;
        Ok(Self {
            success: raw.success,
            status: raw.status,
            message: raw.message,
            data: raw.data,
            code: raw.code,
        })
    }
}
