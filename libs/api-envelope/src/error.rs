use thiserror::Error;

/// Invalid-argument errors raised while building envelopes.
///
/// Every variant describes a programmer error at the call site: a status
/// that does not match the outcome, or page parameters that cannot produce
/// consistent metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EnvelopeError {
    #[error("status {status} is outside the HTTP range 100..=599")]
    StatusOutOfRange { status: u16 },

    #[error("status {status} is not a success status (200..=399)")]
    NotASuccessStatus { status: u16 },

    #[error("status {status} is not an error status (400..=599)")]
    NotAnErrorStatus { status: u16 },

    #[error("page size must be at least 1")]
    ZeroPageSize,

    #[error("{total_elements} elements at page size {size} exceed the page count range")]
    TotalPagesOverflow { total_elements: u64, size: u32 },

    #[error("page metadata does not match page {page}, size {size}, {total_elements} elements")]
    InconsistentPageMetadata {
        page: u32,
        size: u32,
        total_elements: u64,
    },
}

pub type EnvelopeResult<T> = Result<T, EnvelopeError>;
