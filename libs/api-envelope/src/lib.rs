//! # api-envelope - uniform response shapes for JSON APIs
//!
//! Every response, success or failure, serializes to the same envelope so
//! clients can branch on `success` and `status` instead of on payload schemas.
//!
//! - [`ApiResponse`]: success flag, HTTP status, optional message, payload and domain code
//! - [`PageResponse`]: one page of content plus derived page metadata
//! - [`ValidationError`] and [`ValidationResponse`]: per-field input failures bundled as a 400
//! - [`ErrDef`]: static catalog entries pairing a status with a domain code
//! - [`PageRequest`] / [`PaginationConfig`]: request-side paging with defaults and limits
//!
//! ## Wire format
//!
//! Keys are camelCase (`totalElements`, `hasNext`, `rejectedValue`). Unset
//! optional fields are omitted from the output, never emitted as `null`.
//!
//! ## Features
//!
//! - `axum`: `IntoResponse` for [`ApiResponse`] and [`EnvelopeError`]
//! - `with-utoipa`: `ToSchema` derives for the wire types
//! - `with-validator`: conversion from `validator::ValidationErrors`
//!
//! ## Example
//!
//! ```
//! use api_envelope::{ApiResponse, PageResponse};
//!
//! let page = PageResponse::of(vec!["a", "b", "c"], 0, 3, 10)?;
//! let resp = ApiResponse::ok(page);
//! assert_eq!(resp.status(), 200);
//! assert_eq!(resp.data().map(|p| p.total_pages()), Some(4));
//! # Ok::<(), api_envelope::EnvelopeError>(())
//! ```

pub mod catalog;
pub mod error;
pub mod page;
pub mod pageable;
pub mod response;
pub mod status;
pub mod validation;

#[cfg(feature = "axum")]
pub mod http;

#[cfg(feature = "with-validator")]
pub mod validate;

pub use catalog::ErrDef;
pub use error::{EnvelopeError, EnvelopeResult};
pub use page::PageResponse;
pub use pageable::{PageRequest, Pageable, PaginationConfig};
pub use response::{ApiResponse, ValidationResponse, VALIDATION_FAILED_MESSAGE};
pub use validation::ValidationError;

#[cfg(feature = "with-validator")]
pub use validate::validation_errors_from;
