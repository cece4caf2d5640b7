//! REST Errors
//!
//! A small value type describing an API error the way it travels between
//! services: HTTP status, machine-readable error code, human message and a
//! flat list of underlying causes.
//!
//! ## Features
//!
//! - **Constructors**: bad request, not found, unauthorized, internal server error, generic
//! - **Rendering**: `Display` produces `message: .. - status: .. - error: .. - causes: [..]`
//! - **JSON**: `Serialize` plus [`RestError::from_bytes`] for the receiving side
//! - **Axum** (feature `axum`, on by default): `RestError` implements `IntoResponse`
//!
//! ## Example
//!
//! ```rust
//! use rest_errors::RestError;
//!
//! let err = RestError::not_found("user 42 not found");
//! assert_eq!(err.status(), 404);
//!
//! let bytes = serde_json::to_vec(&err).unwrap();
//! let decoded = RestError::from_bytes(&bytes).unwrap();
//! assert_eq!(
//!     decoded.to_string(),
//!     "message: user 42 not found - status: 404 - error: not_found - causes: []"
//! );
//! ```

pub mod error;
pub mod rest_error;
#[cfg(feature = "axum")]
pub mod response;

// Re-export commonly used types
pub use error::{RestErrorsError, RestErrorsResult};
pub use rest_error::RestError;
