//! Error types for REST error handling

use thiserror::Error;

/// Failures produced while decoding a `RestError`
#[derive(Error, Debug)]
pub enum RestErrorsError {
    #[error("invalid json")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },
}

/// Convenient Result type for rest error operations
pub type RestErrorsResult<T> = Result<T, RestErrorsError>;
