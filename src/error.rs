use thiserror::Error;

/// Library-wide error type
#[derive(Debug, Error)]
pub enum Error {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("upstream error: {0}")]
    Upstream(#[from] UpstreamError),

    #[error("encoding error: {0}")]
    Encoding(#[from] EncodingError),
}

/// Input validation errors, raised before any network call is made
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("repository owner cannot be empty")]
    EmptyOwner,

    #[error("repository name cannot be empty")]
    EmptyRepository,

    #[error("secret name cannot be empty")]
    EmptySecretName,

    #[error("secret value cannot be empty")]
    EmptySecretValue,
}

/// Failures reported by the GitHub API or the transport beneath it.
///
/// The original cause is always attached; nothing is retried or swallowed
/// locally.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("github api returned {status}: {message}")]
    Status {
        status: reqwest::StatusCode,
        message: String,
    },
}

/// Malformed key or ciphertext encoding
#[derive(Debug, Error)]
pub enum EncodingError {
    #[error("public key is not valid base64")]
    InvalidBase64,

    #[error("invalid public key length: expected 32 bytes, got {0}")]
    InvalidKeyLength(usize),

    #[error("sealed-box encryption failed")]
    SealFailed,
}

/// Convenience type for Results
pub type Result<T> = std::result::Result<T, Error>;
