use thiserror::Error;

/// Failure of a single REST round trip.
///
/// Business failures reported inside a successful body are not errors; the
/// caller inspects the body instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("malformed response body: {0}")]
    Decode(String),
    #[error("could not encode request body: {0}")]
    Encode(String),
}
