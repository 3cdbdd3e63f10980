use thiserror::Error;

/// Errors from the Gemini provider call path.
///
/// Everything here means "the call itself did not produce usable text":
/// transport failures, non-success HTTP statuses, and response envelopes
/// with no text candidate. Unparseable text that the call DID return is a
/// separate condition, see [`ExtractionError`].
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Configuration Error: {0}")]
    ConfigError(String),

    #[error("Request Error: {0}")]
    RequestError(String),

    #[error("Response Error: {0}")]
    ResponseError(String),

    #[error("HTTP Error: {status_code} - {message}")]
    HttpError { status_code: u16, message: String },

    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
}

/// Raised when no parseable JSON object can be found in model output.
///
/// Carries a truncated snippet of the offending text for diagnostics.
#[derive(Error, Debug)]
#[error("no parseable JSON object in model output: {snippet:?}")]
pub struct ExtractionError {
    pub snippet: String,
}

/// Result type for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;
