use reqwest::StatusCode;

/// Failure to obtain a response from the translation API.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error ({status}): {body}")]
    Status { status: StatusCode, body: String },
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}
