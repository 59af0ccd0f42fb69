use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },

    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("{url} answered with status {status}")]
    Status { status: u16, url: String },

    #[error("response from {url} could not be decoded: {message}")]
    Decode { url: String, message: String },

    #[error("response from {url} contained no record")]
    EmptyResponse { url: String },

    #[error("HTTP client configuration error: {0}")]
    Config(String),
}

impl ClientError {
    pub(crate) fn from_reqwest(url: &str, e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ClientError::Timeout {
                url: url.to_string(),
            }
        } else {
            ClientError::Request {
                url: url.to_string(),
                message: e.to_string(),
            }
        }
    }
}
