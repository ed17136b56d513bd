#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{0}")]
    MissingConfig(String),

    #[error("{0}")]
    MissingArgument(String),

    #[error("Request failed: {status} - {body}")]
    Transport { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse response from {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Invalid header value: {0}")]
    InvalidHeader(String),
}

impl Error {
    /// Whether the usage text should be printed along with the error.
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::MissingConfig(_) | Error::MissingArgument(_))
    }
}
