use thiserror::Error;

#[derive(Error, Debug)]
pub enum BittrexError {
    /// The request never produced a response (DNS, connect, TLS, timeout, body read).
    #[error("Transport error: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("Request failed with status code: {status}")]
    RequestError { status: u16 },

    #[error("API error: {message}")]
    ApiError { message: String },

    #[error("Authentication error: {0}")]
    AuthError(String),

    /// The body was not a valid `{success, message, result}` envelope.
    #[error("Failed to decode response envelope: {0}")]
    DecodeError(#[source] serde_json::Error),

    /// The envelope was fine but `result` did not match the expected shape.
    #[error("Deserialization error: {0}")]
    DeserializationError(#[source] serde_json::Error),

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] crate::core::config::ConfigError),
}

impl BittrexError {
    /// Build an `ApiError` from the message carried by a failed envelope
    pub fn api_error(message: impl Into<String>) -> Self {
        Self::ApiError {
            message: message.into(),
        }
    }

    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::AuthError(_))
    }

    pub fn is_api_error(&self) -> bool {
        matches!(self, Self::ApiError { .. })
    }

    /// The exchange-provided message, if this error came from a failed envelope
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Self::ApiError { message } => Some(message),
            _ => None,
        }
    }
}

impl From<url::ParseError> for BittrexError {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidParameters(format!("Invalid request URL: {}", err))
    }
}

/// Result type alias for Bittrex operations
pub type Result<T> = std::result::Result<T, BittrexError>;
