// Error types surfaced by the protocol adapter
use crate::models::DebugError;
use thiserror::Error;

// Failure reported by the upstream service inside a well-formed reply.
// This is the expected failure path (invalid booking, expired search code...)
#[derive(Error, Debug, Clone, PartialEq)]
#[error("code: {code}, message: {message}")]
pub struct BusinessError {
    pub code: i64,
    pub message: String,
    pub debug: Option<DebugError>,
}

impl BusinessError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            debug: None,
        }
    }
}

// Errors raised while moving bytes over HTTP
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Connection error: {0}")]
    Connect(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Body read error: {0}")]
    Body(String),

    #[error("Request error: {0}")]
    Request(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::Connect(err.to_string())
        } else if err.is_body() || err.is_decode() {
            TransportError::Body(err.to_string())
        } else {
            TransportError::Request(err.to_string())
        }
    }
}

// Errors returned by every operation call
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Transport(#[from] TransportError),

    #[error("HTTP error: {status} - {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Encode error: {0}")]
    Encode(String),

    #[error("XML parse error: {0}")]
    XmlParse(String),

    #[error("JSON parse error: {0}")]
    JsonParse(String),

    #[error("Empty response payload")]
    EmptyPayload,

    #[error("SOAP fault {code}: {message}")]
    Fault { code: String, message: String },

    #[error(transparent)]
    Business(#[from] BusinessError),
}

impl ApiError {
    // Malformed or missing reply content, as opposed to a business failure
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            ApiError::XmlParse(_) | ApiError::JsonParse(_) | ApiError::EmptyPayload
        )
    }

    pub fn business(&self) -> Option<&BusinessError> {
        match self {
            ApiError::Business(err) => Some(err),
            _ => None,
        }
    }
}

// Configuration and initialisation errors
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Initialization error: {0}")]
    InitError(String),
}
