// src/error.rs
//! Errors raised while talking to the API or saving what it returns.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GatewayError>;

#[derive(Debug, Error)]
pub enum GatewayError {
    /// Connection refused, DNS failure, timeout, broken body stream.
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx reply. `message` is the server's `error` field when it sent one.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// 2xx reply whose JSON body carries an `error` field.
    #[error("server error: {0}")]
    Server(String),

    #[error("invalid response: {0}")]
    Decode(String),

    #[error("empty response from server")]
    EmptyBody,

    #[error("I/O error: {0}")]
    Io(String),
}

impl GatewayError {
    /// The single line shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(e) => format!("{e}. Make sure the API server is running."),
            Self::Status { message, .. } => message.clone(),
            Self::Server(message) => message.clone(),
            Self::Decode(e) => format!("Unexpected response from server ({e})"),
            Self::EmptyBody => s!("Empty response from server"),
            Self::Io(e) => format!("Could not save file: {e}"),
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

impl From<std::io::Error> for GatewayError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
