//! Error types for the authorization handshake and the browsing session.
//!
//! Every error is reported to the user as a single line and the command loop
//! carries on; nothing in here is fatal on its own.

use thiserror::Error;

/// Failures of the authorization-code handshake.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The callback port is already taken by another process.
    #[error("HTTP server could not bind on port {port}. Port is most likely in use.")]
    BindFailed {
        port: u16,
        #[source]
        source: std::io::Error,
    },

    /// Any other failure while binding or serving the callback listener.
    #[error("Callback server failed: {0}")]
    IoFailure(String),

    /// The authorization server redirected back with an error.
    #[error("Authorization failed. Try again.")]
    Denied,

    /// The code could not be exchanged for an access token.
    #[error("Token exchange failed: {0}")]
    ExchangeFailed(String),
}

/// Network or I/O failure while talking to a remote endpoint.
#[derive(Debug, Error)]
#[error("Could not send/receive request/response: {message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// A response body that does not have the expected JSON shape.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Malformed payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}

/// Errors raised by browse and paging commands.
#[derive(Debug, Error)]
pub enum BrowseError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Malformed(#[from] CatalogError),

    /// Structured error returned by the API. The remote `error.message` is
    /// shown as is.
    #[error("{0}")]
    Upstream(String),

    #[error("Please, provide access for application.")]
    Unauthenticated,

    #[error("No more pages.")]
    PagingBoundary,

    #[error("No pages to show.")]
    NoActiveView,

    /// An input line that names no command.
    #[error("Invalid option inputted. Try again.")]
    InvalidCommand(String),
}

/// Startup configuration problems.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    MissingVar(&'static str),

    #[error("Cannot load environment: {0}")]
    Env(String),
}
