//! Error types and Result aliases for BloodStudio

use std::fmt;
use std::path::PathBuf;

/// Result type alias for BloodStudio operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for BloodStudio
#[derive(Debug)]
pub enum Error {
    // === Remote service errors ===
    /// Transport could not reach the remote compiler service
    NetworkFailure {
        endpoint: String,
        reason: String,
    },

    /// The service was reachable but returned an error payload
    ServiceError {
        message: String,
    },

    /// An action value outside the supported set reached the service
    /// boundary. Unreachable from the fixed UI surface, handled like a
    /// service error if it ever occurs.
    UnknownAction {
        action: String,
    },

    /// A compile or execute request was submitted while another was
    /// outstanding
    RequestInFlight,

    /// The service responded 2xx but the payload carried none of the
    /// expected fields
    MalformedResponse {
        endpoint: String,
    },

    // === Configuration errors ===
    /// Failed to load configuration file
    ConfigLoadFailed {
        path: PathBuf,
        reason: String,
    },

    /// Configuration file not found
    ConfigNotFound,

    /// Configuration validation failed
    ConfigValidationFailed {
        field: String,
        reason: String,
    },

    // === I/O and serialization errors ===
    /// I/O errors
    Io(std::io::Error),

    /// Serialization errors
    Serde(serde_json::Error),

    /// TOML parsing errors
    Toml(toml::de::Error),

    // === Generic fallback (use sparingly) ===
    /// Generic errors (for cases not yet categorized)
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Remote service errors
            Error::NetworkFailure { endpoint, reason } => {
                write!(f, "Could not reach the compiler service at '{}': {}", endpoint, reason)
            }
            Error::ServiceError { message } => {
                write!(f, "{}", message)
            }
            Error::UnknownAction { action } => {
                write!(f, "Unknown compile action '{}'", action)
            }
            Error::RequestInFlight => {
                write!(f, "A compile or execute request is already in flight")
            }
            Error::MalformedResponse { endpoint } => {
                write!(f, "Unexpected response shape from '{}'", endpoint)
            }

            // Configuration errors
            Error::ConfigLoadFailed { path, reason } => {
                write!(f, "Failed to load config from '{}': {}", path.display(), reason)
            }
            Error::ConfigNotFound => {
                write!(f, "Configuration file not found")
            }
            Error::ConfigValidationFailed { field, reason } => {
                write!(f, "Configuration validation failed for '{}': {}", field, reason)
            }

            // I/O and serialization errors
            Error::Io(err) => write!(f, "I/O error: {}", err),
            Error::Serde(err) => write!(f, "Serialization error: {}", err),
            Error::Toml(err) => write!(f, "TOML parsing error: {}", err),

            // Generic fallback
            Error::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Whether this error originated at the remote service boundary.
    ///
    /// Both transport failures and error payloads surface to the user as a
    /// single console line and a failed session; this predicate lets the
    /// controller treat them uniformly.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Error::NetworkFailure { .. }
                | Error::ServiceError { .. }
                | Error::UnknownAction { .. }
                | Error::MalformedResponse { .. }
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serde(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Toml(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let endpoint = err
            .url()
            .map(|u| u.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        Error::NetworkFailure {
            endpoint,
            reason: err.to_string(),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Other(err.to_string())
    }
}

impl From<String> for Error {
    fn from(err: String) -> Self {
        Error::Other(err)
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Self {
        Error::Other(err.to_string())
    }
}
