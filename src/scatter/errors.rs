use crate::permissions::errors::PermissionError;
use std::fmt;
use tokio::task::JoinError;

#[derive(Debug)]
pub enum ScatterError {
    Permission(PermissionError),
    /// The deferred scatter task panicked or was aborted.
    Deferred(JoinError),
    Serialization(serde_json::Error),
}

impl fmt::Display for ScatterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScatterError::Permission(err) => write!(f, "{err}"),
            ScatterError::Deferred(err) => write!(f, "deferred scatter did not finish: {err}"),
            ScatterError::Serialization(err) => write!(f, "failed to serialize the map: {err}"),
        }
    }
}

impl std::error::Error for ScatterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScatterError::Permission(err) => Some(err),
            ScatterError::Deferred(err) => Some(err),
            ScatterError::Serialization(err) => Some(err),
        }
    }
}

impl From<PermissionError> for ScatterError {
    fn from(err: PermissionError) -> Self {
        ScatterError::Permission(err)
    }
}

impl From<JoinError> for ScatterError {
    fn from(err: JoinError) -> Self {
        ScatterError::Deferred(err)
    }
}

impl From<serde_json::Error> for ScatterError {
    fn from(err: serde_json::Error) -> Self {
        ScatterError::Serialization(err)
    }
}
