use serde::Serialize;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PermissionError {
    /// The host reported a permission code this app does not know how to handle.
    UnsupportedPermissionState(String),
}

impl fmt::Display for PermissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PermissionError::UnsupportedPermissionState(code) => {
                write!(f, "unsupported location permission state `{code}`")
            }
        }
    }
}

impl std::error::Error for PermissionError {}
