use std::str::FromStr;

use crate::permissions::errors::PermissionError;

/// Location authorization as reported by the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PermissionState {
    Undetermined,
    AuthorizedWhenInUse,
    AuthorizedAlways,
    Denied,
    Restricted,
}

impl PermissionState {
    pub fn is_granted(&self) -> bool {
        matches!(
            self,
            PermissionState::AuthorizedWhenInUse | PermissionState::AuthorizedAlways
        )
    }

    pub fn code(&self) -> &'static str {
        match self {
            PermissionState::Undetermined => "notDetermined",
            PermissionState::AuthorizedWhenInUse => "authorizedWhenInUse",
            PermissionState::AuthorizedAlways => "authorizedAlways",
            PermissionState::Denied => "denied",
            PermissionState::Restricted => "restricted",
        }
    }
}

impl FromStr for PermissionState {
    type Err = PermissionError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "notDetermined" => Ok(PermissionState::Undetermined),
            "authorizedWhenInUse" => Ok(PermissionState::AuthorizedWhenInUse),
            "authorizedAlways" => Ok(PermissionState::AuthorizedAlways),
            "denied" => Ok(PermissionState::Denied),
            "restricted" => Ok(PermissionState::Restricted),
            unknown => Err(PermissionError::UnsupportedPermissionState(
                unknown.to_string(),
            )),
        }
    }
}

/// What the app does about location access when the map first appears.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PermissionAction {
    RequestWhenInUse,
    Proceed,
    /// Denied or restricted: no prompt, no fallback location, no message.
    ProceedWithoutLocation,
}
