use models::{PermissionAction, PermissionState};

pub mod errors;
pub mod models;

pub fn decide(state: PermissionState) -> PermissionAction {
    match state {
        PermissionState::Undetermined => PermissionAction::RequestWhenInUse,
        PermissionState::AuthorizedWhenInUse | PermissionState::AuthorizedAlways => {
            PermissionAction::Proceed
        }
        PermissionState::Denied | PermissionState::Restricted => {
            PermissionAction::ProceedWithoutLocation
        }
    }
}
