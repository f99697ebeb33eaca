use crate::geo::models::GeoCoordinate;
use crate::permissions::errors::PermissionError;
use crate::permissions::models::PermissionState;
use async_trait::async_trait;

/// The host's location service.
#[async_trait]
pub trait ILocationService: Send + Sync {
    /// `None` until the host has a fix, which never happens without permission.
    async fn current_location(&self) -> Option<GeoCoordinate>;

    async fn permission_state(&self) -> Result<PermissionState, PermissionError>;

    /// Shows the "while using the app" prompt. Fire and forget.
    async fn request_when_in_use_authorization(&self);
}
