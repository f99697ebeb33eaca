use crate::geo::models::GeoCoordinate;
use crate::location::interface::ILocationService;
use crate::permissions::errors::PermissionError;
use crate::permissions::models::PermissionState;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Stands in for the platform location service.
///
/// Permission is kept as the host's raw code so that codes this app does not understand can be
/// reproduced. Asking for authorization while undetermined applies `response`, as if the user
/// had answered the prompt.
#[derive(Clone)]
pub struct SimulatedLocationService {
    location: Option<GeoCoordinate>,
    permission_code: Arc<RwLock<String>>,
    response: PermissionState,
    requests: Arc<AtomicUsize>,
}

impl SimulatedLocationService {
    pub fn new(
        location: Option<GeoCoordinate>,
        permission_code: &str,
        response: PermissionState,
    ) -> Self {
        Self {
            location,
            permission_code: Arc::new(RwLock::new(permission_code.to_string())),
            response,
            requests: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl ILocationService for SimulatedLocationService {
    async fn current_location(&self) -> Option<GeoCoordinate> {
        match self.permission_state().await {
            Ok(state) if state.is_granted() => self.location,
            _ => None,
        }
    }

    async fn permission_state(&self) -> Result<PermissionState, PermissionError> {
        self.permission_code.read().await.parse()
    }

    async fn request_when_in_use_authorization(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
        let mut permission_code = self.permission_code.write().await;
        if *permission_code == PermissionState::Undetermined.code() {
            tracing::info!(
                task = "permission_prompt",
                answer = self.response.code(),
                "User answered the location permission prompt."
            );
            *permission_code = self.response.code().to_string();
        }
    }
}
