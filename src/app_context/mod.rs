use crate::cli::Args;
use crate::geo::models::GeoCoordinate;
use crate::map::interface::IMapSurface;
use crate::map::models::{MapItem, Marker, MarkerView, Region, Span};
use crate::map::view_for;
use crate::permissions::errors::PermissionError;
use crate::permissions::models::PermissionState;
use crate::scatter::models::ScatterReport;
use crate::storage::location::SimulatedLocationService;
use crate::storage::map::InMemoryMapSurface;
use serde::Serialize;
use std::sync::Arc;

/// The headless host: a map surface and a location service shared with the deferred scatter.
#[derive(Clone)]
pub struct AppContext {
    pub location: Arc<SimulatedLocationService>,
    pub map: Arc<InMemoryMapSurface>,
}

/// What gets printed once the scatter has run.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapSnapshot {
    pub origin: GeoCoordinate,
    pub region: Option<Region>,
    pub markers: Vec<Marker>,
    /// The map as drawn with the requested span visible.
    pub clusters: Vec<MapItem>,
    /// One view per drawn item, the user's own location excluded.
    pub views: Vec<MarkerView>,
}

pub fn init(args: &Args) -> Result<AppContext, PermissionError> {
    let response: PermissionState = args.permission_response.parse()?;
    let user_location = args
        .latitude
        .zip(args.longitude)
        .map(|(latitude, longitude)| GeoCoordinate::new(latitude, longitude));
    if user_location.is_none() {
        tracing::warn!("No simulated user location given, the host will never get a fix.");
    }
    tracing::info!(
        permission = %args.permission,
        permission_response = response.code(),
        "Initialized headless host."
    );
    Ok(AppContext {
        location: Arc::new(SimulatedLocationService::new(
            user_location,
            &args.permission,
            response,
        )),
        map: Arc::new(InMemoryMapSurface::default()),
    })
}

impl AppContext {
    pub async fn snapshot(&self, report: ScatterReport, cluster_span: Span) -> MapSnapshot {
        let clusters = self.map.clusters_at(cluster_span).await;
        let views = clusters.iter().filter_map(view_for).collect();
        MapSnapshot {
            origin: report.origin,
            region: self.map.region().await,
            markers: report.markers,
            clusters,
            views,
        }
    }
}
