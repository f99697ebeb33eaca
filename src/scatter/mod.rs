use crate::geo::{self, models::GeoCoordinate};
use crate::location::interface::ILocationService;
use crate::map::interface::IMapSurface;
use crate::map::models::{MapItem, Marker, Region};
use crate::permissions::{self, errors::PermissionError, models::PermissionAction};
use config::ScatterConfig;
use models::ScatterReport;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tokio::task::JoinHandle;

pub mod config;
pub mod consts;
pub mod errors;
pub mod models;
#[cfg(test)]
pub mod tests;

/// Runs when the map first appears on screen.
///
/// Settles location permission, then schedules a single deferred scatter. An unsupported
/// permission state is returned to the caller and nothing is scheduled.
pub async fn on_appear<L, M>(
    config: ScatterConfig,
    location: Arc<L>,
    map: Arc<M>,
) -> Result<JoinHandle<ScatterReport>, PermissionError>
where
    L: ILocationService + 'static,
    M: IMapSurface + 'static,
{
    let permission_state = location.permission_state().await?;
    match permissions::decide(permission_state) {
        PermissionAction::RequestWhenInUse => {
            tracing::info!(
                task = "permission_request",
                state = permission_state.code(),
                "Requesting location permission."
            );
            location.request_when_in_use_authorization().await;
        }
        PermissionAction::Proceed => {}
        PermissionAction::ProceedWithoutLocation => {
            tracing::info!(
                task = "permission_request",
                state = permission_state.code(),
                "Location permission unavailable, continuing without it."
            );
        }
    }

    Ok(tokio::spawn(async move {
        tokio::time::sleep(config.delay).await;
        scatter(&config, location.as_ref(), map.as_ref()).await
    }))
}

/// Drops `config.marker_count` markers around the current location and recenters the map there.
pub async fn scatter<L, M>(config: &ScatterConfig, location: &L, map: &M) -> ScatterReport
where
    L: ILocationService + ?Sized,
    M: IMapSurface + ?Sized,
{
    let known_location = location.current_location().await;
    let origin = known_location.unwrap_or_else(|| {
        tracing::warn!(
            task = "scatter",
            "No user location available, scattering around the default coordinate."
        );
        GeoCoordinate::default()
    });
    if let Some(user_location) = known_location.filter(|_| config.shows_user_location) {
        map.add_item(MapItem::UserLocation(user_location)).await;
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut markers = Vec::new();
    for _ in 0..config.marker_count {
        let coordinate = geo::shift_random_position(
            origin,
            config.max_meters,
            config.randomize_distance,
            &mut rng,
        );
        tracing::debug!(
            task = "scatter",
            distance_meters = geo::distance_meters(origin, coordinate),
            bearing = geo::initial_bearing(origin, coordinate),
            "Placing marker."
        );
        let marker = Marker::new(coordinate, &config.clustering_identifier);
        map.add_item(MapItem::Marker(marker.clone())).await;
        markers.push(marker);
    }

    map.set_region(Region {
        center: origin,
        span: config.region_span,
    })
    .await;
    tracing::info!(
        task = "scatter",
        markers_count = markers.len(),
        origin_latitude = origin.latitude,
        origin_longitude = origin.longitude,
        max_meters = config.max_meters,
        "Scattered markers."
    );

    ScatterReport { origin, markers }
}
