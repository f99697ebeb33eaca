use crate::geo::distance_meters;
use crate::geo::models::GeoCoordinate;
use crate::map::interface::IMapSurface;
use crate::map::models::{MapItem, Span};
use crate::permissions::errors::PermissionError;
use crate::permissions::models::PermissionState;
use crate::scatter::config::ScatterConfig;
use crate::scatter::{on_appear, scatter};
use crate::storage::location::SimulatedLocationService;
use crate::storage::map::InMemoryMapSurface;
use std::sync::Arc;
use std::time::Duration;

fn berlin() -> GeoCoordinate {
    GeoCoordinate::new(52.52, 13.405)
}

fn immediate_config() -> ScatterConfig {
    ScatterConfig {
        delay: Duration::ZERO,
        seed: Some(21),
        ..ScatterConfig::default()
    }
}

fn granted_service() -> Arc<SimulatedLocationService> {
    Arc::new(SimulatedLocationService::new(
        Some(berlin()),
        "authorizedWhenInUse",
        PermissionState::AuthorizedWhenInUse,
    ))
}

fn markers_on(items: &[MapItem]) -> usize {
    items
        .iter()
        .filter(|item| matches!(item, MapItem::Marker(_)))
        .count()
}

#[tokio::test]
async fn test_batch_of_distinct_markers_within_range() {
    let location = granted_service();
    let map = Arc::new(InMemoryMapSurface::default());

    let report = on_appear(immediate_config(), location, map.clone())
        .await
        .expect("Authorized state must be accepted.")
        .await
        .expect("Deferred scatter failed.");

    assert_eq!(report.origin, berlin());
    assert_eq!(report.markers.len(), 21);
    for (index, marker) in report.markers.iter().enumerate() {
        assert!(distance_meters(berlin(), marker.coordinate) <= 30_000.0 + 1e-3);
        assert_eq!(marker.clustering_identifier, "identifier");
        assert!(report.markers[index + 1..]
            .iter()
            .all(|other| other.coordinate != marker.coordinate));
    }
    assert_eq!(markers_on(&map.items().await), 21);
}

#[tokio::test]
async fn test_region_is_centered_on_origin() {
    let map = Arc::new(InMemoryMapSurface::default());

    on_appear(immediate_config(), granted_service(), map.clone())
        .await
        .expect("Authorized state must be accepted.")
        .await
        .expect("Deferred scatter failed.");

    let region = map.region().await.expect("Region was never set.");
    assert_eq!(region.center, berlin());
    assert_eq!(region.span, Span::default());
}

#[tokio::test]
async fn test_user_location_is_shown_when_known() {
    let map = Arc::new(InMemoryMapSurface::default());

    on_appear(immediate_config(), granted_service(), map.clone())
        .await
        .expect("Authorized state must be accepted.")
        .await
        .expect("Deferred scatter failed.");

    let items = map.items().await;
    assert_eq!(items.len(), 22);
    assert_eq!(items[0], MapItem::UserLocation(berlin()));
}

#[tokio::test]
async fn test_user_location_can_be_hidden() {
    let map = Arc::new(InMemoryMapSurface::default());
    let config = ScatterConfig {
        shows_user_location: false,
        ..immediate_config()
    };

    let report = on_appear(config, granted_service(), map.clone())
        .await
        .expect("Authorized state must be accepted.")
        .await
        .expect("Deferred scatter failed.");

    let items = map.items().await;
    assert_eq!(report.origin, berlin());
    assert_eq!(items.len(), 21);
    assert!(!items
        .iter()
        .any(|item| matches!(item, MapItem::UserLocation(_))));
}

#[tokio::test]
async fn test_undetermined_permission_is_requested_once() {
    let location = Arc::new(SimulatedLocationService::new(
        Some(berlin()),
        "notDetermined",
        PermissionState::AuthorizedWhenInUse,
    ));
    let map = Arc::new(InMemoryMapSurface::default());

    let report = on_appear(immediate_config(), location.clone(), map)
        .await
        .expect("Undetermined state must be accepted.")
        .await
        .expect("Deferred scatter failed.");

    assert_eq!(location.request_count(), 1);
    assert_eq!(report.origin, berlin());
}

#[tokio::test]
async fn test_denied_permission_scatters_around_default_location() {
    let location = Arc::new(SimulatedLocationService::new(
        Some(berlin()),
        "denied",
        PermissionState::AuthorizedWhenInUse,
    ));
    let map = Arc::new(InMemoryMapSurface::default());

    let report = on_appear(immediate_config(), location.clone(), map.clone())
        .await
        .expect("Denied state must be accepted.")
        .await
        .expect("Deferred scatter failed.");

    assert_eq!(location.request_count(), 0);
    assert_eq!(report.origin, GeoCoordinate::default());
    let items = map.items().await;
    assert_eq!(markers_on(&items), 21);
    assert!(!items
        .iter()
        .any(|item| matches!(item, MapItem::UserLocation(_))));
}

#[tokio::test]
async fn test_unsupported_permission_schedules_nothing() {
    let location = Arc::new(SimulatedLocationService::new(
        Some(berlin()),
        "provisional",
        PermissionState::AuthorizedWhenInUse,
    ));
    let map = Arc::new(InMemoryMapSurface::default());

    let result = on_appear(immediate_config(), location.clone(), map.clone()).await;

    assert_eq!(
        result.err(),
        Some(PermissionError::UnsupportedPermissionState(String::from(
            "provisional"
        )))
    );
    assert_eq!(location.request_count(), 0);
    assert!(map.items().await.is_empty());
}

#[tokio::test]
async fn test_markers_wait_for_the_delay() {
    let map = Arc::new(InMemoryMapSurface::default());
    let config = ScatterConfig {
        delay: Duration::from_millis(300),
        ..immediate_config()
    };

    let handle = on_appear(config, granted_service(), map.clone())
        .await
        .expect("Authorized state must be accepted.");

    assert!(map.items().await.is_empty());
    assert!(map.region().await.is_none());
    handle.await.expect("Deferred scatter failed.");
    assert_eq!(markers_on(&map.items().await), 21);
}

#[tokio::test]
async fn test_same_seed_same_markers() {
    let config = immediate_config();
    let location = granted_service();

    let first = scatter(&config, location.as_ref(), &InMemoryMapSurface::default()).await;
    let second = scatter(&config, location.as_ref(), &InMemoryMapSurface::default()).await;

    let coordinates = |report: &crate::scatter::models::ScatterReport| {
        report
            .markers
            .iter()
            .map(|marker| marker.coordinate)
            .collect::<Vec<_>>()
    };
    assert_eq!(coordinates(&first), coordinates(&second));
}

#[tokio::test]
async fn test_fixed_distance_places_markers_on_a_circle() {
    let config = ScatterConfig {
        randomize_distance: false,
        max_meters: 1_000.0,
        ..immediate_config()
    };

    let report = scatter(&config, granted_service().as_ref(), &InMemoryMapSurface::default()).await;

    for marker in report.markers {
        assert!((distance_meters(berlin(), marker.coordinate) - 1_000.0).abs() < 1e-3);
    }
}
