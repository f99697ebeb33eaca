use crate::geo::models::GeoCoordinate;
use models::{Cluster, MapItem, Marker, MarkerView, MARKER_REUSE_IDENTIFIER};

pub mod interface;
pub mod models;

/// Picks how `item` is drawn. The user's own location keeps the platform's default look.
pub fn view_for(item: &MapItem) -> Option<MarkerView> {
    match item {
        MapItem::UserLocation(_) => None,
        MapItem::Marker(marker) => Some(MarkerView {
            reuse_identifier: MARKER_REUSE_IDENTIFIER,
            clustering_identifier: Some(marker.clustering_identifier.clone()),
            coordinate: marker.coordinate,
            count: 1,
        }),
        MapItem::Cluster(cluster) => Some(MarkerView {
            reuse_identifier: MARKER_REUSE_IDENTIFIER,
            clustering_identifier: cluster
                .members
                .first()
                .map(|marker| marker.clustering_identifier.clone()),
            coordinate: cluster.coordinate,
            count: cluster.members.len(),
        }),
    }
}

/// Builds the summary marker for `members`, placed at their mean coordinate.
pub fn cluster_for_members(members: Vec<Marker>) -> Option<Cluster> {
    if members.is_empty() {
        return None;
    }
    let count = members.len() as f64;
    let (latitude_sum, longitude_sum) = members.iter().fold((0.0, 0.0), |(lat, lng), marker| {
        (lat + marker.coordinate.latitude, lng + marker.coordinate.longitude)
    });
    Some(Cluster {
        coordinate: GeoCoordinate::new(latitude_sum / count, longitude_sum / count),
        members,
    })
}
