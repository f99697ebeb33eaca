use crate::geo::models::GeoCoordinate;
use serde::Serialize;
use uuid::Uuid;

pub const MARKER_REUSE_IDENTIFIER: &str = "marker";

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    pub id: Uuid,
    pub coordinate: GeoCoordinate,
    /// Markers sharing this tag may be merged into one cluster when zoomed out.
    pub clustering_identifier: String,
}

impl Marker {
    pub fn new(coordinate: GeoCoordinate, clustering_identifier: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            coordinate,
            clustering_identifier: clustering_identifier.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    pub coordinate: GeoCoordinate,
    pub members: Vec<Marker>,
}

/// Everything the map knows how to render.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum MapItem {
    UserLocation(GeoCoordinate),
    Marker(Marker),
    Cluster(Cluster),
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Span {
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl Span {
    pub fn new(latitude_delta: f64, longitude_delta: f64) -> Self {
        Self {
            latitude_delta,
            longitude_delta,
        }
    }
}

/// The visible part of the map.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub center: GeoCoordinate,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerView {
    pub reuse_identifier: &'static str,
    pub clustering_identifier: Option<String>,
    pub coordinate: GeoCoordinate,
    /// Number of markers drawn by this view, `1` for a lone marker.
    pub count: usize,
}
