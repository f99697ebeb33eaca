use crate::map::cluster_for_members;
use crate::map::interface::IMapSurface;
use crate::map::models::{MapItem, Marker, Region, Span};
use crate::storage::consts::GRID_CELLS_PER_SPAN;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Debug, Default)]
struct MapState {
    items: Vec<MapItem>,
    region: Option<Region>,
}

#[derive(Clone, Default)]
pub struct InMemoryMapSurface {
    storage: Arc<RwLock<MapState>>,
}

impl InMemoryMapSurface {
    /// What the map would draw with `span` visible: markers close enough to share a grid cell
    /// (and a clustering identifier) are merged into one cluster.
    pub async fn clusters_at(&self, span: Span) -> Vec<MapItem> {
        group_by_cell(self.items().await, span)
    }
}

#[async_trait]
impl IMapSurface for InMemoryMapSurface {
    async fn add_item(&self, item: MapItem) {
        self.storage.write().await.items.push(item);
    }

    async fn set_region(&self, region: Region) {
        self.storage.write().await.region = Some(region);
    }

    async fn items(&self) -> Vec<MapItem> {
        self.storage.read().await.items.clone()
    }

    async fn region(&self) -> Option<Region> {
        self.storage.read().await.region
    }
}

pub fn group_by_cell(items: Vec<MapItem>, span: Span) -> Vec<MapItem> {
    // Fully zoomed in, nothing overlaps.
    if !(span.latitude_delta > 0.0 && span.longitude_delta > 0.0) {
        return items;
    }
    let cell_height = span.latitude_delta / GRID_CELLS_PER_SPAN;
    let cell_width = span.longitude_delta / GRID_CELLS_PER_SPAN;

    let mut grouped = Vec::new();
    let mut cells: BTreeMap<(String, i64, i64), Vec<Marker>> = BTreeMap::new();
    for item in items {
        match item {
            MapItem::Marker(marker) => {
                let row = (marker.coordinate.latitude / cell_height).floor() as i64;
                let column = (marker.coordinate.longitude / cell_width).floor() as i64;
                cells
                    .entry((marker.clustering_identifier.clone(), row, column))
                    .or_default()
                    .push(marker);
            }
            other => grouped.push(other),
        }
    }
    for (_cell, mut members) in cells {
        if members.len() == 1 {
            grouped.push(MapItem::Marker(members.remove(0)));
        } else if let Some(cluster) = cluster_for_members(members) {
            grouped.push(MapItem::Cluster(cluster));
        }
    }
    grouped
}
