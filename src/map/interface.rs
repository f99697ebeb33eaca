use crate::map::models::{MapItem, Region};
use async_trait::async_trait;

/// The map widget owned by the host platform.
#[async_trait]
pub trait IMapSurface: Send + Sync {
    async fn add_item(&self, item: MapItem);

    async fn set_region(&self, region: Region);

    async fn items(&self) -> Vec<MapItem>;

    async fn region(&self) -> Option<Region>;
}
