use crate::geo::models::GeoCoordinate;
use crate::map::models::Marker;

#[derive(Clone, Debug)]
pub struct ScatterReport {
    /// The location the markers were scattered around, `(0, 0)` when none was known.
    pub origin: GeoCoordinate,
    pub markers: Vec<Marker>,
}
