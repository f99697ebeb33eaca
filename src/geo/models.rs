use serde::Serialize;
use std::f64::consts::PI;

/// A point on the globe, in degrees.
///
/// The range invariant (latitude in `[-90, 90]`, longitude in `[-180, 180]`) is the caller's
/// concern: shifting a coordinate may yield a longitude past the antimeridian.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn to_radians(self) -> (f64, f64) {
        (self.latitude * PI / 180.0, self.longitude * PI / 180.0)
    }

    pub fn from_radians(phi: f64, lambda: f64) -> Self {
        Self {
            latitude: phi * 180.0 / PI,
            longitude: lambda * 180.0 / PI,
        }
    }
}
