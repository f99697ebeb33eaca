use consts::EARTH_RADIUS;
use models::GeoCoordinate;
use rand::Rng;
use std::f64::consts::PI;

pub mod consts;
pub mod models;

/// Moves `origin` by `distance_meters` along the great circle leaving it at `bearing` radians.
///
/// Negative distances travel in the opposite direction. The resulting longitude is not wrapped
/// back into `[-180, 180]`.
pub fn shift(origin: GeoCoordinate, distance_meters: f64, bearing: f64) -> GeoCoordinate {
    let delta = distance_meters / EARTH_RADIUS;
    let (phi_1, lambda_1) = origin.to_radians();
    let phi_2 = (phi_1.sin() * delta.cos() + phi_1.cos() * delta.sin() * bearing.cos()).asin();
    let lambda_2 = lambda_1
        + (bearing.sin() * delta.sin() * phi_1.cos())
            .atan2(delta.cos() - phi_1.sin() * phi_2.sin());
    GeoCoordinate::from_radians(phi_2, lambda_2)
}

/// Moves `origin` in a random direction, either by exactly `max_meters` or by a signed distance
/// drawn from `[-max_meters, max_meters)` when `randomize_distance` is set.
pub fn shift_random_position<R: Rng + ?Sized>(
    origin: GeoCoordinate,
    max_meters: f64,
    randomize_distance: bool,
    rng: &mut R,
) -> GeoCoordinate {
    let bearing = rng.gen_range(-PI..PI);
    let distance = draw_distance(max_meters, randomize_distance, rng);
    shift(origin, distance, bearing)
}

pub fn draw_distance<R: Rng + ?Sized>(
    max_meters: f64,
    randomize_distance: bool,
    rng: &mut R,
) -> f64 {
    if !randomize_distance {
        return max_meters;
    }
    let bound = max_meters.abs();
    // `gen_range` panics on an empty or unbounded interval.
    if bound > 0.0 && bound.is_finite() {
        rng.gen_range(-bound..bound)
    } else {
        0.0
    }
}

/// Haversine distance between two coordinates, in meters.
pub fn distance_meters(from: GeoCoordinate, to: GeoCoordinate) -> f64 {
    let (phi_1, lambda_1) = from.to_radians();
    let (phi_2, lambda_2) = to.to_radians();
    let delta_phi = phi_2 - phi_1;
    let delta_lambda = lambda_2 - lambda_1;
    let a = (delta_phi / 2.0).sin().powi(2)
        + phi_1.cos() * phi_2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * (a.sqrt().atan2((1.0 - a).sqrt()));
    EARTH_RADIUS * c
}

/// Forward azimuth from `from` towards `to`, in radians within `(-π, π]`.
pub fn initial_bearing(from: GeoCoordinate, to: GeoCoordinate) -> f64 {
    let (phi_1, lambda_1) = from.to_radians();
    let (phi_2, lambda_2) = to.to_radians();
    let delta_lambda = lambda_2 - lambda_1;
    let y = delta_lambda.sin() * phi_2.cos();
    let x = phi_1.cos() * phi_2.sin() - phi_1.sin() * phi_2.cos() * delta_lambda.cos();
    y.atan2(x)
}
