/// Mean Earth radius used for every angular-distance conversion, in meters.
pub const EARTH_RADIUS: f64 = 6_372_797.6;
