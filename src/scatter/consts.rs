use std::time::Duration;

pub const DEFAULT_MARKER_COUNT: usize = 21;
pub const MAX_MARKER_COUNT: usize = 100_000;
pub const DEFAULT_MAX_METERS: f64 = 30_000.0;
pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);
pub const DEFAULT_CLUSTERING_IDENTIFIER: &str = "identifier";
