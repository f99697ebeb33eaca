use crate::cli::Args;
use crate::map::models::Span;
use crate::scatter::consts::{
    DEFAULT_CLUSTERING_IDENTIFIER, DEFAULT_DELAY, DEFAULT_MARKER_COUNT, DEFAULT_MAX_METERS,
};
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct ScatterConfig {
    pub marker_count: usize,
    pub max_meters: f64,
    pub randomize_distance: bool,
    /// How long after the map appears the markers are dropped.
    pub delay: Duration,
    pub clustering_identifier: String,
    /// Span of the region the map is recentered to once the markers are placed.
    pub region_span: Span,
    pub shows_user_location: bool,
    /// Fixes the random source; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl ScatterConfig {
    pub fn from_args(args: &Args) -> Self {
        Self {
            marker_count: args.marker_count,
            max_meters: args.max_meters,
            randomize_distance: !args.fixed_distance,
            delay: Duration::from_millis(args.delay_ms),
            clustering_identifier: args.clustering_identifier.clone(),
            region_span: Span::default(),
            shows_user_location: !args.hide_user_location,
            seed: args.seed,
        }
    }
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            marker_count: DEFAULT_MARKER_COUNT,
            max_meters: DEFAULT_MAX_METERS,
            randomize_distance: true,
            delay: DEFAULT_DELAY,
            clustering_identifier: DEFAULT_CLUSTERING_IDENTIFIER.to_string(),
            region_span: Span::default(),
            shows_user_location: true,
            seed: None,
        }
    }
}
