use crate::scatter::consts::{
    DEFAULT_CLUSTERING_IDENTIFIER, DEFAULT_MARKER_COUNT, DEFAULT_MAX_METERS, MAX_MARKER_COUNT,
};
use clap::Parser;

/// Scatters random markers around a simulated user location and prints the resulting map.
#[derive(Debug, Parser)]
pub struct Args {
    /// Latitude of the simulated user location. Without it the host never gets a fix.
    #[arg(long, requires = "longitude", allow_negative_numbers = true)]
    pub latitude: Option<f64>,
    #[arg(long, requires = "latitude", allow_negative_numbers = true)]
    pub longitude: Option<f64>,
    /// Location permission code the host reports on startup.
    #[arg(long)]
    #[arg(default_value = "notDetermined")]
    pub permission: String,
    /// Code the simulated user answers the permission prompt with.
    #[arg(long)]
    #[arg(default_value = "authorizedWhenInUse")]
    pub permission_response: String,
    #[arg(long, value_parser = parse_marker_count)]
    #[arg(default_value_t = DEFAULT_MARKER_COUNT)]
    pub marker_count: usize,
    #[arg(long, value_parser = parse_max_meters, allow_negative_numbers = true)]
    #[arg(default_value_t = DEFAULT_MAX_METERS)]
    pub max_meters: f64,
    /// Place every marker exactly `max_meters` away instead of drawing the distance.
    #[arg(long)]
    pub fixed_distance: bool,
    #[arg(long)]
    #[arg(default_value_t = 1000)]
    pub delay_ms: u64,
    #[arg(long)]
    #[arg(default_value = DEFAULT_CLUSTERING_IDENTIFIER)]
    pub clustering_identifier: String,
    #[arg(long)]
    pub seed: Option<u64>,
    /// Keep the user's own location off the map.
    #[arg(long)]
    pub hide_user_location: bool,
    /// Visible span, in degrees, used when printing the clustered view of the map.
    #[arg(long)]
    #[arg(default_value_t = 1.0)]
    pub cluster_span: f64,
}

fn parse_marker_count(raw: &str) -> Result<usize, String> {
    let count: usize = raw.parse().map_err(|err| format!("{err}"))?;
    if count <= MAX_MARKER_COUNT {
        Ok(count)
    } else {
        Err(format!("at most {MAX_MARKER_COUNT} markers can be scattered"))
    }
}

fn parse_max_meters(raw: &str) -> Result<f64, String> {
    let meters: f64 = raw.parse().map_err(|err| format!("{err}"))?;
    if meters.is_finite() && meters >= 0.0 {
        Ok(meters)
    } else {
        Err(String::from("must be a finite, non-negative number of meters"))
    }
}
