pub const DEFAULT_LOG_DIRECTIVE: &str = "marker_scatter=info";
