use crate::cli::Args;
use crate::map::models::Span;
use crate::scatter::config::ScatterConfig;
use crate::scatter::errors::ScatterError;
use clap::Parser;
use std::process::ExitCode;

mod app_context;
mod cli;
mod geo;
mod location;
mod logging;
mod map;
mod permissions;
mod scatter;
mod storage;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    logging::init();
    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(task = "scatter", error = %err, "Scatter failed.");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args) -> Result<(), ScatterError> {
    let app_context = app_context::init(args)?;
    let config = ScatterConfig::from_args(args);
    tracing::info!(
        markers_count = config.marker_count,
        max_meters = config.max_meters,
        randomize_distance = config.randomize_distance,
        delay_ms = args.delay_ms,
        "Map appeared."
    );

    let pending = scatter::on_appear(
        config,
        app_context.location.clone(),
        app_context.map.clone(),
    )
    .await?;
    let report = pending.await?;
    tracing::debug!(
        permission_requests = app_context.location.request_count(),
        "Deferred scatter finished."
    );

    let snapshot = app_context
        .snapshot(report, Span::new(args.cluster_span, args.cluster_span))
        .await;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
