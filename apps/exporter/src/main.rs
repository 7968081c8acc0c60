#![warn(clippy::all, clippy::pedantic)]

use std::net::{IpAddr, SocketAddr};

use actix_web::{App, HttpServer, web};
use clap::Parser;
use promping::{
    ExporterConfig, ObservationSink, PingMetrics, ProbeCommand, SinkMode, ensure_installed,
    supervise,
};
use tracing::{error, info, level_filters::LevelFilter};

mod cli;
mod error;
mod routes;

use cli::Cli;
use error::AppError;

#[actix_web::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    logger::init_with(LevelFilter::INFO, &[promping::DRY_RUN_TARGET]);

    run(cli).await.inspect_err(|err| error!("{err}"))
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let config = cli.into_config()?;
    config.validate()?;
    info!("{config}");

    ensure_installed(&config.fping_path).await?;

    let metrics = PingMetrics::new()?;
    let addr = SocketAddr::new(config.bind.parse::<IpAddr>()?, config.port);
    let server = run_server(addr, metrics.clone())?;
    info!("serving metrics on http://{addr}/metrics");

    let command = ProbeCommand::new(&config.fping_path, config.interval_secs(), config.targets.clone());
    let sink = ObservationSink::new(SinkMode::from_dry_run(config.dry_run), metrics);

    run_until_first_exit(server, &command, sink, &config).await
}

fn run_server(addr: SocketAddr, metrics: PingMetrics) -> Result<actix_web::dev::Server, AppError> {
    let server = HttpServer::new(move || {
        App::new().app_data(web::Data::new(metrics.clone())).configure(routes::routes)
    })
    .workers(1)
    .bind(addr)?
    .run();

    Ok(server)
}

/// Whichever of the metrics server and the probe stream stops first ends the process.
async fn run_until_first_exit(
    server: actix_web::dev::Server,
    command: &ProbeCommand,
    sink: ObservationSink,
    config: &ExporterConfig,
) -> Result<(), AppError> {
    tokio::select! {
        result = server => {
            result?;
            info!("metrics server stopped");
            Ok(())
        }
        result = supervise(command, sink) => {
            result?;
            info!(targets = ?config.targets, "probe stopped");
            Ok(())
        }
    }
}
