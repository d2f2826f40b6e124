use anyhow::Context;
use clap::Parser;
use generator::profile::SimulationProfile;
use gui_bridge::bridge::{gui_bind_address, GuiBridge};
use log::warn;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use workflow::config::{MonitorConfig, DEFAULT_TICK_INTERVAL_MS};
use workflow::runner::Runner;

mod generator;
mod gui_bridge;
mod workflow;

const DEFAULT_OFFLINE_TICKS: u64 = 30;

#[derive(Parser)]
#[command(author, version, about = "Simulated patient-vitals monitor")]
struct Args {
    /// Load monitor settings from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    /// Simulation cadence in milliseconds
    #[arg(long, default_value_t = DEFAULT_TICK_INTERVAL_MS)]
    tick_ms: u64,
    /// Seed the random walk for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
    /// Stop after this many ticks
    #[arg(long)]
    ticks: Option<u64>,
    /// Step the walk back to back without a timer and print a summary
    #[arg(long, default_value_t = false)]
    offline: bool,
    /// Serve the read-only dashboard feed over HTTP
    #[arg(long, default_value_t = false)]
    serve: bool,
    #[arg(long, default_value_t = gui_bind_address())]
    bind: SocketAddr,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = if let Some(path) = args.config {
        MonitorConfig::load(path)?
    } else {
        let config = MonitorConfig::from_args(args.tick_ms, args.seed, args.ticks);
        config
            .validate()
            .context("validating command-line settings")?;
        config
    };

    let profile = SimulationProfile::from_config(&config);
    let runner = Runner::new(config.tick_interval(), profile.state);
    let metrics = runner.metrics();
    let gui_bridge = GuiBridge::new(runner.state(), config.patient.clone());

    if args.offline {
        let mut rng = profile.rng;
        let ticks = config.ticks.unwrap_or(DEFAULT_OFFLINE_TICKS);
        runner.run_offline(&mut rng, ticks);

        let counters = metrics.snapshot();
        println!(
            "Offline run -> ticks {}, errors {}, alerts raised {}",
            counters.ticks, counters.errors, counters.alerts_raised
        );
        let model = gui_bridge.snapshot();
        println!(
            "{}",
            serde_json::to_string_pretty(&model).context("rendering dashboard summary")?
        );
        return Ok(());
    }

    let serve = args.serve;
    let bind = args.bind;
    let rng = profile.rng;
    let runtime = TokioBuilder::new_current_thread()
        .enable_all()
        .build()
        .context("creating monitor runtime")?;
    runtime.block_on(async move {
        if serve {
            gui_bridge.publish_status("HTTP bridge running (Ctrl+C to stop)...");
            tokio::spawn(gui_bridge.serve(bind));
        }

        let handle = runner.spawn(rng, config.ticks);
        handle
            .run_until(async {
                if let Err(err) = signal::ctrl_c().await {
                    warn!("ctrl-c handler unavailable: {}", err);
                    std::future::pending::<()>().await;
                }
            })
            .await
    })?;

    let counters = metrics.snapshot();
    println!(
        "Monitor stopped -> ticks {}, errors {}, alerts raised {}",
        counters.ticks, counters.errors, counters.alerts_raised
    );
    Ok(())
}
