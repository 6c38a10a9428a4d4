//! simnautica — interactive maritime simulation.
//!
//! ```text
//! simnautica ports.txt
//! simnautica ports.txt --trace-dir ./trace --dock-tolerance 0.5
//! RUST_LOG=debug simnautica ports.txt
//! ```

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use simnautica::{Controller, load_world};
use sn_core::SimConfig;
use sn_output::{CsvWriter, TraceObserver};
use sn_sim::NoopObserver;

#[derive(Parser, Debug)]
#[command(author, version, about = "Ports, freighters, patrol boats and pirates on an hourly tick")]
struct Cli {
    /// Port file: one `<name> (<x>, <y>) <initialFuel> <fuelRate>` per line.
    port_file: PathBuf,

    /// Do not create the default home port (Nagoya).
    #[arg(long)]
    no_home_port: bool,

    /// How close, in nm, a freighter must be to a port to dock immediately.
    #[arg(long, value_name = "NM", default_value_t = 0.1)]
    dock_tolerance: f64,

    /// Write a per-tick CSV trace of every vessel into this directory.
    #[arg(long, value_name = "DIR")]
    trace_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = SimConfig {
        dock_tolerance_nm: cli.dock_tolerance,
        ..SimConfig::default()
    };
    if cli.no_home_port {
        config.home_port = None;
    }
    let world = load_world(&cli.port_file, config)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();

    match cli.trace_dir {
        Some(dir) => {
            let writer = CsvWriter::new(&dir)
                .with_context(|| format!("failed to create trace files in {}", dir.display()))?;
            let mut controller = Controller::new(world, TraceObserver::new(writer));
            controller.run(stdin.lock(), &mut stdout, &mut stderr)?;
            controller
                .into_observer()
                .finish()
                .with_context(|| format!("failed to write trace to {}", dir.display()))?;
        }
        None => {
            let mut controller = Controller::new(world, NoopObserver);
            controller.run(stdin.lock(), &mut stdout, &mut stderr)?;
        }
    }
    Ok(())
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
