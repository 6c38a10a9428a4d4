//! Building the initial world.

use std::path::Path;

use anyhow::{Context, Result};
use sn_core::SimConfig;
use sn_loader::{load_ports_file, register_ports};
use sn_sim::World;
use tracing::info;

/// Create a world from `config` and register every port in `port_file`.
pub fn load_world(port_file: &Path, config: SimConfig) -> Result<World> {
    let max_name_len = config.max_name_len;
    let mut world = World::with_config(config).context("invalid simulation settings")?;
    let records = load_ports_file(port_file, max_name_len)?;
    register_ports(&mut world, &records)
        .with_context(|| format!("failed to register ports from {}", port_file.display()))?;
    info!(ports = world.ports().len(), "world ready");
    Ok(world)
}
