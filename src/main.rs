//! garpd - Entry point.
//!
//! Runs one announcement pass over the eligible interfaces (or the
//! configured subset), sending a gratuitous ARP for every IPv4 address, and
//! optionally repeats on a fixed interval.

use std::borrow::Cow;
use std::thread;

use anyhow::{Context, Result, bail};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use garpd::config::Config;
use garpd::network::{
    PnetTransmitter, announce_interface, eligible_interfaces, host_interfaces, named_interfaces,
};

/// Run one announcement pass over the host's interfaces.
///
/// Failures are per-interface: a down or unwritable interface is logged and
/// the pass moves on to the next one. The pass as a whole fails if any
/// interface did.
fn announce_pass(config: &Config) -> Result<()> {
    let snapshot = host_interfaces();
    let candidates = if config.interfaces.is_empty() {
        snapshot
    } else {
        named_interfaces(&snapshot, &config.interfaces)
            .context("failed to resolve configured interfaces")?
    };

    let eligible =
        eligible_interfaces(&candidates).context("failed to select eligible interfaces")?;
    if eligible.is_empty() {
        warn!("no eligible interfaces found");
        return Ok(());
    }

    let transmitter = PnetTransmitter;
    let mut failed = 0;
    for iface in &eligible {
        let result = announce_interface(iface, &transmitter, |announcement| {
            info!(
                interface = %announcement.interface,
                hwaddr = %announcement.hwaddr,
                ip = %announcement.ip,
                "gratuitous ARP sent"
            );
        });
        if let Err(err) = result {
            failed += 1;
            error!(interface = %iface.name, "announcement failed: {err}");
        }
    }

    if failed > 0 {
        bail!("{failed} interface(s) failed to announce");
    }
    Ok(())
}

fn run() -> Result<()> {
    let config_path = std::env::var("CONFIG_PATH")
        .map(Cow::Owned)
        .unwrap_or(Cow::Borrowed("config.toml"));
    let config = Config::load(config_path.as_ref()).context("Failed to load configuration")?;

    info!("Starting garpd...");
    if config.interfaces.is_empty() {
        info!("Announcing on every eligible interface");
    } else {
        info!("Announcing on: {}", config.interfaces.join(", "));
    }

    loop {
        announce_pass(&config)?;

        match config.repeat_interval() {
            Some(interval) => thread::sleep(interval),
            None => break,
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    run()
}
