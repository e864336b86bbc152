//! Headless arena runner.
//!
//! Loads content, runs the simulation loop on its own thread, and prints a
//! status report from the main thread until the configured run time ends.
mod config;
mod report;

use std::thread;
use std::time::Instant;

use anyhow::Result;
use config::CliConfig;
use mech_content::ContentFactory;
use mech_core::EquipmentSlot;
use mech_runtime::{Runtime, RuntimeConfig, RuntimeHandle};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = CliConfig::from_env();
    let factory = ContentFactory::new(&config.data_dir);
    let game_config = factory.load_config()?;
    let catalog = factory.load_catalog()?;
    tracing::info!(
        "Loaded {} item templates and {} bosses from {}",
        catalog.items().len(),
        catalog.boss_count(),
        factory.data_dir().display()
    );

    let mut runtime_config = RuntimeConfig {
        game_config,
        ..RuntimeConfig::default()
    };
    if let Some(interval) = config.tick_interval {
        runtime_config.tick_interval = interval;
    }

    let mut builder = Runtime::builder()
        .config(runtime_config)
        .catalog(catalog)
        .pilot_name(config.pilot_name.clone());
    if let Some(archetype) = config.archetype {
        builder = builder.archetype(archetype);
    }
    let runtime = builder.build();
    let handle = runtime.handle();

    runtime.start()?;
    let started = Instant::now();
    let mut seen: u64 = 0;

    while started.elapsed() < config.run_for {
        thread::sleep(config.report_every);

        if config.auto_equip {
            auto_equip(&handle)?;
        }

        let snapshot = handle.snapshot()?;
        let fresh = fresh_entries(seen, snapshot.log_total, &snapshot.log);
        print!("{}", report::render(&snapshot, fresh));
        seen = snapshot.log_total;
    }

    runtime.stop()?;
    let snapshot = handle.snapshot()?;
    println!(
        "Stopped on floor {} after {:.1}s.",
        snapshot.floor,
        started.elapsed().as_secs_f64()
    );
    Ok(())
}

/// Equips the first wearable, usable item for every empty slot.
fn auto_equip(handle: &RuntimeHandle) -> Result<()> {
    loop {
        let snapshot = handle.snapshot()?;
        let candidate = snapshot.inventory.iter().find(|entry| {
            entry.slot != EquipmentSlot::None
                && entry.meets_requirement
                && !snapshot.player.equipment.contains_key(&entry.slot)
        });
        let Some(entry) = candidate else {
            return Ok(());
        };
        let receipt = handle.equip_from_inventory(entry.index)?;
        tracing::info!("Auto-equipped {} into {}", receipt.equipped, receipt.slot);
    }
}

/// Tail of `log` pushed after the first `seen` of `total` entries. Lines
/// already evicted from the bounded log are skipped.
fn fresh_entries(seen: u64, total: u64, log: &[String]) -> &[String] {
    let added = usize::try_from(total.saturating_sub(seen)).unwrap_or(usize::MAX);
    &log[log.len().saturating_sub(added)..]
}
