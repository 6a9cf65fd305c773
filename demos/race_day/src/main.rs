//! Race Day Example
//!
//! Runs a full race day with gallop: generates the horse pool, builds the
//! schedule and drives every round to the finish line, printing the
//! standings after each round.
//!
//! Usage: `race_day [config.ron] [--realtime]`

use gallop_core::{
    lap_text, ordinal, round_heading, ControlAction, RaceConfig, RaceEngine, RaceResult,
};
use gallop_driver::{DriverConfig, TickDriver};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// Configuration file layout
#[derive(Debug, Default, Deserialize)]
struct RaceDayConfig {
    #[serde(default)]
    race: RaceConfig,
    #[serde(default)]
    driver: DriverConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let mut realtime = false;
    let mut config_path = None;
    for arg in std::env::args().skip(1) {
        if arg == "--realtime" {
            realtime = true;
        } else {
            config_path = Some(arg);
        }
    }

    let config = load_config(config_path.as_deref())?;
    info!(?config, realtime, "starting race day");

    println!("=== Gallop Race Day ===\n");

    let mut engine = RaceEngine::new(config.race);
    engine.initialize();

    println!("Horses:");
    for horse in engine.horses() {
        println!(
            "  {:>2}  {:<22} {}  condition {}",
            horse.id.raw(),
            horse.name,
            horse.color,
            horse.condition
        );
    }

    if engine.schedule().is_empty() {
        println!("\nNothing scheduled.");
        return Ok(());
    }

    println!("\nSchedule:");
    for entry in engine.schedule() {
        println!("  {}", round_heading(i64::from(entry.round), entry.distance));
        let names: Vec<&str> = entry.participants.iter().map(|h| h.name.as_str()).collect();
        println!("    {}", names.join(", "));
    }

    let mut driver = TickDriver::new(&config.driver);
    while let Some(ControlAction::Start | ControlAction::NextRound) = engine.press_control() {
        if let Some(current) = engine.current() {
            println!("\n{}", lap_text(i64::from(current.round), current.distance));
        }

        let ticks = if realtime {
            driver.run_round(&mut engine)?
        } else {
            driver.fast_forward(&mut engine)?
        };

        match engine.results().last() {
            Some(result) => print_result(result, ticks),
            None => break,
        }
    }

    println!("\n=== Race Day Complete ({} rounds) ===", engine.results().len());
    Ok(())
}

fn load_config(path: Option<&str>) -> Result<RaceDayConfig, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        return read_config(Path::new(path));
    }

    let candidates = ["demos/race_day/data/race_day.ron", "data/race_day.ron"];
    for candidate in candidates {
        let path = Path::new(candidate);
        if path.exists() {
            return read_config(path);
        }
    }

    Ok(RaceDayConfig::default())
}

fn read_config(path: &Path) -> Result<RaceDayConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    Ok(ron::from_str(&content)?)
}

fn print_result(result: &RaceResult, ticks: u64) {
    println!("  finished after {} ticks", ticks);
    for entry in &result.results {
        println!(
            "  {:>4}  {:<22} {}",
            ordinal(i64::from(entry.position)),
            entry.name,
            entry.color
        );
    }
}
