//! tramline — end-to-end demo for the hubsim accessibility simulator.
//!
//! Simulates 300 agents heading for Central Station across a synthetic
//! coastal town, with and without a proposed Pier–Boscombe tramline, at
//! normal and congested traffic.  Swap `build_town()` for a real OSM-loaded
//! network to run at city scale.

mod network;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

use hub_core::TravelMode;
use hub_graph::{ScenarioSpec, StopRef, TrafficLevel};
use hub_output::{CsvReport, write_stats_json};
use hub_pop::ModeWeights;
use hub_sim::{ComparisonOutcome, RunConfig, run};
use hub_stats::Stats;

use network::{build_town, stop_coords};

// ── Constants ─────────────────────────────────────────────────────────────────

const AGENT_COUNT: usize = 300;
const SEED:        u64   = 42;
const TRAM_STOPS:  [&str; 2] = ["Pier", "Boscombe"];
const TRAM_SEGMENT_M: f64 = 300.0;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    println!("=== tramline — hubsim accessibility demo ===");
    println!("Agents: {AGENT_COUNT}  |  Seed: {SEED}  |  Tramline: {TRAM_STOPS:?}");
    println!();

    // 1. "Load" the city (synthetic stand-in for the OSM collaborator).
    let town = build_town();
    println!(
        "Town network: {} nodes, {} directed edges",
        town.node_count(),
        town.edge_count()
    );

    // 2. Geocode the hub and tram stops via the registry.
    let hub = stop_coords("Central Station").context("hub not in stop registry")?;
    let stops: Vec<StopRef> = TRAM_STOPS
        .iter()
        .map(|name| {
            stop_coords(name)
                .map(StopRef::Point)
                .with_context(|| format!("tram stop {name:?} not in stop registry"))
        })
        .collect::<Result<_>>()?;

    // 3. One run per traffic regime.
    for traffic in [TrafficLevel::Normal, TrafficLevel::Congested] {
        let config = RunConfig {
            city: "Coastal Town".to_owned(),
            hub: StopRef::Point(hub),
            agent_count: AGENT_COUNT,
            weights: ModeWeights { walk: 30.0, cycle: 20.0, drive: 30.0, tram: 20.0 },
            scenario: ScenarioSpec::new(stops.clone(), TRAM_SEGMENT_M),
            traffic,
            seed: SEED,
            cost: Default::default(),
        };

        info!("starting {traffic} run");
        let outcome = run(&config, &town)?;

        println!();
        println!("─── traffic: {traffic} ───");
        print_comparison(&outcome);

        let dir = PathBuf::from(format!("output/tramline/{traffic}"));
        export(&dir, &outcome)?;
        println!("results written to {}", dir.display());
    }

    Ok(())
}

// ── Reporting helpers ─────────────────────────────────────────────────────────

fn print_comparison(outcome: &ComparisonOutcome) {
    println!(
        "{:<8} {:>9} {:>11} {:>11} | {:>9} {:>11} {:>11}",
        "mode", "base n", "base avg", "base max", "scen n", "scen avg", "scen max"
    );
    println!("{}", "-".repeat(78));
    for mode in TravelMode::ALL {
        let b = outcome.baseline.stats.mode(mode);
        let s = outcome.scenario.stats.mode(mode);
        println!(
            "{:<8} {:>9} {:>11} {:>11} | {:>9} {:>11} {:>11}",
            mode.as_str(),
            b.total,
            fmt_m(b.avg_m()),
            fmt_m(b.max_m()),
            s.total,
            fmt_m(s.avg_m()),
            fmt_m(s.max_m()),
        );
    }
    println!("{}", "-".repeat(78));
    print_overall("baseline", &outcome.baseline.stats);
    print_overall("scenario", &outcome.scenario.stats);
}

fn print_overall(label: &str, stats: &Stats) {
    println!(
        "{label}: {} agents, {} unreachable, avg {}, max {}",
        stats.overall.total,
        stats.overall.unreachable,
        fmt_m(stats.overall.avg_m()),
        fmt_m(stats.overall.max_m()),
    );
}

fn fmt_m(v: Option<f64>) -> String {
    match v {
        Some(m) => format!("{m:.0} m"),
        None    => "—".to_owned(),
    }
}

fn export(dir: &Path, outcome: &ComparisonOutcome) -> Result<()> {
    for (name, result) in [("baseline", &outcome.baseline), ("scenario", &outcome.scenario)] {
        let run_dir = dir.join(name);
        std::fs::create_dir_all(&run_dir)?;

        let mut report = CsvReport::new(&run_dir)?;
        report.write_agents(&result.agents)?;
        report.write_access_map(&result.access_map)?;
        report.finish()?;

        write_stats_json(&run_dir.join("stats.json"), &result.stats)?;
    }
    Ok(())
}
