//! The simulation driver: baseline vs. scenario, one call.

use log::{debug, info, warn};
use rustc_hash::FxHashMap;

use hub_core::NodeId;
use hub_graph::{CityGraph, CityGraphBuilder, apply_scenario, adjust_for_traffic, resolve_stop};
use hub_pop::{Agent, PopulationGenerator};
use hub_stats::Stats;

use crate::config::RunConfig;
use crate::error::SimResult;

/// `home node → reachable distance (metres)`, for the rendering
/// collaborator.  Only active agents appear; when several agents share a
/// home node the map keeps the distance of the last one inserted.
pub type AccessMap = FxHashMap<NodeId, f64>;

// ── Outcome types ─────────────────────────────────────────────────────────────

/// Everything produced by one population run against one frozen graph.
pub struct RunOutcome {
    /// Overall and per-mode accessibility aggregates.
    pub stats: Stats,

    /// The routed population, each agent in terminal status.
    pub agents: Vec<Agent>,

    /// Reachable distances keyed by home node.
    pub access_map: AccessMap,

    /// Resolved scenario stop nodes (empty for the baseline run) — the
    /// endpoints of the inserted tram segments.
    pub tram_stops: Vec<NodeId>,
}

/// The pair of results a caller compares.
pub struct ComparisonOutcome {
    pub baseline: RunOutcome,
    pub scenario: RunOutcome,
}

// ── Driver ────────────────────────────────────────────────────────────────────

/// Run the full baseline/scenario comparison.
///
/// `city` is the graph as delivered by the external network loader; it is
/// never mutated — both runs work on clones.  Fatal failures (hub or stop
/// resolution, degenerate weights) return with no partial output.
pub fn run(config: &RunConfig, city: &CityGraphBuilder) -> SimResult<ComparisonOutcome> {
    info!(
        "run: city={} agents={} traffic={} seed={}",
        config.city, config.agent_count, config.traffic, config.seed
    );

    // ── Mutation phase ────────────────────────────────────────────────────
    //
    // All graph mutation happens here, on builders; freezing is the
    // happens-before boundary ahead of any route planning.
    let mut base_builder = city.clone();
    adjust_for_traffic(&mut base_builder, config.traffic, &config.cost);

    // The scenario branches off the traffic-adjusted baseline.
    let mut scenario_builder = base_builder.clone();

    let baseline_graph = base_builder.freeze();
    let hub = resolve_stop(&baseline_graph, &config.hub)?;

    let component_len = baseline_graph.component_of(hub).len();
    if component_len * 2 < baseline_graph.node_count() {
        // Usually a sign the hub snapped to a stray sub-network.
        warn!(
            "hub {hub} sits in a component of {component_len}/{} nodes",
            baseline_graph.node_count()
        );
    }

    let tram_stops = apply_scenario(&mut scenario_builder, &config.scenario, &baseline_graph)?;
    let scenario_graph = scenario_builder.freeze();
    debug!(
        "graphs frozen: baseline {} edges, scenario {} edges, {} tram stops",
        baseline_graph.edge_count(),
        scenario_graph.edge_count(),
        tram_stops.len()
    );

    // ── Planning phase ────────────────────────────────────────────────────
    //
    // Two independent runs over two immutable graphs.
    #[cfg(feature = "parallel")]
    let (baseline, scenario) = rayon::join(
        || run_population(config, &baseline_graph, hub, Vec::new()),
        || run_population(config, &scenario_graph, hub, tram_stops),
    );

    #[cfg(not(feature = "parallel"))]
    let (baseline, scenario) = (
        run_population(config, &baseline_graph, hub, Vec::new()),
        run_population(config, &scenario_graph, hub, tram_stops),
    );

    let baseline = baseline?;
    let scenario = scenario?;

    info!(
        "run complete: baseline {}/{} reachable, scenario {}/{} reachable",
        baseline.stats.overall.reachable_count(),
        baseline.stats.overall.total,
        scenario.stats.overall.reachable_count(),
        scenario.stats.overall.total,
    );

    Ok(ComparisonOutcome { baseline, scenario })
}

/// Generate, plan, and aggregate one population against one frozen graph.
fn run_population(
    config:     &RunConfig,
    graph:      &CityGraph,
    hub:        NodeId,
    tram_stops: Vec<NodeId>,
) -> SimResult<RunOutcome> {
    let generator = PopulationGenerator::new(
        graph,
        hub,
        tram_stops.clone(),
        &config.weights,
        config.cost,
        config.seed,
    )?;
    let agents = generator.generate(config.agent_count);
    let stats = Stats::aggregate(&agents);

    let mut access_map = AccessMap::default();
    for agent in agents.iter().filter(|a| a.is_reachable()) {
        access_map.insert(agent.home, agent.total_distance_m);
    }

    debug!(
        "population of {} planned: {} unreachable",
        stats.overall.total, stats.overall.unreachable
    );

    Ok(RunOutcome { stats, agents, access_map, tram_stops })
}
