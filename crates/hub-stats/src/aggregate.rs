//! Streaming distance accumulators and the aggregate `Stats` shape.

use hub_core::TravelMode;
use hub_pop::Agent;

// ── DistanceSummary ───────────────────────────────────────────────────────────

/// Streaming aggregate over one subset of agents (everyone, or one mode).
///
/// `record_*` and [`merge`](Self::merge) are commutative and associative,
/// so a summary may be built across any partition of the input and folded
/// together.  Average/min/max are derived on read and are `None` — never
/// zero, never infinity — while the reachable subset is empty.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DistanceSummary {
    /// Number of agents observed.
    pub total: usize,

    /// How many of them had no feasible path.
    pub unreachable: usize,

    sum_m: f64,
    min_m: Option<f64>,
    max_m: Option<f64>,
}

impl DistanceSummary {
    /// Fold in one reachable agent's distance (metres).
    pub fn record_reachable(&mut self, distance_m: f64) {
        self.total += 1;
        self.sum_m += distance_m;
        self.min_m = Some(self.min_m.map_or(distance_m, |m| m.min(distance_m)));
        self.max_m = Some(self.max_m.map_or(distance_m, |m| m.max(distance_m)));
    }

    /// Fold in one unreachable agent.  Its distance carries no meaning and
    /// is not read.
    pub fn record_unreachable(&mut self) {
        self.total += 1;
        self.unreachable += 1;
    }

    /// Fold in one agent according to its terminal status.
    pub fn record(&mut self, agent: &Agent) {
        if agent.is_reachable() {
            self.record_reachable(agent.total_distance_m);
        } else {
            self.record_unreachable();
        }
    }

    /// Combine two summaries built over disjoint subsets.
    pub fn merge(&mut self, other: &DistanceSummary) {
        self.total += other.total;
        self.unreachable += other.unreachable;
        self.sum_m += other.sum_m;
        self.min_m = merge_min(self.min_m, other.min_m);
        self.max_m = merge_max(self.max_m, other.max_m);
    }

    /// Agents with a feasible path.
    #[inline]
    pub fn reachable_count(&self) -> usize {
        self.total - self.unreachable
    }

    /// Mean distance over reachable agents; `None` if there are none.
    pub fn avg_m(&self) -> Option<f64> {
        match self.reachable_count() {
            0 => None,
            n => Some(self.sum_m / n as f64),
        }
    }

    /// Shortest reachable distance; `None` if there are none.
    pub fn min_m(&self) -> Option<f64> {
        self.min_m
    }

    /// Longest reachable distance; `None` if there are none.
    pub fn max_m(&self) -> Option<f64> {
        self.max_m
    }
}

fn merge_min(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (x, y) => x.or(y),
    }
}

fn merge_max(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.max(y)),
        (x, y) => x.or(y),
    }
}

// ── Stats ─────────────────────────────────────────────────────────────────────

/// Accessibility statistics for one simulation run: the overall aggregate
/// plus one aggregate per travel mode.
///
/// Agents are attributed to their *terminal* mode — a tram agent that fell
/// back to walking counts as a walker, matching what it actually did.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stats {
    pub overall: DistanceSummary,
    per_mode: [DistanceSummary; 4],
}

impl Stats {
    /// One pass over the population, building all five summaries at once.
    pub fn aggregate(agents: &[Agent]) -> Stats {
        let mut stats = Stats::default();
        for agent in agents {
            stats.overall.record(agent);
            stats.per_mode[agent.mode.index()].record(agent);
        }
        stats
    }

    /// The aggregate scoped to one mode.
    #[inline]
    pub fn mode(&self, mode: TravelMode) -> &DistanceSummary {
        &self.per_mode[mode.index()]
    }

    /// Iterate `(mode, summary)` pairs in [`TravelMode::ALL`] order.
    pub fn modes(&self) -> impl Iterator<Item = (TravelMode, &DistanceSummary)> {
        TravelMode::ALL.iter().map(|&m| (m, &self.per_mode[m.index()]))
    }

    /// Combine stats built over disjoint agent subsets.
    pub fn merge(&mut self, other: &Stats) {
        self.overall.merge(&other.overall);
        for (mine, theirs) in self.per_mode.iter_mut().zip(&other.per_mode) {
            mine.merge(theirs);
        }
    }
}
