//! Planning results.

use std::fmt;
use std::time::Duration;

use gridpath_core::State;

/// The search strategy used by [`Planner::plan`](crate::Planner::plan).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchType {
    /// Unweighted breadth-first search; minimizes the number of steps.
    Bfs,
    /// Dijkstra's algorithm; minimizes the total weight.
    Dijkstra,
    /// A* with the Chebyshev heuristic; minimizes the total weight.
    AStar,
}

impl SearchType {
    /// All strategies, in comparison order.
    pub const ALL: [SearchType; 3] = [Self::Bfs, Self::Dijkstra, Self::AStar];

    /// Whether the strategy takes cell weights into account.
    #[inline]
    pub fn is_weighted(self) -> bool {
        !matches!(self, Self::Bfs)
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bfs => "BFS",
            Self::Dijkstra => "Dijkstra",
            Self::AStar => "A*",
        })
    }
}

/// Diagnostic flags gathered while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Checks {
    pub(crate) monotonic: bool,
    pub(crate) consistent: bool,
    pub(crate) optimal_goal: bool,
}

/// What an algorithm hands back to the planner before timing is attached.
#[derive(Debug, Clone, Default)]
pub(crate) struct SearchOutcome {
    pub(crate) path: Vec<State>,
    pub(crate) total_cost: f64,
    pub(crate) nodes_expanded: usize,
    pub(crate) checks: Checks,
}

impl SearchOutcome {
    /// No path, after expanding `nodes_expanded` states.
    pub(crate) fn not_found(nodes_expanded: usize, checks: Checks) -> Self {
        Self {
            nodes_expanded,
            checks,
            ..Self::default()
        }
    }
}

/// The output of one planning call.
///
/// `success` implies a non-empty path running from start to goal. For BFS
/// the cost is the number of steps; for Dijkstra and A* it is the sum of the
/// edge costs along the path.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanResult {
    algorithm: SearchType,
    path: Vec<State>,
    success: bool,
    total_cost: f64,
    nodes_expanded: usize,
    execution_time: Duration,
    monotonicity_verified: bool,
    heuristic_consistent: bool,
    optimal_goal_extraction: bool,
}

impl PlanResult {
    pub(crate) fn new(algorithm: SearchType, outcome: SearchOutcome, elapsed: Duration) -> Self {
        Self {
            algorithm,
            success: !outcome.path.is_empty(),
            path: outcome.path,
            total_cost: outcome.total_cost,
            nodes_expanded: outcome.nodes_expanded,
            execution_time: elapsed,
            monotonicity_verified: outcome.checks.monotonic,
            heuristic_consistent: outcome.checks.consistent,
            optimal_goal_extraction: outcome.checks.optimal_goal,
        }
    }

    /// The strategy that produced this result.
    pub fn algorithm(&self) -> SearchType {
        self.algorithm
    }

    /// States from start to goal inclusive; empty when no path was found.
    pub fn path(&self) -> &[State] {
        &self.path
    }

    /// Consume the result, keeping only the path.
    pub fn into_path(self) -> Vec<State> {
        self.path
    }

    /// Whether a path was found.
    pub fn success(&self) -> bool {
        self.success
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Number of states dequeued and finalized.
    pub fn nodes_expanded(&self) -> usize {
        self.nodes_expanded
    }

    pub fn execution_time(&self) -> Duration {
        self.execution_time
    }

    /// Wall-clock time in fractional milliseconds.
    pub fn execution_time_ms(&self) -> f64 {
        self.execution_time.as_secs_f64() * 1000.0
    }

    /// Number of moves along the path.
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// States left the queue in non-decreasing g-value order. Always holds
    /// for Dijkstra on non-negative weights; A* may legitimately break it.
    pub fn monotonicity_verified(&self) -> bool {
        self.monotonicity_verified
    }

    /// Every relaxed edge satisfied `h(u) <= cost(u, v) + h(v)` for the
    /// Chebyshev estimate `h`, whichever algorithm ran.
    pub fn heuristic_consistent(&self) -> bool {
        self.heuristic_consistent
    }

    /// The goal left the queue with no cheaper entry still waiting.
    pub fn optimal_goal_extraction(&self) -> bool {
        self.optimal_goal_extraction
    }
}

impl fmt::Display for PlanResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.success {
            return write!(
                f,
                "{}: no path ({} expanded, {:.3} ms)",
                self.algorithm,
                self.nodes_expanded,
                self.execution_time_ms()
            );
        }
        write!(
            f,
            "{}: cost {:.2}, {} states, {} expanded, {:.3} ms",
            self.algorithm,
            self.total_cost,
            self.path.len(),
            self.nodes_expanded,
            self.execution_time_ms()
        )
    }
}

/// The three strategies run against the same world.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub bfs: PlanResult,
    pub dijkstra: PlanResult,
    pub astar: PlanResult,
}

impl Comparison {
    /// Tolerance used by [`astar_optimal`](Self::astar_optimal).
    pub const COST_EPSILON: f64 = 1e-4;

    /// Whether A* found a path as cheap as Dijkstra's.
    pub fn astar_optimal(&self) -> bool {
        self.astar.success
            && self.dijkstra.success
            && (self.astar.total_cost - self.dijkstra.total_cost).abs() < Self::COST_EPSILON
    }

    /// Labelled results in BFS, Dijkstra, A* order, for table output.
    pub fn rows(&self) -> [(&'static str, &PlanResult); 3] {
        let astar_label = if self.astar_optimal() { "A* (optimal)" } else { "A*" };
        [
            ("BFS (steps)", &self.bfs),
            ("Dijkstra", &self.dijkstra),
            (astar_label, &self.astar),
        ]
    }
}
