use std::time::Instant;

use gridpath_core::State;
use log::debug;

use crate::graph::Graph;
use crate::report::{Checks, Comparison, PlanResult, SearchOutcome, SearchType};
use crate::{bfs, weighted};

/// Planner settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Record the monotonicity, consistency and goal-extraction checks for
    /// Dijkstra and A*. When off, the flags in [`PlanResult`] are all
    /// `false`.
    pub verify: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self { verify: true }
    }
}

/// Computes paths over a [`Graph`].
///
/// The planner only reads the graph; every call allocates its own search
/// state, so one planner can serve any number of sequential or concurrent
/// calls.
#[derive(Debug, Clone, Copy)]
pub struct Planner<'a> {
    graph: &'a Graph<'a>,
    config: PlannerConfig,
}

impl<'a> Planner<'a> {
    /// Create a planner with the default configuration.
    pub fn new(graph: &'a Graph<'a>) -> Self {
        Self::with_config(graph, PlannerConfig::default())
    }

    /// Create a planner with explicit settings.
    pub fn with_config(graph: &'a Graph<'a>, config: PlannerConfig) -> Self {
        Self { graph, config }
    }

    /// The graph this planner searches.
    pub fn graph(&self) -> &'a Graph<'a> {
        self.graph
    }

    /// The settings in effect.
    pub fn config(&self) -> PlannerConfig {
        self.config
    }

    /// Plan a path from `start` to `goal` with the given strategy.
    ///
    /// Blocked or out-of-bounds endpoints fail immediately without
    /// searching. `start == goal` succeeds immediately with a one-state
    /// path. The elapsed time is recorded in every case.
    pub fn plan(&self, start: State, goal: State, algorithm: SearchType) -> PlanResult {
        let started = Instant::now();
        let outcome = self.search(start, goal, algorithm);
        let result = PlanResult::new(algorithm, outcome, started.elapsed());
        debug!("plan {start} -> {goal}: {result}");
        result
    }

    /// Run every strategy between the same endpoints.
    pub fn compare(&self, start: State, goal: State) -> Comparison {
        Comparison {
            bfs: self.plan(start, goal, SearchType::Bfs),
            dijkstra: self.plan(start, goal, SearchType::Dijkstra),
            astar: self.plan(start, goal, SearchType::AStar),
        }
    }

    fn search(&self, start: State, goal: State, algorithm: SearchType) -> SearchOutcome {
        if !self.graph.is_valid(start) || !self.graph.is_valid(goal) {
            debug!("plan {start} -> {goal}: endpoint blocked or out of bounds");
            return SearchOutcome::default();
        }

        let verify = self.config.verify;
        if self.graph.is_goal(start, goal) {
            let flagged = verify && algorithm.is_weighted();
            return SearchOutcome {
                path: vec![start],
                total_cost: 0.0,
                nodes_expanded: 1,
                checks: Checks {
                    monotonic: flagged,
                    consistent: flagged,
                    optimal_goal: flagged,
                },
            };
        }

        let graph = self.graph;
        match algorithm {
            SearchType::Bfs => bfs::search(graph, start, goal),
            SearchType::Dijkstra => weighted::search(graph, start, goal, false, verify),
            SearchType::AStar => weighted::search(graph, start, goal, true, verify),
        }
    }
}
