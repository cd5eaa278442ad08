//! The search loop shared by Dijkstra and A*.
//!
//! Both algorithms pop the cheapest entry from a binary heap, finalize it in
//! a closed set and relax its edges. They differ only in the priority:
//! Dijkstra uses the g-value alone, A* adds a heuristic estimate of the
//! remaining cost. Improved states are pushed again rather than updated in
//! place; the superseded entries are skipped when they surface because the
//! state is already closed.
//!
//! When verification is enabled the loop also records, without acting on
//! them, three properties of the run (see [`Checks`]).

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use gridpath_core::State;
use log::{debug, trace, warn};

use crate::graph::EdgeCost;
use crate::path::reconstruct;
use crate::report::{Checks, SearchOutcome};
use crate::traits::AstarPather;

/// Slack allowed for floating-point rounding in the verification checks.
const EPSILON: f64 = 1e-9;

/// Heap entry, ordered by priority.
#[derive(Clone, Copy, Debug)]
struct QueueEntry {
    priority: f64,
    state: State,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest priority first.
        other.priority.total_cmp(&self.priority)
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Search from `start` to `goal`.
///
/// With `guided` off the frontier is ordered by g alone (Dijkstra); with it
/// on, by `g + estimate(state, goal)` (A*). The verification checks always
/// measure the pather's estimate, whichever ordering is used.
pub(crate) fn search<P: AstarPather>(
    pather: &P,
    start: State,
    goal: State,
    guided: bool,
    verify: bool,
) -> SearchOutcome {
    let estimate = |s: State| pather.estimate(s, goal);
    let mut open = BinaryHeap::new();
    let mut g: HashMap<State, f64> = HashMap::new();
    let mut closed = HashSet::new();
    let mut parents = HashMap::new();
    let mut nbuf = Vec::with_capacity(8);
    let mut expanded = 0;
    let mut found = false;

    let mut checks = Checks {
        monotonic: verify,
        consistent: verify,
        optimal_goal: false,
    };
    let mut last_g = f64::NEG_INFINITY;

    g.insert(start, 0.0);
    open.push(QueueEntry {
        priority: 0.0,
        state: start,
    });

    while let Some(QueueEntry {
        priority,
        state: current,
    }) = open.pop()
    {
        if !closed.insert(current) {
            continue;
        }
        expanded += 1;
        let Some(&current_g) = g.get(&current) else {
            continue;
        };
        trace!("expand {current} g={current_g:.3} f={priority:.3}");

        if verify {
            if current_g + EPSILON < last_g && checks.monotonic {
                debug!("g decreased at {current}: {current_g} after {last_g}");
                checks.monotonic = false;
            }
            last_g = current_g;
        }

        if current == goal {
            found = true;
            if verify {
                let frontier_ok = open
                    .peek()
                    .is_none_or(|top| top.priority + EPSILON >= current_g);
                checks.optimal_goal = frontier_ok && (priority - current_g).abs() <= EPSILON;
            }
            break;
        }

        let h_current = if verify { estimate(current) } else { 0.0 };

        nbuf.clear();
        pather.neighbors(current, &mut nbuf);
        for &n in &nbuf {
            let EdgeCost::Cost(edge) = pather.cost(current, n) else {
                continue;
            };
            let h_n = if verify || guided { estimate(n) } else { 0.0 };
            if verify && checks.consistent && h_current > edge + h_n + EPSILON {
                warn!("inconsistent heuristic on {current} -> {n}: {h_current} > {edge} + {h_n}");
                checks.consistent = false;
            }
            if closed.contains(&n) {
                continue;
            }

            let new_cost = current_g + edge;
            if g.get(&n).is_some_and(|&old| new_cost >= old) {
                continue;
            }
            g.insert(n, new_cost);
            parents.insert(n, current);
            let priority = if guided { new_cost + h_n } else { new_cost };
            open.push(QueueEntry { priority, state: n });
        }
    }

    if !found {
        return SearchOutcome::not_found(expanded, checks);
    }
    let path = reconstruct(&parents, start, goal);
    if path.is_empty() {
        return SearchOutcome::not_found(expanded, checks);
    }
    SearchOutcome {
        path,
        total_cost: g.get(&goal).copied().unwrap_or_default(),
        nodes_expanded: expanded,
        checks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{DIAGONAL_COST, Graph};
    use gridpath_core::Grid;

    fn dijkstra(grid: &Grid, start: State, goal: State) -> SearchOutcome {
        search(&Graph::new(grid), start, goal, false, true)
    }

    fn astar(grid: &Grid, start: State, goal: State) -> SearchOutcome {
        search(&Graph::new(grid), start, goal, true, true)
    }

    /// A wall with a gap at the bottom: A* runs straight into it, then
    /// falls back to states closer to the start.
    fn dead_end() -> Grid {
        Grid::from_layout(
            "
            ...#...
            ...#...
            ...#...
            ...#...
            .......
            ",
        )
        .unwrap()
    }

    #[test]
    fn heap_pops_lowest_priority_first() {
        let mut heap = BinaryHeap::new();
        for p in [3.5, 0.25, 7.0, 1.0] {
            heap.push(QueueEntry {
                priority: p,
                state: State::ZERO,
            });
        }
        let order: Vec<f64> = std::iter::from_fn(|| heap.pop().map(|e| e.priority)).collect();
        assert_eq!(order, vec![0.25, 1.0, 3.5, 7.0]);
    }

    #[test]
    fn dijkstra_straight_line() {
        let grid = Grid::new(5, 1);
        let out = dijkstra(&grid, State::new(0, 0), State::new(4, 0));
        assert_eq!(out.path.len(), 5);
        assert_eq!(out.total_cost, 4.0);
        assert!(out.checks.monotonic);
        assert!(out.checks.consistent);
        assert!(out.checks.optimal_goal);
    }

    #[test]
    fn diagonal_cost_is_accumulated() {
        let grid = Grid::new(5, 5);
        let out = dijkstra(&grid, State::new(0, 0), State::new(4, 4));
        assert_eq!(out.path.len(), 5);
        assert!((out.total_cost - 4.0 * DIAGONAL_COST).abs() < 1e-9);
    }

    #[test]
    fn detours_around_heavy_cells() {
        let grid = Grid::from_layout(
            "
            ...
            .9.
            ...
            ",
        )
        .unwrap();
        let out = dijkstra(&grid, State::new(1, 0), State::new(1, 2));
        assert!(!out.path.contains(&State::new(1, 1)));
        // Two diagonal moves beat 9 + 1 through the middle.
        assert!((out.total_cost - 2.0 * DIAGONAL_COST).abs() < 1e-9);
    }

    #[test]
    fn astar_matches_dijkstra_and_expands_less() {
        let grid = Grid::from_layout(
            "
            ..........
            ..######..
            ..#....#..
            ..#.33.#..
            .......#..
            ..######..
            ..........
            ",
        )
        .unwrap();
        let start = State::new(0, 3);
        let goal = State::new(9, 3);
        let d = dijkstra(&grid, start, goal);
        let a = astar(&grid, start, goal);
        assert!(!d.path.is_empty());
        assert!((d.total_cost - a.total_cost).abs() < 1e-9);
        assert!(a.nodes_expanded <= d.nodes_expanded);
        assert!(a.checks.consistent);
        assert!(a.checks.optimal_goal);
        assert!(d.checks.monotonic);
        assert!(d.checks.optimal_goal);
    }

    #[test]
    fn astar_extracts_g_values_out_of_order() {
        let grid = dead_end();
        let start = State::new(0, 2);
        let goal = State::new(6, 2);
        let a = astar(&grid, start, goal);
        let expected = 2.0 + 4.0 * DIAGONAL_COST;
        assert!((a.total_cost - expected).abs() < 1e-9);
        // (2, 2) is closed with g = 2 before (1, 1) with g = sqrt 2.
        assert!(!a.checks.monotonic);
        assert!(a.checks.consistent);
        assert!(a.checks.optimal_goal);

        let d = dijkstra(&grid, start, goal);
        assert!((d.total_cost - expected).abs() < 1e-9);
        assert!(d.checks.monotonic);
        assert!(d.checks.consistent);
        assert!(d.checks.optimal_goal);
    }

    #[test]
    fn cheap_cells_break_chebyshev_consistency() {
        let mut grid = Grid::new(5, 1);
        for s in grid.bounds() {
            grid.set_weight(s, 0.5);
        }
        let a = astar(&grid, State::new(0, 0), State::new(4, 0));
        assert_eq!(a.path.len(), 5);
        assert_eq!(a.total_cost, 2.0);
        assert!(!a.checks.consistent);
        assert!(a.checks.monotonic);

        // The estimate is checked even when it does not order the queue.
        let d = dijkstra(&grid, State::new(0, 0), State::new(4, 0));
        assert!(!d.checks.consistent);
        assert!(d.checks.monotonic);
        assert!(d.checks.optimal_goal);
        assert_eq!(d.total_cost, 2.0);
    }

    #[test]
    fn exhausted_queue_reports_no_path() {
        let grid = Grid::from_layout(
            "
            .#.
            ##.
            ...
            ",
        )
        .unwrap();
        let out = dijkstra(&grid, State::new(0, 0), State::new(2, 2));
        assert!(out.path.is_empty());
        assert_eq!(out.nodes_expanded, 1);
        assert!(!out.checks.optimal_goal);
    }

    #[test]
    fn verification_can_be_disabled() {
        let grid = Grid::new(4, 4);
        for guided in [false, true] {
            let out = search(&Graph::new(&grid), State::new(0, 0), State::new(3, 2), guided, false);
            assert_eq!(out.path.len(), 4);
            assert_eq!(out.checks, Checks::default());
        }
    }
}
