use std::collections::{HashMap, HashSet, VecDeque};

use gridpath_core::State;
use log::trace;

use crate::path::reconstruct;
use crate::report::{Checks, SearchOutcome};
use crate::traits::Pather;

/// Breadth-first search from `start` to `goal`.
///
/// Every step costs 1 regardless of cell weights, so the path has the
/// fewest possible moves and its cost is its step count. BFS does not run
/// the weighted-search checks; all flags stay `false`.
pub(crate) fn search<P: Pather>(pather: &P, start: State, goal: State) -> SearchOutcome {
    let mut queue = VecDeque::new();
    let mut visited = HashSet::new();
    let mut parents = HashMap::new();
    let mut nbuf = Vec::with_capacity(8);
    let mut expanded = 0;
    let mut found = false;

    queue.push_back(start);
    visited.insert(start);

    while let Some(current) = queue.pop_front() {
        expanded += 1;
        if current == goal {
            found = true;
            break;
        }

        nbuf.clear();
        pather.neighbors(current, &mut nbuf);
        for &n in &nbuf {
            if visited.insert(n) {
                parents.insert(n, current);
                queue.push_back(n);
            }
        }
    }
    trace!("bfs {start} -> {goal}: expanded {expanded}, visited {}", visited.len());

    if !found {
        return SearchOutcome::not_found(expanded, Checks::default());
    }
    let path = reconstruct(&parents, start, goal);
    SearchOutcome {
        total_cost: path.len().saturating_sub(1) as f64,
        path,
        nodes_expanded: expanded,
        checks: Checks::default(),
    }
}
