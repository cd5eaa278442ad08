use std::collections::HashMap;

use gridpath_core::State;
use log::warn;

/// Rebuild the start-to-goal path by following `parents` back from `goal`.
///
/// Returns an empty path if the chain breaks before reaching `start` or
/// loops back on itself.
pub(crate) fn reconstruct(parents: &HashMap<State, State>, start: State, goal: State) -> Vec<State> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        let Some(&parent) = parents.get(&current) else {
            warn!("parent chain broken at {current} while rebuilding {start} -> {goal}");
            return Vec::new();
        };
        // A chain can visit each recorded state at most once.
        if path.len() > parents.len() {
            warn!("parent chain loops while rebuilding {start} -> {goal}");
            return Vec::new();
        }
        path.push(parent);
        current = parent;
    }
    path.reverse();
    path
}
