use gridpath_core::State;

use crate::graph::EdgeCost;

/// Minimal planning interface: neighbor enumeration.
pub trait Pather {
    /// Append the neighbors of `s` into `buf`. The caller clears `buf`
    /// before calling.
    fn neighbors(&self, s: State, buf: &mut Vec<State>);
}

/// Pather with weighted edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to `to`. Neighbors reported by
    /// [`Pather::neighbors`] must yield [`EdgeCost::Cost`] with a
    /// non-negative value.
    fn cost(&self, from: State, to: State) -> EdgeCost;
}

/// Weighted pather with a heuristic, as required by A*.
pub trait AstarPather: WeightedPather {
    /// Estimate of the remaining cost from `from` to `to`. A* only returns
    /// optimal paths when this never overestimates (admissible).
    fn estimate(&self, from: State, to: State) -> f64;
}
