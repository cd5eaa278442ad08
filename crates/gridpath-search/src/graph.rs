//! The grid-to-graph adapter.
//!
//! [`Graph`] turns a [`Grid`] into an 8-connected graph: every free cell is a
//! node, edges join it to its free cardinal and diagonal neighbors, and the
//! cost of an edge is the weight of the cell being entered (scaled by
//! [`DIAGONAL_COST`] for diagonal moves).

use gridpath_core::{Grid, State};

use crate::distance::chebyshev;
use crate::traits::{AstarPather, Pather, WeightedPather};

/// Cost multiplier for a diagonal move.
pub const DIAGONAL_COST: f64 = std::f64::consts::SQRT_2;

/// Move offsets: cardinal first, then diagonal.
const MOVES: [State; 8] = [
    State::new(1, 0),
    State::new(-1, 0),
    State::new(0, 1),
    State::new(0, -1),
    State::new(1, 1),
    State::new(1, -1),
    State::new(-1, 1),
    State::new(-1, -1),
];

/// The cost of moving between two states.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EdgeCost {
    /// The destination is blocked or outside the grid.
    Blocked,
    /// The destination is not one of the eight states around the source.
    NotNeighbor,
    /// A legal move with the given cost.
    Cost(f64),
}

impl EdgeCost {
    /// The move cost, or `None` if there is no edge.
    #[inline]
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Cost(c) => Some(c),
            Self::Blocked | Self::NotNeighbor => None,
        }
    }
}

/// A read-only graph view over a [`Grid`].
///
/// A `Graph` holds nothing but the grid reference, so it is cheap to copy
/// and can be shared between planning threads while the grid stays
/// borrowed immutably.
#[derive(Debug, Clone, Copy)]
pub struct Graph<'a> {
    grid: Option<&'a Grid>,
}

impl<'a> Graph<'a> {
    /// Wrap `grid`.
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid: Some(grid) }
    }

    /// A graph without a grid. Only [`is_goal`](Self::is_goal) is
    /// meaningful; every state is invalid.
    pub fn detached() -> Self {
        Self { grid: None }
    }

    /// The wrapped grid, if any.
    pub fn grid(&self) -> Option<&'a Grid> {
        self.grid
    }

    /// Whether `s` is inside the grid and not blocked.
    #[inline]
    pub fn is_valid(&self, s: State) -> bool {
        self.grid.is_some_and(|g| g.is_free(s))
    }

    /// Whether `s` is the goal.
    #[inline]
    pub fn is_goal(&self, s: State, goal: State) -> bool {
        s == goal
    }

    /// The valid states reachable from `s` in one move, in a fixed order
    /// (cardinal moves first, then diagonal).
    pub fn neighbors(&self, s: State) -> Vec<State> {
        let mut buf = Vec::with_capacity(MOVES.len());
        Pather::neighbors(self, s, &mut buf);
        buf
    }

    /// The cost of moving from `from` to `to`.
    ///
    /// Only the destination's weight and the move's geometry matter; the
    /// weight of `from` is never read.
    pub fn cost(&self, from: State, to: State) -> EdgeCost {
        let Some(grid) = self.grid else {
            return EdgeCost::Blocked;
        };
        if !grid.is_free(to) {
            return EdgeCost::Blocked;
        }
        let (dx, dy) = (from.x.abs_diff(to.x), from.y.abs_diff(to.y));
        if dx > 1 || dy > 1 || (dx == 0 && dy == 0) {
            return EdgeCost::NotNeighbor;
        }
        let w = grid.weight(to);
        if dx == 1 && dy == 1 {
            EdgeCost::Cost(w * DIAGONAL_COST)
        } else {
            EdgeCost::Cost(w)
        }
    }
}

impl Pather for Graph<'_> {
    fn neighbors(&self, s: State, buf: &mut Vec<State>) {
        for m in MOVES {
            let Some(n) = s.checked_add(m) else {
                continue;
            };
            if self.is_valid(n) {
                buf.push(n);
            }
        }
    }
}

impl WeightedPather for Graph<'_> {
    fn cost(&self, from: State, to: State) -> EdgeCost {
        Graph::cost(self, from, to)
    }
}

impl AstarPather for Graph<'_> {
    fn estimate(&self, from: State, to: State) -> f64 {
        f64::from(chebyshev(from, to))
    }
}
