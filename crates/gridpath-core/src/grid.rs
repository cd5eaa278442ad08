//! A weighted grid world.
//!
//! Each cell stores the cost of moving *into* it. [`Grid::BLOCK`] marks an
//! impassable cell; [`Grid::FREE`] is the default weight. Out-of-bounds
//! queries degrade to `BLOCK` instead of failing, so callers never need to
//! bounds-check before asking.

use crate::geom::{Bounds, State};

/// A fixed-size 2D array of per-cell movement weights.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    bounds: Bounds,
    #[cfg_attr(feature = "serde", serde(with = "block_as_negative"))]
    weights: Vec<f64>,
}

impl Grid {
    /// Weight of an impassable cell.
    pub const BLOCK: f64 = f64::INFINITY;

    /// Default weight of a passable cell.
    pub const FREE: f64 = 1.0;

    /// Create a new `width × height` grid with every cell `FREE`.
    ///
    /// Non-positive dimensions give an empty grid in which every state is
    /// out of bounds.
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Bounds::sized(width, height);
        Self {
            weights: vec![Self::FREE; bounds.len()],
            bounds,
        }
    }

    /// The rectangle of valid coordinates.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether `s` lies inside the grid.
    #[inline]
    pub fn contains(&self, s: State) -> bool {
        self.bounds.contains(s)
    }

    #[inline]
    fn index(&self, s: State) -> Option<usize> {
        if !self.bounds.contains(s) {
            return None;
        }
        Some((s.y * self.bounds.width() + s.x) as usize)
    }

    /// Movement cost of entering `s`, or [`Grid::BLOCK`] when `s` is out of
    /// bounds.
    pub fn weight(&self, s: State) -> f64 {
        match self.index(s) {
            Some(i) => self.weights[i],
            None => Self::BLOCK,
        }
    }

    /// Set the weight of `s`.
    ///
    /// Returns `false` and leaves the grid untouched when `s` is out of
    /// bounds. Negative and NaN weights are stored as [`Grid::BLOCK`].
    pub fn set_weight(&mut self, s: State, w: f64) -> bool {
        let Some(i) = self.index(s) else {
            return false;
        };
        self.weights[i] = if w < 0.0 || w.is_nan() { Self::BLOCK } else { w };
        true
    }

    /// Whether `s` is inside the grid and not blocked.
    pub fn is_free(&self, s: State) -> bool {
        match self.index(s) {
            Some(i) => self.weights[i] != Self::BLOCK,
            None => false,
        }
    }

    /// Reset every cell to [`Grid::FREE`].
    pub fn clear(&mut self) {
        self.weights.fill(Self::FREE);
    }

    /// Number of blocked cells.
    pub fn count_blocked(&self) -> usize {
        self.weights.iter().filter(|&&w| w == Self::BLOCK).count()
    }

    /// Row-major iterator over every in-bounds state.
    pub fn states(&self) -> impl Iterator<Item = State> + '_ {
        self.bounds.iter()
    }

    /// Row-major iterator over `(state, weight)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (State, f64)> + '_ {
        self.bounds.iter().zip(self.weights.iter().copied())
    }
}

// JSON has no infinity, so blocked cells travel as -1 and any negative
// weight reads back as BLOCK (the same clamp `set_weight` applies).
#[cfg(feature = "serde")]
mod block_as_negative {
    use super::Grid;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(weights: &[f64], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(
            weights
                .iter()
                .map(|&w| if w == Grid::BLOCK { -1.0 } else { w }),
        )
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<f64>, D::Error> {
        let raw = Vec::<f64>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .map(|w| if w < 0.0 { Grid::BLOCK } else { w })
            .collect())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let mut g = Grid::new(4, 3);
        g.set_weight(State::new(1, 2), 3.5);
        g.set_weight(State::new(0, 0), 0.0);
        g.set_weight(State::new(3, 1), Grid::BLOCK);
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back.width(), 4);
        assert_eq!(back.weight(State::new(1, 2)), 3.5);
        assert_eq!(back.weight(State::new(0, 0)), 0.0);
        assert!(!back.is_free(State::new(3, 1)));
        assert_eq!(back, g);
    }
}
