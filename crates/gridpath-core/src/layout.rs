//! Build grids from ASCII pictures.
//!
//! One row per line: `.` is a [`Grid::FREE`] cell, `#` is a [`Grid::BLOCK`]
//! cell and the digits `1`..=`9` give that weight. Blank lines before and
//! after the picture are ignored, and each row is trimmed.
//!
//! ```
//! use gridpath_core::{Grid, State};
//!
//! let grid = Grid::from_layout(
//!     "
//!     ..#
//!     .9#
//!     ...
//!     ",
//! )
//! .unwrap();
//! assert_eq!(grid.width(), 3);
//! assert_eq!(grid.weight(State::new(1, 1)), 9.0);
//! assert!(!grid.is_free(State::new(2, 0)));
//! ```

use std::fmt;

use crate::geom::State;
use crate::grid::Grid;

impl Grid {
    /// Parse a grid from an ASCII picture. See the [module docs](self).
    pub fn from_layout(s: &str) -> Result<Self, LayoutError> {
        let rows: Vec<&str> = s
            .trim_matches(|c| c == '\n' || c == '\r')
            .lines()
            .map(str::trim)
            .collect();
        let rows = trim_blank_rows(&rows);
        let Some(first) = rows.first() else {
            return Err(LayoutError::Empty);
        };

        let width = first.chars().count();
        for (y, row) in rows.iter().enumerate() {
            let w = row.chars().count();
            if w != width {
                return Err(LayoutError::InconsistentWidth {
                    row: y,
                    expected: width,
                    found: w,
                });
            }
        }

        let mut grid = Grid::new(width as i32, rows.len() as i32);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let pos = State::new(x as i32, y as i32);
                let w = match ch {
                    '.' => Grid::FREE,
                    '#' => Grid::BLOCK,
                    '1'..='9' => f64::from(ch as u8 - b'0'),
                    _ => return Err(LayoutError::InvalidChar { ch, pos }),
                };
                grid.set_weight(pos, w);
            }
        }
        Ok(grid)
    }
}

fn trim_blank_rows<'a>(rows: &'a [&'a str]) -> &'a [&'a str] {
    let start = rows.iter().position(|r| !r.is_empty()).unwrap_or(rows.len());
    let end = rows.iter().rposition(|r| !r.is_empty()).map_or(start, |i| i + 1);
    &rows[start..end]
}

/// Errors that can occur when parsing a grid layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The layout contains no rows.
    Empty,
    /// A row's width differs from the first row's.
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside `.`, `#` and `1`..=`9` was found.
    InvalidChar { ch: char, pos: State },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "layout: no rows"),
            Self::InconsistentWidth {
                row,
                expected,
                found,
            } => write!(
                f,
                "layout: row {row} has width {found}, expected {expected}"
            ),
            Self::InvalidChar { ch, pos } => {
                write!(f, "layout contains invalid character \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}
