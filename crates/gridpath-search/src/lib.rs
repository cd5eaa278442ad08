//! Path planning over weighted 8-connected grids.
//!
//! This crate turns a [`gridpath_core::Grid`] into a graph and searches it
//! with one of three classical strategies:
//!
//! - **BFS**: fewest moves, weights ignored ([`SearchType::Bfs`])
//! - **Dijkstra**: cheapest path by total weight ([`SearchType::Dijkstra`])
//! - **A\***: cheapest path, guided by the Chebyshev distance
//!   ([`SearchType::AStar`])
//!
//! All strategies run through [`Planner::plan`], which returns a
//! [`PlanResult`] carrying the path, its cost, the number of expanded
//! states, the elapsed time and the correctness checks recorded during the
//! search.
//!
//! ```
//! use gridpath_core::{Grid, State};
//! use gridpath_search::{Graph, Planner, SearchType};
//!
//! let grid = Grid::new(5, 5);
//! let graph = Graph::new(&grid);
//! let planner = Planner::new(&graph);
//! let result = planner.plan(State::new(0, 0), State::new(4, 4), SearchType::Bfs);
//! assert!(result.success());
//! assert_eq!(result.steps(), 4);
//! ```
//!
//! # Trait hierarchy
//!
//! The algorithms are written against these traits, which [`Graph`]
//! implements:
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS |
//! | [`WeightedPather`] : [`Pather`] | Dijkstra |
//! | [`AstarPather`] : [`WeightedPather`] | A* |

mod bfs;
mod distance;
mod graph;
mod path;
mod planner;
mod report;
mod traits;
mod weighted;

pub use distance::chebyshev;
pub use graph::{DIAGONAL_COST, EdgeCost, Graph};
pub use planner::{Planner, PlannerConfig};
pub use report::{Comparison, PlanResult, SearchType};
pub use traits::{AstarPather, Pather, WeightedPather};
