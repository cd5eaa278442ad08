//! Console front end for the grid path planner: random worlds, an animated
//! agent and side-by-side algorithm comparisons.

pub mod config;
pub mod menu;
pub mod render;
pub mod sim;
pub mod stats;

pub use config::{ConfigError, SimConfig};
pub use sim::Simulation;
