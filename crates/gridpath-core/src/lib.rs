//! **gridpath-core**: weighted grid worlds for single-agent path planning.
//!
//! This crate provides the types shared by the *gridpath* workspace:
//! discrete grid coordinates ([`State`]), the rectangle they live in
//! ([`Bounds`]) and the weighted world itself ([`Grid`]).

pub mod geom;
pub mod grid;
pub mod layout;

pub use geom::{Bounds, State};
pub use grid::Grid;
pub use layout::LayoutError;
