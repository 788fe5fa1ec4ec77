//! Core data types for panel composition.

mod colour;
mod grid;
mod layout;
mod palette;

pub use colour::Colour;
pub use grid::{CellSpec, Dimension, Grid, Row};
pub use layout::Layout;
pub use palette::NamedColours;
