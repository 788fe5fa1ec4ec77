//! Parsers for command-line tokens.
//!
//! # Usage
//!
//! ```
//! use panel::parser::{parse_dimension, parse_placements, PlacementSyntax};
//!
//! let dimension = parse_dimension("2,4").unwrap();
//! let grid = parse_placements("0,0-1,1-2,2-0,0", PlacementSyntax::Plain).unwrap();
//!
//! assert_eq!(dimension.rows, grid.height());
//! ```

mod args;
mod placement;

pub use args::{parse_dimension, parse_names};
pub use placement::{parse_placements, PlacementSyntax};
