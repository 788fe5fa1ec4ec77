//! panel - Icon grid compositor
//!
//! A library for composing a grid of small icons, optionally tinted, into a
//! single foreground image from a compact placement string.
//!
//! # Example
//!
//! ```
//! use panel::{parse_placements, validate_grid, Compositor, IconSet, Layout, PlacementSyntax};
//! use panel::Dimension;
//!
//! let mut icons = IconSet::default();
//! icons.insert("dot", image::RgbaImage::from_pixel(58, 58, image::Rgba([255, 0, 0, 255])));
//!
//! let dimension = Dimension::new(2, 2);
//! let grid = parse_placements("1,0-0,1", PlacementSyntax::Plain).unwrap();
//! validate_grid(&grid, dimension).unwrap();
//!
//! let panel = Compositor::new(Layout::default(), &icons, &[]).render(&grid, dimension).unwrap();
//! assert_eq!(panel.image.dimensions(), (268, 268));
//! assert_eq!(panel.placed, 2);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod icons;
pub mod output;
pub mod parser;
pub mod render;
pub mod resolver;
pub mod types;
pub mod validation;

pub use config::PanelConfig;
pub use error::{PanelError, Result};
pub use icons::IconSet;
pub use parser::{parse_dimension, parse_names, parse_placements, PlacementSyntax};
pub use render::{tint_icon, write_png, Composition, Compositor};
pub use resolver::{ColourCache, ColourResolver};
pub use types::{CellSpec, Colour, Dimension, Grid, Layout, NamedColours, Row};
pub use validation::{check_references, validate_grid};
