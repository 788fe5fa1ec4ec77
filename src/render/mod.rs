//! Rendering module for panel.
//!
//! Tints icons, pastes them onto the panel canvas and writes the result.

mod compositor;
mod png;
mod tint;

pub use compositor::{Composition, Compositor};
pub use png::write_png;
pub use tint::tint_icon;
