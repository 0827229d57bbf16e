//! Rendering of static logo definitions
//!
//! [`tree`] resolves a definition into an owned [`RenderedTree`]; [`svg`]
//! serializes such a tree to SVG markup.

pub mod config;
pub mod svg;
pub mod tree;

pub use config::SvgConfig;
pub use svg::render_svg;
pub use tree::{RenderedShape, RenderedTree, ResolvedStyle};
