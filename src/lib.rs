//! Brand Logos - static vector marks as renderable trees
//!
//! Each mark is fixed geometry plus, for themed logos, a color picked from a
//! two-entry [`StyleTable`]. Rendering is pure: every call returns a fresh
//! [`RenderedTree`] that can be handed to a UI layer or serialized to SVG.
//!
//! # Example
//!
//! ```rust
//! use brand_logos::{arweave_logo_dark, render_svg, SvgConfig};
//!
//! let tree = arweave_logo_dark();
//! assert_eq!(tree.view_box.to_string(), "0 0 133.06 133.06");
//!
//! let svg = render_svg(&tree, &SvgConfig::default());
//! assert!(svg.contains("<circle"));
//! ```

pub mod error;
pub mod logo;
pub mod renderer;
pub mod stylesheet;

pub use error::ParseLogoError;
pub use logo::{Logo, LogoDefinition, LogoId, Variant, ViewBox};
pub use renderer::{render_svg, RenderedShape, RenderedTree, ResolvedStyle, SvgConfig};
pub use stylesheet::{StyleTable, StylesheetError};

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Style table for color resolution
    pub styles: StyleTable,
    /// Debug mode: log the resolved tree
    pub debug: bool,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the style table for color resolution
    pub fn with_styles(mut self, styles: StyleTable) -> Self {
        self.styles = styles;
        self
    }

    /// Enable or disable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Render a logo with the default style table
///
/// `variant` is ignored for logos without variants. When omitted,
/// [`Variant::Dark`] is used.
///
/// # Example
///
/// ```rust
/// use brand_logos::{render, Logo, Variant};
///
/// let tree = render(Logo::Arweave, Some(Variant::Light));
/// let path = tree.drawables().next().unwrap();
/// assert_eq!(path.style().unwrap().fill.as_deref(), Some("#222326"));
/// ```
pub fn render(logo: Logo, variant: Option<Variant>) -> RenderedTree {
    render_with_styles(logo, variant, &StyleTable::DEFAULT)
}

/// Render a logo, resolving themed colors against `styles`
pub fn render_with_styles(logo: Logo, variant: Option<Variant>, styles: &StyleTable) -> RenderedTree {
    render_mark_with_styles(LogoId::select(logo, variant), styles)
}

/// Render one of the five named marks with the default style table
pub fn render_mark(id: LogoId) -> RenderedTree {
    render_mark_with_styles(id, &StyleTable::DEFAULT)
}

/// Render one of the five named marks, resolving themed colors against `styles`
pub fn render_mark_with_styles(id: LogoId, styles: &StyleTable) -> RenderedTree {
    log::debug!("{}", render_summary(id));
    let variant = id.variant().unwrap_or_default();
    renderer::tree::resolve(id.definition(), styles, variant)
}

fn render_summary(id: LogoId) -> String {
    match id.variant() {
        Some(variant) => format!("rendering {} with {} colors", id, variant),
        None => format!("rendering {}", id),
    }
}

/// Render a logo straight to SVG markup
///
/// # Example
///
/// ```rust
/// use brand_logos::{render_logo_svg, Logo, RenderConfig, SvgConfig};
///
/// let config = RenderConfig::new().with_svg(SvgConfig::new().with_size(32.0));
/// let svg = render_logo_svg(Logo::Ipfs, None, &config);
/// assert!(svg.contains(r#"width="32""#));
/// assert!(svg.contains("<title>IPFS icon</title>"));
/// ```
pub fn render_logo_svg(logo: Logo, variant: Option<Variant>, config: &RenderConfig) -> String {
    render_mark_svg(LogoId::select(logo, variant), config)
}

/// Render one of the five named marks straight to SVG markup
pub fn render_mark_svg(id: LogoId, config: &RenderConfig) -> String {
    let tree = render_mark_with_styles(id, &config.styles);

    // Debug output
    if config.debug {
        log::debug!("=== {} ===", tree.logo);
        log::debug!("viewBox={} fill={:?}", tree.view_box, tree.fill);
        for child in &tree.children {
            log::debug!("  {:?}", child);
        }
    }

    render_svg(&tree, &config.svg)
}

/// Aptos mark drawn in black
pub fn aptos_black_logo() -> RenderedTree {
    render_mark(LogoId::AptosBlack)
}

/// Aptos mark drawn in white, for dark backgrounds
pub fn aptos_white_logo() -> RenderedTree {
    render_mark(LogoId::AptosWhite)
}

/// Arweave mark using the dark variant color
pub fn arweave_logo_dark() -> RenderedTree {
    render_mark(LogoId::ArweaveDark)
}

/// Arweave mark using the light variant color
pub fn arweave_logo_light() -> RenderedTree {
    render_mark(LogoId::ArweaveLight)
}

/// IPFS icon; has no color variants
pub fn ipfs_logo() -> RenderedTree {
    render_mark(LogoId::Ipfs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_defaults_to_dark() {
        assert_eq!(render(Logo::Arweave, None), arweave_logo_dark());
        assert_eq!(render(Logo::Aptos, None), aptos_white_logo());
    }

    #[test]
    fn test_render_light_variants() {
        assert_eq!(render(Logo::Arweave, Some(Variant::Light)), arweave_logo_light());
        assert_eq!(render(Logo::Aptos, Some(Variant::Light)), aptos_black_logo());
    }

    #[test]
    fn test_ipfs_variant_ignored() {
        assert_eq!(render(Logo::Ipfs, Some(Variant::Light)), ipfs_logo());
        assert_eq!(render(Logo::Ipfs, Some(Variant::Dark)), ipfs_logo());
    }

    #[test]
    fn test_custom_styles_only_touch_themed_marks() {
        let styles = StyleTable::new("#ff0000", "#00ff00");
        assert_eq!(render_with_styles(Logo::Ipfs, None, &styles), ipfs_logo());
        assert_eq!(
            render_with_styles(Logo::Aptos, Some(Variant::Light), &styles),
            aptos_black_logo()
        );
        assert_ne!(
            render_with_styles(Logo::Arweave, Some(Variant::Light), &styles),
            arweave_logo_light()
        );
    }

    #[test]
    fn test_render_summary_mentions_variant_only_when_present() {
        assert_eq!(render_summary(LogoId::Ipfs), "rendering ipfs");
        assert_eq!(
            render_summary(LogoId::ArweaveLight),
            "rendering arweave-light with light colors"
        );
        assert_eq!(
            render_summary(LogoId::AptosWhite),
            "rendering aptos-white with dark colors"
        );
    }

    #[test]
    fn test_render_svg_with_debug() {
        let config = RenderConfig::new().with_debug(true);
        let svg = render_logo_svg(Logo::Arweave, Some(Variant::Dark), &config);
        assert!(svg.contains(r#"id="Layer_1""#));
        assert!(svg.contains("stroke:white"));
    }

    #[test]
    fn test_render_mark_svg_uses_styles() {
        let config = RenderConfig::new().with_styles(StyleTable::new("#123456", "#654321"));
        let svg = render_mark_svg(LogoId::ArweaveLight, &config);
        assert!(svg.contains("fill:#654321"));
        assert!(svg.contains("stroke:#654321"));
        assert!(!svg.contains("#222326"));
    }
}
