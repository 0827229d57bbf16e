//! SVG generation from rendered trees

use super::tree::{RenderedShape, RenderedTree, ResolvedStyle};
use super::SvgConfig;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    elements: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            elements: vec![],
            indent: 1,
        }
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add a title element
    pub fn add_title(&mut self, text: &str) {
        self.elements.push(format!(
            "{}<title>{}</title>",
            self.indent_str(),
            escape_xml(text)
        ));
    }

    /// Add a path element
    pub fn add_path(
        &mut self,
        d: &str,
        transform: Option<&str>,
        class: Option<&str>,
        style: &ResolvedStyle,
    ) {
        let class_attr = class.map(|c| attr("class", c)).unwrap_or_default();
        let transform_attr = transform.map(|t| attr("transform", t)).unwrap_or_default();

        self.elements.push(format!(
            "{}<path{}{}{}{}/>",
            self.indent_str(),
            class_attr,
            style_attr(style),
            attr("d", d),
            transform_attr
        ));
    }

    /// Add a circle element
    pub fn add_circle(&mut self, cx: f64, cy: f64, r: f64, style: &ResolvedStyle) {
        self.elements.push(format!(
            r#"{}<circle{} cx="{}" cy="{}" r="{}"/>"#,
            self.indent_str(),
            style_attr(style),
            cx,
            cy,
            r
        ));
    }

    /// Build the final SVG string around the collected children
    pub fn build(self, tree: &RenderedTree) -> String {
        let nl = self.newline();

        let mut svg = String::new();

        // XML declaration for standalone
        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        let mut root = String::from("<svg");
        if let Some(id) = &tree.element_id {
            root.push_str(&attr("id", id));
        }
        if let Some(name) = &tree.data_name {
            root.push_str(&attr("data-name", name));
        }
        root.push_str(&attr("xmlns", &tree.namespace));
        if let Some(role) = &tree.role {
            root.push_str(&attr("role", role));
        }
        root.push_str(&attr("viewBox", &tree.view_box.to_string()));
        if let Some(width) = self.config.width {
            root.push_str(&attr("width", &width.to_string()));
        }
        if let Some(height) = self.config.height {
            root.push_str(&attr("height", &height.to_string()));
        }
        if let Some(fill) = &tree.fill {
            root.push_str(&attr("fill", fill));
        }
        root.push('>');

        svg.push_str(&root);
        svg.push_str(nl);

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Render a tree to an SVG string
pub fn render_svg(tree: &RenderedTree, config: &SvgConfig) -> String {
    let mut builder = SvgBuilder::new(config.clone());

    for child in &tree.children {
        match child {
            RenderedShape::Title { text } => builder.add_title(text),
            RenderedShape::Path {
                d,
                transform,
                class,
                style,
            } => builder.add_path(d, transform.as_deref(), class.as_deref(), style),
            RenderedShape::Circle { cx, cy, r, style } => builder.add_circle(*cx, *cy, *r, style),
        }
    }

    builder.build(tree)
}

fn attr(name: &str, value: &str) -> String {
    format!(r#" {}="{}""#, name, escape_xml(value))
}

/// Format resolved styles as an inline `style` attribute
fn style_attr(style: &ResolvedStyle) -> String {
    let mut parts = vec![];
    if let Some(fill) = &style.fill {
        parts.push(format!("fill:{}", fill));
    }
    if let Some(stroke) = &style.stroke {
        parts.push(format!("stroke:{}", stroke));
    }
    if let Some(limit) = style.stroke_miterlimit {
        parts.push(format!("stroke-miterlimit:{}", limit));
    }
    if let Some(width) = &style.stroke_width {
        parts.push(format!("stroke-width:{}", width));
    }
    if parts.is_empty() {
        String::new()
    } else {
        attr("style", &parts.join(";"))
    }
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
