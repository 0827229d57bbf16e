//! Resolved output tree
//!
//! A [`RenderedTree`] is what the render entry points hand to a presentation
//! layer: owned data with every color reference replaced by a concrete value.

use crate::logo::{ColorRef, LogoDefinition, ShapePrimitive, ShapeStyle, Variant, ViewBox};
use crate::stylesheet::StyleTable;

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Style declarations with concrete color values
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolvedStyle {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_miterlimit: Option<f64>,
    pub stroke_width: Option<String>,
}

impl ResolvedStyle {
    pub fn is_empty(&self) -> bool {
        self.fill.is_none()
            && self.stroke.is_none()
            && self.stroke_miterlimit.is_none()
            && self.stroke_width.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderedShape {
    Path {
        d: String,
        transform: Option<String>,
        class: Option<String>,
        style: ResolvedStyle,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        style: ResolvedStyle,
    },
    Title {
        text: String,
    },
}

impl RenderedShape {
    /// Style of a drawable shape; `None` for titles
    pub fn style(&self) -> Option<&ResolvedStyle> {
        match self {
            RenderedShape::Path { style, .. } | RenderedShape::Circle { style, .. } => Some(style),
            RenderedShape::Title { .. } => None,
        }
    }

    pub fn is_drawable(&self) -> bool {
        !matches!(self, RenderedShape::Title { .. })
    }
}

/// Container element plus its resolved children
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedTree {
    /// Logical identifier of the definition this tree came from
    pub logo: String,
    pub namespace: String,
    pub element_id: Option<String>,
    pub data_name: Option<String>,
    pub role: Option<String>,
    pub view_box: ViewBox,
    /// Base fill on the container
    pub fill: Option<String>,
    pub children: Vec<RenderedShape>,
}

impl RenderedTree {
    /// Children that draw something (everything except titles)
    pub fn drawables(&self) -> impl Iterator<Item = &RenderedShape> {
        self.children.iter().filter(|c| c.is_drawable())
    }

    /// Text of the first title child, if any
    pub fn title(&self) -> Option<&str> {
        self.children.iter().find_map(|c| match c {
            RenderedShape::Title { text } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Resolve a static definition against a style table
pub fn resolve(def: &LogoDefinition, styles: &StyleTable, variant: Variant) -> RenderedTree {
    let color = |c: &ColorRef| -> String {
        match c {
            ColorRef::Literal(value) => value.to_string(),
            ColorRef::Secondary => styles.resolve(variant).to_string(),
        }
    };

    let resolve_style = |s: &ShapeStyle| ResolvedStyle {
        fill: s.fill.as_ref().map(color),
        stroke: s.stroke.as_ref().map(color),
        stroke_miterlimit: s.stroke_miterlimit,
        stroke_width: s.stroke_width.map(str::to_string),
    };

    let children = def
        .shapes
        .iter()
        .map(|shape| match shape {
            ShapePrimitive::Path {
                d,
                transform,
                class,
                style,
            } => RenderedShape::Path {
                d: d.to_string(),
                transform: transform.map(str::to_string),
                class: class.map(str::to_string),
                style: resolve_style(style),
            },
            ShapePrimitive::Circle { cx, cy, r, style } => RenderedShape::Circle {
                cx: *cx,
                cy: *cy,
                r: *r,
                style: resolve_style(style),
            },
            ShapePrimitive::Title { text } => RenderedShape::Title {
                text: text.to_string(),
            },
        })
        .collect();

    log::trace!(
        "resolved {} ({}) into {} children",
        def.id,
        variant,
        def.shapes.len()
    );

    RenderedTree {
        logo: def.id.to_string(),
        namespace: SVG_NAMESPACE.to_string(),
        element_id: def.element_id.map(str::to_string),
        data_name: def.data_name.map(str::to_string),
        role: def.role.map(str::to_string),
        view_box: def.view_box,
        fill: def.fill.as_ref().map(color),
        children,
    }
}
