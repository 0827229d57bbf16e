//! Logo identifiers and the static definition model
//!
//! Every mark is described by a [`LogoDefinition`]: container metadata plus
//! an ordered list of [`ShapePrimitive`]s. Definitions are `static` data; the
//! renderer only reads them.

pub mod catalog;

use std::fmt;
use std::str::FromStr;

use crate::error::ParseLogoError;

/// A logo family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Logo {
    Aptos,
    Arweave,
    Ipfs,
}

impl Logo {
    pub const ALL: [Logo; 3] = [Logo::Aptos, Logo::Arweave, Logo::Ipfs];

    pub fn name(self) -> &'static str {
        match self {
            Logo::Aptos => "aptos",
            Logo::Arweave => "arweave",
            Logo::Ipfs => "ipfs",
        }
    }

    /// Whether the variant parameter changes the output for this logo
    pub fn has_variants(self) -> bool {
        !matches!(self, Logo::Ipfs)
    }
}

impl fmt::Display for Logo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Color scheme applied to logos that support styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// For dark backgrounds
    #[default]
    Dark,
    /// For light backgrounds
    Light,
}

impl Variant {
    pub fn name(self) -> &'static str {
        match self {
            Variant::Dark => "dark",
            Variant::Light => "light",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = ParseLogoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Variant::Dark),
            "light" => Ok(Variant::Light),
            _ => Err(ParseLogoError::UnknownVariant(s.to_string())),
        }
    }
}

/// One of the five exported marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogoId {
    AptosBlack,
    AptosWhite,
    ArweaveDark,
    ArweaveLight,
    Ipfs,
}

impl LogoId {
    pub const ALL: [LogoId; 5] = [
        LogoId::AptosBlack,
        LogoId::AptosWhite,
        LogoId::ArweaveDark,
        LogoId::ArweaveLight,
        LogoId::Ipfs,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LogoId::AptosBlack => "aptos-black",
            LogoId::AptosWhite => "aptos-white",
            LogoId::ArweaveDark => "arweave-dark",
            LogoId::ArweaveLight => "arweave-light",
            LogoId::Ipfs => "ipfs",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|id| id.name()).collect()
    }

    /// Resolve a family and optional variant to a concrete mark
    ///
    /// A missing variant selects [`Variant::default`]. Aptos pairs the
    /// white mark with the dark variant, matching the style table where
    /// `dark` maps to white.
    pub fn select(logo: Logo, variant: Option<Variant>) -> LogoId {
        let variant = variant.unwrap_or_default();
        match (logo, variant) {
            (Logo::Aptos, Variant::Dark) => LogoId::AptosWhite,
            (Logo::Aptos, Variant::Light) => LogoId::AptosBlack,
            (Logo::Arweave, Variant::Dark) => LogoId::ArweaveDark,
            (Logo::Arweave, Variant::Light) => LogoId::ArweaveLight,
            (Logo::Ipfs, _) => LogoId::Ipfs,
        }
    }

    pub fn logo(self) -> Logo {
        match self {
            LogoId::AptosBlack | LogoId::AptosWhite => Logo::Aptos,
            LogoId::ArweaveDark | LogoId::ArweaveLight => Logo::Arweave,
            LogoId::Ipfs => Logo::Ipfs,
        }
    }

    /// The variant this mark represents, if the family has variants
    pub fn variant(self) -> Option<Variant> {
        match self {
            LogoId::AptosWhite | LogoId::ArweaveDark => Some(Variant::Dark),
            LogoId::AptosBlack | LogoId::ArweaveLight => Some(Variant::Light),
            LogoId::Ipfs => None,
        }
    }

    /// Parse a mark name, accepting variant names as suffixes
    ///
    /// `aptos-black`, `aptos-light` and `aptos` combined with
    /// `fallback = Some(Variant::Light)` all name the same mark. An explicit
    /// suffix wins over `fallback`.
    pub fn parse_with_variant(s: &str, fallback: Option<Variant>) -> Result<LogoId, ParseLogoError> {
        let lowered = s.trim().to_ascii_lowercase();
        let (family, suffix) = match lowered.split_once('-') {
            Some((family, suffix)) => (family, Some(suffix)),
            None => (lowered.as_str(), None),
        };

        let logo = match family {
            "aptos" => Logo::Aptos,
            "arweave" => Logo::Arweave,
            "ipfs" => Logo::Ipfs,
            _ => return Err(ParseLogoError::UnknownLogo(s.to_string())),
        };

        let variant = match (logo, suffix) {
            (_, None) => fallback,
            (Logo::Aptos, Some("white")) => Some(Variant::Dark),
            (Logo::Aptos, Some("black")) => Some(Variant::Light),
            (Logo::Ipfs, Some(_)) => return Err(ParseLogoError::UnknownLogo(s.to_string())),
            (_, Some(suffix)) => {
                Some(suffix.parse().map_err(|_| ParseLogoError::UnknownLogo(s.to_string()))?)
            }
        };

        Ok(LogoId::select(logo, variant))
    }

    /// The static definition behind this mark
    pub fn definition(self) -> &'static LogoDefinition {
        catalog::definition(self)
    }
}

impl fmt::Display for LogoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LogoId {
    type Err = ParseLogoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogoId::parse_with_variant(s, None)
    }
}

/// The four numeric bounds of an SVG viewBox
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    pub const fn new(min_x: f64, min_y: f64, width: f64, height: f64) -> Self {
        Self {
            min_x,
            min_y,
            width,
            height,
        }
    }
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.min_x, self.min_y, self.width, self.height)
    }
}

/// A color as written in a definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRef {
    /// Used as-is, e.g. `"none"` or `"white"`
    Literal(&'static str),
    /// Looked up in the style table for the requested variant
    Secondary,
}

/// Inline style declarations of a shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeStyle {
    pub fill: Option<ColorRef>,
    pub stroke: Option<ColorRef>,
    pub stroke_miterlimit: Option<f64>,
    pub stroke_width: Option<&'static str>,
}

impl ShapeStyle {
    /// No declarations; the shape inherits from its container
    pub const INHERIT: ShapeStyle = ShapeStyle {
        fill: None,
        stroke: None,
        stroke_miterlimit: None,
        stroke_width: None,
    };

    pub const fn fill(color: ColorRef) -> Self {
        ShapeStyle {
            fill: Some(color),
            ..Self::INHERIT
        }
    }
}

/// A drawable (or descriptive) child of a logo container
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapePrimitive {
    Path {
        d: &'static str,
        transform: Option<&'static str>,
        class: Option<&'static str>,
        style: ShapeStyle,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        style: ShapeStyle,
    },
    Title {
        text: &'static str,
    },
}

/// Static description of one mark
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogoDefinition {
    /// Logical identifier, matching [`LogoId::name`]
    pub id: &'static str,
    /// `id` attribute of the container element
    pub element_id: Option<&'static str>,
    /// `data-name` attribute of the container element
    pub data_name: Option<&'static str>,
    pub role: Option<&'static str>,
    pub view_box: ViewBox,
    /// Fill inherited by children without their own
    pub fill: Option<ColorRef>,
    pub shapes: &'static [ShapePrimitive],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_parse() {
        assert_eq!("dark".parse::<Variant>(), Ok(Variant::Dark));
        assert_eq!(" Light ".parse::<Variant>(), Ok(Variant::Light));
        assert_eq!(
            "dim".parse::<Variant>(),
            Err(ParseLogoError::UnknownVariant("dim".to_string()))
        );
    }

    #[test]
    fn test_default_variant_is_dark() {
        assert_eq!(Variant::default(), Variant::Dark);
        assert_eq!(LogoId::select(Logo::Arweave, None), LogoId::ArweaveDark);
        assert_eq!(LogoId::select(Logo::Aptos, None), LogoId::AptosWhite);
    }

    #[test]
    fn test_ipfs_ignores_variant() {
        assert_eq!(LogoId::select(Logo::Ipfs, Some(Variant::Light)), LogoId::Ipfs);
        assert_eq!(LogoId::select(Logo::Ipfs, Some(Variant::Dark)), LogoId::Ipfs);
        assert!(!Logo::Ipfs.has_variants());
    }

    #[test]
    fn test_parse_mark_names() {
        for id in LogoId::ALL {
            assert_eq!(id.name().parse::<LogoId>(), Ok(id));
        }
        assert_eq!("ARWEAVE-Light".parse::<LogoId>(), Ok(LogoId::ArweaveLight));
        assert_eq!("aptos-dark".parse::<LogoId>(), Ok(LogoId::AptosWhite));
        assert_eq!("aptos".parse::<LogoId>(), Ok(LogoId::AptosWhite));
    }

    #[test]
    fn test_parse_with_fallback_variant() {
        let id = LogoId::parse_with_variant("arweave", Some(Variant::Light));
        assert_eq!(id, Ok(LogoId::ArweaveLight));

        // explicit suffix wins
        let id = LogoId::parse_with_variant("arweave-dark", Some(Variant::Light));
        assert_eq!(id, Ok(LogoId::ArweaveDark));
    }

    #[test]
    fn test_parse_unknown_names() {
        for name in ["filecoin", "arweave-white", "ipfs-dark", ""] {
            assert_eq!(
                name.parse::<LogoId>(),
                Err(ParseLogoError::UnknownLogo(name.to_string()))
            );
        }
    }

    #[test]
    fn test_mark_roundtrips_family_and_variant() {
        for id in LogoId::ALL {
            assert_eq!(LogoId::select(id.logo(), id.variant()), id);
        }
    }

    #[test]
    fn test_viewbox_display() {
        assert_eq!(ViewBox::new(0.0, 0.0, 133.06, 133.06).to_string(), "0 0 133.06 133.06");
        assert_eq!(ViewBox::new(0.0, 0.0, 24.0, 24.0).to_string(), "0 0 24 24");
    }
}
