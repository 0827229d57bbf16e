//! Literal geometry for every mark
//!
//! Coordinates and path data are reproduced exactly as the brand assets
//! ship them. Nothing here is computed.

use super::{ColorRef, LogoDefinition, LogoId, ShapePrimitive, ShapeStyle, ViewBox};

const APTOS_VIEW_BOX: ViewBox = ViewBox::new(0.0, 0.0, 500.0, 500.0);
const ARWEAVE_VIEW_BOX: ViewBox = ViewBox::new(0.0, 0.0, 133.06, 133.06);
const IPFS_VIEW_BOX: ViewBox = ViewBox::new(0.0, 0.0, 24.0, 24.0);

static APTOS_BLACK_SHAPES: [ShapePrimitive; 4] = [
    ShapePrimitive::Path {
        d: "M387.07,172.13h-42.4c-4.94,0-9.64-2.12-12.91-5.81l-17.2-19.43c-2.56-2.9-6.25-4.55-10.11-4.55s-7.55,1.66-10.11,4.55l-14.75,16.67c-4.83,5.45-11.76,8.58-19.04,8.58H28.46c-6.61,18.84-10.92,38.74-12.64,59.38H234.92c3.85,0,7.54-1.57,10.2-4.35l20.4-21.29c2.55-2.66,6.07-4.16,9.75-4.16h.84c3.87,0,7.55,1.66,10.11,4.56l17.19,19.43c3.27,3.7,7.97,5.81,12.91,5.81h178.84c-1.72-20.65-6.03-40.55-12.64-59.38h-95.46Z",
        transform: None,
        class: None,
        style: ShapeStyle::INHERIT,
    },
    ShapePrimitive::Path {
        d: "M148.4,356.39c3.85,0,7.54-1.57,10.2-4.35l20.4-21.29c2.55-2.66,6.07-4.16,9.75-4.16h.84c3.87,0,7.55,1.66,10.11,4.55l17.19,19.43c3.27,3.7,7.97,5.81,12.91,5.81h242.36c9.08-18.76,15.73-38.89,19.69-59.98h-232.63c-4.94,0-9.64-2.12-12.91-5.81l-17.19-19.43c-2.56-2.9-6.25-4.55-10.11-4.55s-7.55,1.66-10.11,4.55l-14.75,16.67c-4.83,5.45-11.76,8.58-19.05,8.58H19.12c3.96,21.09,10.62,41.22,19.69,59.98h109.59Z",
        transform: None,
        class: None,
        style: ShapeStyle::INHERIT,
    },
    ShapePrimitive::Path {
        d: "M320.34,107.24c3.85,0,7.54-1.57,10.2-4.35l20.4-21.29c2.55-2.66,6.07-4.16,9.75-4.16h.84c3.87,0,7.55,1.66,10.11,4.56l17.19,19.43c3.27,3.7,7.97,5.81,12.91,5.81h46.09C403.94,48.9,334.13,11.16,255.49,11.16S107.04,48.9,63.15,107.24H320.34Z",
        transform: None,
        class: None,
        style: ShapeStyle::INHERIT,
    },
    ShapePrimitive::Path {
        d: "M227.77,415.83h-63.03c-4.94,0-9.64-2.12-12.91-5.81l-17.19-19.43c-2.56-2.9-6.25-4.55-10.11-4.55s-7.55,1.66-10.11,4.55l-14.75,16.67c-4.83,5.45-11.76,8.58-19.05,8.58h-.98c43.91,47.05,106.44,76.5,175.87,76.5s131.95-29.45,175.87-76.5H227.77Z",
        transform: None,
        class: None,
        style: ShapeStyle::INHERIT,
    },
];

// The white mark is drawn with its own (offset) coordinates, not a recolor
// of the black one.
static APTOS_WHITE_SHAPES: [ShapePrimitive; 4] = [
    ShapePrimitive::Path {
        d: "M400.14,163.42h-42.4c-4.94,0-9.64-2.12-12.91-5.81l-17.2-19.43c-2.56-2.9-6.25-4.55-10.11-4.55s-7.55,1.66-10.11,4.55l-14.75,16.67c-4.83,5.45-11.76,8.58-19.04,8.58H41.53c-6.61,18.84-10.92,38.74-12.64,59.38H247.99c3.85,0,7.54-1.57,10.2-4.35l20.4-21.29c2.55-2.66,6.07-4.16,9.75-4.16h.84c3.87,0,7.55,1.66,10.11,4.56l17.19,19.43c3.27,3.7,7.97,5.81,12.91,5.81h178.84c-1.72-20.65-6.03-40.55-12.64-59.38h-95.46Z",
        transform: None,
        class: Some("b"),
        style: ShapeStyle::INHERIT,
    },
    ShapePrimitive::Path {
        d: "M161.48,347.67c3.85,0,7.54-1.57,10.2-4.35l20.4-21.29c2.55-2.66,6.07-4.16,9.75-4.16h.84c3.87,0,7.55,1.66,10.11,4.55l17.19,19.43c3.27,3.7,7.97,5.81,12.91,5.81h242.36c9.08-18.76,15.73-38.89,19.69-59.98h-232.63c-4.94,0-9.64-2.12-12.91-5.81l-17.19-19.43c-2.56-2.9-6.25-4.55-10.11-4.55s-7.55,1.66-10.11,4.55l-14.75,16.67c-4.83,5.45-11.76,8.58-19.05,8.58H32.19c3.96,21.09,10.62,41.22,19.69,59.98h109.59Z",
        transform: None,
        class: Some("b"),
        style: ShapeStyle::INHERIT,
    },
    ShapePrimitive::Path {
        d: "M333.42,98.52c3.85,0,7.54-1.57,10.2-4.35l20.4-21.29c2.55-2.66,6.07-4.16,9.75-4.16h.84c3.87,0,7.55,1.66,10.11,4.56l17.19,19.43c3.27,3.7,7.97,5.81,12.91,5.81h46.09C417.02,40.18,347.21,2.44,268.57,2.44S120.12,40.18,76.22,98.52H333.42Z",
        transform: None,
        class: Some("b"),
        style: ShapeStyle::INHERIT,
    },
    ShapePrimitive::Path {
        d: "M240.84,407.11h-63.03c-4.94,0-9.64-2.12-12.91-5.81l-17.19-19.43c-2.56-2.9-6.25-4.55-10.11-4.55s-7.55,1.66-10.11,4.55l-14.75,16.67c-4.83,5.45-11.76,8.58-19.05,8.58h-.98c43.91,47.05,106.44,76.5,175.87,76.5s131.95-29.45,175.87-76.5H240.84Z",
        transform: None,
        class: Some("b"),
        style: ShapeStyle::INHERIT,
    },
];

static ARWEAVE_SHAPES: [ShapePrimitive; 3] = [
    ShapePrimitive::Title {
        text: "\u{24D0}_logo",
    },
    ShapePrimitive::Path {
        d: "M77.61,91.53a10.57,10.57,0,0,1-.78-2.11,24.72,24.72,0,0,1-.55-2.52,16.49,16.49,0,0,1-2.43,2.15,16.79,16.79,0,0,1-3,1.77A18.35,18.35,0,0,1,67.11,92a20.55,20.55,0,0,1-4.35.44,21.44,21.44,0,0,1-7-1.1,16.56,16.56,0,0,1-5.47-3.08,13.73,13.73,0,0,1-4.86-10.63q0-7.83,5.84-12.11t17.44-4.29h7.1V58.31a7.2,7.2,0,0,0-2.34-5.66c-1.55-1.39-3.8-2.08-6.73-2.08-2.6,0-4.49.55-5.68,1.67a5.79,5.79,0,0,0-1.79,4.47H46.54a13.49,13.49,0,0,1,1.4-6,14.64,14.64,0,0,1,4.08-5,20.29,20.29,0,0,1,6.55-3.41A28.57,28.57,0,0,1,67.43,41a30.64,30.64,0,0,1,8.37,1.1,20.08,20.08,0,0,1,6.71,3.26A14.9,14.9,0,0,1,87,50.82a17,17,0,0,1,1.61,7.58V79.66a36.34,36.34,0,0,0,.5,6.6,17,17,0,0,0,1.47,4.49v.78ZM65.46,82.59A13.55,13.55,0,0,0,69,82.14a14.05,14.05,0,0,0,3-1.2,10.24,10.24,0,0,0,2.29-1.67,8.79,8.79,0,0,0,1.51-1.9V68.85H69.31a19.66,19.66,0,0,0-5.08.57A9.81,9.81,0,0,0,60.79,71a6.43,6.43,0,0,0-2,2.48,7.6,7.6,0,0,0-.64,3.14A5.58,5.58,0,0,0,60,80.9Q61.81,82.6,65.46,82.59Z",
        transform: Some("translate(-0.79 -1.52)"),
        class: None,
        style: ShapeStyle::fill(ColorRef::Secondary),
    },
    ShapePrimitive::Circle {
        cx: 66.53,
        cy: 66.53,
        r: 61.7,
        style: ShapeStyle {
            fill: Some(ColorRef::Literal("none")),
            stroke: Some(ColorRef::Secondary),
            stroke_miterlimit: Some(10.0),
            stroke_width: Some("9.65px"),
        },
    },
];

static IPFS_SHAPES: [ShapePrimitive; 2] = [
    ShapePrimitive::Title { text: "IPFS icon" },
    ShapePrimitive::Path {
        d: "M12 0L1.608 6v12L12 24l10.392-6V6zm-1.073 1.445h.001a1.8 1.8 0 002.138 0l7.534 4.35a1.794 1.794 0 000 .403l-7.535 4.35a1.8 1.8 0 00-2.137 0l-7.536-4.35a1.795 1.795 0 000-.402zM21.324 7.4c.109.08.226.147.349.201v8.7a1.8 1.8 0 00-1.069 1.852l-7.535 4.35a1.8 1.8 0 00-.349-.2l-.009-8.653a1.8 1.8 0 001.07-1.851zm-18.648.048l7.535 4.35a1.8 1.8 0 001.069 1.852v8.7c-.124.054-.24.122-.349.202l-7.535-4.35a1.8 1.8 0 00-1.069-1.852v-8.7c.124-.054.24-.122.35-.202z",
        transform: None,
        class: None,
        style: ShapeStyle::INHERIT,
    },
];

pub static APTOS_BLACK: LogoDefinition = LogoDefinition {
    id: "aptos-black",
    element_id: Some("a"),
    data_name: None,
    role: None,
    view_box: APTOS_VIEW_BOX,
    fill: None,
    shapes: &APTOS_BLACK_SHAPES,
};

pub static APTOS_WHITE: LogoDefinition = LogoDefinition {
    id: "aptos-white",
    element_id: Some("a"),
    data_name: None,
    role: None,
    view_box: APTOS_VIEW_BOX,
    fill: Some(ColorRef::Literal("white")),
    shapes: &APTOS_WHITE_SHAPES,
};

// Both Arweave marks share one definition; the variant picks the color.
pub static ARWEAVE: LogoDefinition = LogoDefinition {
    id: "arweave",
    element_id: Some("Layer_1"),
    data_name: Some("Layer 1"),
    role: None,
    view_box: ARWEAVE_VIEW_BOX,
    fill: None,
    shapes: &ARWEAVE_SHAPES,
};

pub static IPFS: LogoDefinition = LogoDefinition {
    id: "ipfs",
    element_id: None,
    data_name: None,
    role: Some("img"),
    view_box: IPFS_VIEW_BOX,
    fill: None,
    shapes: &IPFS_SHAPES,
};

pub fn definition(id: LogoId) -> &'static LogoDefinition {
    match id {
        LogoId::AptosBlack => &APTOS_BLACK,
        LogoId::AptosWhite => &APTOS_WHITE,
        LogoId::ArweaveDark | LogoId::ArweaveLight => &ARWEAVE,
        LogoId::Ipfs => &IPFS,
    }
}
