//! SVG output snapshots for the shipped marks

use brand_logos::{arweave_logo_dark, ipfs_logo, render_mark_svg, render_svg, LogoId, RenderConfig, SvgConfig};

fn fragment_config() -> SvgConfig {
    SvgConfig::new().with_standalone(false)
}

#[test]
fn test_ipfs_svg() {
    let svg = render_svg(&ipfs_logo(), &fragment_config());
    insta::assert_snapshot!(svg, @r#"
<svg xmlns="http://www.w3.org/2000/svg" role="img" viewBox="0 0 24 24">
  <title>IPFS icon</title>
  <path d="M12 0L1.608 6v12L12 24l10.392-6V6zm-1.073 1.445h.001a1.8 1.8 0 002.138 0l7.534 4.35a1.794 1.794 0 000 .403l-7.535 4.35a1.8 1.8 0 00-2.137 0l-7.536-4.35a1.795 1.795 0 000-.402zM21.324 7.4c.109.08.226.147.349.201v8.7a1.8 1.8 0 00-1.069 1.852l-7.535 4.35a1.8 1.8 0 00-.349-.2l-.009-8.653a1.8 1.8 0 001.07-1.851zm-18.648.048l7.535 4.35a1.8 1.8 0 001.069 1.852v8.7c-.124.054-.24.122-.349.202l-7.535-4.35a1.8 1.8 0 00-1.069-1.852v-8.7c.124-.054.24-.122.35-.202z"/>
</svg>
"#);
}

#[test]
fn test_arweave_dark_svg() {
    let svg = render_svg(&arweave_logo_dark(), &fragment_config());
    insta::assert_snapshot!(svg, @r#"
<svg id="Layer_1" data-name="Layer 1" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 133.06 133.06">
  <title>ⓐ_logo</title>
  <path style="fill:white" d="M77.61,91.53a10.57,10.57,0,0,1-.78-2.11,24.72,24.72,0,0,1-.55-2.52,16.49,16.49,0,0,1-2.43,2.15,16.79,16.79,0,0,1-3,1.77A18.35,18.35,0,0,1,67.11,92a20.55,20.55,0,0,1-4.35.44,21.44,21.44,0,0,1-7-1.1,16.56,16.56,0,0,1-5.47-3.08,13.73,13.73,0,0,1-4.86-10.63q0-7.83,5.84-12.11t17.44-4.29h7.1V58.31a7.2,7.2,0,0,0-2.34-5.66c-1.55-1.39-3.8-2.08-6.73-2.08-2.6,0-4.49.55-5.68,1.67a5.79,5.79,0,0,0-1.79,4.47H46.54a13.49,13.49,0,0,1,1.4-6,14.64,14.64,0,0,1,4.08-5,20.29,20.29,0,0,1,6.55-3.41A28.57,28.57,0,0,1,67.43,41a30.64,30.64,0,0,1,8.37,1.1,20.08,20.08,0,0,1,6.71,3.26A14.9,14.9,0,0,1,87,50.82a17,17,0,0,1,1.61,7.58V79.66a36.34,36.34,0,0,0,.5,6.6,17,17,0,0,0,1.47,4.49v.78ZM65.46,82.59A13.55,13.55,0,0,0,69,82.14a14.05,14.05,0,0,0,3-1.2,10.24,10.24,0,0,0,2.29-1.67,8.79,8.79,0,0,0,1.51-1.9V68.85H69.31a19.66,19.66,0,0,0-5.08.57A9.81,9.81,0,0,0,60.79,71a6.43,6.43,0,0,0-2,2.48,7.6,7.6,0,0,0-.64,3.14A5.58,5.58,0,0,0,60,80.9Q61.81,82.6,65.46,82.59Z" transform="translate(-0.79 -1.52)"/>
  <circle style="fill:none;stroke:white;stroke-miterlimit:10;stroke-width:9.65px" cx="66.53" cy="66.53" r="61.7"/>
</svg>
"#);
}

#[test]
fn test_aptos_white_root_carries_fill() {
    let config = RenderConfig::new().with_svg(fragment_config().with_pretty_print(false));
    let svg = render_mark_svg(LogoId::AptosWhite, &config);
    assert!(svg.starts_with(
        r#"<svg id="a" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 500 500" fill="white"><path class="b" d="M400.14,163.42h"#
    ));
    assert_eq!(svg.matches("<path ").count(), 4);
    assert!(svg.ends_with("/></svg>"));
}

#[test]
fn test_aptos_black_has_no_color_attributes() {
    let config = RenderConfig::new().with_svg(fragment_config());
    let svg = render_mark_svg(LogoId::AptosBlack, &config);
    assert!(!svg.contains("fill"));
    assert!(!svg.contains("style="));
    assert!(!svg.contains("class="));
}

#[test]
fn test_standalone_declaration() {
    let svg = render_svg(&ipfs_logo(), &SvgConfig::default());
    assert!(svg.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<svg "));
}
