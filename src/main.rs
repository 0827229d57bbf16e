//! Brand Logos CLI
//!
//! Usage:
//!   brand-logos [OPTIONS] [LOGO]
//!
//! Options:
//!   -v, --variant <VARIANT>    Color variant (dark or light)
//!   -s, --stylesheet <FILE>    Style table file (TOML format)
//!   -l, --list                 List available marks
//!   -d, --debug                Log the resolved tree to stderr
//!   -h, --help                 Print help

use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use brand_logos::{render_mark_svg, LogoId, RenderConfig, StyleTable, SvgConfig, Variant};

#[derive(Parser)]
#[command(name = "brand-logos")]
#[command(about = "Print static brand marks as SVG")]
struct Cli {
    /// Logo to print, e.g. `arweave`, `arweave-light` or `aptos-black`
    logo: Option<String>,

    /// Color variant for logos that support one (dark or light)
    #[arg(short, long)]
    variant: Option<String>,

    /// Style table file (TOML format)
    #[arg(short, long)]
    stylesheet: Option<PathBuf>,

    /// Width attribute for the root element
    #[arg(long)]
    width: Option<f64>,

    /// Height attribute for the root element
    #[arg(long)]
    height: Option<f64>,

    /// Emit everything on one line
    #[arg(long)]
    compact: bool,

    /// Omit the XML declaration
    #[arg(long)]
    no_xml_declaration: bool,

    /// List available marks
    #[arg(short, long)]
    list: bool,

    /// Debug mode: log the resolved tree to stderr
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.debug {
        logger.filter_level(LevelFilter::Trace);
    }
    logger.target(env_logger::Target::Stderr).init();

    if cli.list {
        print_list();
        return;
    }

    let Some(name) = &cli.logo else {
        print_intro();
        return;
    };

    let variant = match cli.variant.as_deref().map(str::parse::<Variant>).transpose() {
        Ok(variant) => variant,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let id = match LogoId::parse_with_variant(name, variant) {
        Ok(id) => id,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Load style table
    let styles = match &cli.stylesheet {
        Some(path) => match StyleTable::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading stylesheet '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => StyleTable::default(),
    };

    let mut svg = SvgConfig::new()
        .with_pretty_print(!cli.compact)
        .with_standalone(!cli.no_xml_declaration);
    if let Some(width) = cli.width {
        svg = svg.with_width(width);
    }
    if let Some(height) = cli.height {
        svg = svg.with_height(height);
    }

    let config = RenderConfig::new()
        .with_svg(svg)
        .with_styles(styles)
        .with_debug(cli.debug);

    println!("{}", render_mark_svg(id, &config));
}

fn print_list() {
    for id in LogoId::ALL {
        let def = id.definition();
        let variant = id.variant().map(|v| v.name()).unwrap_or("-");
        println!("{:<14} {:<6} viewBox=\"{}\"", id.name(), variant, def.view_box);
    }
}

fn print_intro() {
    println!(
        r##"Brand Logos - static brand marks as SVG

USAGE:
    brand-logos [OPTIONS] <LOGO>

LOGOS:
    aptos       (aptos-white | aptos-black)
    arweave     (arweave-dark | arweave-light)
    ipfs

OPTIONS:
    -v, --variant      dark or light (default: dark)
    -s, --stylesheet   Custom variant colors (TOML file)
    --width, --height  Size attributes on the root element
    --compact          Single-line output
    -l, --list         List available marks
    -d, --debug        Log the resolved tree to stderr
    -h, --help         Print help

STYLESHEET FORMAT:
    [colors]
    dark = "white"
    light = "#222326"

QUICK START:
    brand-logos arweave --variant light > arweave.svg"##
    );
}
