use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use maxrects_core::config::{Heuristic, PackerConfig, SortOrder};
use maxrects_core::{Layout, pack_best, pack_pages};
use serde::Deserialize;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(
    name = "maxrects",
    about = "Pack rectangles into atlas pages with the MaxRects algorithm",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action=ArgAction::Count, global=true, help_heading = "Logging")]
    verbose: u8,
    /// Quiet mode (overrides verbose)
    #[arg(short, long, default_value_t = false, global = true, help_heading = "Logging")]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Pack a rectangle list and write the layout as JSON
    Pack(PackArgs),
    /// Pack once per heuristic, log time and occupancy
    Bench(BenchArgs),
}

#[derive(Parser, Debug, Clone)]
struct PackArgs {
    /// Input file: JSON or YAML array of { key, width, height }
    #[arg(help_heading = "Input/Output")]
    input: PathBuf,
    /// Output file (stdout when omitted)
    #[arg(short, long, help_heading = "Input/Output")]
    out: Option<PathBuf>,
    /// YAML/JSON config file (overrides layout options)
    #[arg(long, help_heading = "Input/Output")]
    config: Option<PathBuf>,

    /// Page width
    #[arg(long, default_value_t = 1024, help_heading = "Layout")]
    width: u32,
    /// Page height
    #[arg(long, default_value_t = 1024, help_heading = "Layout")]
    height: u32,
    /// Allow rotation (90deg)
    #[arg(long, default_value_t = true, action=ArgAction::Set, help_heading = "Layout")]
    allow_rotation: bool,
    /// Sort order: none|area_desc|max_side_desc|height_desc|width_desc|name_asc
    #[arg(long, default_value = "none", help_heading = "Layout")]
    sort_order: String,

    /// Heuristic: bssf|blsf|baf|bl|cp|la or its numeric id (0-5)
    #[arg(long, default_value = "bssf", help_heading = "Heuristics")]
    heuristic: String,
    /// Try every heuristic and keep the tightest layout
    #[arg(long, default_value_t = false, help_heading = "Heuristics")]
    best: bool,
}

#[derive(Parser, Debug, Clone)]
struct BenchArgs {
    /// Input file: JSON or YAML array of { key, width, height }
    input: PathBuf,
    #[arg(long, default_value_t = 1024)]
    width: u32,
    #[arg(long, default_value_t = 1024)]
    height: u32,
    #[arg(long, default_value_t = true, action=ArgAction::Set)]
    allow_rotation: bool,
}

#[derive(Debug, Deserialize)]
struct InputItem {
    key: String,
    width: u32,
    height: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing_with_level(cli.quiet, cli.verbose);
    match &cli.command {
        Commands::Pack(args) => run_pack(args),
        Commands::Bench(args) => run_bench(args),
    }
}

fn run_pack(args: &PackArgs) -> anyhow::Result<()> {
    let cfg = build_config(args)?;
    cfg.validate()?;
    let items = load_items(&args.input)?;
    info!(
        items = items.len(),
        width = cfg.width,
        height = cfg.height,
        heuristic = cfg.heuristic.short_name(),
        "packing"
    );

    let layout: Layout = if args.best {
        pack_best(items, &cfg)?
    } else {
        pack_pages(items, &cfg)?
    };
    info!("{}", layout.stats().summary());
    if args.best {
        info!(heuristic = layout.heuristic.short_name(), "best heuristic");
    }

    let json = layout.to_json_pretty()?;
    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir {}", parent.display()))?;
            }
            fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
            info!(path = %path.display(), "layout written");
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn run_bench(b: &BenchArgs) -> anyhow::Result<()> {
    let items = load_items(&b.input)?;
    for heuristic in Heuristic::ALL {
        let cfg = PackerConfig::builder()
            .with_dimensions(b.width, b.height)
            .allow_rotation(b.allow_rotation)
            .heuristic(heuristic)
            .build();
        let start = Instant::now();
        let layout = pack_pages(items.clone(), &cfg)?;
        let elapsed = start.elapsed();
        let stats = layout.stats();
        info!(
            heuristic = heuristic.short_name(),
            ms = elapsed.as_secs_f64() * 1000.0,
            pages = stats.num_pages,
            occupancy = stats.occupancy,
            "bench"
        );
    }
    Ok(())
}

fn build_config(args: &PackArgs) -> anyhow::Result<PackerConfig> {
    if let Some(path) = &args.config {
        let text =
            fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
        let cfg: PackerConfig = if is_json(path) {
            serde_json::from_str(&text).with_context(|| format!("parse {}", path.display()))?
        } else {
            serde_yaml::from_str(&text).with_context(|| format!("parse {}", path.display()))?
        };
        debug!(?cfg, "config file loaded");
        return Ok(cfg);
    }
    let heuristic: Heuristic = args.heuristic.parse()?;
    let sort_order = parse_sort_order(&args.sort_order)?;
    Ok(PackerConfig::builder()
        .with_dimensions(args.width, args.height)
        .allow_rotation(args.allow_rotation)
        .heuristic(heuristic)
        .sort_order(sort_order)
        .build())
}

fn load_items(path: &Path) -> anyhow::Result<Vec<(String, u32, u32)>> {
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let items: Vec<InputItem> = if is_json(path) {
        serde_json::from_str(&text).with_context(|| format!("parse {}", path.display()))?
    } else {
        serde_yaml::from_str(&text).with_context(|| format!("parse {}", path.display()))?
    };
    debug!(count = items.len(), path = %path.display(), "items loaded");
    Ok(items
        .into_iter()
        .map(|it| (it.key, it.width, it.height))
        .collect())
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

fn init_tracing_with_level(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error".to_string()
    } else {
        match verbose {
            0 => "info".into(),
            1 => "debug".into(),
            _ => "trace".into(),
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn parse_sort_order(s: &str) -> anyhow::Result<SortOrder> {
    s.parse::<SortOrder>()
        .map_err(|_| anyhow::anyhow!("unknown sort order: {}", s))
}
