use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use bin_packer_core::config::{SortOrder, Strategy};
use bin_packer_core::{
    PackerConfig, Packing, best_index, comparison_to_json, pack_all, pack_items, to_json,
};
use clap::{ArgAction, Args, Parser, Subcommand};
use serde::Deserialize;
use tracing::{debug, info};

/// Used when no items are given on the command line, in --input or in the config file.
const REFERENCE_ITEMS: [u32; 12] = [4, 3, 5, 4, 1, 3, 8, 3, 4, 3, 1, 4];

#[derive(Parser, Debug)]
#[command(
    name = "bin-packer",
    about = "Pack item sizes into fixed-capacity bins with greedy heuristics",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action=ArgAction::Count, global=true, help_heading = "Logging")]
    verbose: u8,
    /// Quiet mode (overrides verbose)
    #[arg(
        short,
        long,
        default_value_t = false,
        global = true,
        help_heading = "Logging"
    )]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Pack items with one strategy and print the bins
    Pack(PackArgs),
    /// Run every strategy on the same items and compare bin counts
    Compare(CompareArgs),
}

#[derive(Args, Debug, Clone)]
struct InputArgs {
    /// Item sizes (positive integers)
    #[arg(help_heading = "Input/Output")]
    items: Vec<u32>,
    /// File with item sizes separated by whitespace or commas
    #[arg(short, long, help_heading = "Input/Output")]
    input: Option<PathBuf>,
    /// YAML config file path (overrides command-line options)
    #[arg(long, help_heading = "Input/Output")]
    config: Option<PathBuf>,
    /// Output format: text | json
    #[arg(long, default_value = "text", value_parser = ["text", "json"], help_heading = "Input/Output")]
    format: String,
    /// Export packing stats (JSON) to this file
    #[arg(long, help_heading = "Input/Output")]
    export_stats: Option<PathBuf>,

    /// Capacity of every bin
    #[arg(long, default_value_t = bin_packer_core::DEFAULT_CAPACITY, help_heading = "Packing")]
    capacity: u32,
    /// Sort order: none|size_desc|size_asc
    #[arg(long, default_value = "none", help_heading = "Packing")]
    sort_order: String,

    /// Print the merged configuration (after CLI/YAML) and exit
    #[arg(long, default_value_t = false, help_heading = "Config")]
    print_config: bool,
    /// Output format for --print-config: json|yaml
    #[arg(long, default_value = "json", value_parser = ["json", "yaml"], help_heading = "Config")]
    print_config_format: String,
}

#[derive(Args, Debug, Clone)]
struct PackArgs {
    #[command(flatten)]
    input: InputArgs,
    /// Strategy: next-fit | first-fit | best-fit
    #[arg(short, long, default_value = "first-fit", help_heading = "Packing")]
    strategy: String,
}

#[derive(Args, Debug, Clone)]
struct CompareArgs {
    #[command(flatten)]
    input: InputArgs,
    /// Evaluate strategies in parallel (requires core feature `parallel`)
    #[arg(long, default_value_t = false, help_heading = "Packing")]
    parallel: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing_with_level(cli.quiet, cli.verbose);
    match &cli.command {
        Commands::Pack(args) => run_pack(args),
        Commands::Compare(args) => run_compare(args),
    }
}

fn run_pack(args: &PackArgs) -> anyhow::Result<()> {
    let strategy: Strategy = args
        .strategy
        .parse()
        .map_err(|_| anyhow::anyhow!("unknown strategy: {}", args.strategy))?;
    let Some((cfg, items)) = prepare(&args.input, |cfg| cfg.strategy = strategy)? else {
        return Ok(());
    };

    let packing = pack_items(&items, &cfg)
        .with_context(|| format!("packing {} items with {}", items.len(), cfg.strategy))?;
    info!(strategy = %packing.strategy, bins = packing.num_bins(), "packed");

    match args.input.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&to_json(&packing))?),
        _ => print!("{}", packing),
    }
    if let Some(path) = &args.input.export_stats {
        export_stats(path, std::slice::from_ref(&packing))?;
    }
    Ok(())
}

fn run_compare(args: &CompareArgs) -> anyhow::Result<()> {
    let Some((cfg, items)) = prepare(&args.input, |cfg| {
        if args.parallel {
            cfg.parallel = true;
        }
    })?
    else {
        return Ok(());
    };

    let results = pack_all(&items, &cfg)
        .with_context(|| format!("comparing strategies on {} items", items.len()))?;

    match args.input.format.as_str() {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&comparison_to_json(&results))?
        ),
        _ => print_comparison(&results),
    }
    if let Some(path) = &args.input.export_stats {
        export_stats(path, &results)?;
    }
    Ok(())
}

/// Merges CLI flags with the optional YAML file and resolves the item list.
/// Returns `None` when the merged config was printed instead.
fn prepare(
    args: &InputArgs,
    apply_cli: impl FnOnce(&mut PackerConfig),
) -> anyhow::Result<Option<(PackerConfig, Vec<u32>)>> {
    let mut cfg = PackerConfig {
        capacity: args.capacity,
        sort_order: parse_sort_order(&args.sort_order)?,
        ..Default::default()
    };
    apply_cli(&mut cfg);

    let mut items = args.items.clone();
    if let Some(path) = &args.input {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read items from {}", path.display()))?;
        items.extend(parse_items(&text).with_context(|| format!("parse {}", path.display()))?);
    }

    // Config file sets options en bloc; its items are used only when none were given.
    if let Some(path) = &args.config {
        let file = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let y: YamlConfig = serde_yaml::from_str(&file)
            .with_context(|| format!("parse config {}", path.display()))?;
        if items.is_empty() {
            items = y.items.clone().unwrap_or_default();
        }
        cfg = y.into_packer_config(cfg)?;
    }
    cfg.validate()?;

    if args.print_config {
        match args.print_config_format.as_str() {
            "yaml" => print!("{}", serde_yaml::to_string(&cfg)?),
            _ => println!("{}", serde_json::to_string_pretty(&cfg)?),
        }
        return Ok(None);
    }

    if items.is_empty() {
        debug!("no items given, using the reference sequence");
        items = REFERENCE_ITEMS.to_vec();
    }
    info!(count = items.len(), capacity = cfg.capacity, "loaded items");
    Ok(Some((cfg, items)))
}

fn print_comparison(results: &[Packing]) {
    for packing in results {
        println!("Testing {}...", packing.strategy);
        print!("{}", packing);
    }
    if results.is_empty() {
        return;
    }
    let best = &results[best_index(results)];
    println!(
        "Best: {} ({} bins, lower bound {})",
        best.strategy,
        best.num_bins(),
        best.stats().lower_bound
    );
}

fn export_stats(path: &Path, results: &[Packing]) -> anyhow::Result<()> {
    let stats: Vec<_> = results
        .iter()
        .map(|p| serde_json::json!({ "strategy": p.strategy, "stats": p.stats() }))
        .collect();
    let text = serde_json::to_string_pretty(&stats)?;
    fs::write(path, text).with_context(|| format!("write stats {}", path.display()))?;
    info!(?path, "stats exported");
    Ok(())
}

fn parse_items(text: &str) -> anyhow::Result<Vec<u32>> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u32>()
                .with_context(|| format!("invalid item size: {:?}", s))
        })
        .collect()
}

fn init_tracing_with_level(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error".to_string()
    } else {
        match verbose {
            0 => "warn".into(),
            1 => "info".into(),
            2 => "debug".into(),
            _ => "trace".into(),
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[derive(Debug, Deserialize, Default)]
struct YamlConfig {
    capacity: Option<u32>,
    strategy: Option<String>,
    sort_order: Option<String>,
    parallel: Option<bool>,
    items: Option<Vec<u32>>,
}

impl YamlConfig {
    fn into_packer_config(self, mut cfg: PackerConfig) -> anyhow::Result<PackerConfig> {
        if let Some(v) = self.capacity {
            cfg.capacity = v;
        }
        if let Some(v) = self.strategy {
            cfg.strategy = v
                .parse()
                .map_err(|_| anyhow::anyhow!("unknown strategy in config: {}", v))?;
        }
        if let Some(v) = self.sort_order {
            cfg.sort_order = parse_sort_order(&v)?;
        }
        if let Some(v) = self.parallel {
            cfg.parallel = v;
        }
        Ok(cfg)
    }
}

fn parse_sort_order(s: &str) -> anyhow::Result<SortOrder> {
    s.parse::<SortOrder>()
        .map_err(|_| anyhow::anyhow!("unknown sort order: {}", s))
}
