use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use masonry_grid_core::config::{ColumnStrategy, Insets, LayoutParameters};
use masonry_grid_core::{
    ItemSpec, ItemSpecs, LayoutResult, Meta, Rect, compute_layout, to_json, to_json_keyed,
    validate_items,
};
use serde::Deserialize;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(
    name = "masonry-grid",
    about = "Lay out items into masonry (Pinterest-style) columns",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action=ArgAction::Count, global=true, help_heading = "Logging/UX")]
    verbose: u8,
    /// Quiet mode (overrides verbose)
    #[arg(
        short,
        long,
        default_value_t = false,
        global = true,
        help_heading = "Logging/UX"
    )]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute placements and export them as JSON
    Layout(LayoutArgs),
    /// Print the placements intersecting a viewport
    Query(QueryArgs),
    /// Print layout statistics
    Stats(LayoutArgs),
    /// Generate a random item file (for demos and benchmarks)
    Generate(GenerateArgs),
}

#[derive(Parser, Debug, Clone)]
struct LayoutArgs {
    // Input/Output
    /// Item file (JSON or YAML list of items)
    #[arg(help_heading = "Input/Output")]
    input: PathBuf,
    /// Output file for the JSON layout (stdout when omitted)
    #[arg(short, long, help_heading = "Input/Output")]
    out: Option<PathBuf>,
    /// YAML config file path (overrides layout options)
    #[arg(long, help_heading = "Input/Output")]
    config: Option<PathBuf>,

    // Layout
    /// Number of columns
    #[arg(long, default_value_t = 2, help_heading = "Layout")]
    columns: u32,
    /// Padding around every item
    #[arg(long, default_value_t = 6.0, help_heading = "Layout")]
    padding: f64,
    /// Content width (takes precedence over --bounds-width)
    #[arg(long, help_heading = "Layout")]
    width: Option<f64>,
    /// Container width; content width is this minus the insets
    #[arg(long, default_value_t = 320.0, help_heading = "Layout")]
    bounds_width: f64,
    /// Left content inset of the container
    #[arg(long, default_value_t = 0.0, help_heading = "Layout")]
    inset_left: f64,
    /// Right content inset of the container
    #[arg(long, default_value_t = 0.0, help_heading = "Layout")]
    inset_right: f64,
    /// Column assignment: round_robin | shortest
    #[arg(long, default_value = "round_robin", help_heading = "Layout")]
    strategy: String,

    // Export
    /// Key items by their names instead of listing them by index
    #[arg(long, default_value_t = false, help_heading = "Export")]
    keyed: bool,
    /// Export layout stats (JSON) to this file
    #[arg(long, help_heading = "Export")]
    export_stats: Option<PathBuf>,
    /// Print the merged configuration (after CLI/YAML) and exit
    #[arg(long, default_value_t = false, help_heading = "Export")]
    print_config: bool,
    /// Output format for --print-config: json|yaml
    #[arg(long, default_value = "json", value_parser = ["json", "yaml"], help_heading = "Export")]
    print_config_format: String,
}

#[derive(Parser, Debug, Clone)]
struct QueryArgs {
    #[command(flatten)]
    layout: LayoutArgs,
    /// Viewport left edge
    #[arg(long, default_value_t = 0.0, help_heading = "Viewport")]
    x: f64,
    /// Viewport top edge
    #[arg(long, default_value_t = 0.0, help_heading = "Viewport")]
    y: f64,
    /// Viewport width (defaults to the content width)
    #[arg(long, help_heading = "Viewport")]
    viewport_width: Option<f64>,
    /// Viewport height
    #[arg(long, default_value_t = 568.0, help_heading = "Viewport")]
    viewport_height: f64,
}

#[derive(Parser, Debug, Clone)]
struct GenerateArgs {
    /// Output file (stdout when omitted); .yaml/.yml writes YAML, anything else JSON
    #[arg(short, long)]
    out: Option<PathBuf>,
    /// Number of items
    #[arg(long, default_value_t = 30)]
    count: usize,
    /// RNG seed for reproducible output
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing_with_level(cli.quiet, cli.verbose);
    match &cli.command {
        Commands::Layout(args) => run_layout(args),
        Commands::Query(args) => run_query(args),
        Commands::Stats(args) => run_stats(args),
        Commands::Generate(args) => run_generate(args),
    }
}

/// Merges CLI flags and the optional YAML file into validated parameters.
fn build_params(args: &LayoutArgs) -> anyhow::Result<LayoutParameters> {
    let content_width = args.width.unwrap_or_else(|| {
        LayoutParameters::content_width_for(
            args.bounds_width,
            Insets {
                left: args.inset_left,
                right: args.inset_right,
            },
        )
    });
    let mut params = LayoutParameters {
        column_count: args.columns,
        cell_padding: args.padding,
        content_width,
        strategy: parse_strategy(&args.strategy)?,
    };
    if let Some(path) = &args.config {
        let file = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let y: YamlConfig = serde_yaml::from_str(&file)
            .with_context(|| format!("parse config {}", path.display()))?;
        params = y.into_layout_parameters(params)?;
    }
    params.validate()?;
    Ok(params)
}

fn load_items(path: &Path) -> anyhow::Result<Vec<ItemSpec>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read items {}", path.display()))?;
    let items: Vec<ItemSpec> = if is_yaml(path) {
        serde_yaml::from_str(&text).with_context(|| format!("parse YAML {}", path.display()))?
    } else {
        serde_json::from_str(&text).with_context(|| format!("parse JSON {}", path.display()))?
    };
    validate_items(&items)?;
    info!(count = items.len(), "loaded items");
    Ok(items)
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref(),
        Some("yaml") | Some("yml")
    )
}

/// Loads items, computes the layout, and reports timing. Returns `None` for `--print-config`.
fn prepare(
    args: &LayoutArgs,
) -> anyhow::Result<Option<(LayoutParameters, Vec<ItemSpec>, LayoutResult)>> {
    let params = build_params(args)?;
    if args.print_config {
        match args.print_config_format.as_str() {
            "yaml" => println!("{}", serde_yaml::to_string(&params)?),
            _ => println!("{}", serde_json::to_string_pretty(&params)?),
        }
        return Ok(None);
    }
    let items = load_items(&args.input)?;
    let t0 = Instant::now();
    let result = compute_layout(items.len(), &params, &mut ItemSpecs(&items))?;
    debug!(elapsed_us = t0.elapsed().as_micros() as u64, "layout pass");
    info!(
        items = result.len(),
        columns = params.column_count,
        width = result.content_width,
        height = result.content_height,
        "layout computed"
    );
    Ok(Some((params, items, result)))
}

fn run_layout(args: &LayoutArgs) -> anyhow::Result<()> {
    let Some((params, items, result)) = prepare(args)? else {
        return Ok(());
    };
    let meta = Meta::for_params(&params);
    let value = if args.keyed {
        let keys: Vec<&str> = items.iter().map(|it| it.key.as_str()).collect();
        to_json_keyed(&result, keys.as_slice(), &meta)
    } else {
        to_json(&result, &meta)
    };
    let json = serde_json::to_string_pretty(&value)?;
    match &args.out {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
            info!(?path, "layout written");
        }
        None => println!("{}", json),
    }
    if let Some(stats_path) = &args.export_stats {
        let stats = result.stats();
        fs::write(stats_path, serde_json::to_string_pretty(&stats)?)
            .with_context(|| format!("write {}", stats_path.display()))?;
        info!(?stats_path, "stats exported");
    }
    Ok(())
}

fn run_query(args: &QueryArgs) -> anyhow::Result<()> {
    let Some((_params, items, result)) = prepare(&args.layout)? else {
        return Ok(());
    };
    let viewport = Rect::new(
        args.x,
        args.y,
        args.viewport_width.unwrap_or(result.content_width),
        args.viewport_height,
    );
    let mut hits = 0usize;
    for p in result.query(viewport) {
        hits += 1;
        let key = items
            .get(p.index)
            .map(|it| it.key.as_str())
            .filter(|k| !k.is_empty())
            .unwrap_or("-");
        println!(
            "{:>5} {:<16} col {:>2}  x {:>8.1}  y {:>8.1}  w {:>7.1}  h {:>7.1}",
            p.index, key, p.column, p.frame.x, p.frame.y, p.frame.w, p.frame.h
        );
    }
    info!(hits, ?viewport, "viewport query");
    Ok(())
}

fn run_stats(args: &LayoutArgs) -> anyhow::Result<()> {
    let Some((_params, _items, result)) = prepare(args)? else {
        return Ok(());
    };
    let stats = result.stats();
    println!("{}", stats.summary());
    for (i, h) in stats.column_heights.iter().enumerate() {
        println!("  column {}: {:.1}", i, h);
    }
    Ok(())
}

fn run_generate(args: &GenerateArgs) -> anyhow::Result<()> {
    use rand::{Rng, SeedableRng};
    let mut rng = rand::rngs::StdRng::seed_from_u64(args.seed);
    let items: Vec<ItemSpec> = (0..args.count)
        .map(|i| {
            let w = rng.gen_range(400..=1600) as f64;
            let h = rng.gen_range(300..=2000) as f64;
            let lines = rng.gen_range(1..=3) as f64;
            ItemSpec::with_aspect(format!("photo_{:03}", i), w, h, 12.0 + lines * 17.0)
        })
        .collect();
    let text = match &args.out {
        Some(path) if is_yaml(path) => serde_yaml::to_string(&items)?,
        _ => serde_json::to_string_pretty(&items)?,
    };
    match &args.out {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("write {}", path.display()))?;
            info!(?path, count = items.len(), "items generated");
        }
        None => println!("{}", text),
    }
    Ok(())
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

#[derive(Debug, Deserialize, Default)]
struct YamlConfig {
    columns: Option<u32>,
    padding: Option<f64>,
    width: Option<f64>,
    bounds_width: Option<f64>,
    inset_left: Option<f64>,
    inset_right: Option<f64>,
    strategy: Option<String>,
}

impl YamlConfig {
    fn into_layout_parameters(
        self,
        mut params: LayoutParameters,
    ) -> anyhow::Result<LayoutParameters> {
        if let Some(v) = self.columns {
            params.column_count = v;
        }
        if let Some(v) = self.padding {
            params.cell_padding = v;
        }
        if let Some(bounds) = self.bounds_width {
            params.content_width = LayoutParameters::content_width_for(
                bounds,
                Insets {
                    left: self.inset_left.unwrap_or(0.0),
                    right: self.inset_right.unwrap_or(0.0),
                },
            );
        }
        if let Some(v) = self.width {
            params.content_width = v;
        }
        if let Some(v) = self.strategy {
            params.strategy = parse_strategy(&v)?;
        }
        Ok(params)
    }
}

fn parse_strategy(s: &str) -> anyhow::Result<ColumnStrategy> {
    s.parse()
        .map_err(|_| anyhow::anyhow!("unknown column strategy: {}", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> LayoutArgs {
        LayoutArgs {
            input: PathBuf::from("items.json"),
            out: None,
            config: None,
            columns: 2,
            padding: 6.0,
            width: None,
            bounds_width: 320.0,
            inset_left: 10.0,
            inset_right: 10.0,
            strategy: "round_robin".into(),
            keyed: false,
            export_stats: None,
            print_config: false,
            print_config_format: "json".into(),
        }
    }

    #[test]
    fn content_width_from_bounds_and_insets() {
        let p = build_params(&args()).unwrap();
        assert_eq!(p.content_width, 300.0);
        assert_eq!(p.column_count, 2);
    }

    #[test]
    fn explicit_width_wins() {
        let mut a = args();
        a.width = Some(500.0);
        assert_eq!(build_params(&a).unwrap().content_width, 500.0);
    }

    #[test]
    fn yaml_overrides_flags() {
        let text = "columns: 3\nstrategy: shortest\nbounds_width: 400\ninset_left: 20\n";
        let y: YamlConfig = serde_yaml::from_str(text).unwrap();
        let p = y
            .into_layout_parameters(LayoutParameters::new(2, 6.0, 300.0))
            .unwrap();
        assert_eq!(p.column_count, 3);
        assert_eq!(p.strategy, ColumnStrategy::Shortest);
        assert_eq!(p.content_width, 380.0);
        assert_eq!(p.cell_padding, 6.0);
    }

    #[test]
    fn unknown_yaml_strategy_is_an_error() {
        let y: YamlConfig = serde_yaml::from_str("strategy: tallest\n").unwrap();
        let err = y
            .into_layout_parameters(LayoutParameters::new(2, 6.0, 300.0))
            .unwrap_err();
        assert!(err.to_string().contains("tallest"));
    }

    #[test]
    fn unknown_strategy_is_an_error() {
        let mut a = args();
        a.strategy = "tallest".into();
        assert!(build_params(&a).is_err());
    }

    #[test]
    fn invalid_columns_fail_validation() {
        let mut a = args();
        a.columns = 0;
        assert!(build_params(&a).is_err());
    }

    #[test]
    fn yaml_extension_detection() {
        assert!(is_yaml(Path::new("items.YML")));
        assert!(is_yaml(Path::new("a/b.yaml")));
        assert!(!is_yaml(Path::new("items.json")));
    }
}
