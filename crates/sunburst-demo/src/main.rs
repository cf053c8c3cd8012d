// File: crates/sunburst-demo/src/main.rs
// Summary: Demo loads a hierarchy JSON, applies optional edits and zoom, and writes SVG + PNG snapshots.

mod logger;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use sunburst_core::{ChartConfig, RenderOptions, Sunburst};

#[derive(Parser, Debug)]
#[command(name = "sunburst-demo", about = "Render a zoomable sunburst chart to SVG and PNG")]
struct Args {
    /// Hierarchy JSON file.
    #[arg(default_value = "data/hierarchy_data.json")]
    input: PathBuf,

    /// Chart config (TOML). Defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Theme preset name, overrides the config.
    #[arg(long)]
    theme: Option<String>,

    /// Set a leaf value, as NAME=VALUE. Repeatable.
    #[arg(long = "update", value_name = "NAME=VALUE")]
    updates: Vec<String>,

    /// Add a category, as PARENT/NAME/VALUE. Repeatable.
    #[arg(long = "add", value_name = "PARENT/NAME/VALUE")]
    adds: Vec<String>,

    /// Zoom into the first category with this name before rendering.
    #[arg(long)]
    zoom: Option<String>,

    /// Device pixel ratio for the PNG.
    #[arg(long, default_value_t = 1.0)]
    dpr: f32,

    /// Output directory.
    #[arg(long, default_value = "target/out")]
    out: PathBuf,

    #[arg(short, long)]
    verbose: bool,
}

fn split_update(raw: &str) -> Result<(&str, &str)> {
    raw.split_once('=').with_context(|| format!("expected NAME=VALUE, got '{raw}'"))
}

fn split_add(raw: &str) -> Result<(&str, &str, &str)> {
    let mut parts = raw.splitn(3, '/');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(p), Some(n), Some(v)) => Ok((p, n, v)),
        _ => bail!("expected PARENT/NAME/VALUE, got '{raw}'"),
    }
}

fn out_name(dir: &Path, input: &Path, suffix: &str, ext: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("sunburst");
    dir.join(format!("{stem}_{suffix}.{ext}"))
}

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let mut config = match &args.config {
        Some(p) => ChartConfig::load(p).with_context(|| format!("failed to load config '{}'", p.display()))?,
        None => ChartConfig::default(),
    };
    if let Some(theme) = &args.theme {
        config.theme = theme.clone();
    }

    let mut chart = Sunburst::load(&args.input, config)
        .with_context(|| format!("failed to load hierarchy '{}'", args.input.display()))?;

    for raw in &args.updates {
        let (name, value) = split_update(raw)?;
        chart.update_leaf(name, value).with_context(|| format!("update '{raw}'"))?;
    }
    for raw in &args.adds {
        let (parent, name, value) = split_add(raw)?;
        chart.add_category(parent, name, value).with_context(|| format!("add '{raw}'"))?;
    }
    chart.finish_animation();

    let mut suffix = "root".to_string();
    if let Some(name) = &args.zoom {
        let id = chart
            .hierarchy()
            .find_by_name(name)
            .with_context(|| format!("no category named '{name}'"))?;
        chart.click(id);
        chart.finish_animation();
        suffix = name.to_lowercase().replace(' ', "_");
    }

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("failed to create output dir '{}'", args.out.display()))?;

    let svg = out_name(&args.out, &args.input, &suffix, "svg");
    chart.render_to_svg(&svg)?;
    tracing::info!(path = %svg.display(), "wrote svg");

    let opts = RenderOptions { dpr: args.dpr, ..RenderOptions::default() };
    let png = out_name(&args.out, &args.input, &suffix, "png");
    chart.render_to_png(&opts, &png)?;
    tracing::info!(path = %png.display(), "wrote png");

    if let Some(tip) = chart.hover(chart.focus()) {
        println!("{}", tip.to_text(&chart.config().tooltip));
    }
    Ok(())
}
