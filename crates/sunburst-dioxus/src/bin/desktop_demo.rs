// File: crates/sunburst-dioxus/src/bin/desktop_demo.rs
// Purpose: Launcher for the Dioxus desktop sunburst demo.

#[cfg(feature = "desktop")]
mod app {
    use std::path::PathBuf;

    use anyhow::{anyhow, Context};
    use clap::Parser;
    use sunburst_core::{ChartConfig, Node};
    use tracing_subscriber::EnvFilter;

    #[derive(Parser, Debug)]
    #[command(about = "Interactive sunburst chart in a desktop window")]
    struct Args {
        /// Hierarchy JSON file.
        #[arg(default_value = "data/hierarchy_data.json")]
        data: PathBuf,
        /// Optional chart config (TOML).
        #[arg(long)]
        config: Option<PathBuf>,
    }

    pub fn main() -> anyhow::Result<()> {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sunburst=info")))
            .init();
        let args = Args::parse();
        let config = match &args.config {
            Some(p) => ChartConfig::load(p).with_context(|| format!("loading config {}", p.display()))?,
            None => ChartConfig::default(),
        };
        let data = Node::load(&args.data).with_context(|| format!("loading data {}", args.data.display()))?;
        sunburst_dioxus::ui::run_demo_ui(data, config).map_err(|e| anyhow!(e))
    }
}

#[cfg(feature = "desktop")]
fn main() {
    if let Err(e) = app::main() {
        eprintln!("sunburst desktop demo error: {e:#}");
    }
}

#[cfg(not(feature = "desktop"))]
fn main() {
    eprintln!("This demo requires --features desktop");
}
