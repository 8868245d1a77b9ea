// Copyright 2025 the Tradeoff Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `tradeoff`: renders decision charts from a decision file.
//!
//! ```text
//! tradeoff render decision.toml --config chart.toml --out chart.svg
//! tradeoff render decision.json --chart placement
//! tradeoff summary decision.toml
//! ```
//!
//! Set `RUST_LOG=tradeoff=debug` for layout details on stderr.

use std::fs;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info, warn};
use tradeoff_chart::{
    ChartConfig, Scene, VectorChart, layout_empty_state, layout_placement_chart,
    layout_vector_chart, to_svg,
};
use tradeoff_decision::Decision;

mod load;
mod summary;

/// Decision charts from the command line.
#[derive(Parser, Debug)]
#[command(name = "tradeoff", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a chart as SVG.
    Render(RenderArgs),
    /// Print each row's change and the aggregate.
    Summary {
        /// Decision file (`.toml` or `.json`).
        decision: PathBuf,
        /// Chart config used for the viewport padding.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Decision file (`.toml` or `.json`).
    decision: PathBuf,
    /// Chart config (`.toml` or `.json`); missing fields use defaults.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Output file; stdout when omitted.
    #[arg(short, long)]
    out: Option<PathBuf>,
    /// Which chart to draw.
    #[arg(long, value_enum, default_value_t = ChartKind::Vector)]
    chart: ChartKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ChartKind {
    /// Rows chained head-to-tail with their aggregate.
    Vector,
    /// The unit-square chart where option dots are placed.
    Placement,
}

fn main() -> Result<()> {
    init_tracing();
    match Cli::parse().command {
        Command::Render(args) => render(&args),
        Command::Summary { decision, config } => {
            let config = chart_config(config.as_deref())?;
            let decision = decision_from(&decision)?;
            print!("{}", summary::summarize(&decision, config.padding_fraction));
            Ok(())
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // Only fails if a subscriber is already installed.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .try_init();
}

fn chart_config(path: Option<&Path>) -> Result<ChartConfig> {
    match path {
        Some(path) => {
            let config = load::load_chart_config(path)
                .with_context(|| format!("loading chart config {}", path.display()))?;
            debug!(path = %path.display(), ?config, "chart config loaded");
            Ok(config)
        }
        None => Ok(ChartConfig::default()),
    }
}

fn decision_from(path: &Path) -> Result<Decision> {
    let decision = load::load_decision(path)
        .with_context(|| format!("loading decision {}", path.display()))?;
    info!(
        path = %path.display(),
        rows = decision.rows().len(),
        placed = decision.vectors().len(),
        "decision loaded"
    );
    Ok(decision)
}

fn build_scene(decision: &Decision, config: &ChartConfig, kind: ChartKind) -> Scene {
    match kind {
        ChartKind::Placement => layout_placement_chart(decision, config),
        ChartKind::Vector => match layout_vector_chart(decision, config) {
            VectorChart::Laid(layout) => {
                debug!(
                    viewport = ?layout.projection.viewport(),
                    aggregate = ?layout.path.aggregate_end(),
                    "vector chart laid out"
                );
                layout.scene
            }
            VectorChart::Empty => {
                warn!("no placed rows; writing the empty state");
                layout_empty_state(config)
            }
        },
    }
}

fn render(args: &RenderArgs) -> Result<()> {
    let config = chart_config(args.config.as_deref())?;
    let decision = decision_from(&args.decision)?;
    let svg = to_svg(&build_scene(&decision, &config, args.chart));

    match &args.out {
        Some(out) => {
            fs::write(out, &svg).with_context(|| format!("writing {}", out.display()))?;
            info!(path = %out.display(), bytes = svg.len(), "svg written");
        }
        None => io::stdout()
            .lock()
            .write_all(svg.as_bytes())
            .context("writing svg to stdout")?,
    }
    Ok(())
}
