//! Rainwater CLI - compute, render and serve trapped-water charts.

#![allow(clippy::needless_pass_by_value, clippy::doc_markdown)]

mod server;

use clap::{Args, Parser, Subcommand};
use rainwater::{Config, Controller, SceneOptions, TableFormat, ThemeName, Trigger};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rainwater")]
#[command(about = "Trapped rain water calculator and chart renderer")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute trapped water for a list of heights
    Compute {
        /// Heights as `[0,4,0]` or `0, 4, 0` (read from stdin when omitted)
        heights: Option<String>,

        /// Read heights from a file
        #[arg(short, long, conflicts_with = "heights")]
        file: Option<PathBuf>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Compute the built-in example `[0,4,0,0,0,6,0,6,4,0]`
    Example {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Serve the interactive page over HTTP
    Serve {
        /// Port to serve on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Configuration file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// Hide the grid overlay
    #[arg(long)]
    no_grid: bool,

    /// Hide column labels
    #[arg(long)]
    no_labels: bool,

    /// Write the chart as SVG
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Breakdown format (text, json, markdown)
    #[arg(long, default_value = "text")]
    format: TableFormat,

    /// Palette (dark, light); overrides config
    #[arg(long)]
    theme: Option<ThemeName>,

    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Compute {
            heights,
            file,
            output,
        } => read_heights(heights, file.as_deref())
            .and_then(|input| run_compute(&input, &output, Trigger::Compute)),
        Commands::Example { output } => run_compute("", &output, Trigger::LoadExample),
        Commands::Serve { port, config } => run_serve(port, config.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("Error: {message}");
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` wins; otherwise `-v` picks the level.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn load_config(path: Option<&Path>) -> Result<Config, String> {
    path.map_or_else(|| Ok(Config::default()), Config::load)
        .map_err(|e| e.to_string())
}

fn read_heights(arg: Option<String>, file: Option<&Path>) -> Result<String, String> {
    if let Some(text) = arg {
        return Ok(text);
    }
    if let Some(path) = file {
        return fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()));
    }
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .map_err(|e| format!("failed to read stdin: {e}"))?;
    Ok(text)
}

fn run_compute(input: &str, output: &OutputArgs, trigger: Trigger) -> Result<(), String> {
    let mut config = load_config(output.config.as_deref())?;
    if let Some(theme) = output.theme {
        config.chart.theme = theme;
    }
    let style = config.chart_style().map_err(|e| e.to_string())?;
    let options = SceneOptions {
        show_grid: config.display.grid && !output.no_grid,
        show_labels: config.display.labels && !output.no_labels,
    };

    let mut controller = Controller::new(input, options, style);
    if trigger != Trigger::Compute {
        controller.handle(trigger);
    }
    let view = controller.view();

    if let Some(message) = &view.error {
        return Err(message.clone());
    }

    println!("Total trapped water: {}", view.badge);
    if output.format != TableFormat::Json {
        println!("{}", view.breakdown.basin_summary());
    }
    println!();
    print!("{}", view.breakdown.render(output.format));
    if output.format == TableFormat::Json {
        println!();
    }

    if let (Some(path), Some(svg)) = (&output.svg, view.svg()) {
        fs::write(path, svg).map_err(|e| format!("failed to write {}: {e}", path.display()))?;
        println!();
        println!("Chart written to {}", path.display());
    }
    Ok(())
}

fn run_serve(port: Option<u16>, config: Option<&Path>) -> Result<(), String> {
    let mut config = load_config(config)?;
    if let Some(port) = port {
        config.server.port = port;
    }
    config.validate().map_err(|e| e.to_string())?;
    server::serve(&config)
}
