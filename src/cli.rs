//! Command-line interface for gridglyph.
//!
//! Argument parsing, config loading and dispatch to the command modules.

use crate::commands;
use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use gridglyph_config::{Config, GridShape, LogLevel, RenderOverrides};
use std::path::PathBuf;

/// gridglyph - Render text with pixel-grid glyph tables and build matching fonts
#[derive(Parser, Debug)]
#[command(name = "gridglyph")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file to use instead of ~/.config/gridglyph/config.yaml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Diagnostic verbosity (off, error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a text file into one or more page images
    Render(RenderArgs),

    /// Build a TrueType font from a glyph table
    BuildFont(BuildFontArgs),

    /// Report characters of a text file the glyph table cannot draw
    Check(CheckArgs),

    /// Write a config file with default values
    InitConfig {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct RenderArgs {
    /// UTF-8 text file to render
    #[arg(long, value_name = "PATH")]
    pub text: PathBuf,

    /// Output image; extra pages get `_1`, `_2`, ... suffixes
    #[arg(long, value_name = "PATH", default_value = "output.png")]
    pub out: PathBuf,

    /// Output resolution in dots per inch
    #[arg(long)]
    pub dpi: Option<u32>,

    /// Glyph table to use instead of the shape's default table
    #[arg(long, value_name = "PATH")]
    pub font_csv: Option<PathBuf>,

    /// Output pixels per grid cell edge
    #[arg(long)]
    pub scale: Option<u32>,

    /// Grid shape (4x3, 5x4, 5x5)
    #[arg(long, value_name = "SHAPE")]
    pub size: Option<GridShape>,

    /// Page margin in millimetres
    #[arg(long)]
    pub margin_mm: Option<u32>,

    /// Empty cell rows between lines
    #[arg(long)]
    pub line_gap: Option<u32>,

    /// Collapse all whitespace, line breaks included
    #[arg(long)]
    pub compact: bool,

    /// Maximum density: compact, lowercase, subscript digits, no line gap
    #[arg(long)]
    pub extreme: bool,

    /// Prepend the character legend (true/1/yes)
    #[arg(long, value_name = "BOOL", value_parser = parse_flag, conflicts_with = "no_legend")]
    pub include_legend: Option<bool>,

    /// Do not prepend the character legend
    #[arg(long)]
    pub no_legend: bool,

    /// Transliterate Cyrillic when the table lacks it (true/1/yes)
    #[arg(long, value_name = "BOOL", value_parser = parse_flag, conflicts_with = "no_transliterate")]
    pub transliterate: Option<bool>,

    /// Keep Cyrillic as-is even when the table lacks it
    #[arg(long)]
    pub no_transliterate: bool,

    /// Legend text file
    #[arg(long, value_name = "PATH")]
    pub legend_file: Option<PathBuf>,
}

impl RenderArgs {
    /// Flags that were given, as config overrides.
    pub fn overrides(&self) -> RenderOverrides {
        RenderOverrides {
            grid_shape: self.size,
            dpi: self.dpi,
            scale: self.scale,
            margin_mm: self.margin_mm,
            line_gap: self.line_gap,
            compact: self.compact.then_some(true),
            max_density: self.extreme.then_some(true),
            include_legend: negatable(self.include_legend, self.no_legend),
            transliterate: negatable(self.transliterate, self.no_transliterate),
            table_path: self.font_csv.clone(),
            legend_path: self.legend_file.clone(),
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct BuildFontArgs {
    /// Grid shape (4x3, 5x4, 5x5)
    #[arg(long, value_name = "SHAPE")]
    pub size: Option<GridShape>,

    /// Glyph table to use instead of the shape's default table
    #[arg(long, value_name = "PATH")]
    pub font_csv: Option<PathBuf>,

    /// Output font file
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct CheckArgs {
    /// UTF-8 text file to inspect
    #[arg(value_name = "TEXT")]
    pub text: PathBuf,

    /// Grid shape (4x3, 5x4, 5x5)
    #[arg(long, value_name = "SHAPE")]
    pub size: Option<GridShape>,

    /// Glyph table to use instead of the shape's default table
    #[arg(long, value_name = "PATH")]
    pub font_csv: Option<PathBuf>,
}

/// Boolean flag value: `true`, `1` or `yes` (any case) mean true, anything else false.
pub fn parse_flag(value: &str) -> Result<bool, String> {
    Ok(matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes"
    ))
}

fn negatable(value: Option<bool>, negated: bool) -> Option<bool> {
    if negated { Some(false) } else { value }
}

/// Result of CLI processing
pub enum CliResult {
    /// Command completed
    Success,
    /// Exit with the given code
    Exit(i32),
}

/// Parse arguments, install logging and run the selected command.
pub fn process_cli() -> anyhow::Result<CliResult> {
    let cli = Cli::parse();
    crate::debug::init_log_bridge(cli.log_level);
    run(cli)
}

/// Run an already parsed command line.
pub fn run(cli: Cli) -> anyhow::Result<CliResult> {
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);

    if let Commands::InitConfig { force } = cli.command {
        return init_config(&config_path, force);
    }

    let config = Config::load_from(&config_path)
        .with_context(|| format!("Failed to load config {}", config_path.display()))?;
    crate::debug::apply_config_level(config.log_level);

    match cli.command {
        Commands::Render(args) => {
            commands::render::run(&config, &args)?;
        }
        Commands::BuildFont(args) => {
            commands::build_font::run(&config, &args)?;
        }
        Commands::Check(args) => {
            commands::check::run(&config, &args)?;
        }
        Commands::InitConfig { .. } => {}
    }
    Ok(CliResult::Success)
}

fn init_config(path: &std::path::Path, force: bool) -> anyhow::Result<CliResult> {
    match commands::init_config::run(path, force)? {
        commands::init_config::InitOutcome::Written => {
            println!("Wrote default config to {}", path.display());
            Ok(CliResult::Success)
        }
        commands::init_config::InitOutcome::AlreadyExists => {
            eprintln!(
                "gridglyph: config already exists at {} (use --force to overwrite)",
                path.display()
            );
            Ok(CliResult::Exit(1))
        }
    }
}
