//! tv-icon CLI
//!
//! Usage:
//!   tv-icon [OPTIONS]
//!
//! Options:
//!   -c, --config <FILE>    Output configuration (TOML format)
//!   -f, --format <FORMAT>  svg, data-uri, path or commands
//!   --compact              Single-line markup
//!   --standalone           Prepend the XML declaration and license comment
//!   -o, --output <FILE>    Write to a file instead of stdout
//!   -v, --verbose          Debug logging on stderr
//!   -h, --help             Print help

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tv_icon::{to_data_uri, to_markup, Config, OutputFormat, TV};

#[derive(Parser)]
#[command(name = "tv-icon")]
#[command(about = "Print the tv icon as SVG markup, a data URI or path commands")]
struct Cli {
    /// Output configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format, overriding the config file
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Single-line markup
    #[arg(long)]
    compact: bool,

    /// Prepend the XML declaration and license comment
    #[arg(long)]
    standalone: bool,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => match Config::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };
    if let Some(format) = cli.format {
        config.format = format;
    }
    if cli.compact {
        config.markup.pretty_print = false;
    }
    if cli.standalone {
        config.markup.standalone = true;
    }
    tracing::debug!(?config, "resolved output settings");

    let text = match config.format {
        OutputFormat::Svg => to_markup(&TV.render(), &config.markup),
        OutputFormat::DataUri => to_data_uri(&TV.render()),
        OutputFormat::Path => TV.path_data.to_string(),
        OutputFormat::Commands => match TV.path() {
            Ok(data) => {
                if let Some(bounds) = data.bounds() {
                    tracing::info!(
                        commands = data.len(),
                        subpaths = data.subpath_count(),
                        width = bounds.width(),
                        height = bounds.height(),
                        "path summary"
                    );
                }
                data.commands
                    .iter()
                    .map(|c| c.to_string())
                    .collect::<Vec<_>>()
                    .join("\n")
            }
            Err(errors) => {
                for e in errors {
                    eprintln!("{}", e.format(TV.path_data, TV.name));
                }
                std::process::exit(1);
            }
        },
    };

    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, format!("{}\n", text)) {
                eprintln!("Error writing file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
            tracing::debug!(path = %path.display(), "wrote output");
        }
        None => println!("{}", text),
    }
}
