#![deny(unsafe_code)]
//! CLI binary for header-theme.
//!
//! Subcommands:
//! - `theme [COLOR]`: dominant and complementary colors for a hex color
//! - `hsl COLOR`: HSL breakdown of a hex color
//! - `extract IMAGE`: color swatches and dominant color of an image
//! - `upload IMAGE`: store a logo and its header style in a directory
//! - `style`: print the stored header style
//! - `logo -o FILE`: copy the stored logo out of the store

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use header_theme_branding::{Branding, LocalStore, DEFAULT_TOLERANCE};
use header_theme_core::{hex_to_hsl, Rgb, Theme};
use header_theme_extract::{decode, extract_swatches, ExtractError};
use std::path::{Path, PathBuf};
use std::process;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "header-theme", about = "Logo-driven header theme tool")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Derive the header theme for a color (default theme when omitted).
    Theme {
        /// Hex color such as "#1e88e5".
        color: Option<String>,
    },
    /// Show the HSL components of a hex color.
    Hsl {
        /// Hex color such as "#1e88e5".
        color: String,
    },
    /// Extract the color swatches of an image.
    Extract {
        /// Image file (PNG, JPEG, GIF, WebP or BMP).
        image: PathBuf,

        /// Color grouping tolerance (0-100).
        #[arg(short, long, default_value_t = DEFAULT_TOLERANCE,
              value_parser = clap::value_parser!(u8).range(0..=100))]
        tolerance: u8,

        /// Number of swatches to print.
        #[arg(long, default_value_t = 5)]
        top: usize,
    },
    /// Store a logo and the header style derived from it.
    Upload {
        /// Image file (PNG, JPEG, GIF, WebP or BMP).
        image: PathBuf,

        /// Store directory.
        #[arg(short, long, env = "HEADER_THEME_STORE_DIR", default_value = "uploads")]
        store: PathBuf,

        /// Color grouping tolerance (0-100).
        #[arg(short, long, default_value_t = DEFAULT_TOLERANCE,
              value_parser = clap::value_parser!(u8).range(0..=100))]
        tolerance: u8,
    },
    /// Print the stored header style.
    Style {
        /// Store directory.
        #[arg(short, long, env = "HEADER_THEME_STORE_DIR", default_value = "uploads")]
        store: PathBuf,
    },
    /// Write the stored logo to a file.
    Logo {
        /// Output file path.
        #[arg(short, long)]
        output: PathBuf,

        /// Store directory.
        #[arg(short, long, env = "HEADER_THEME_STORE_DIR", default_value = "uploads")]
        store: PathBuf,
    },
}

fn open_store(dir: &Path) -> Result<Branding<LocalStore>, CliError> {
    debug!(store = %dir.display(), "opening store");
    let store = LocalStore::open(dir)
        .map_err(|e| CliError::Io(format!("cannot open store {}: {e}", dir.display())))?;
    Ok(Branding::new(store))
}

fn read_file(path: &Path) -> Result<Vec<u8>, CliError> {
    let data = std::fs::read(path)
        .map_err(|e| CliError::Io(format!("cannot read {}: {e}", path.display())))?;
    debug!(path = %path.display(), bytes = data.len(), "read input file");
    Ok(data)
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Theme { color } => {
            let theme = Theme::derive(color.as_deref())?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&theme)?);
            } else {
                println!("dominant:      {}", theme.dominant_color);
                println!("complementary: {}", theme.complementary_color);
            }
        }
        Command::Hsl { color } => {
            let rgb = Rgb::from_hex(&color)?;
            let hsl = hex_to_hsl(&color)?;
            if cli.json {
                let info = serde_json::json!({
                    "hex": rgb.to_hex(),
                    "h": hsl.h,
                    "s": hsl.s,
                    "l": hsl.l,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{}: hsl({}, {}%, {}%)", rgb.to_hex(), hsl.h, hsl.s, hsl.l);
            }
        }
        Command::Extract {
            image,
            tolerance,
            top,
        } => {
            let (kind, img) = decode(&read_file(&image)?)?;
            debug!(format = ?kind, tolerance, "extracting swatches");
            let swatches = extract_swatches(&img, tolerance);
            let total: u64 = swatches.iter().map(|s| s.count).sum();
            if total == 0 {
                return Err(ExtractError::NoOpaquePixels.into());
            }

            if cli.json {
                let list: Vec<_> = swatches
                    .iter()
                    .take(top)
                    .map(|s| serde_json::json!({"color": s.color.to_hex(), "pixels": s.count}))
                    .collect();
                let info = serde_json::json!({
                    "format": kind.content_type(),
                    "tolerance": tolerance,
                    "dominant": swatches[0].color.to_hex(),
                    "swatches": list,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{} ({}x{})", image.display(), img.width(), img.height());
                for s in swatches.iter().take(top) {
                    let share = s.count as f64 * 100.0 / total as f64;
                    println!("  {}  {share:5.1}%", s.color.to_hex());
                }
            }
        }
        Command::Upload {
            image,
            store,
            tolerance,
        } => {
            let branding = open_store(&store)?.with_tolerance(tolerance);
            let style = branding.upload_logo(&read_file(&image)?)?;
            info!(source = ?style.source, "logo stored");
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&style)?);
            } else {
                eprintln!(
                    "stored {} -> {} (dominant {}, complementary {}, {:?})",
                    image.display(),
                    store.display(),
                    style.dominant_color,
                    style.complementary_color,
                    style.source
                );
            }
        }
        Command::Style { store } => {
            let style = open_store(&store)?.header_style()?;
            println!("{}", serde_json::to_string_pretty(&style)?);
        }
        Command::Logo { output, store } => {
            let logo = open_store(&store)?
                .logo()?
                .ok_or_else(|| CliError::Input(format!("no logo stored in {}", store.display())))?;
            std::fs::write(&output, &logo.bytes)
                .map_err(|e| CliError::Io(format!("cannot write {}: {e}", output.display())))?;
            if cli.json {
                let info = serde_json::json!({
                    "output": output.display().to_string(),
                    "contentType": logo.content_type,
                    "bytes": logo.bytes.len(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!("wrote {} ({} bytes)", output.display(), logo.bytes.len());
            }
        }
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
