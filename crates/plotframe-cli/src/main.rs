// File: crates/plotframe-cli/src/main.rs
// Summary: Builds layout dimensions and checks dimension/record JSON files for conformance.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use plotframe_core::{column_keys, parse_records, Dimensions, FrameConfig, Margin};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "plotframe", version, about = "Chart layout and record conformance checks")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute dimensions from a config file and/or flags and print them as JSON.
    Layout {
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        width: Option<f64>,
        #[arg(long)]
        height: Option<f64>,
        /// Margins as TOP,RIGHT,BOTTOM,LEFT
        #[arg(long, value_parser = parse_margin)]
        margin: Option<Margin>,
    },
    /// Validate a dimensions JSON document and print its normalized form.
    CheckDims { file: PathBuf },
    /// Validate a JSON array of records.
    CheckRecords { file: PathBuf },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Cli::parse().command {
        Command::Layout { config, width, height, margin } => {
            let mut cfg = match &config {
                Some(path) => FrameConfig::from_path(path)
                    .with_context(|| format!("failed to load config '{}'", path.display()))?,
                None => FrameConfig::default(),
            };
            // Flags override the file
            if let Some(w) = width {
                cfg.width = w;
            }
            if let Some(h) = height {
                cfg.height = h;
            }
            if let Some(m) = margin {
                cfg.margin = m;
            }

            let dims = cfg.build().context("invalid layout")?;
            println!("{}", serde_json::to_string_pretty(&dims)?);
        }
        Command::CheckDims { file } => {
            let text = read(&file)?;
            let dims: Dimensions = serde_json::from_str(&text)
                .with_context(|| format!("'{}' is not valid dimensions", file.display()))?;
            log::info!(
                "{}: bounded area {}x{}",
                file.display(),
                dims.bounded_width(),
                dims.bounded_height()
            );
            println!("{}", serde_json::to_string_pretty(&dims)?);
        }
        Command::CheckRecords { file } => {
            let text = read(&file)?;
            let records = parse_records(&text)
                .with_context(|| format!("'{}' does not hold valid records", file.display()))?;
            if records.is_empty() {
                log::warn!("{}: no records", file.display());
            }
            let keys = column_keys(&records);
            println!("Records: {}", records.len());
            println!("Keys: {}", keys.into_iter().collect::<Vec<_>>().join(", "));
        }
    }
    Ok(())
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("opening {}", path.display()))
}

fn parse_margin(s: &str) -> std::result::Result<Margin, String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f64>().map_err(|e| format!("'{p}': {e}")))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    match parts.as_slice() {
        [v] => Ok(Margin::uniform(*v)),
        [t, r, b, l] => Ok(Margin::new(*t, *r, *b, *l)),
        _ => Err(format!("expected 1 or 4 comma-separated values, got {}", parts.len())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn margin_flag_forms() {
        assert_eq!(parse_margin("10,20,30,40").unwrap(), Margin::new(10.0, 20.0, 30.0, 40.0));
        assert_eq!(parse_margin("5").unwrap(), Margin::uniform(5.0));
        assert!(parse_margin("1,2").is_err());
        assert!(parse_margin("a,b,c,d").is_err());
    }

    #[test]
    fn cli_parses_layout_flags() {
        let cli = Cli::try_parse_from([
            "plotframe",
            "layout",
            "--width",
            "500",
            "--margin",
            "10,20,30,40",
        ])
        .unwrap();
        match cli.command {
            Command::Layout { width, margin, .. } => {
                assert_eq!(width, Some(500.0));
                assert_eq!(margin, Some(Margin::new(10.0, 20.0, 30.0, 40.0)));
            }
            _ => panic!("expected layout"),
        }
    }
}
