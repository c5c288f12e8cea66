use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use sheet2icons::event::ExtractMsg;
use sheet2icons::pipeline::extractor::{dry_run, extract_icons};
use sheet2icons::{Config, logging, report};

#[derive(Parser, Debug)]
#[command(
    name = "sheet2icons",
    version,
    about = "Slice a fixed-grid sprite sheet into individually named PNG icons"
)]
struct Cli {
    /// TOML file with sheet path, output directory, grid layout and icon names.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Sprite sheet to slice.
    #[arg(long, value_name = "FILE")]
    sheet: Option<PathBuf>,

    /// Directory that receives the icons.
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Print the cell plan without writing any icons.
    #[arg(long)]
    dry_run: bool,

    /// Write the effective configuration as TOML and exit.
    #[arg(long, value_name = "FILE")]
    write_config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let _logger = logging::setup_logging()
        .map_err(|e| eprintln!("Failed to start logger ({}), continuing without it", e))
        .ok();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Defaults, then the `--config` file, then `--sheet` / `--output`.
fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            log::info!("loading config from {}", path.display());
            Config::load_from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?
        }
        None => Config::default(),
    };
    if let Some(sheet) = &cli.sheet {
        config = config.with_sheet_path(sheet);
    }
    if let Some(output) = &cli.output {
        config = config.with_output_dir(output);
    }
    Ok(config)
}

fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;

    if let Some(path) = &cli.write_config {
        config
            .save_to_file(path)
            .with_context(|| format!("Failed to write config {}", path.display()))?;
        println!("Wrote config to {}", path.display());
        return Ok(());
    }

    if cli.dry_run {
        match dry_run(&config)? {
            Some((size, plan)) => {
                for line in report::format_plan(size, &plan, &config.names, &config.output_dir) {
                    println!("{}", line);
                }
            }
            None => report::print_msg(&ExtractMsg::SourceNotFound(config.sheet_path.clone())),
        }
        return Ok(());
    }

    extract_icons(&config, |msg| report::print_msg(&msg))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheet2icons::model::GridConfig;
    use tempfile::tempdir;

    #[test]
    fn test_no_flags_uses_defaults() {
        let cli = Cli::parse_from(["sheet2icons"]);
        assert_eq!(resolve_config(&cli).unwrap(), Config::default());
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("icons.toml");
        Config::default()
            .with_sheet_path("from_file.png")
            .with_output_dir("file_out")
            .with_grid(GridConfig::new(64, 4, 4))
            .save_to_file(&config_path)
            .unwrap();

        let cli = Cli::parse_from([
            "sheet2icons",
            "--config",
            config_path.to_str().unwrap(),
            "--output",
            "cli_out",
        ]);
        let config = resolve_config(&cli).unwrap();

        assert_eq!(config.sheet_path, PathBuf::from("from_file.png"));
        assert_eq!(config.output_dir, PathBuf::from("cli_out"));
        assert_eq!(config.grid.icon_size, 64);

        let cli = Cli::parse_from(["sheet2icons", "-c", config_path.to_str().unwrap(), "--sheet", "cli.png"]);
        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.sheet_path, PathBuf::from("cli.png"));
        assert_eq!(config.output_dir, PathBuf::from("file_out"));
    }

    #[test]
    fn test_missing_config_file_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let cli = Cli::parse_from(["sheet2icons", "-c", path.to_str().unwrap()]);
        assert!(resolve_config(&cli).is_err());
    }

    #[test]
    fn test_write_config_skips_extraction() {
        let dir = tempdir().unwrap();
        let sheet = dir.path().join("sheet.png");
        image::RgbaImage::new(256, 256).save(&sheet).unwrap();
        let output = dir.path().join("out");
        let written = dir.path().join("written.toml");

        let cli = Cli::parse_from([
            "sheet2icons",
            "--sheet",
            sheet.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "--write-config",
            written.to_str().unwrap(),
        ]);
        run(cli).unwrap();

        let saved = Config::load_from_file(&written).unwrap();
        assert_eq!(saved.sheet_path, sheet);
        assert_eq!(saved.output_dir, output);
        assert!(!output.exists());
    }
}
