//! Tactical metrics CLI
//!
//! Synthetic tracking generation and per-frame analysis over JSON
//! tracking files.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tactical_core::data::{generate_synthetic_tracking, load_tracking, save_tracking};
use tactical_core::{EngineConfig, FrameEngine};

#[derive(Parser)]
#[command(name = "tactical")]
#[command(about = "Pitch control, velocity and compactness metrics from tracking data", long_about = None)]
struct Cli {
    /// Engine config JSON (defaults to $TACTICAL_CONFIG, then built-in defaults)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a deterministic synthetic tracking file
    Synthetic {
        /// Number of frames
        #[arg(long, default_value_t = 250)]
        frames: usize,

        /// RNG seed
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Frames per second
        #[arg(long, default_value_t = 25.0)]
        fps: f32,

        /// Output JSON path
        #[arg(long)]
        out: PathBuf,
    },

    /// Per-frame compactness, formation and control summary
    Analyze {
        /// Tracking JSON path
        #[arg(long)]
        input: PathBuf,

        /// Only the first N frames
        #[arg(long)]
        frames: Option<usize>,

        /// Output JSON path (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Full analysis of one frame, including the dominance grid
    Grid {
        /// Tracking JSON path
        #[arg(long)]
        input: PathBuf,

        /// Frame index
        #[arg(long)]
        frame: usize,

        /// Output JSON path (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Synthetic { frames, seed, fps, out } => {
            anyhow::ensure!(fps > 0.0, "fps must be positive, got {}", fps);
            let dataset = generate_synthetic_tracking(frames, fps, seed);
            save_tracking(&out, &dataset)
                .with_context(|| format!("Failed to write tracking file: {}", out.display()))?;
            info!(frames, seed, out = %out.display(), "synthetic tracking written");
        }

        Commands::Analyze { input, frames, out } => {
            let dataset = load_tracking(&input)
                .with_context(|| format!("Failed to load tracking file: {}", input.display()))?;
            let engine = FrameEngine::new(config)?;
            let reports = engine.analyze_sequence(&dataset, frames);
            emit(&reports, out.as_deref())?;
        }

        Commands::Grid { input, frame, out } => {
            let dataset = load_tracking(&input)
                .with_context(|| format!("Failed to load tracking file: {}", input.display()))?;
            let engine = FrameEngine::new(config)?;
            let analysis = engine.analyze_frame(&dataset, frame)?;
            emit(&analysis, out.as_deref())?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    match path {
        Some(p) => EngineConfig::from_path(p)
            .with_context(|| format!("Invalid engine config: {}", p.display())),
        None => Ok(EngineConfig::from_env_or_default()),
    }
}

fn emit<T: Serialize>(value: &T, out: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    match out {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write output: {}", path.display()))?;
            info!(out = %path.display(), "results written");
        }
        None => println!("{}", json),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::try_parse_from(["tactical", "analyze", "--input", "t.json", "--frames", "10"]).unwrap();
        match cli.command {
            Commands::Analyze { input, frames, out } => {
                assert_eq!(input, PathBuf::from("t.json"));
                assert_eq!(frames, Some(10));
                assert!(out.is_none());
            }
            _ => panic!("expected analyze"),
        }
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg.json");
        std::fs::write(&path, r#"{"calibration": {"sigma": 0.8}}"#).unwrap();
        let cfg = load_config(Some(&path)).unwrap();
        assert!((cfg.calibration.sigma - 0.8).abs() < 1e-6);

        std::fs::write(&path, r#"{"calibration": {"sigma": 0.0}}"#).unwrap();
        assert!(load_config(Some(&path)).is_err());
    }

    #[test]
    fn test_emit_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        emit(&[1, 2, 3], Some(&path)).unwrap();
        let back: Vec<i32> = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back, vec![1, 2, 3]);
    }
}
