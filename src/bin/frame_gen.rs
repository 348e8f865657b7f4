//! Frame Generator CLI
//!
//! Reads a frame parameter record (from a file, or stdin when omitted)
//! and writes the generated model as JSON to a file or stdout.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use frame_generator::prelude::*;

/// Generate a 3D moment frame model from building parameters
#[derive(Parser, Debug)]
#[command(name = "frame_gen")]
#[command(about = "Generate a solver-ready 3D frame model", long_about = None)]
#[command(version)]
struct Cli {
    /// Parameter record (JSON); read from stdin when omitted
    input: Option<PathBuf>,

    /// Write the model here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit single-line JSON
    #[arg(long)]
    compact: bool,
}

fn read_params(input: Option<&Path>) -> Result<FrameParams> {
    let text = match input {
        Some(path) => fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("reading stdin")?;
            buf
        }
    };
    serde_json::from_str(&text).context("parsing frame parameters")
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let params = read_params(cli.input.as_deref())?;

    let model = generate_model(&params)?;
    let stats = model.stats();
    info!(
        "{} structural + {} ground nodes, {} columns, {} X beams, {} Z beams, {:.1} kip gravity",
        stats.structural_nodes,
        stats.ground_nodes,
        stats.columns,
        stats.beams_x,
        stats.beams_z,
        stats.total_gravity_load
    );

    let json = if cli.compact {
        serde_json::to_string(&model)?
    } else {
        model.to_json()?
    };

    match &cli.output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
            info!("wrote '{}' to {}", model.model_info.name, path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}
