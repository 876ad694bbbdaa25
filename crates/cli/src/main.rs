#![deny(unsafe_code)]
//! CLI binary for the flowfield renderer.
//!
//! Subcommands:
//! - `render` — run the simulation N frames headlessly, write a PNG
//! - `schema` — print the parameter schema as JSON

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use flowfield_core::{MaskFilter, Parameters};
use flowfield_render::Canvas;
use flowfield_sim::FlowSim;
use std::path::PathBuf;
use std::process;

/// Fixed base name for exported frames.
const DEFAULT_OUTPUT: &str = "flowfield_art.png";

#[derive(Parser)]
#[command(name = "flowfield", about = "Noise-driven particle flow-field renderer")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the simulation for N frames and write a PNG snapshot.
    Render {
        /// Canvas width in pixels.
        #[arg(short = 'W', long, default_value_t = 1000)]
        width: usize,

        /// Canvas height in pixels.
        #[arg(short = 'H', long, default_value_t = 1000)]
        height: usize,

        /// Number of frames to simulate.
        #[arg(short, long, default_value_t = 300)]
        frames: u64,

        /// Flow-field cell size in pixels.
        #[arg(long, default_value_t = 20.0)]
        cell_size: f64,

        /// Particle population.
        #[arg(short = 'n', long, default_value_t = 1000)]
        particles: usize,

        /// Seed for deterministic particle placement.
        #[arg(long, default_value_t = 42)]
        placement_seed: u64,

        /// Trail fade per frame (0-255).
        #[arg(long)]
        trail_fade: Option<f64>,

        /// Coherent-noise seed (0-10000).
        #[arg(long)]
        noise_seed: Option<u32>,

        /// Noise period (1-100).
        #[arg(long)]
        noise_period: Option<f64>,

        /// Flow vector magnitude (0.1-5).
        #[arg(long)]
        amplitude: Option<f64>,

        /// Noise reshaping exponent (0.5-5).
        #[arg(long)]
        exponent: Option<f64>,

        /// Quantize flow angles to the 8 compass directions.
        #[arg(long)]
        geometric: bool,

        /// Disable the mask stencil even if an asset is supplied.
        #[arg(long)]
        no_mask: bool,

        /// Mask image, scaled into the central 80% of the canvas.
        #[arg(short, long)]
        mask: Option<PathBuf>,

        /// Output file path.
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Bulk parameter overrides as a JSON object; individual flags win.
        #[arg(long, default_value = "{}")]
        params: String,
    },
    /// Print the parameter schema as JSON.
    Schema,
}

/// Folds the JSON override object and the individual flags into one clamped
/// snapshot. Flags that were given take precedence over the JSON.
#[allow(clippy::too_many_arguments)]
fn resolve_params(
    params_json: &str,
    trail_fade: Option<f64>,
    noise_seed: Option<u32>,
    noise_period: Option<f64>,
    amplitude: Option<f64>,
    exponent: Option<f64>,
    geometric: bool,
    no_mask: bool,
) -> Result<Parameters, CliError> {
    let json: serde_json::Value = serde_json::from_str(params_json)
        .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
    let mut p = Parameters::from_json(&json);
    if let Some(v) = trail_fade {
        p.trail_fade = v;
    }
    if let Some(v) = noise_seed {
        p.noise_seed = v;
    }
    if let Some(v) = noise_period {
        p.noise_period = v;
    }
    if let Some(v) = amplitude {
        p.amplitude = v;
    }
    if let Some(v) = exponent {
        p.exponent = v;
    }
    if geometric {
        p.geometric_snap = true;
    }
    if no_mask {
        p.mask_enabled = false;
    }
    Ok(p.clamped())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Schema => {
            println!("{}", serde_json::to_string_pretty(&Parameters::schema())?);
        }
        Command::Render {
            width,
            height,
            frames,
            cell_size,
            particles,
            placement_seed,
            trail_fade,
            noise_seed,
            noise_period,
            amplitude,
            exponent,
            geometric,
            no_mask,
            mask,
            output,
            params,
        } => {
            let params = resolve_params(
                &params,
                trail_fade,
                noise_seed,
                noise_period,
                amplitude,
                exponent,
                geometric,
                no_mask,
            )?;

            // Mask readiness is a startup precondition: load it (or fail)
            // before the first tick.
            let mask: Option<MaskFilter> = match &mask {
                Some(path) if params.mask_enabled => {
                    Some(flowfield_render::mask::load_mask(path, width, height)?)
                }
                _ => None,
            };
            if params.mask_enabled && mask.is_none() && !cli.json {
                eprintln!("no --mask asset supplied; rendering unmasked");
            }

            let mut sim = FlowSim::new(
                width as f64,
                height as f64,
                cell_size,
                particles,
                placement_seed,
            )?;
            let mut canvas = Canvas::new(width, height)?;

            for _ in 0..frames {
                sim.tick(&params, mask.as_ref(), &mut canvas);
            }

            flowfield_render::snapshot::write_png(&canvas, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "width": width,
                    "height": height,
                    "frames": frames,
                    "particles": particles,
                    "params": params.to_json(),
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {width}x{height}, {frames} frames, {particles} particles -> {}",
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
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
