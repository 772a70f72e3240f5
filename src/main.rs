//! # LRS Toolkit Command Line
//!
//! Runs the project setup command and exposes the math helpers for quick
//! checks from a shell.

use clap::{Parser, Subcommand};
use log::info;
use lrs_toolkit::cgmath::Vector3;
use lrs_toolkit::{
    hit_direction, remap_range, scaffold_and_refresh, DirectoryIndex, Frame, ToolkitConfig,
    ToolkitError, ToolkitResult,
};
use std::path::PathBuf;

/// Command line arguments for the toolkit.
#[derive(Parser, Debug)]
#[command(name = "lrs-toolkit")]
#[command(about = "Game-side helpers: project scaffolding and gameplay math")]
#[command(version)]
struct Args {
    /// JSON settings file (physics, iso angles, hit intensity, folder layout)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create the default project folders under an asset root
    CreateDefaultFolders {
        /// Asset root directory
        #[arg(long, default_value = "Assets")]
        assets: PathBuf,
    },

    /// Remap a value from one range to another
    #[command(allow_negative_numbers = true)]
    Remap {
        value: f32,
        from1: f32,
        to1: f32,
        from2: f32,
        to2: f32,
    },

    /// Rotate a vector into the isometric frame
    ToIso {
        /// Vector as x,y,z
        #[arg(value_parser = parse_vector, allow_hyphen_values = true)]
        vector: Vector3<f32>,
    },

    /// Launch velocity needed to hit a target at a given angle
    LaunchVelocity {
        /// Launch angle above the horizon, in degrees
        #[arg(long, default_value_t = 45.0)]
        angle: f32,
        /// Start position as x,y,z
        #[arg(long, value_parser = parse_vector, allow_hyphen_values = true)]
        from: Vector3<f32>,
        /// Target position as x,y,z
        #[arg(long, value_parser = parse_vector, allow_hyphen_values = true)]
        to: Vector3<f32>,
    },

    /// Horizontal and vertical hit reaction for an unrotated frame
    HitDirection {
        /// Frame position as x,y,z
        #[arg(long, value_parser = parse_vector, allow_hyphen_values = true)]
        position: Vector3<f32>,
        /// Hit point as x,y,z
        #[arg(long, value_parser = parse_vector, allow_hyphen_values = true)]
        hit: Vector3<f32>,
        /// Overrides the configured intensity
        #[arg(long)]
        intensity: Option<f32>,
    },
}

fn main() -> ToolkitResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level)?;

    let config = match &args.config {
        Some(path) => ToolkitConfig::from_json_file(path)?,
        None => ToolkitConfig::default(),
    };

    info!("LRS Toolkit v{}", lrs_toolkit::VERSION);
    run(args.command, &config)
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) -> ToolkitResult<()> {
    #[cfg(feature = "dev-tools")]
    {
        let filter = tracing_subscriber::EnvFilter::try_new(log_level)
            .map_err(|e| ToolkitError::InvalidConfig(format!("log level: {}", e)))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init()
            .map_err(|e| ToolkitError::InvalidConfig(format!("logging: {}", e)))?;
    }

    #[cfg(not(feature = "dev-tools"))]
    {
        let level = log_level
            .parse::<log::LevelFilter>()
            .map_err(|_| ToolkitError::InvalidConfig(format!("unknown log level: {}", log_level)))?;
        env_logger::Builder::new()
            .filter_level(level)
            .parse_default_env()
            .try_init()
            .map_err(|e| ToolkitError::InvalidConfig(format!("logging: {}", e)))?;
    }

    Ok(())
}

fn run(command: Command, config: &ToolkitConfig) -> ToolkitResult<()> {
    match command {
        Command::CreateDefaultFolders { assets } => {
            let mut index = DirectoryIndex::new(&assets);
            let folders = scaffold_and_refresh(&config.scaffold, &assets, &mut index)?;
            for folder in &folders {
                println!("{}", folder.display());
            }
            info!(
                "Created {} folders, {} assets indexed",
                folders.len(),
                index.entries().len()
            );
        }

        Command::Remap {
            value,
            from1,
            to1,
            from2,
            to2,
        } => {
            println!("{}", remap_range(value, from1, to1, from2, to2));
        }

        Command::ToIso { vector } => {
            let projected = config.iso.projection().apply(vector);
            println!("{},{},{}", projected.x, projected.y, projected.z);
        }

        Command::LaunchVelocity { angle, from, to } => {
            let velocity = config.physics.velocity_towards_target(angle, from, to);
            println!("{},{},{}", velocity.x, velocity.y, velocity.z);
        }

        Command::HitDirection {
            position,
            hit,
            intensity,
        } => {
            let frame = Frame::at(position);
            let result = hit_direction(&frame, hit, intensity.unwrap_or(config.hit_intensity));
            println!(
                "horizontal={} vertical={}",
                result.horizontal, result.vertical
            );
        }
    }
    Ok(())
}

/// Parses `x,y,z` into a vector.
fn parse_vector(input: &str) -> Result<Vector3<f32>, String> {
    let components = input
        .split(',')
        .map(|part| part.trim().parse::<f32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid number in '{}': {}", input, e))?;

    match components.as_slice() {
        [x, y, z] => Ok(Vector3::new(*x, *y, *z)),
        _ => Err(format!(
            "expected three comma-separated numbers, got '{}'",
            input
        )),
    }
}
