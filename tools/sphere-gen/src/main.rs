//! sphere-gen - UV sphere data generator
//!
//! Writes `sphere_vertices.dat` and `sphere_indices.dat` for a unit sphere
//! into the current working directory.

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use std::path::Path;

use sphere_mesh::export::{self, DatPaths};
use sphere_mesh::{generate_uv_sphere, SphereParams};

const USAGE: &str = "Usage: sphere-gen <resolution>";

#[derive(Parser)]
#[command(name = "sphere-gen")]
#[command(about = "UV sphere data generator")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Number of segments and rings
    #[arg(allow_negative_numbers = true)]
    resolution: u32,
}

fn main() -> Result<()> {
    // Initialize logging (stdout is reserved for usage output)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if is_usage_error(err.kind()) => {
            println!("{USAGE}");
            std::process::exit(1);
        }
        Err(err) => return Err(err).context("Invalid resolution"),
    };

    generate(cli.resolution, Path::new("."))?;
    tracing::info!("Done!");

    Ok(())
}

/// Argument count errors, as opposed to a resolution that fails to parse
fn is_usage_error(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::MissingRequiredArgument
            | ErrorKind::UnknownArgument
            | ErrorKind::TooManyValues
            | ErrorKind::WrongNumberOfValues
    )
}

fn generate(resolution: u32, out_dir: &Path) -> Result<DatPaths> {
    let params = SphereParams::uniform(resolution);
    tracing::info!(
        "Generating sphere: {} segments x {} rings",
        params.segments,
        params.rings
    );

    let mesh = generate_uv_sphere(&params).context("Failed to generate sphere")?;
    export::write_dat_files(&mesh, out_dir)
}
