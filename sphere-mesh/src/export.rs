//! Newline-delimited `.dat` export (and import)
//!
//! Two plain-text files, one value per line:
//! - `sphere_vertices.dat`: flat `[x0, y0, z0, x1, ...]` coordinates
//! - `sphere_indices.dat`: flat `[a0, b0, a1, b1, ...]` ring-to-ring pairs

use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::info;

use crate::procedural::{GpuBuffers, SphereMesh};

/// Vertex coordinate file name
pub const VERTICES_FILE: &str = "sphere_vertices.dat";
/// Index pair file name
pub const INDICES_FILE: &str = "sphere_indices.dat";

/// Paths of a written `.dat` file pair
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatPaths {
    pub vertices: PathBuf,
    pub indices: PathBuf,
}

impl DatPaths {
    /// Standard file names inside `dir`
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            vertices: dir.join(VERTICES_FILE),
            indices: dir.join(INDICES_FILE),
        }
    }
}

/// Format a coordinate as decimal text
///
/// Shortest round-trip digits with a mandatory fractional part (`1.0`,
/// `-0.0`). Magnitudes below `1e-4` or from `1e16` up switch to exponent
/// form with a signed, at least two-digit exponent (`6.123233995736766e-17`,
/// `1e-05`, `1e+16`).
pub fn format_scalar(value: f64) -> String {
    let repr = format!("{value:?}");
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => repr,
    }
}

/// Write coordinates one per line
pub fn write_vertices<W: Write>(vertices: &[f64], mut writer: W) -> io::Result<()> {
    for &value in vertices {
        writeln!(writer, "{}", format_scalar(value))?;
    }
    Ok(())
}

/// Write indices one per line
pub fn write_indices<W: Write>(indices: &[u32], mut writer: W) -> io::Result<()> {
    for index in indices {
        writeln!(writer, "{index}")?;
    }
    Ok(())
}

/// Write both `.dat` files into `dir`, replacing any existing ones
pub fn write_dat_files(mesh: &SphereMesh, dir: &Path) -> Result<DatPaths> {
    let paths = DatPaths::in_dir(dir);

    write_file(&paths.vertices, |w| write_vertices(&mesh.vertices, w))?;
    info!(
        "Wrote {} ({} vertices)",
        paths.vertices.display(),
        mesh.vertex_count()
    );

    write_file(&paths.indices, |w| write_indices(&mesh.indices, w))?;
    info!(
        "Wrote {} ({} index pairs)",
        paths.indices.display(),
        mesh.index_pair_count()
    );

    Ok(paths)
}

/// Create `path` and run `body` against a buffered writer, flushing before
/// the handle is dropped
fn write_file(
    path: &Path,
    body: impl FnOnce(&mut BufWriter<File>) -> io::Result<()>,
) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    body(&mut writer)
        .and_then(|()| writer.flush())
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Read whitespace-separated coordinates
pub fn read_vertices<R: BufRead>(reader: R) -> Result<Vec<f32>> {
    read_values(reader, "vertex")
}

/// Read whitespace-separated indices
pub fn read_indices<R: BufRead>(reader: R) -> Result<Vec<u32>> {
    read_values(reader, "index")
}

fn read_values<T, R>(reader: R, kind: &str) -> Result<Vec<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    R: BufRead,
{
    let mut values = Vec::new();

    for (line_number, line) in reader.lines().enumerate() {
        let line = line?;
        for token in line.split_whitespace() {
            let value = token.parse::<T>().with_context(|| {
                format!("line {}: invalid {} value {:?}", line_number + 1, kind, token)
            })?;
            values.push(value);
        }
    }

    Ok(values)
}

/// Load a `.dat` file pair from `dir` into GPU upload buffers
///
/// Rejects a coordinate count that is not a multiple of 3 and any index that
/// does not address a loaded vertex.
pub fn read_dat_files(dir: &Path) -> Result<GpuBuffers> {
    let paths = DatPaths::in_dir(dir);

    let vertices = open(&paths.vertices)
        .and_then(read_vertices)
        .with_context(|| format!("Failed to read {}", paths.vertices.display()))?;
    let indices = open(&paths.indices)
        .and_then(read_indices)
        .with_context(|| format!("Failed to read {}", paths.indices.display()))?;

    if vertices.len() % 3 != 0 {
        bail!(
            "{}: {} coordinates is not a whole number of vertices",
            paths.vertices.display(),
            vertices.len()
        );
    }

    let buffers = GpuBuffers { vertices, indices };
    let vertex_count = buffers.vertex_count();
    if let Some(&bad) = buffers.indices.iter().find(|&&i| i as usize >= vertex_count) {
        bail!(
            "{}: index {} out of range for {} vertices",
            paths.indices.display(),
            bad,
            vertex_count
        );
    }

    info!(
        "Loaded {} vertices and {} indices.",
        vertex_count,
        buffers.indices.len()
    );

    Ok(buffers)
}

fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    Ok(BufReader::new(file))
}
