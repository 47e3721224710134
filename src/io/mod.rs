use std::path::Path;

mod csv;
pub use csv::read_csv;
mod off;
pub use off::read_off;
mod geometry;
pub use geometry::Geometry;
mod error;
pub use error::LoadError;
mod ply;
pub use ply::read_ply;
mod text;

/// Reads a point cloud file choosing the parser by its extension: `csv`, `off` or `ply`.
pub fn read_point_cloud<P: AsRef<Path>>(filepath: P) -> Result<Geometry, LoadError> {
    let filepath = filepath.as_ref();
    let extension = filepath
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "csv" => read_csv(filepath),
        "off" => read_off(filepath),
        "ply" => read_ply(filepath),
        _ => Err(LoadError::UnsupportedFormat(extension)),
    }
}
