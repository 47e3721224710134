use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use ndarray::Array2;

use super::{Geometry, LoadError};

const COLUMNS: [&str; 3] = ["X", "Y", "Z"];

fn gen_error(filepath: &Path, line: u64, message: String) -> LoadError {
    LoadError::ParseError(format!("{}:{}: {}", filepath.display(), line, message))
}

fn csv_error(filepath: &Path, err: csv::Error) -> LoadError {
    let line = err.position().map_or(0, |position| position.line());
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(err) => LoadError::IO(err),
        _ => gen_error(filepath, line, message),
    }
}

/// Finds the index of each `X`, `Y`, `Z` column in the header.
fn column_indices(filepath: &Path, header: &StringRecord) -> Result<[usize; 3], LoadError> {
    let mut indices = [0usize; 3];
    for (axis, name) in COLUMNS.iter().enumerate() {
        indices[axis] = header
            .iter()
            .position(|field| field.trim_start_matches('\u{feff}').trim() == *name)
            .ok_or_else(|| {
                let header = header.iter().collect::<Vec<_>>().join(",");
                gen_error(
                    filepath,
                    1,
                    format!("missing column `{name}` in header `{header}`"),
                )
            })?;
    }
    Ok(indices)
}

/// Reads a point cloud stored as comma separated values.
///
/// The first line is a header that must name the `X`, `Y` and `Z` columns.
/// They may appear in any order and other columns are ignored. Fields may be
/// quoted, and a UTF-8 byte order mark before the header is accepted.
///
/// # Arguments
///
/// * `filepath` - Path to the CSV file.
///
/// # Returns
///
/// * A geometry without faces, one point per data row.
pub fn read_csv<P: AsRef<Path>>(filepath: P) -> Result<Geometry, LoadError> {
    let filepath = filepath.as_ref();
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_path(filepath)
        .map_err(|err| csv_error(filepath, err))?;

    let header = reader
        .headers()
        .map_err(|err| csv_error(filepath, err))?
        .clone();
    let columns = column_indices(filepath, &header)?;

    let mut coords = Vec::<f64>::new();
    for record in reader.records() {
        let record = record.map_err(|err| csv_error(filepath, err))?;
        let line = record.position().map_or(0, |position| position.line());
        for (axis, &column) in columns.iter().enumerate() {
            let field = record.get(column).ok_or_else(|| {
                gen_error(filepath, line, format!("row has no `{}` value", COLUMNS[axis]))
            })?;
            let value = field.parse::<f64>().map_err(|err| {
                gen_error(
                    filepath,
                    line,
                    format!("invalid `{}` value `{field}`: {err}", COLUMNS[axis]),
                )
            })?;
            coords.push(value);
        }
    }

    let num_points = coords.len() / 3;
    let points = Array2::from_shape_vec((num_points, 3), coords)
        .map_err(|err| LoadError::ParseError(err.to_string()))?;

    Ok(Geometry::from_points(points))
}
