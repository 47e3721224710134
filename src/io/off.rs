use ndarray::prelude::*;
use num::Zero;
use std::num::ParseIntError;
use std::path::Path;
use std::str::FromStr;

use super::text::TextParserContext;
use super::{Geometry, LoadError};

fn read_off_elements<T: Clone + FromStr + Zero + Copy>(
    num_elements: usize,
    parser_context: &mut TextParserContext,
) -> Result<Array2<T>, LoadError> {
    let mut elements = Array2::<T>::zeros((num_elements, 3));
    for i in 0..num_elements {
        let line = parser_context.expect_line()?;
        if let [Ok(x), Ok(y), Ok(z)] = line
            .split_whitespace()
            .map(|x| x.parse::<T>())
            .collect::<Vec<_>>()[..]
        {
            elements[[i, 0]] = x;
            elements[[i, 1]] = y;
            elements[[i, 2]] = z;
        } else {
            return Err(parser_context.gen_error(format!("Invalid vertex. Got `{line}`")));
        }
    }

    Ok(elements)
}

fn read_off_faces(
    num_elements: usize,
    parser_context: &mut TextParserContext,
) -> Result<Array2<usize>, LoadError> {
    let mut faces = Vec::<usize>::with_capacity(num_elements * 6);

    for _ in 0..num_elements {
        let line = parser_context.expect_line()?;

        let indices = line
            .split_whitespace()
            .map(|x| x.parse::<usize>())
            .collect::<Vec<_>>();

        match indices[..] {
            [Ok(3), Ok(f1), Ok(f2), Ok(f3)] => {
                faces.extend([f1, f2, f3]);
            }
            [Ok(4), Ok(f1), Ok(f2), Ok(f3), Ok(f4)] => {
                faces.extend([f1, f2, f3]);
                faces.extend([f4, f1, f3]);
            }
            _ => {
                return Err(parser_context.gen_error(format!("Invalid face. Got `{line}`")));
            }
        }
    }

    let num_triangles = faces.len() / 3;
    Array2::from_shape_vec((num_triangles, 3), faces)
        .map_err(|err| parser_context.gen_error(err.to_string()))
}

/// Reads an OFF mesh. Only the vertices matter for scanning, faces are kept for completeness.
pub fn read_off<P: AsRef<Path>>(filepath: P) -> Result<Geometry, LoadError> {
    let mut parser_context = TextParserContext::open(filepath)?;

    let header = parser_context.expect_line()?;
    if header != "OFF" {
        return Err(parser_context.gen_error(format!(
            "file header does not start with 'OFF', got '{header}' instead"
        )));
    }

    let dims = parser_context.expect_line()?;
    let values = dims
        .split_whitespace()
        .map(|x| x.parse::<usize>())
        .collect::<Vec<Result<usize, ParseIntError>>>();

    let (num_verts, num_faces) = if let [Ok(v0), Ok(v1), Ok(_)] = values[..] {
        (v0, v1)
    } else {
        return Err(parser_context.gen_error(format!("Invalid size formats. Got `{dims}`")));
    };

    let vertices = read_off_elements::<f64>(num_verts, &mut parser_context)?;
    let faces = read_off_faces(num_faces, &mut parser_context)?;

    Ok(Geometry {
        points: vertices,
        faces: Some(faces),
    })
}
