use std::path::Path;

use super::{Geometry, LoadError};
use log::{debug, warn};
use ndarray::Array2;
use ply_rs::{parser, ply};

/// Only the coordinates are scanned, so they are read straight into a struct.
#[derive(Debug)]
struct Vertex {
    point: [f64; 3],
}

impl ply::PropertyAccess for Vertex {
    fn new() -> Self {
        Vertex { point: [0f64; 3] }
    }
    fn set_property(&mut self, key: String, property: ply::Property) {
        let axis = match key.as_ref() {
            "x" => 0,
            "y" => 1,
            "z" => 2,
            _ => return,
        };
        match property {
            ply::Property::Float(v) => self.point[axis] = v as f64,
            ply::Property::Double(v) => self.point[axis] = v,
            other => warn!("Vertex: ignoring non-float `{}` property {:?}", key, other),
        }
    }
}

fn parse_error<E: std::fmt::Display>(err: E) -> LoadError {
    LoadError::ParseError(err.to_string())
}

/// Reads the vertices of a PLY file as points.
///
/// Every other element (faces of any arity, edges, materials...) is parsed
/// only to move past its payload and then discarded.
pub fn read_ply<P>(filepath: P) -> Result<Geometry, LoadError>
where
    P: AsRef<Path>,
{
    let fptr = std::fs::File::open(filepath.as_ref())?;
    let mut f = std::io::BufReader::new(fptr);

    let vertex_parser = parser::Parser::<Vertex>::new();
    let header = vertex_parser.read_header(&mut f).map_err(parse_error)?;

    let mut point_array = None;
    for (_ignore_key, element) in &header.elements {
        if element.name == "vertex" {
            let vertex_vec = vertex_parser
                .read_payload_for_element(&mut f, element, &header)
                .map_err(parse_error)?;

            point_array = Some(Array2::<f64>::from_shape_fn(
                (vertex_vec.len(), 3),
                |(i, c)| vertex_vec[i].point[c],
            ));
        } else {
            let skipped = parser::Parser::<ply::DefaultElement>::new()
                .read_payload_for_element(&mut f, element, &header)
                .map_err(parse_error)?;
            debug!("Skipped {} `{}` elements", skipped.len(), element.name);
        }
    }

    let points = point_array.ok_or_else(|| {
        LoadError::ParseError(format!(
            "{}: no vertex element",
            filepath.as_ref().display()
        ))
    })?;

    Ok(Geometry::from_points(points))
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use super::read_ply;
    use crate::io::LoadError;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".ply").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn should_read_vertices() {
        let geom = read_ply("tests/data/cube.ply").unwrap();
        assert_eq!(geom.len_vertices(), 8);
        assert_eq!(geom.len_faces(), 0);
        assert_eq!(geom.points.row(7).to_vec(), vec![-0.5, 0.5, 1.5]);
    }

    #[test]
    fn should_skip_quad_faces_and_other_elements() {
        let file = write_temp(
            "ply
format ascii 1.0
element vertex 4
property double x
property double y
property double z
property uchar red
element face 1
property list uchar int vertex_indices
element edge 2
property int vertex1
property int vertex2
element vertex_extra 1
property float weight
end_header
0 0 1 255
1 0 1 255
1 1 1 255
0 1 2 255
4 0 1 2 3
0 1
2 3
0.5
",
        );
        let geom = read_ply(file.path()).unwrap();
        assert_eq!(geom.len_vertices(), 4);
        assert_eq!(geom.points.row(3).to_vec(), vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn should_require_vertices() {
        let file = write_temp(
            "ply
format ascii 1.0
element face 1
property list uchar int vertex_indices
end_header
3 0 1 2
",
        );
        match read_ply(file.path()) {
            Err(LoadError::ParseError(msg)) => assert!(msg.ends_with("no vertex element")),
            other => panic!("expected a parse error, got {:?}", other),
        }
    }
}
