use ndarray::prelude::*;

/// Generic representation of attributes found in 3D model/object/geometry files.
#[derive(Clone, Debug)]
pub struct Geometry {
    /// The 3D points. Shape is (Nx3).
    pub points: Array2<f64>,
    /// The indices to conect vertices that make faces in the geometry.
    /// Shape is (Nx3), we always convert to triangles.
    pub faces: Option<Array2<usize>>,
}

impl Geometry {
    pub fn from_points(points: Array2<f64>) -> Self {
        Self {
            points,
            faces: None,
        }
    }

    pub fn len_vertices(&self) -> usize {
        self.points.nrows()
    }

    pub fn len_faces(&self) -> usize {
        self.faces.as_ref().map_or(0, |faces| faces.nrows())
    }
}
