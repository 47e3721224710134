use nalgebra::{Matrix3x4, Vector2, Vector3, Vector4};

use super::transform::Transform;

/// Scan camera with a perspective projection whose divisor is each point's own depth.
#[derive(Clone, Debug)]
pub struct PerspectiveCamera {
    /// Focal length of the projection.
    pub focal_length: f64,
    /// Camera offset `(bx, by)` in the plane z = 0.
    pub offset: Vector2<f64>,
    /// Camera translation followed by the view scale.
    view: Transform,
}

impl PerspectiveCamera {
    /// Creates the camera of one pose, placed at `offset` on the plane z = 0.
    ///
    /// # Arguments
    ///
    /// * `focal_length`: The focal length.
    /// * `view_scale`: The view scale `v`, the view matrix has `-1/v` on its last row.
    /// * `offset`: Camera position on the plane z = 0.
    pub fn new(focal_length: f64, view_scale: f64, offset: Vector2<f64>) -> Self {
        let translation = Transform::translation(offset[0], offset[1], 0.0);
        Self {
            focal_length,
            offset,
            view: &Transform::view_scale(view_scale) * &translation,
        }
    }

    /// Per-point perspective matrix.
    ///
    /// # Arguments
    ///
    /// * `depth`: The z of the point being projected.
    ///
    /// # Returns
    ///
    /// * `None` when `depth` is exactly zero.
    pub fn perspective_matrix(&self, depth: f64) -> Option<Matrix3x4<f64>> {
        if depth == 0.0 {
            return None;
        }
        let f = self.focal_length;
        let (bx, by) = (self.offset[0], self.offset[1]);
        Some(Matrix3x4::new(
            -f / depth, 0.0, -bx, 0.0, //
            0.0, -f / depth, -by, 0.0, //
            0.0, 0.0, -1.0 / depth, 0.0,
        ))
    }

    /// Projects a homogeneous point, without the perspective division.
    pub fn project_homogeneous(&self, point: &Vector4<f64>) -> Option<Vector3<f64>> {
        let perspective = self.perspective_matrix(point[2])?;
        Some(perspective * (&self.view * point))
    }

    /// Project a point into the image plane.
    ///
    /// # Arguments
    ///
    /// * point: The point in homogeneous coordinates `(x, y, z, 1)`.
    ///
    /// # Returns
    ///
    /// * (x and y) coordinates, or `None` if the point has zero depth or the division is not finite.
    pub fn project(&self, point: &Vector4<f64>) -> Option<Vector2<f64>> {
        let homogeneous = self.project_homogeneous(point)?;
        let projected = Vector2::new(
            homogeneous[0] / homogeneous[2],
            homogeneous[1] / homogeneous[2],
        );

        if projected.iter().all(|v| v.is_finite()) {
            Some(projected)
        } else {
            None
        }
    }
}
