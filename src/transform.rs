use nalgebra::{Matrix3, Matrix4, Vector2, Vector3, Vector4};
use ndarray::{Array2, Axis};

use std::ops;

/// Homogeneous 4x4 transform acting on 3D points.
#[derive(Clone, Debug, PartialEq)]
pub struct Transform(Matrix4<f64>);

impl Transform {
    /// Translation by `(x, y, z)`.
    pub fn translation(x: f64, y: f64, z: f64) -> Self {
        Self(Matrix4::new_translation(&Vector3::new(x, y, z)))
    }

    /// Identity with `-1/scale` on the last row, z column.
    ///
    /// # Arguments
    ///
    /// * `scale`: The view scale, must be non zero.
    pub fn view_scale(scale: f64) -> Self {
        let mut matrix = Matrix4::identity();
        matrix[(3, 2)] = -1.0 / scale;
        Self(matrix)
    }
}

impl ops::Mul<&Vector4<f64>> for &Transform {
    type Output = Vector4<f64>;

    fn mul(self, rhs: &Vector4<f64>) -> Self::Output {
        self.0 * rhs
    }
}

impl ops::Mul<&Transform> for &Transform {
    type Output = Transform;

    fn mul(self, rhs: &Transform) -> Self::Output {
        Transform(self.0 * rhs.0)
    }
}

/// Homogeneous 3x3 transform acting on 2D points.
#[derive(Clone, Debug, PartialEq)]
pub struct Transform2(Matrix3<f64>);

impl Transform2 {
    /// Translation by `(x, y)`.
    pub fn translation(x: f64, y: f64) -> Self {
        Self(Matrix3::new_translation(&Vector2::new(x, y)))
    }

    /// Transforms a (N x 2) array of points in place.
    pub fn transform(&self, mut rhs: Array2<f64>) -> Array2<f64> {
        for mut point in rhs.axis_iter_mut(Axis(0)) {
            let v = self * &Vector2::new(point[0], point[1]);
            point[0] = v[0];
            point[1] = v[1];
        }

        rhs
    }
}

impl ops::Mul<&Vector2<f64>> for &Transform2 {
    type Output = Vector2<f64>;

    fn mul(self, rhs: &Vector2<f64>) -> Self::Output {
        let v = self.0 * Vector3::new(rhs[0], rhs[1], 1.0);
        Vector2::new(v[0] / v[2], v[1] / v[2])
    }
}
