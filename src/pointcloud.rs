use nalgebra::{Vector3, Vector4};
use ndarray::prelude::*;
use ndarray::Array2;

use super::bounds::Box3D;
use super::io::Geometry;

/// Static 3D point cloud that is scanned.
#[derive(Clone, Debug)]
pub struct PointCloud {
    /// The 3D points. Shape is (Nx3).
    pub points: Array2<f64>,
}

impl PointCloud {
    pub fn from_geometry(geometry: Geometry) -> Self {
        Self {
            points: geometry.points,
        }
    }

    pub fn from_points(points: Array2<f64>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len_of(Axis(0))
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Vector3<f64>> + '_ {
        self.points
            .axis_iter(Axis(0))
            .map(|row| Vector3::new(row[0], row[1], row[2]))
    }

    /// Points in homogeneous coordinates `(x, y, z, 1)`.
    pub fn iter_homogeneous(&self) -> impl Iterator<Item = Vector4<f64>> + '_ {
        self.iter()
            .map(|point| Vector4::new(point.x, point.y, point.z, 1.0))
    }

    pub fn bounds(&self) -> Option<Box3D> {
        Box3D::from_points(&self.points.view())
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::Vector4;
    use ndarray::Array2;
    use rstest::*;

    use super::PointCloud;
    use crate::unit_test::sample_csv_pointcloud;

    #[rstest]
    fn test_point_cloud_from_file(sample_csv_pointcloud: PointCloud) {
        assert_eq!(sample_csv_pointcloud.len(), 12);
        assert!(!sample_csv_pointcloud.is_empty());
        let bounds = sample_csv_pointcloud.bounds().unwrap();
        assert_eq!(bounds.max[2], 2.0);
        assert_eq!(bounds.min[2], -1.0);
    }

    #[rstest]
    fn should_append_homogeneous_one(sample_csv_pointcloud: PointCloud) {
        let first = sample_csv_pointcloud.iter_homogeneous().next().unwrap();
        assert_eq!(first, Vector4::new(-0.05, -0.30, 1.0, 1.0));
    }

    #[test]
    fn should_be_empty() {
        let cloud = PointCloud::from_points(Array2::zeros((0, 3)));
        assert!(cloud.is_empty());
        assert!(cloud.bounds().is_none());
    }
}
