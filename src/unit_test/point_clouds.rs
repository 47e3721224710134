use ndarray::Array2;
use rstest::fixture;

use crate::{io::read_csv, pointcloud::PointCloud};

#[fixture]
pub fn sample_csv_pointcloud() -> PointCloud {
    PointCloud::from_geometry(read_csv("tests/data/cloud.csv").unwrap())
}

/// Fibonacci sphere of radius 0.4 centered at (0, 0, 1.5), in front of the cameras.
#[fixture]
pub fn sample_sphere_pointcloud() -> PointCloud {
    const N: usize = 2000;
    let golden_angle = std::f64::consts::PI * (3.0 - 5f64.sqrt());
    let points = Array2::from_shape_fn((N, 3), |(i, c)| {
        let y = 1.0 - 2.0 * (i as f64 + 0.5) / N as f64;
        let r = (1.0 - y * y).sqrt();
        let phi = golden_angle * i as f64;
        match c {
            0 => 0.4 * r * phi.cos(),
            1 => 0.4 * y,
            _ => 1.5 + 0.4 * r * phi.sin(),
        }
    });
    PointCloud::from_points(points)
}
