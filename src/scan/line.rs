use image::Rgb;
use nalgebra::Vector2;
use ndarray::{Array2, Axis};

use crate::trajectory::CameraPose;

/// Points acquired by one camera pose, already translated into the mosaic.
#[derive(Clone, Debug)]
pub struct ScanLine {
    /// The pose that acquired the line.
    pub pose: CameraPose,
    /// Line color.
    pub color: Rgb<u8>,
    /// The 2D points. Shape is (Nx2).
    pub points: Array2<f64>,
}

impl ScanLine {
    pub fn index(&self) -> usize {
        self.pose.index
    }

    pub fn len(&self) -> usize {
        self.points.len_of(Axis(0))
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Vector2<f64>> + '_ {
        self.points
            .axis_iter(Axis(0))
            .map(|row| Vector2::new(row[0], row[1]))
    }
}
