use log::{debug, info};
use ndarray::Array2;
use rayon::prelude::*;

use super::{Mosaic, RowBands, ScanLine, ScanParams};
use crate::{
    camera::PerspectiveCamera,
    color::Palette,
    error::Error,
    pointcloud::PointCloud,
    trajectory::{CameraPose, CircularTrajectory},
    transform::Transform2,
};

/// Simulates the camera moving along the circle, acquiring one scan line per pose.
#[derive(Clone, Debug)]
pub struct SequentialScanner {
    params: ScanParams,
    trajectory: CircularTrajectory,
    bands: RowBands,
    palette: Palette,
}

impl SequentialScanner {
    pub fn new(params: ScanParams) -> Result<Self, Error> {
        params.validate()?;
        Ok(Self {
            trajectory: CircularTrajectory::new(params.radius, params.alpha, params.num_lines),
            bands: RowBands::new(params.y_min, params.y_max, params.num_lines),
            palette: Palette::default(),
            params,
        })
    }

    /// Replaces the line colors.
    pub fn with_palette(mut self, palette: Palette) -> Result<Self, Error> {
        if palette.is_empty() {
            return Err(Error::invalid_parameter("palette must have at least one color"));
        }
        self.palette = palette;
        Ok(self)
    }

    pub fn trajectory(&self) -> &CircularTrajectory {
        &self.trajectory
    }

    pub fn bands(&self) -> &RowBands {
        &self.bands
    }

    /// The camera of the given pose.
    pub fn camera(&self, pose: &CameraPose) -> PerspectiveCamera {
        PerspectiveCamera::new(self.params.focal_length, self.params.view_scale, pose.offset)
    }

    /// Acquires a single scan line.
    ///
    /// # Arguments
    ///
    /// * `cloud` - The scanned point cloud.
    /// * `index` - Line index, in `0..num_lines`.
    ///
    /// # Returns
    ///
    /// * The points whose projection falls in the band of the line, translated by the camera offset.
    pub fn scan_line(&self, cloud: &PointCloud, index: usize) -> Result<ScanLine, Error> {
        if index >= self.trajectory.len() {
            return Err(Error::invalid_parameter(format!(
                "line {index} is out of range, there are {} lines",
                self.trajectory.len()
            )));
        }
        Ok(self.scan_pose(cloud, &self.trajectory[index]))
    }

    fn scan_pose(&self, cloud: &PointCloud, pose: &CameraPose) -> ScanLine {
        let camera = self.camera(pose);
        let band = self.bands.band(pose.index);

        let kept = cloud
            .iter_homogeneous()
            .filter_map(|point| camera.project(&point))
            .filter(|projected| band.contains(projected[1]))
            .collect::<Vec<_>>();
        let points = Array2::<f64>::from_shape_fn((kept.len(), 2), |(i, c)| kept[i][c]);

        ScanLine {
            pose: *pose,
            color: self.palette.color(pose.index),
            points: Transform2::translation(pose.offset[0], pose.offset[1]).transform(points),
        }
    }

    /// Acquires every line and composes them into a mosaic.
    pub fn acquire(&self, cloud: &PointCloud) -> Mosaic {
        let zero_depth = cloud.points.column(2).iter().filter(|z| **z == 0.0).count();
        if zero_depth > 0 {
            debug!("{} points have z = 0 and are never projected", zero_depth);
        }

        let lines = self
            .trajectory
            .poses()
            .par_iter()
            .map(|pose| self.scan_pose(cloud, pose))
            .collect::<Vec<_>>();

        for line in &lines {
            debug!(
                "line {:3}: theta = {:7.2} deg, camera = ({:+.4}, {:+.4}), {} points",
                line.index(),
                line.pose.angle_deg,
                line.pose.offset[0],
                line.pose.offset[1],
                line.len()
            );
        }

        let mosaic = Mosaic::new(lines);
        info!("Acquired {} from {} source points", mosaic, cloud.len());
        mosaic
    }
}
