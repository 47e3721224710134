use std::ops::Index;

use nalgebra::{Vector2, Vector3};

/// One camera placement of the acquisition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    /// Scan line index this pose acquires.
    pub index: usize,
    /// Angular position on the circle, in degrees.
    pub angle_deg: f64,
    /// Camera position `(Ax, Ay)` on the plane z = 0.
    pub offset: Vector2<f64>,
}

impl CameraPose {
    pub fn position(&self) -> Vector3<f64> {
        Vector3::new(self.offset[0], self.offset[1], 0.0)
    }
}

/// Camera poses along a circle centered at the origin of the plane z = 0.
/// Pose `i` sits at `i / alpha` degrees.
#[derive(Clone, Debug, Default)]
pub struct CircularTrajectory {
    poses: Vec<CameraPose>,
}

impl CircularTrajectory {
    /// Places `num_poses` cameras on a circle of the plane z = 0.
    ///
    /// # Arguments
    ///
    /// * `radius` - Radius of the circle.
    /// * `alpha` - Angular divisor, pose `i` is at `i / alpha` degrees.
    /// * `num_poses` - Number of poses, one per scan line.
    pub fn new(radius: f64, alpha: f64, num_poses: usize) -> Self {
        let poses = (0..num_poses)
            .map(|index| {
                let angle_deg = index as f64 / alpha;
                let theta = angle_deg.to_radians();
                CameraPose {
                    index,
                    angle_deg,
                    offset: Vector2::new(radius * theta.cos(), radius * theta.sin()),
                }
            })
            .collect();
        Self { poses }
    }

    /// Returns the number of poses in the trajectory.
    pub fn len(&self) -> usize {
        self.poses.len()
    }

    /// Returns true if the trajectory is empty.
    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CameraPose> + '_ {
        self.poses.iter()
    }

    pub fn poses(&self) -> &[CameraPose] {
        &self.poses
    }
}

impl Index<usize> for CircularTrajectory {
    type Output = CameraPose;
    /// Returns the pose at the given index.
    fn index(&self, index: usize) -> &Self::Output {
        &self.poses[index]
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::CircularTrajectory;

    #[test]
    fn should_place_poses_on_circle() {
        let trajectory = CircularTrajectory::new(0.1, 0.3, 110);
        assert_eq!(trajectory.len(), 110);

        assert_eq!(trajectory[0].angle_deg, 0.0);
        assert_abs_diff_eq!(trajectory[0].offset[0], 0.1, epsilon = 1e-12);
        assert_abs_diff_eq!(trajectory[0].offset[1], 0.0, epsilon = 1e-12);

        // 27 / 0.3 = 90 degrees
        assert_abs_diff_eq!(trajectory[27].angle_deg, 90.0, epsilon = 1e-9);
        assert_abs_diff_eq!(trajectory[27].offset[0], 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(trajectory[27].offset[1], 0.1, epsilon = 1e-9);

        for pose in trajectory.iter() {
            assert_abs_diff_eq!(pose.offset.norm(), 0.1, epsilon = 1e-12);
            assert_eq!(pose.position()[2], 0.0);
        }
        assert_eq!(trajectory[109].index, 109);
    }

    #[test]
    fn should_be_empty() {
        let trajectory = CircularTrajectory::new(0.1, 0.3, 0);
        assert!(trajectory.is_empty());
        assert_eq!(trajectory.iter().count(), 0);
    }
}
