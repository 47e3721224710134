use image::Rgb;
use nalgebra::Vector2;

use super::ScanLine;
use crate::bounds::Box2D;

/// Composite of all scan lines, in line order.
#[derive(Clone, Debug, Default)]
pub struct Mosaic {
    lines: Vec<ScanLine>,
}

impl Mosaic {
    pub fn new(lines: Vec<ScanLine>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[ScanLine] {
        &self.lines
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of points over all lines.
    pub fn point_count(&self) -> usize {
        self.lines.iter().map(ScanLine::len).sum()
    }

    /// Number of lines that kept at least one point.
    pub fn filled_lines(&self) -> usize {
        self.lines.iter().filter(|line| !line.is_empty()).count()
    }

    /// Every point with the color of its line.
    pub fn iter_points(&self) -> impl Iterator<Item = (Vector2<f64>, Rgb<u8>)> + '_ {
        self.lines
            .iter()
            .flat_map(|line| line.iter().map(move |point| (point, line.color)))
    }

    pub fn bounds(&self) -> Option<Box2D> {
        self.lines
            .iter()
            .filter_map(|line| Box2D::from_points(&line.points.view()))
            .reduce(|accum, bounds| accum.union(&bounds))
    }
}

impl std::fmt::Display for Mosaic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} lines ({} non empty), {} points",
            self.len(),
            self.filled_lines(),
            self.point_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use image::Rgb;
    use nalgebra::Vector2;
    use ndarray::{array, Array2};

    use super::Mosaic;
    use crate::{scan::ScanLine, trajectory::CircularTrajectory};

    fn sample_mosaic() -> Mosaic {
        let trajectory = CircularTrajectory::new(0.1, 0.3, 3);
        Mosaic::new(vec![
            ScanLine {
                pose: trajectory[0],
                color: Rgb([1, 2, 3]),
                points: array![[0.0, -0.5], [1.0, -0.4]],
            },
            ScanLine {
                pose: trajectory[1],
                color: Rgb([4, 5, 6]),
                points: Array2::zeros((0, 2)),
            },
            ScanLine {
                pose: trajectory[2],
                color: Rgb([7, 8, 9]),
                points: array![[-2.0, 0.3]],
            },
        ])
    }

    #[test]
    fn should_summarize_lines() {
        let mosaic = sample_mosaic();
        assert_eq!(mosaic.len(), 3);
        assert_eq!(mosaic.point_count(), 3);
        assert_eq!(mosaic.filled_lines(), 2);
        assert_eq!(mosaic.to_string(), "3 lines (2 non empty), 3 points");
    }

    #[test]
    fn should_color_points_by_line() {
        let points = sample_mosaic().iter_points().collect::<Vec<_>>();
        assert_eq!(points.len(), 3);
        assert_eq!(points[2], (Vector2::new(-2.0, 0.3), Rgb([7, 8, 9])));

        let bounds = sample_mosaic().bounds().unwrap();
        assert_eq!(bounds.min, Vector2::new(-2.0, -0.5));
        assert_eq!(bounds.max, Vector2::new(1.0, 0.3));
    }
}
