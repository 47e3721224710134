use itertools::{Itertools, MinMaxResult};
use nalgebra::SVector;
use ndarray::{ArrayView2, Axis};
use ordered_float::OrderedFloat;

/// Axis aligned box in `D` dimensions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox<const D: usize> {
    pub min: SVector<f64, D>,
    pub max: SVector<f64, D>,
}

pub type Box2D = BoundingBox<2>;
pub type Box3D = BoundingBox<3>;

impl<const D: usize> BoundingBox<D> {
    /// Box spanning `size` from `start_point`.
    ///
    /// # Arguments
    ///
    /// * `start_point`: The minimum point in each axis.
    /// * `size`: The size in each axis.
    pub fn from_extents(start_point: SVector<f64, D>, size: SVector<f64, D>) -> Self {
        Self {
            min: start_point,
            max: start_point + size,
        }
    }

    /// Computes the bounds of the finite rows of a (N x D) array.
    /// Returns `None` when there is no finite point.
    pub fn from_points(points: &ArrayView2<f64>) -> Option<Self> {
        let mut min = SVector::<f64, D>::zeros();
        let mut max = SVector::<f64, D>::zeros();
        for axis in 0..D {
            let finite = points
                .axis_iter(Axis(0))
                .filter(|row| row.iter().take(D).all(|v| v.is_finite()))
                .map(|row| OrderedFloat(row[axis]));
            match finite.minmax() {
                MinMaxResult::NoElements => return None,
                MinMaxResult::OneElement(v) => {
                    min[axis] = v.0;
                    max[axis] = v.0;
                }
                MinMaxResult::MinMax(lo, hi) => {
                    min[axis] = lo.0;
                    max[axis] = hi.0;
                }
            }
        }
        Some(Self { min, max })
    }

    /// Smallest box containing both boxes.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }

    /// Grows the box to contain `point`.
    pub fn extend(&self, point: &SVector<f64, D>) -> Self {
        Self {
            min: self.min.inf(point),
            max: self.max.sup(point),
        }
    }

    pub fn size(&self) -> SVector<f64, D> {
        self.max - self.min
    }

    pub fn center(&self) -> SVector<f64, D> {
        (self.min + self.max) * 0.5
    }
}
