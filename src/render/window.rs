use nalgebra::{SVector, Vector2};

use crate::bounds::{BoundingBox, Box2D};

/// Largest coordinate magnitude a chart range reaches. Points beyond it are
/// not drawn, and the width of any range stays finite.
pub const MAX_EXTENT: f64 = 1e300;

/// Data bounds padded by 5% on each side. Flat axes get a unit wide range.
pub fn padded<const D: usize>(bounds: &BoundingBox<D>) -> BoundingBox<D> {
    let mut min = SVector::<f64, D>::zeros();
    let mut max = SVector::<f64, D>::zeros();
    for axis in 0..D {
        let lo = bounds.min[axis].clamp(-MAX_EXTENT, MAX_EXTENT);
        let hi = bounds.max[axis].clamp(-MAX_EXTENT, MAX_EXTENT);
        let pad = if hi > lo {
            (hi - lo) * 0.05
        } else {
            0.5f64.max(lo.abs() * 0.05)
        };
        min[axis] = lo - pad;
        max[axis] = hi + pad;
    }
    BoundingBox { min, max }
}

/// Grows the shorter side of `window` around its center so one data unit
/// spans the same number of pixels on both axes of a `(width, height)` plot.
pub fn equal_aspect(window: &Box2D, (width, height): (u32, u32)) -> Box2D {
    let (width, height) = (width.max(1) as f64, height.max(1) as f64);
    let size = window.size();
    let units_per_pixel = (size.x / width).max(size.y / height);
    let half = Vector2::new(units_per_pixel * width, units_per_pixel * height) * 0.5;
    let center = window.center();
    Box2D {
        min: center - half,
        max: center + half,
    }
}

/// Whether every coordinate of `point` lies inside `window`.
pub fn contains<const D: usize>(window: &BoundingBox<D>, point: &SVector<f64, D>) -> bool {
    (0..D).all(|axis| window.min[axis] <= point[axis] && point[axis] <= window.max[axis])
}

/// Tick labels: plain decimals near unit scale, scientific notation otherwise.
pub fn tick_label(value: &f64) -> String {
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-3..1e4).contains(&magnitude) {
        format!("{:.1e}", value)
    } else {
        let text = format!("{:.3}", value);
        let text = text.trim_end_matches('0').trim_end_matches('.');
        if text == "-0" {
            "0".to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use nalgebra::{Vector2, Vector3};

    use super::{contains, equal_aspect, padded, tick_label, MAX_EXTENT};
    use crate::bounds::{Box2D, Box3D};

    #[test]
    fn should_pad_by_five_percent() {
        let window = padded(&Box2D {
            min: Vector2::new(0.0, -1.0),
            max: Vector2::new(2.0, 1.0),
        });
        assert_abs_diff_eq!(window.min, Vector2::new(-0.1, -1.1), epsilon = 1e-12);
        assert_abs_diff_eq!(window.max, Vector2::new(2.1, 1.1), epsilon = 1e-12);
    }

    #[test]
    fn should_open_flat_axes() {
        let window = padded(&Box3D {
            min: Vector3::new(0.0, 1.0, 100.0),
            max: Vector3::new(0.0, 1.0, 100.0),
        });
        assert_eq!(window.min, Vector3::new(-0.5, 0.5, 95.0));
        assert_eq!(window.max, Vector3::new(0.5, 1.5, 105.0));
    }

    #[test]
    fn should_keep_huge_ranges_finite() {
        let window = padded(&Box2D {
            min: Vector2::new(-1.5e308, f64::MAX),
            max: Vector2::new(1.5e308, f64::MAX),
        });
        assert!(window.size().iter().all(|v| v.is_finite() && *v > 0.0));
        assert!(window.max.x > MAX_EXTENT && window.max.x < 2.0 * MAX_EXTENT);

        let square = equal_aspect(&window, (300, 200));
        assert!(square.size().iter().all(|v| v.is_finite()));
        assert!(!contains(&square, &Vector2::new(1.5e308, 0.0)));
    }

    #[test]
    fn should_equalize_units_per_pixel() {
        let window = Box2D {
            min: Vector2::new(-1.0, 0.0),
            max: Vector2::new(1.0, 0.5),
        };
        let square = equal_aspect(&window, (200, 200));
        assert_abs_diff_eq!(square.min, Vector2::new(-1.0, -0.75), epsilon = 1e-12);
        assert_abs_diff_eq!(square.max, Vector2::new(1.0, 1.25), epsilon = 1e-12);

        let wide = equal_aspect(&window, (400, 100));
        assert_abs_diff_eq!(wide.size(), Vector2::new(2.0, 0.5), epsilon = 1e-12);
    }

    #[test]
    fn should_format_ticks() {
        assert_eq!(tick_label(&0.0), "0");
        assert_eq!(tick_label(&-0.25), "-0.25");
        assert_eq!(tick_label(&1.5), "1.5");
        assert_eq!(tick_label(&2.0), "2");
        assert_eq!(tick_label(&1e300), "1.0e300");
    }
}
