/// Half open vertical interval `[min, max)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Band {
    pub min: f64,
    pub max: f64,
}

impl Band {
    /// NaN is never contained.
    pub fn contains(&self, y: f64) -> bool {
        y >= self.min && y < self.max
    }
}

/// Equal height bands splitting a vertical range, one per scan line.
#[derive(Clone, Copy, Debug)]
pub struct RowBands {
    y_min: f64,
    line_height: f64,
    count: usize,
}

impl RowBands {
    pub fn new(y_min: f64, y_max: f64, count: usize) -> Self {
        Self {
            y_min,
            line_height: (y_max - y_min) / count as f64,
            count,
        }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The band of the line `index`.
    pub fn band(&self, index: usize) -> Band {
        let min = self.y_min + index as f64 * self.line_height;
        Band {
            min,
            max: min + self.line_height,
        }
    }
}
