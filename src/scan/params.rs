use std::path::Path;

use serde_derive::Deserialize;

use crate::error::Error;

/// Parameters of the sequential acquisition.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScanParams {
    /// Focal length of the perspective projection.
    pub focal_length: f64,
    /// View scale `v`, the view matrix carries `-1/v` on its last row.
    pub view_scale: f64,
    /// Radius of the circular camera trajectory.
    pub radius: f64,
    /// Angular divisor, camera `i` is at `i / alpha` degrees.
    pub alpha: f64,
    /// Number of scan lines, also the number of camera positions.
    pub num_lines: usize,
    /// Lower vertical limit of the 2D projection.
    pub y_min: f64,
    /// Upper vertical limit of the 2D projection.
    pub y_max: f64,
}

impl Default for ScanParams {
    fn default() -> Self {
        Self {
            focal_length: 2.0,
            view_scale: 2.0,
            radius: 0.1,
            alpha: 0.3,
            num_lines: 110,
            y_min: -0.75,
            y_max: 0.75,
        }
    }
}

impl ScanParams {
    /// Loads the parameters from a JSON file. Missing keys keep their default value.
    pub fn from_json_file<P: AsRef<Path>>(filepath: P) -> Result<Self, Error> {
        let buffer = std::io::BufReader::new(std::fs::File::open(filepath)?);
        let params: Self = serde_json::from_reader(buffer)?;
        params.validate()?;
        Ok(params)
    }

    pub fn focal_length(mut self, value: f64) -> Self {
        self.focal_length = value;
        self
    }

    pub fn view_scale(mut self, value: f64) -> Self {
        self.view_scale = value;
        self
    }

    pub fn radius(mut self, value: f64) -> Self {
        self.radius = value;
        self
    }

    pub fn alpha(mut self, value: f64) -> Self {
        self.alpha = value;
        self
    }

    pub fn num_lines(mut self, value: usize) -> Self {
        self.num_lines = value;
        self
    }

    /// Sets the vertical extent that is split into the scan line bands.
    pub fn vertical_range(mut self, y_min: f64, y_max: f64) -> Self {
        self.y_min = y_min;
        self.y_max = y_max;
        self
    }

    /// Checks that the acquisition is well defined.
    pub fn validate(&self) -> Result<(), Error> {
        let values = [
            ("focal_length", self.focal_length),
            ("view_scale", self.view_scale),
            ("radius", self.radius),
            ("alpha", self.alpha),
            ("y_min", self.y_min),
            ("y_max", self.y_max),
        ];
        if let Some((name, _)) = values.iter().find(|(_, value)| !value.is_finite()) {
            return Err(Error::invalid_parameter(format!("{name} must be finite")));
        }
        if self.num_lines == 0 {
            return Err(Error::invalid_parameter("num_lines must be positive"));
        }
        if self.alpha == 0.0 {
            return Err(Error::invalid_parameter("alpha must be non zero"));
        }
        if self.view_scale == 0.0 {
            return Err(Error::invalid_parameter("view_scale must be non zero"));
        }
        if self.y_max <= self.y_min {
            return Err(Error::invalid_parameter(format!(
                "y_max ({}) must be greater than y_min ({})",
                self.y_max, self.y_min
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use approx::assert_abs_diff_eq;

    use super::ScanParams;
    use crate::{error::Error, scan::RowBands};

    #[test]
    fn should_default_to_acquisition_constants() {
        let params = ScanParams::default();
        assert_eq!(params.num_lines, 110);
        let first = RowBands::new(params.y_min, params.y_max, params.num_lines).band(0);
        assert_eq!(first.min, -0.75);
        assert_abs_diff_eq!(first.max - first.min, 1.5 / 110.0, epsilon = 1e-15);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn should_reject_invalid_values() {
        let checks = [
            ScanParams::default().num_lines(0),
            ScanParams::default().alpha(0.0),
            ScanParams::default().view_scale(0.0),
            ScanParams::default().vertical_range(0.5, 0.5),
            ScanParams::default().radius(f64::NAN),
        ];
        for params in checks {
            assert!(matches!(params.validate(), Err(Error::InvalidParameter(_))));
        }
    }

    #[test]
    fn should_load_partial_json() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(br#"{"num_lines": 20, "radius": 0.2}"#).unwrap();

        let params = ScanParams::from_json_file(file.path()).unwrap();
        assert_eq!(params, ScanParams::default().num_lines(20).radius(0.2));
    }

    #[test]
    fn should_report_malformed_json() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(br#"{"num_lines": "many"}"#).unwrap();

        assert!(matches!(
            ScanParams::from_json_file(file.path()),
            Err(Error::Config(_))
        ));
    }
}
