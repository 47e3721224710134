use std::path::Path;

use serde_derive::Deserialize;

use crate::error::Error;

/// Largest panel side, keeps the pixel buffer of the figure addressable.
pub const MAX_PANEL_SIZE: u32 = 8192;

/// Smallest plotting room left inside a panel once margins, labels and title are taken.
const MIN_PLOT_SIZE: u32 = 16;

/// Rendering parameters of the figure.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderParams {
    /// Width and height of each panel in pixels.
    pub panel_size: u32,
    /// Empty pixels around each chart.
    pub margin: u32,
    /// Half size of the `+` markers of the mosaic.
    pub marker_size: u32,
    /// Radius of the source cloud points.
    pub point_size: u32,
    /// Radius of the camera position markers.
    pub camera_marker_size: u32,
    /// Height of the panel titles in pixels; labels use two thirds of it.
    pub font_size: u32,
    /// Azimuth of the 3D panel view, in degrees.
    pub azimuth_deg: f64,
    /// Elevation of the 3D panel view, in degrees.
    pub elevation_deg: f64,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            panel_size: 800,
            margin: 24,
            marker_size: 3,
            point_size: 1,
            camera_marker_size: 3,
            font_size: 20,
            azimuth_deg: -60.0,
            elevation_deg: 30.0,
        }
    }
}

impl RenderParams {
    /// Loads the parameters from a JSON file. Missing keys keep their default value.
    pub fn from_json_file<P: AsRef<Path>>(filepath: P) -> Result<Self, Error> {
        let buffer = std::io::BufReader::new(std::fs::File::open(filepath)?);
        let params: Self = serde_json::from_reader(buffer)?;
        params.validate()?;
        Ok(params)
    }

    pub fn panel_size(mut self, value: u32) -> Self {
        self.panel_size = value;
        self
    }

    pub fn margin(mut self, value: u32) -> Self {
        self.margin = value;
        self
    }

    pub fn font_size(mut self, value: u32) -> Self {
        self.font_size = value;
        self
    }

    /// Pixels taken by the tick labels on the left and bottom sides of a chart.
    pub fn label_area_size(&self) -> u32 {
        self.font_size.saturating_mul(2)
    }

    /// Checks that a panel still has plotting room after its margins,
    /// label areas and title.
    pub fn validate(&self) -> Result<(), Error> {
        if self.panel_size > MAX_PANEL_SIZE {
            return Err(Error::invalid_parameter(format!(
                "panel_size ({}) is larger than {}",
                self.panel_size, MAX_PANEL_SIZE
            )));
        }
        if !self.azimuth_deg.is_finite() || !self.elevation_deg.is_finite() {
            return Err(Error::invalid_parameter("view angles must be finite"));
        }

        let reserved = self
            .margin
            .checked_mul(2)
            .and_then(|margins| margins.checked_add(self.label_area_size()))
            .and_then(|taken| taken.checked_add(self.font_size.checked_mul(2)?))
            .and_then(|taken| taken.checked_add(MIN_PLOT_SIZE));
        match reserved {
            Some(reserved) if reserved <= self.panel_size => Ok(()),
            _ => Err(Error::invalid_parameter(format!(
                "panel_size ({}) leaves no plotting room with a margin of {} and a font size of {}",
                self.panel_size, self.margin, self.font_size
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::RenderParams;
    use crate::error::Error;

    fn write_json(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn should_accept_defaults() {
        assert!(RenderParams::default().validate().is_ok());
    }

    #[test]
    fn should_reject_overflowing_margin() {
        let file = write_json(r#"{"margin": 3000000000}"#);
        match RenderParams::from_json_file(file.path()) {
            Err(Error::InvalidParameter(msg)) => assert!(msg.contains("margin of 3000000000")),
            other => panic!("expected an invalid parameter, got {:?}", other),
        }
    }

    #[test]
    fn should_validate_chained_setters() {
        assert!(RenderParams::default().panel_size(0).validate().is_err());
        assert!(RenderParams::default().margin(u32::MAX).validate().is_err());
        assert!(RenderParams::default().font_size(u32::MAX).validate().is_err());
        assert!(RenderParams::default()
            .panel_size(super::MAX_PANEL_SIZE + 1)
            .validate()
            .is_err());
        assert!(RenderParams::default()
            .panel_size(160)
            .margin(4)
            .font_size(12)
            .validate()
            .is_ok());
    }

    #[test]
    fn should_keep_defaults_of_missing_keys() {
        let file = write_json(r#"{"panel_size": 400}"#);
        let params = RenderParams::from_json_file(file.path()).unwrap();
        assert_eq!(params.panel_size, 400);
        assert_eq!(params.margin, RenderParams::default().margin);
    }
}
