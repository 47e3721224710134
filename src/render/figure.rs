use std::{path::Path, sync::OnceLock};

use image::{Rgb, RgbImage};
use log::{debug, info};
use nalgebra::{Vector2, Vector3};
use plotters::{
    coord::Shift,
    prelude::*,
    style::{register_font, FontStyle},
};

use super::{
    params::RenderParams,
    window::{contains, equal_aspect, padded, tick_label},
};
use crate::{
    bounds::{Box2D, Box3D},
    color::{CAMERA_RED, SOURCE_BLUE},
    error::Error,
    pointcloud::PointCloud,
    scan::Mosaic,
    trajectory::CircularTrajectory,
};

const FONT_FAMILY: &str = "sans-serif";
const DEJAVU_SANS: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

type Panel<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

/// Makes the bundled font available to every chart. Runs once per process.
fn register_fonts() -> Result<(), Error> {
    static REGISTERED: OnceLock<Result<(), String>> = OnceLock::new();
    REGISTERED
        .get_or_init(|| {
            register_font(FONT_FAMILY, FontStyle::Normal, DEJAVU_SANS)
                .map_err(|_| "the bundled DejaVu Sans font is invalid".to_string())
        })
        .clone()
        .map_err(Error::Plot)
}

fn rgb_color(color: Rgb<u8>) -> RGBColor {
    RGBColor(color[0], color[1], color[2])
}

fn grid_style() -> ShapeStyle {
    BLACK.mix(0.15).stroke_width(1)
}

/// Draws the source cloud in blue and the camera positions in red on a 3D chart.
///
/// Matplotlib's `(azimuth, elevation)` view is approximated with the yaw and pitch
/// of the plotters projection. Plotters keeps its Y axis vertical, so the data
/// `z` is sent to it.
fn draw_source_panel(
    area: &Panel,
    cloud: &PointCloud,
    trajectory: &CircularTrajectory,
    params: &RenderParams,
) -> Result<(), Error> {
    let cameras = trajectory
        .iter()
        .map(|pose| pose.position())
        .collect::<Vec<_>>();
    let window = cameras
        .iter()
        .fold(cloud.bounds(), |accum, camera| {
            Some(match accum {
                Some(bounds) => bounds.extend(camera),
                None => Box3D {
                    min: *camera,
                    max: *camera,
                },
            })
        })
        .map(|bounds| padded(&bounds))
        .unwrap_or_else(|| padded(&Box3D::from_extents(Vector3::zeros(), Vector3::zeros())));

    let area = area.titled("3D", (FONT_FAMILY, params.font_size))?;
    let mut chart = ChartBuilder::on(&area)
        .margin(params.margin)
        .build_cartesian_3d(
            window.min.x..window.max.x,
            window.min.z..window.max.z,
            window.min.y..window.max.y,
        )?;
    chart.with_projection(|mut projection| {
        projection.yaw = (params.azimuth_deg + 90.0).to_radians();
        projection.pitch = params.elevation_deg.to_radians();
        projection.scale = 0.8;
        projection.into_matrix()
    });

    let label_size = params.font_size * 2 / 3;
    chart
        .configure_axes()
        .light_grid_style(grid_style())
        .max_light_lines(3)
        .label_style((FONT_FAMILY, label_size))
        .x_formatter(&tick_label)
        .y_formatter(&tick_label)
        .z_formatter(&tick_label)
        .draw()?;

    let blue = rgb_color(SOURCE_BLUE).filled();
    let points = cloud
        .iter()
        .filter(|point| contains(&window, point))
        .map(|point| Circle::new((point.x, point.z, point.y), params.point_size, blue));
    chart.draw_series(points)?;

    let red = rgb_color(CAMERA_RED).filled();
    chart.draw_series(cameras.iter().filter(|camera| contains(&window, camera)).map(
        |camera| Circle::new((camera.x, camera.z, camera.y), params.camera_marker_size, red),
    ))?;

    let center = window.center();
    let labels = [
        ("X", (window.max.x, window.min.z, center.y)),
        ("Y", (center.x, window.min.z, window.max.y)),
        ("Z", (window.min.x, window.max.z, window.min.y)),
    ];
    chart.draw_series(
        labels
            .iter()
            .map(|(text, position)| Text::new(*text, *position, (FONT_FAMILY, label_size))),
    )?;

    Ok(())
}

/// Draws every mosaic point as a `+` in the color of its line, over the axes
/// through the origin, keeping one data unit equal on both axes.
fn draw_mosaic_panel(area: &Panel, mosaic: &Mosaic, params: &RenderParams) -> Result<(), Error> {
    let area = area.titled("2D", (FONT_FAMILY, params.font_size))?;

    let (width, height) = area.dim_in_pixel();
    let taken = params.margin.saturating_mul(2) + params.label_area_size();
    let window = mosaic
        .bounds()
        .map(|bounds| padded(&bounds.extend(&Vector2::zeros())))
        .unwrap_or_else(|| padded(&Box2D::from_extents(Vector2::zeros(), Vector2::zeros())));
    let window = equal_aspect(
        &window,
        (width.saturating_sub(taken), height.saturating_sub(taken)),
    );

    let label_size = params.font_size * 2 / 3;
    let mut chart = ChartBuilder::on(&area)
        .margin(params.margin)
        .x_label_area_size(params.label_area_size())
        .y_label_area_size(params.label_area_size())
        .build_cartesian_2d(window.min.x..window.max.x, window.min.y..window.max.y)?;
    chart
        .configure_mesh()
        .bold_line_style(grid_style())
        .light_line_style(TRANSPARENT)
        .x_desc("x")
        .y_desc("y")
        .label_style((FONT_FAMILY, label_size))
        .axis_desc_style((FONT_FAMILY, label_size))
        .x_label_formatter(&tick_label)
        .y_label_formatter(&tick_label)
        .draw()?;

    chart.draw_series(LineSeries::new(
        vec![(window.min.x, 0.0), (window.max.x, 0.0)],
        &BLACK,
    ))?;
    chart.draw_series(LineSeries::new(
        vec![(0.0, window.min.y), (0.0, window.max.y)],
        &BLACK,
    ))?;

    for line in mosaic.lines().iter().filter(|line| !line.is_empty()) {
        let points = line
            .iter()
            .filter(|point| contains(&window, point))
            .map(|point| (point.x, point.y));
        chart.draw_series(PointSeries::of_element(
            points,
            params.marker_size as i32,
            rgb_color(line.color),
            &|center, size, style| {
                EmptyElement::at(center)
                    + PathElement::new(vec![(-size, 0), (size, 0)], style)
                    + PathElement::new(vec![(0, -size), (0, size)], style)
            },
        ))?;
    }

    Ok(())
}

/// The "3D" source cloud panel on the left and the "2D" mosaic panel on the right.
pub struct Figure {
    image: RgbImage,
}

impl Figure {
    /// Renders the figure.
    ///
    /// # Arguments
    ///
    /// * `cloud`: The scanned point cloud.
    /// * `trajectory`: The camera poses, drawn over the cloud.
    /// * `mosaic`: The acquisition result.
    /// * `params`: Rendering parameters, validated before drawing.
    pub fn new(
        cloud: &PointCloud,
        trajectory: &CircularTrajectory,
        mosaic: &Mosaic,
        params: &RenderParams,
    ) -> Result<Self, Error> {
        params.validate()?;
        register_fonts()?;

        let (width, height) = (params.panel_size * 2, params.panel_size);
        let mut buffer = vec![0u8; width as usize * height as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            root.fill(&WHITE)?;
            let panels = root.split_evenly((1, 2));
            draw_source_panel(&panels[0], cloud, trajectory, params)?;
            draw_mosaic_panel(&panels[1], mosaic, params)?;
            root.present()?;
        }
        debug!("Rendered {}x{} figure of {}", width, height, mosaic);

        let image = RgbImage::from_raw(width, height, buffer)
            .ok_or_else(|| Error::Plot("figure buffer does not match its size".into()))?;
        Ok(Self { image })
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Writes the figure, the format follows the extension.
    pub fn save<P: AsRef<Path>>(&self, filepath: P) -> Result<(), Error> {
        self.image.save(filepath.as_ref())?;
        info!(
            "Saved {}x{} figure to {}",
            self.image.width(),
            self.image.height(),
            filepath.as_ref().display()
        );
        Ok(())
    }
}
