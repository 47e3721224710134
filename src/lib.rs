pub mod bounds;
pub mod camera;
pub mod color;
pub mod error;
pub mod io;
pub mod pointcloud;
pub mod render;
pub mod scan;
pub mod trajectory;
pub mod transform;

#[cfg(test)]
mod unit_test;

pub use crate::error::Error;
pub use crate::pointcloud::PointCloud;
pub use crate::scan::{Mosaic, ScanParams, SequentialScanner};
