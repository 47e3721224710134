mod point_clouds;
pub(crate) use point_clouds::{sample_csv_pointcloud, sample_sphere_pointcloud};
