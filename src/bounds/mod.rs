mod box3d;
pub use box3d::{BoundingBox, Box2D, Box3D};
