//! Two panel figure of the acquisition: the source cloud and the 2D mosaic.
mod figure;
pub use figure::Figure;
mod params;
pub use params::{RenderParams, MAX_PANEL_SIZE};
mod window;
