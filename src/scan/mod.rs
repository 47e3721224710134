mod band;
pub use band::{Band, RowBands};
mod line;
pub use line::ScanLine;
mod mosaic;
pub use mosaic::Mosaic;
mod params;
pub use params::ScanParams;
mod scanner;
pub use scanner::SequentialScanner;
