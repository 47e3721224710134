use plotters::drawing::DrawingAreaErrorKind;

use crate::io::LoadError;

/// Main error type for the library.
#[derive(Debug)]
pub enum Error {
    /// Used when the user pass a logical invalid parameter to a function.
    InvalidParameter(String),
    /// Failure while reading the input point cloud.
    Load(LoadError),
    Io(std::io::Error),
    /// Failure while encoding or saving the rendered figure.
    Image(image::ImageError),
    /// Malformed parameter file.
    Config(serde_json::Error),
    /// Failure while drawing a chart.
    Plot(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::InvalidParameter(err) => write!(f, "Parameter error: {}", err),
            Error::Load(err) => write!(f, "Load error: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Image(err) => write!(f, "Image error: {}", err),
            Error::Config(err) => write!(f, "Config error: {}", err),
            Error::Plot(err) => write!(f, "Plot error: {}", err),
        }
    }
}

impl Error {
    /// Create a error with the kind `InvalidParameter`.
    /// # Arguments
    /// * `msg` - The error message.
    pub fn invalid_parameter<T: ToString>(msg: T) -> Self {
        Error::InvalidParameter(msg.to_string())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidParameter(_) | Error::Plot(_) => None,
            Error::Load(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Image(err) => Some(err),
            Error::Config(err) => Some(err),
        }
    }
}

impl From<LoadError> for Error {
    fn from(err: LoadError) -> Self {
        Error::Load(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::Image(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err)
    }
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for Error {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        Error::Plot(err.to_string())
    }
}
