use std::io;

#[derive(Debug)]
pub enum LoadError {
    IO(io::Error),
    ParseError(String),
    /// The file extension does not match any known point cloud format.
    UnsupportedFormat(String),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            LoadError::IO(err) => write!(f, "IO error: {}", err),
            LoadError::ParseError(err) => write!(f, "Parse error: {}", err),
            LoadError::UnsupportedFormat(ext) => write!(f, "Unsupported format: `{}`", ext),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::IO(err) => Some(err),
            LoadError::ParseError(_) | LoadError::UnsupportedFormat(_) => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        LoadError::IO(err)
    }
}
