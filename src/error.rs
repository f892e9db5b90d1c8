use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConversionError>;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input path not found: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("Invalid coordinate format: {0}")]
    InvalidCoordinate(String),

    #[error("Invalid record on line {line}: {message}")]
    InvalidRecord { line: usize, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: Box<ConversionError>,
    },
}

impl ConversionError {
    /// Attach the input file to an error raised while converting it
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        match self {
            ConversionError::File { .. } => self,
            other => ConversionError::File {
                path: path.into(),
                source: Box::new(other),
            },
        }
    }

    /// Whether the error comes from malformed input rather than the environment
    pub fn is_parse_error(&self) -> bool {
        match self {
            ConversionError::InvalidCoordinate(_) | ConversionError::InvalidRecord { .. } => true,
            ConversionError::File { source, .. } => source.is_parse_error(),
            _ => false,
        }
    }
}
