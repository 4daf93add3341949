use std::fmt;
use std::path::PathBuf;

/// Result type for evalview-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Results directory does not exist or is not a directory
    NotFound(PathBuf),

    /// Results directory could not be enumerated
    Walk(PathBuf, walkdir::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound(path) => {
                write!(f, "Results directory not found: {}", path.display())
            }
            Error::Walk(path, err) => write!(
                f,
                "Failed to read results directory {}: {}",
                path.display(),
                err
            ),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Walk(_, err) => Some(err),
            Error::Io(err) => Some(err),
            Error::NotFound(_) | Error::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}
