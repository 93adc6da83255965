// SPDX-License-Identifier: MPL-2.0
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Error {
    /// The requested library name is not registered. Carries the sorted
    /// list of valid names so callers can report what is available.
    LibraryNotFound {
        library: String,
        available: Vec<String>,
    },

    /// The templated path does not exist on disk.
    IconNotFound(PathBuf),

    /// A path template referenced a placeholder with no value, or was
    /// malformed.
    Template(String),

    Io(String),
    Svg(String),
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::LibraryNotFound { library, available } => write!(
                f,
                "Icon library '{}' not found. Available libraries: [{}]",
                library,
                available.join(", ")
            ),
            Error::IconNotFound(path) => {
                write!(f, "No icon file found at: {}", path.display())
            }
            Error::Template(e) => write!(f, "Template Error: {}", e),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Svg(e) => write!(f, "SVG Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
