use std::fmt;

/// Errors produced while loading or editing scenes
///
/// Geometric operations themselves never fail, degenerate input simply
/// produces an empty result.
#[derive(Debug)]
pub enum Error {
    /// Failed to parse textual representation of a value
    Parse { reason: String, offset: usize },
    /// Clip rectangle with `xmin > xmax` or `ymin > ymax`
    InvalidClipRect,
    /// Shape index is out of range of the scene
    InvalidShapeIndex(usize),
    /// JSON error
    #[cfg(feature = "serde")]
    Json(serde_json::Error),
    /// IO error propagated while reading or writing
    Io(std::io::Error),
}

impl Error {
    pub(crate) fn parse(reason: impl Into<String>, offset: usize) -> Self {
        Self::Parse {
            reason: reason.into(),
            offset,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse { reason, offset } => {
                write!(f, "parse error at {}: {}", offset, reason)
            }
            Error::InvalidClipRect => write!(f, "clip rectangle has min greater than max"),
            Error::InvalidShapeIndex(index) => write!(f, "no shape with index {}", index),
            #[cfg(feature = "serde")]
            Error::Json(error) => write!(f, "json: {}", error),
            Error::Io(error) => write!(f, "io: {}", error),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}

impl From<Error> for std::io::Error {
    fn from(error: Error) -> Self {
        match error {
            Error::Io(error) => error,
            _ => Self::new(std::io::ErrorKind::InvalidData, error),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            #[cfg(feature = "serde")]
            Error::Json(error) => Some(error),
            Error::Io(error) => Some(error),
            _ => None,
        }
    }
}
