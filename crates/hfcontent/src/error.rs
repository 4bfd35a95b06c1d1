//! Error type returned by every scoring entry point.

use std::path::PathBuf;

/// Coarse failure category.
///
/// Callers that only care whether the input was missing or unusable branch on
/// this instead of matching every [`ScoreError`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input path does not resolve to an existing file.
    NotFound,
    /// The input exists but could not be read or decoded as an image.
    DecodeError,
    /// Any other failure (degenerate image, invalid configuration).
    Other,
}

/// Errors produced while scoring an image.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoreError {
    /// No file at the given path.
    NotFound {
        /// Path as supplied by the caller.
        path: PathBuf,
    },
    /// Reading or decoding the image failed.
    Decode {
        /// Underlying I/O or codec message.
        message: String,
    },
    /// The decoded image has no pixels.
    EmptyImage {
        /// Image width in pixels.
        width: u32,
        /// Image height in pixels.
        height: u32,
    },
    /// A [`ScoreConfig`](crate::ScoreConfig) field is out of range.
    InvalidConfig {
        /// Which constraint was violated.
        message: String,
    },
}

impl ScoreError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Decode { .. } => ErrorKind::DecodeError,
            Self::EmptyImage { .. } | Self::InvalidConfig { .. } => ErrorKind::Other,
        }
    }

    /// True when the input file was absent.
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

impl std::fmt::Display for ScoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { path } => {
                write!(f, "image file not found at {}", path.display())
            }
            Self::Decode { message } => write!(f, "failed to decode image: {}", message),
            Self::EmptyImage { width, height } => {
                write!(f, "image has no pixels ({}x{})", width, height)
            }
            Self::InvalidConfig { message } => write!(f, "invalid configuration: {}", message),
        }
    }
}

impl std::error::Error for ScoreError {}

impl From<image::ImageError> for ScoreError {
    fn from(e: image::ImageError) -> Self {
        Self::Decode {
            message: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_separate_missing_file_from_everything_else() {
        let missing = ScoreError::NotFound {
            path: PathBuf::from("nope.jpg"),
        };
        assert_eq!(missing.kind(), ErrorKind::NotFound);
        assert!(missing.is_not_found());

        let decode = ScoreError::Decode {
            message: "bad magic".into(),
        };
        assert_eq!(decode.kind(), ErrorKind::DecodeError);
        assert!(!decode.is_not_found());

        let empty = ScoreError::EmptyImage {
            width: 0,
            height: 3,
        };
        assert_eq!(empty.kind(), ErrorKind::Other);
    }

    #[test]
    fn display_includes_context() {
        let e = ScoreError::NotFound {
            path: PathBuf::from("/tmp/x.png"),
        };
        assert_eq!(e.to_string(), "image file not found at /tmp/x.png");

        let e = ScoreError::EmptyImage {
            width: 0,
            height: 0,
        };
        assert_eq!(e.to_string(), "image has no pixels (0x0)");
    }
}
