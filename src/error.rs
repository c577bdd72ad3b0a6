use crate::validate::ValidationError;
use std::fmt;
use std::path::PathBuf;

/// Failures surfaced by the extraction pipeline.
#[derive(Debug)]
pub enum Error {
    /// Input path did not resolve to an existing file.
    FileNotFound(PathBuf),
    /// Expected, user-facing input problem.
    Validation(ValidationError),
    /// Anything else: decode/encode failures, filesystem errors.
    Runtime(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileNotFound(path) => write!(f, "{} not found", path.display()),
            Self::Validation(err) => write!(f, "validation failed: {err}"),
            Self::Runtime(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Self::Runtime(msg)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
