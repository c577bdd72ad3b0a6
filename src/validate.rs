//! Input checks run before any image I/O.
//!
//! Every user-facing problem maps to one [`ValidationError`] variant. The
//! checks run in a fixed order: input file, integer thresholds, positive
//! thresholds, threshold order.
use crate::error::Error;
use crate::paths::{normalize, resolve_absolute};
use serde::Serialize;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::num::IntErrorKind;
use std::path::{Path, PathBuf};

/// Number of positional arguments after the program name.
pub const EXPECTED_ARG_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Wrong number of command-line arguments.
    InvalidArguments { expected: usize, actual: usize },
    /// Resolved input path does not exist.
    InputNotFound(PathBuf),
    /// Input could not be made absolute (e.g. unreadable working directory).
    InputUnresolvable { path: PathBuf, reason: String },
    /// Threshold text is not a base-10 integer.
    NonIntegerThreshold(String),
    /// Threshold text is an integer too large to represent.
    ThresholdOutOfRange(String),
    NonPositiveThreshold { lower: i64, upper: i64 },
    InvertedThresholds { lower: i64, upper: i64 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArguments { expected, actual } => write!(
                f,
                "invalid command-line arguments: expected {expected}, got {actual}"
            ),
            Self::InputNotFound(path) => write!(f, "{} not found", path.display()),
            Self::InputUnresolvable { path, reason } => {
                write!(f, "cannot resolve {}: {reason}", path.display())
            }
            Self::NonIntegerThreshold(text) => {
                write!(f, "thresholds must be integers (got {text:?})")
            }
            Self::ThresholdOutOfRange(text) => {
                write!(f, "threshold out of range (got {text:?})")
            }
            Self::NonPositiveThreshold { lower, upper } => write!(
                f,
                "thresholds must be natural numbers (lower={lower}, upper={upper})"
            ),
            Self::InvertedThresholds { lower, upper } => write!(
                f,
                "lower threshold must not exceed upper threshold ({lower} > {upper})"
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Hysteresis threshold pair; `0 < lower <= upper` once validated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Thresholds {
    pub lower: u64,
    pub upper: u64,
}

/// Arguments that passed every check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedRequest {
    /// Absolute path of an existing input file.
    pub input: PathBuf,
    pub thresholds: Thresholds,
}

/// Raw command-line request before validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawRequest {
    pub input: PathBuf,
    pub lower: i64,
    pub upper: i64,
}

pub fn parse_threshold(text: &str) -> Result<i64, ValidationError> {
    text.trim().parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            ValidationError::ThresholdOutOfRange(text.to_string())
        }
        _ => ValidationError::NonIntegerThreshold(text.to_string()),
    })
}

fn parse_threshold_os(arg: &OsStr) -> Result<i64, ValidationError> {
    let text = arg.to_str().ok_or_else(|| {
        ValidationError::NonIntegerThreshold(arg.to_string_lossy().into_owned())
    })?;
    parse_threshold(text)
}

/// Split `<input> <lower> <upper>` (program name already removed).
///
/// The input stays an OS string; only the thresholds are read as text.
pub fn parse_args(args: &[OsString]) -> Result<RawRequest, ValidationError> {
    let [input, lower, upper] = args else {
        return Err(ValidationError::InvalidArguments {
            expected: EXPECTED_ARG_COUNT,
            actual: args.len(),
        });
    };
    Ok(RawRequest {
        input: PathBuf::from(input),
        lower: parse_threshold_os(lower)?,
        upper: parse_threshold_os(upper)?,
    })
}

fn resolution_error(normalized: PathBuf, err: Error) -> ValidationError {
    match err {
        Error::FileNotFound(path) => ValidationError::InputNotFound(path),
        other => ValidationError::InputUnresolvable {
            path: normalized,
            reason: other.to_string(),
        },
    }
}

/// Check the input file and threshold pair.
pub fn validate(
    input: impl AsRef<Path>,
    lower: i64,
    upper: i64,
) -> Result<ValidatedRequest, ValidationError> {
    let normalized = normalize(input.as_ref());
    let input = match resolve_absolute(&normalized) {
        Ok(path) => path,
        Err(err) => return Err(resolution_error(normalized, err)),
    };

    if lower <= 0 || upper <= 0 {
        return Err(ValidationError::NonPositiveThreshold { lower, upper });
    }
    if lower > upper {
        return Err(ValidationError::InvertedThresholds { lower, upper });
    }

    Ok(ValidatedRequest {
        input,
        thresholds: Thresholds {
            lower: lower.unsigned_abs(),
            upper: upper.unsigned_abs(),
        },
    })
}

impl RawRequest {
    pub fn validate(&self) -> Result<ValidatedRequest, ValidationError> {
        validate(&self.input, self.lower, self.upper)
    }
}
