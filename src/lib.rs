#![doc = include_str!("../README.md")]

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod extract;
pub mod image;
pub mod output;
pub mod paths;
pub mod validate;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::{Error, Result};
pub use crate::extract::{
    detect_edges, extract_edges, extract_edges_traced, extract_edges_with_summary, EdgeSummary,
};
pub use crate::output::OutputLocation;
pub use crate::validate::{validate, Thresholds, ValidatedRequest, ValidationError};

/// Small prelude for quick experiments.
///
/// ```no_run
/// use line_extract::prelude::*;
///
/// # fn main() -> Result<(), line_extract::Error> {
/// let request = validate("photo.jpg", 100, 200)?;
/// let location = OutputLocation::new("output");
/// let written = extract_edges(&request.input, request.thresholds, &location)?;
/// println!("{}", written.display());
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::{extract_edges, validate, OutputLocation, Thresholds};
}
