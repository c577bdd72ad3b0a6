//! Observability for the extraction pipeline.
//!
//! `trace` prints the arguments and result of a call around the operation it
//! wraps; `timing` collects per-stage durations for logs and JSON reports.

pub mod timing;
pub mod trace;

pub use timing::{StageTiming, TimingBreakdown};
pub use trace::traced;
