//! # quad-math
//!
//! Simpson-family quadrature over sampled data: the composite 1/3 rule, the
//! 3/8 rule, their combination for odd interval counts, and Richardson
//! extrapolation to estimate the discretisation error.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Relative-tolerance comparison used by the spacing check.
pub mod comparison;

/// Discrete integration over sample sets.
pub mod integrals;

/// Plain-text integration reports.
pub mod report;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use comparison::within_relative;
pub use integrals::{
    analysis::ErrorAnalysis,
    richardson::{estimate_error, richardson, RichardsonEstimate},
    sample_set::SampleSet,
    simpson::{combined_simpson, integrate, simpson13, simpson38, QuadratureResult},
};
pub use report::IntegrationReport;
